use recipe_core::store::RecipeStore;

use crate::app::RecipeApp;
use crate::messages::LoadResult;

pub fn show(ctx: &egui::Context, app: &mut RecipeApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
    let back_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::ALT, egui::Key::ArrowLeft);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open Recipes...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(ctx, app);
                }

                if ui.button("Load Bundled Recipes").clicked() {
                    ui.close();
                    app.load_bundled();
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Toggle Sidebar").clicked() {
                    ui.close();
                    app.browser.sidebar_mut().toggle_collapsed();
                }

                let can_go_back = app.browser.navigator().can_go_back();
                if ui.add_enabled(can_go_back, egui::Button::new("Back").shortcut_text(ctx.format_shortcut(&back_shortcut))).clicked() {
                    ui.close();
                    app.go_back();
                }

                if ui.button("Reset Scale").clicked() {
                    ui.close();
                    app.browser.scale_mut().reset();
                    app.ui_state.sync_scale_text(app.browser.scale());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            open_file(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&back_shortcut)) {
            app.go_back();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_file(ctx: &egui::Context, app: &mut RecipeApp) {
    let load_tx = app.load_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Recipes", &["json", "toml"])
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };
        let result = match RecipeStore::load(&path) {
            Ok(store) => LoadResult::Loaded { path, store },
            Err(e) => LoadResult::Error {
                message: format!("{}: {e}", path.display()),
            },
        };
        let _ = load_tx.send(result);
        ctx.request_repaint();
    });
}
