use recipe_core::filter::display_tag;

use crate::app::RecipeApp;

const SIDEBAR_WIDTH: f32 = 220.0;

pub fn is_narrow(ctx: &egui::Context, app: &RecipeApp) -> bool {
    ctx.screen_rect().width() < app.ui_state.narrow_width
}

/// Docked panel on wide viewports; on narrow ones a drawer over a
/// full-window overlay that closes it when clicked.
pub fn show(ctx: &egui::Context, app: &mut RecipeApp) {
    if !is_narrow(ctx, app) {
        egui::SidePanel::left("sidebar")
            .default_width(SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| contents(ui, app));
        return;
    }

    if app.browser.sidebar().is_collapsed() {
        return;
    }

    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("sidebar_overlay"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(96));
            if response.clicked() {
                app.browser.sidebar_mut().collapse();
            }
        });

    egui::Area::new(egui::Id::new("sidebar_drawer"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(SIDEBAR_WIDTH);
                ui.set_min_height(screen.height() - 16.0);
                ui.horizontal(|ui| {
                    ui.strong("Recettes");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").clicked() {
                            app.browser.sidebar_mut().collapse();
                        }
                    });
                });
                ui.separator();
                contents(ui, app);
            });
        });
}

fn contents(ui: &mut egui::Ui, app: &mut RecipeApp) {
    search_section(ui, app);
    ui.add_space(4.0);
    tag_section(ui, app);
    ui.separator();
    recipe_list(ui, app);
}

fn search_section(ui: &mut egui::Ui, app: &mut RecipeApp) {
    ui.label("Filtrer:");
    let mut search = app.browser.sidebar().search().to_string();
    let edit = egui::TextEdit::singleline(&mut search)
        .hint_text("Rechercher")
        .desired_width(f32::INFINITY);
    if ui.add(edit).changed() {
        app.browser.set_search(search);
    }
}

fn tag_section(ui: &mut egui::Ui, app: &mut RecipeApp) {
    let tags = app.browser.tag_vocabulary().to_vec();
    if tags.is_empty() {
        return;
    }

    let active = app.browser.sidebar().filter().active_tags().len();
    let status = (active > 0).then(|| format!("{active} active"));
    super::section_header(ui, "Tags", status.as_deref());

    ui.horizontal_wrapped(|ui| {
        for tag in &tags {
            let selected = app.browser.sidebar().filter().is_tag_active(tag);
            if ui.selectable_label(selected, display_tag(tag)).clicked() {
                app.browser.toggle_tag(tag);
            }
        }
    });

    if active > 0 && ui.small_button("Clear tags").clicked() {
        app.browser.sidebar_mut().filter_mut().clear_tags();
    }
}

fn recipe_list(ui: &mut egui::Ui, app: &mut RecipeApp) {
    let entries: Vec<(String, bool)> = app
        .browser
        .visible_recipes()
        .iter()
        .map(|r| (r.label.clone(), app.browser.is_selected(&r.label)))
        .collect();

    if entries.is_empty() {
        ui.weak("Aucune recette");
        return;
    }

    let mut clicked = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for (label, selected) in &entries {
            let text = if *selected {
                egui::RichText::new(label).strong()
            } else {
                egui::RichText::new(label)
            };
            if ui
                .selectable_label(*selected, text)
                .on_hover_text(label)
                .clicked()
            {
                clicked = Some(label.clone());
            }
        }
    });

    if let Some(label) = clicked {
        app.browser.select(&label);
    }
}
