use crate::app::RecipeApp;

pub fn show(ctx: &egui::Context, app: &mut RecipeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for msg in &app.ui_state.log_messages {
                    ui.label(msg);
                }
            });

        // Status line
        ui.horizontal(|ui| {
            let store = app.browser.store();
            ui.label(format!(
                "{} / {} recipes",
                app.browser.visible_recipes().len(),
                store.len()
            ));
            ui.separator();
            ui.label(format!("Scale: {}", app.browser.scale()));
            ui.separator();
            ui.label(format!("Route: {}", app.browser.route()));
            ui.separator();
            ui.label(format!("Source: {}", app.ui_state.source));
        });

        ui.add_space(2.0);
    });
}
