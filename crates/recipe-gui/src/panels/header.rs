use crate::app::RecipeApp;

pub fn show(ctx: &egui::Context, app: &mut RecipeApp) {
    let narrow = super::sidebar::is_narrow(ctx, app);

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if narrow && app.browser.sidebar().is_collapsed() && ui.button("☰").clicked() {
                app.browser.sidebar_mut().expand();
            }

            let title = app
                .browser
                .selected_recipe()
                .map(|r| r.label.clone())
                .unwrap_or_default();
            ui.add_sized(
                [176.0, ui.spacing().interact_size.y],
                egui::Label::new(egui::RichText::new(title).heading()).truncate(),
            );

            ui.separator();
            super::scale::show(ui, app);
        });
        ui.add_space(4.0);
    });
}
