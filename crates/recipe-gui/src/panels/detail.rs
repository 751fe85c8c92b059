use recipe_core::detail::RecipeDetail;

use crate::app::RecipeApp;

pub fn show(ctx: &egui::Context, app: &mut RecipeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Nothing selected (or an unknown route): empty pane.
        let Some(detail) = app.browser.detail() else {
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(16.0);
            ui.columns(2, |columns| {
                ingredients(&mut columns[0], &detail);
                steps(&mut columns[1], &detail);
            });
        });
    });
}

fn ingredients(ui: &mut egui::Ui, detail: &RecipeDetail) {
    super::section_header(ui, "Ingrédients", None);
    ui.add_space(4.0);
    for line in &detail.ingredients {
        ui.horizontal(|ui| {
            ui.label(&line.label);
            ui.label("-");
            let quantity = egui::RichText::new(line.quantity_text());
            ui.label(if line.emphasized {
                quantity.strong()
            } else {
                quantity
            });
        });
    }
}

fn steps(ui: &mut egui::Ui, detail: &RecipeDetail) {
    super::section_header(ui, "Étapes", None);
    ui.add_space(4.0);
    for step in &detail.steps {
        ui.label(step.to_string());
    }
}
