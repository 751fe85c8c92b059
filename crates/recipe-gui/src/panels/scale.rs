use recipe_core::consts::SCALE_STEP;

use crate::app::RecipeApp;

/// Stepper buttons, text field and slider, all writing the same factor.
pub fn show(ui: &mut egui::Ui, app: &mut RecipeApp) {
    let bounds = app.browser.scale().bounds();

    ui.horizontal(|ui| {
        let can_decrement = app.browser.scale().can_decrement();
        if ui.add_enabled(can_decrement, egui::Button::new("<")).clicked() {
            app.browser.scale_mut().decrement();
            app.ui_state.sync_scale_text(app.browser.scale());
        }

        let response = ui.add(
            egui::TextEdit::singleline(&mut app.ui_state.scale_text)
                .desired_width(48.0)
                .font(egui::TextStyle::Button),
        );
        if response.changed() {
            app.browser.scale_mut().set_from_text(&app.ui_state.scale_text);
        }
        // Show the clamped value once editing ends; keep bad text visible.
        if response.lost_focus() && !app.browser.scale().is_nan() {
            app.ui_state.sync_scale_text(app.browser.scale());
        }

        let can_increment = app.browser.scale().can_increment();
        if ui.add_enabled(can_increment, egui::Button::new(">")).clicked() {
            app.browser.scale_mut().increment();
            app.ui_state.sync_scale_text(app.browser.scale());
        }

        let mut value = app.browser.scale().factor().unwrap_or(bounds.min);
        let slider = egui::Slider::new(&mut value, bounds.min..=bounds.max)
            .step_by(SCALE_STEP)
            .show_value(false);
        if ui.add(slider).changed() {
            app.browser.scale_mut().set(value);
            app.ui_state.sync_scale_text(app.browser.scale());
        }

        if app.browser.scale().is_nan() {
            ui.colored_label(ui.visuals().warn_fg_color, "not a number");
        }
    });
}
