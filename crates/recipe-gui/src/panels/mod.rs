pub mod detail;
pub mod header;
pub mod menu_bar;
pub mod scale;
pub mod sidebar;
pub mod status;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong().underline().size(16.0));
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}
