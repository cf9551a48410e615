pub mod controls;
pub mod status;
pub mod viewport;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str) {
    ui.strong(label);
    ui.add_space(4.0);
}
