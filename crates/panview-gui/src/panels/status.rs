use crate::app::PanviewApp;

pub fn show(ctx: &egui::Context, app: &PanviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(&app.status);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(format!(
                    "Drag with {} button to pan, scroll to zoom",
                    app.controller.config().pan_button
                ));
            });
        });
    });
}
