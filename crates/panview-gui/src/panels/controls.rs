use panview_core::drag::DragState;

use crate::app::PanviewApp;
use crate::panels::section_header;
use crate::pattern::Pattern;

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut PanviewApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                image_section(ui, app);
                ui.separator();
                view_section(ui, app);
                ui.separator();
                info_section(ui, app);
            });
        });
}

fn image_section(ui: &mut egui::Ui, app: &mut PanviewApp) {
    section_header(ui, "Image");

    let mut selected = app.pattern;
    egui::ComboBox::from_id_salt("pattern")
        .selected_text(selected.label())
        .show_ui(ui, |ui| {
            for pattern in Pattern::ALL {
                ui.selectable_value(&mut selected, pattern, pattern.label());
            }
        });
    if selected != app.pattern {
        app.load_pattern(selected);
    }

    ui.horizontal(|ui| {
        if ui.button("Reload").clicked() {
            app.load_pattern(app.pattern);
        }
        if ui.button("Clear").clicked() {
            app.controller.reset();
            app.status = "Cleared".into();
        }
    });
}

fn view_section(ui: &mut egui::Ui, app: &mut PanviewApp) {
    section_header(ui, "View");

    let mut fit = app.controller.fit_to_size();
    if ui.checkbox(&mut fit, "Fit to size").changed() {
        app.fit_to_size = fit;
        app.controller.set_fit_to_size(fit);
    }

    let (min_zoom, max_zoom) = {
        let config = app.controller.config();
        (config.min_zoom, config.max_zoom)
    };
    let mut zoom = app.controller.zoom();
    let slider = egui::Slider::new(&mut zoom, min_zoom..=max_zoom)
        .logarithmic(true)
        .text("Zoom");
    if ui.add_enabled(!fit, slider).changed() {
        app.controller.set_zoom(zoom);
    }

    if ui.button("Reset view").clicked() {
        app.controller.reset_view();
    }
}

fn info_section(ui: &mut egui::Ui, app: &PanviewApp) {
    section_header(ui, "Info");
    let c = &app.controller;

    egui::Grid::new("view_info").num_columns(2).show(ui, |ui| {
        ui.label("Format");
        ui.label(c.format().to_string());
        ui.end_row();

        ui.label("Viewport");
        let vp = c.viewport_size();
        ui.label(format!("{}x{}", vp.width, vp.height));
        ui.end_row();

        ui.label("Effective");
        ui.label(
            c.effective_size()
                .map(|s| format!("{}x{}", s.width, s.height))
                .unwrap_or_else(|| "-".into()),
        );
        ui.end_row();

        ui.label("Crop");
        ui.label(
            c.crop_rect()
                .map(|r| format!("({}, {}) {}x{}", r.left(), r.top(), r.width(), r.height()))
                .unwrap_or_else(|| "-".into()),
        );
        ui.end_row();

        ui.label("Offset");
        let offset = c.pan_offset();
        ui.label(format!("({}, {})", offset.x, offset.y));
        ui.end_row();

        ui.label("Drag");
        ui.label(match c.drag_state() {
            DragState::Idle => "idle".to_string(),
            DragState::Dragging { button, .. } => format!("{button} held"),
        });
        ui.end_row();
    });
}
