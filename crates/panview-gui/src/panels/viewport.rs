use panview_core::drag::PointerHandler;
use panview_core::geometry::Size;

use crate::app::PanviewApp;
use crate::convert::{panel_point, pointer_button};

const SCROLL_ZOOM_RATE: f32 = 0.005;

pub fn show(ctx: &egui::Context, app: &mut PanviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let pixels_per_point = ctx.pixels_per_point();
        handle_resize(app, rect, pixels_per_point);

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        forward_pointer_events(ui, app, rect, pixels_per_point);
        handle_zoom(ui, &response, app);

        let texture_info = app
            .controller
            .surface()
            .texture()
            .map(|t| (t.id(), t.size_vec2()));

        if let Some((texture_id, tex_size)) = texture_info {
            let img_rect = egui::Rect::from_center_size(rect.center(), tex_size / pixels_per_point);
            ui.painter().image(
                texture_id,
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else {
            show_placeholder(ui, rect);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_resize(app: &mut PanviewApp, rect: egui::Rect, pixels_per_point: f32) {
    let size = rect.size() * pixels_per_point;
    let size = Size::new(size.x.round().max(0.0) as u32, size.y.round().max(0.0) as u32);
    if app.last_viewport != Some(size) {
        app.last_viewport = Some(size);
        app.controller.on_resize(size.width, size.height);
    }
}

/// Feed raw pointer events to the controller. Presses only count inside the panel;
/// moves and releases are forwarded wherever they happen so drags can leave the panel.
fn forward_pointer_events(
    ui: &egui::Ui,
    app: &mut PanviewApp,
    rect: egui::Rect,
    pixels_per_point: f32,
) {
    let events = ui.input(|i| i.events.clone());
    for event in events {
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } if rect.contains(pos) => {
                app.controller.on_press(
                    pointer_button(button),
                    panel_point(pos, rect, pixels_per_point),
                );
            }
            egui::Event::PointerButton {
                button,
                pressed: false,
                ..
            } => {
                app.controller.on_release(pointer_button(button));
            }
            egui::Event::PointerMoved(pos) => {
                app.controller
                    .on_move(panel_point(pos, rect, pixels_per_point));
            }
            _ => {}
        }
    }
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut PanviewApp) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() || app.controller.fit_to_size() {
        return;
    }
    let zoom_factor = (scroll_delta * SCROLL_ZOOM_RATE).exp();
    app.controller.set_zoom(app.controller.zoom() * zoom_factor);
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "No image",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
