use panview_core::buffer::DisplayBuffer;
use panview_core::drag::PointerButton;
use panview_core::geometry::Point;

/// Convert a cropped display buffer to an egui ColorImage.
pub fn buffer_to_color_image(buffer: &DisplayBuffer) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [buffer.width(), buffer.height()],
        &buffer.to_rgba8(),
    )
}

pub fn pointer_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Left,
        egui::PointerButton::Secondary => PointerButton::Right,
        egui::PointerButton::Middle => PointerButton::Middle,
        egui::PointerButton::Extra1 => PointerButton::Back,
        egui::PointerButton::Extra2 => PointerButton::Forward,
    }
}

/// Panel-relative position in physical pixels.
pub fn panel_point(pos: egui::Pos2, panel: egui::Rect, pixels_per_point: f32) -> Point {
    let rel = (pos - panel.min) * pixels_per_point;
    Point::new(rel.x.round() as i32, rel.y.round() as i32)
}
