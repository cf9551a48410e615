#![allow(dead_code)]

use panview_core::controller::ViewportController;
use panview_core::surface::FrameSlot;

/// Interleaved RGB where each pixel encodes its own coordinates: `[x, y, x ^ y]`
/// (each truncated to 8 bits).
pub fn coord_rgb(width: usize, height: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            buf.push(x as u8);
            buf.push(y as u8);
            buf.push((x ^ y) as u8);
        }
    }
    buf
}

/// Expected pixel of [`coord_rgb`] at `(x, y)`.
pub fn coord_pixel(x: usize, y: usize) -> Vec<u8> {
    vec![x as u8, y as u8, (x ^ y) as u8]
}

/// Controller showing a 400x300 coordinate image in a 100x100 viewport at a zoom where the
/// effective image equals the source (400x300), so crops map 1:1 onto source pixels.
pub fn native_controller() -> ViewportController<FrameSlot> {
    let mut c = ViewportController::new(FrameSlot::new());
    c.on_resize(100, 100);
    c.set_image(coord_rgb(400, 300), 400, 300, 3, false)
        .expect("valid image");
    c.set_zoom(4.0);
    c
}
