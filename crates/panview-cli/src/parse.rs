//! clap value parsers for `WxH` sizes and `X,Y` points.

use panview_core::drag::PointerButton;
use panview_core::geometry::{Point, Size};

pub fn size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(Size::new(width, height))
}

pub fn point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(Point::new(x, y))
}

pub fn button(s: &str) -> Result<PointerButton, String> {
    match s.to_ascii_lowercase().as_str() {
        "left" => Ok(PointerButton::Left),
        "right" => Ok(PointerButton::Right),
        "middle" => Ok(PointerButton::Middle),
        "back" => Ok(PointerButton::Back),
        "forward" => Ok(PointerButton::Forward),
        _ => Err(format!("unknown button '{s}'")),
    }
}
