//! Effective image sizing: how large the source is drawn before cropping.

use crate::geometry::{PixelRect, Size};

/// Source pixels read on each side of a window so the resampling filter sees its full
/// support at the window edges.
pub const FILTER_MARGIN: u32 = 3;

/// The part of the source needed to render one crop of the effective image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceWindow {
    /// Source region to resample, margins included.
    pub source: PixelRect,
    /// Size the source region is resampled to.
    pub resampled: Size,
    /// The crop inside the resampled region.
    pub window: PixelRect,
}

/// Map `crop`, given in effective-image pixels, back onto a `source`-sized image.
///
/// Resampling `source` to `resampled` and cutting out `window` gives the crop without
/// materialising the whole effective image.
pub fn source_window(crop: &PixelRect, source: Size, effective: Size) -> SourceWindow {
    let (sx, rw, ox) = map_axis(crop.left(), crop.width(), source.width, effective.width);
    let (sy, rh, oy) = map_axis(crop.top(), crop.height(), source.height, effective.height);
    SourceWindow {
        source: PixelRect::new(sx.0 as i32, sy.0 as i32, sx.1 - sx.0, sy.1 - sy.0),
        resampled: Size::new(rw, rh),
        window: PixelRect::new(ox as i32, oy as i32, crop.width(), crop.height()),
    }
}

/// Returns the source span `[lo, hi)`, its resampled length and the crop offset in it.
fn map_axis(start: i32, len: u32, extent: u32, effective: u32) -> ((u32, u32), u32, u32) {
    let extent = extent.max(1) as i64;
    let scale = effective.max(1) as f64 / extent as f64;
    let margin = FILTER_MARGIN as i64;

    let lo = ((start as f64 / scale).floor() as i64 - margin).clamp(0, extent - 1);
    let end = start as i64 + len as i64;
    let hi = ((end as f64 / scale).ceil() as i64 + margin).clamp(lo + 1, extent);

    let offset = (start as f64 - lo as f64 * scale).round().max(0.0) as u32;
    let resampled = (((hi - lo) as f64 * scale).round() as u32).max(offset + len);
    ((lo as u32, hi as u32), resampled, offset)
}

/// Largest size with the aspect ratio of `source` that fits inside `bounds`.
///
/// Never returns a zero dimension for a non-empty source.
pub fn fit_within(source: Size, bounds: Size) -> Size {
    if source.is_empty() {
        return source;
    }
    let (sw, sh) = (source.width as u64, source.height as u64);
    let (bw, bh) = (bounds.width as u64, bounds.height as u64);

    let width_at_full_height = bh * sw / sh;
    let (w, h) = if width_at_full_height <= bw {
        (width_at_full_height, bh)
    } else {
        (bw, bw * sh / sw)
    };
    Size::new(w.max(1) as u32, h.max(1) as u32)
}

/// Size of the effective image for the given view settings.
///
/// With `fit_to_size` the source is fitted to the viewport and `zoom` is ignored; otherwise
/// it is fitted to the viewport scaled by `zoom`.
pub fn effective_size(source: Size, viewport: Size, zoom: f32, fit_to_size: bool) -> Size {
    let bounds = if fit_to_size {
        viewport
    } else {
        Size::new(
            scale_dimension(viewport.width, zoom),
            scale_dimension(viewport.height, zoom),
        )
    };
    fit_within(source, bounds)
}

fn scale_dimension(value: u32, factor: f32) -> u32 {
    (value as f64 * factor as f64).round().clamp(0.0, u32::MAX as f64) as u32
}
