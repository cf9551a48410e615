//! Pan/zoom state and the crop-rectangle clamp.

use crate::consts::{BOTTOM_EDGE_INSET, DEFAULT_ZOOM, RIGHT_EDGE_INSET};
use crate::geometry::{PixelRect, Point, Size};
use crate::scale::effective_size;

/// Pan, zoom and fit settings of a viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Displacement of the crop centre from the effective image centre, in effective-image
    /// pixels.
    pub pan_offset: Point,
    /// Zoom scale, always > 0. Ignored while `fit_to_size` is set.
    pub zoom: f32,
    pub fit_to_size: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan_offset: Point::ZERO,
            zoom: DEFAULT_ZOOM,
            fit_to_size: false,
        }
    }
}

impl ViewState {
    /// Effective image size for a source of `source` pixels shown in `viewport`.
    pub fn effective_size(&self, source: Size, viewport: Size) -> Size {
        effective_size(source, viewport, self.zoom, self.fit_to_size)
    }

    /// Place a viewport-sized rectangle at the current pan offset, clamp it into the
    /// effective image and store the offset that the clamped rectangle implies.
    ///
    /// Storing the clamped offset makes edges sticky: once pinned, further drags in the
    /// same direction do nothing until the user drags back.
    pub fn clamp_crop(&mut self, effective: Size, viewport: Size) -> PixelRect {
        let image_rect = PixelRect::from_size(effective);
        let mut crop = PixelRect::from_size(viewport);
        crop.move_center(image_rect.center() + self.pan_offset);

        clamp_into(&mut crop, &image_rect);

        self.pan_offset = crop.center() - image_rect.center();
        crop
    }
}

/// Shift `crop` inside `bounds`, checking left, top, right and bottom in that order.
///
/// The right edge stops `RIGHT_EDGE_INSET` columns short of the last column. Any axis on
/// which `crop` is at least as large as `bounds` is set to the full extent of `bounds`.
pub fn clamp_into(crop: &mut PixelRect, bounds: &PixelRect) {
    if crop.left() < bounds.left() {
        crop.move_left(bounds.left());
    }
    if crop.top() < bounds.top() {
        crop.move_top(bounds.top());
    }
    if crop.right() > bounds.right() {
        crop.move_right(bounds.right() - RIGHT_EDGE_INSET);
    }
    if crop.bottom() > bounds.bottom() {
        crop.move_bottom(bounds.bottom() - BOTTOM_EDGE_INSET);
    }

    if crop.width() >= bounds.width() {
        crop.set_horizontal(bounds.left(), bounds.right());
    }
    if crop.height() >= bounds.height() {
        crop.set_vertical(bounds.top(), bounds.bottom());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(x: i32, y: i32) -> ViewState {
        ViewState {
            pan_offset: Point::new(x, y),
            ..ViewState::default()
        }
    }

    #[test]
    fn centred_crop_without_offset() {
        let mut v = ViewState::default();
        let crop = v.clamp_crop(Size::new(100, 80), Size::new(40, 20));
        // image centre (49, 39); crop centred there
        assert_eq!(crop, PixelRect::new(30, 30, 40, 20));
        assert_eq!(crop.center(), Point::new(49, 39));
        assert_eq!(v.pan_offset, Point::ZERO);
    }

    #[test]
    fn left_and_top_pin_at_zero() {
        let mut v = state(-500, -500);
        let crop = v.clamp_crop(Size::new(100, 80), Size::new(40, 20));
        assert_eq!((crop.left(), crop.top()), (0, 0));
        assert_eq!(v.pan_offset, Point::new(19 - 49, 9 - 39));
    }

    #[test]
    fn right_pins_one_column_short() {
        let mut v = state(500, 0);
        let crop = v.clamp_crop(Size::new(100, 80), Size::new(40, 20));
        assert_eq!(crop.right(), 98);
        assert_eq!(crop.width(), 40);
    }

    #[test]
    fn bottom_pins_at_last_row() {
        let mut v = state(0, 500);
        let crop = v.clamp_crop(Size::new(100, 80), Size::new(40, 20));
        assert_eq!(crop.bottom(), 79);
        assert_eq!(crop.height(), 20);
    }

    #[test]
    fn oversized_viewport_spans_whole_axis() {
        for dx in [-300, -1, 0, 7, 300] {
            let mut v = state(dx, 3);
            let crop = v.clamp_crop(Size::new(50, 200), Size::new(80, 20));
            assert_eq!((crop.left(), crop.right()), (0, 49), "dx={dx}");
            assert_eq!(crop.height(), 20);
            assert_eq!(v.pan_offset.x, 0);
        }
    }

    #[test]
    fn viewport_equal_to_image_spans_whole_image() {
        let mut v = state(9, -9);
        let crop = v.clamp_crop(Size::new(64, 48), Size::new(64, 48));
        assert_eq!(crop, PixelRect::new(0, 0, 64, 48));
        assert_eq!(v.pan_offset, Point::ZERO);
    }

    #[test]
    fn clamp_is_idempotent_and_bounded() {
        let images = [Size::new(100, 80), Size::new(33, 17), Size::new(7, 300)];
        let viewports = [Size::new(40, 20), Size::new(1, 1), Size::new(33, 17), Size::new(120, 5)];
        let offsets = [-1000, -37, -1, 0, 1, 12, 999];

        for &effective in &images {
            let bounds = PixelRect::from_size(effective);
            for &viewport in &viewports {
                for &dx in &offsets {
                    for &dy in &offsets {
                        let mut v = state(dx, dy);
                        let first = v.clamp_crop(effective, viewport);
                        let offset = v.pan_offset;
                        let second = v.clamp_crop(effective, viewport);

                        assert_eq!(first, second, "{effective:?} {viewport:?} ({dx},{dy})");
                        assert_eq!(offset, v.pan_offset);
                        assert!(bounds.contains_rect(&first), "{first:?} outside {bounds:?}");
                        assert_eq!(
                            first.width(),
                            viewport.width.min(effective.width),
                            "width for {effective:?} {viewport:?}"
                        );
                        assert_eq!(first.height(), viewport.height.min(effective.height));
                    }
                }
            }
        }
    }

    #[test]
    fn effective_size_follows_fit_flag() {
        let mut v = ViewState {
            zoom: 2.0,
            ..ViewState::default()
        };
        let src = Size::new(1000, 500);
        let vp = Size::new(200, 200);
        assert_eq!(v.effective_size(src, vp), Size::new(400, 200));
        v.fit_to_size = true;
        assert_eq!(v.effective_size(src, vp), Size::new(200, 100));
    }
}
