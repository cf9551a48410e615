//! The viewport controller: owns the image, view and drag state and pushes crops to a
//! [`DisplaySurface`].

use ndarray::ArrayViewD;
use tracing::{debug, info, warn};

use crate::buffer::SourceImage;
use crate::config::ViewerConfig;
use crate::consts::DEFAULT_ZOOM;
use crate::drag::{DragState, PointerButton, PointerHandler};
use crate::error::Result;
use crate::format::PixelFormat;
use crate::geometry::{PixelRect, Point, Size};
use crate::scale::source_window;
use crate::surface::DisplaySurface;
use crate::view::ViewState;

pub struct ViewportController<S: DisplaySurface> {
    surface: S,
    config: ViewerConfig,
    image: Option<SourceImage>,
    /// Source resampled to the last effective size, kept only while that size is no larger
    /// than the source.
    scaled: Option<SourceImage>,
    view: ViewState,
    drag: DragState,
    viewport: Size,
    crop: Option<PixelRect>,
}

impl<S: DisplaySurface> ViewportController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, ViewerConfig::default())
    }

    pub fn with_config(surface: S, config: ViewerConfig) -> Self {
        Self {
            surface,
            config,
            image: None,
            scaled: None,
            view: ViewState::default(),
            drag: DragState::default(),
            viewport: Size::default(),
            crop: None,
        }
    }

    /// Replace the image with an interleaved pixel buffer.
    ///
    /// The buffer is validated first; on error the current image and view are kept.
    pub fn set_image(
        &mut self,
        pixels: Vec<u8>,
        width: usize,
        height: usize,
        channels: usize,
        fit_to_size: bool,
    ) -> Result<()> {
        let image = SourceImage::from_raw(pixels, width, height, channels)?;
        self.set_source_image(image, fit_to_size);
        Ok(())
    }

    /// Replace the image with an `(h, w)` or `(h, w, c)` array.
    pub fn set_image_array(&mut self, pixels: ArrayViewD<'_, u8>, fit_to_size: bool) -> Result<()> {
        let image = SourceImage::from_array(pixels)?;
        self.set_source_image(image, fit_to_size);
        Ok(())
    }

    /// Reset, then show an already validated image.
    pub fn set_source_image(&mut self, image: SourceImage, fit_to_size: bool) {
        self.reset();
        info!(
            width = image.width(),
            height = image.height(),
            format = %image.format(),
            fit_to_size,
            "Image set"
        );
        self.image = Some(image);
        self.view.fit_to_size = fit_to_size;
        self.update();
    }

    /// Drop the image and restore default view and drag state.
    pub fn reset(&mut self) {
        self.surface.clear();
        self.image = None;
        self.scaled = None;
        self.crop = None;
        self.view = ViewState::default();
        self.drag.release();
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.viewport = Size::new(width, height);
        self.update();
    }

    /// Set the zoom scale, clamped to the configured range. Non-finite or non-positive
    /// values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        match self.config.clamp_zoom(zoom) {
            Some(z) => {
                self.view.zoom = z;
                self.update();
            }
            None => warn!(zoom, "Ignoring invalid zoom scale"),
        }
    }

    pub fn set_fit_to_size(&mut self, fit_to_size: bool) {
        self.view.fit_to_size = fit_to_size;
        self.update();
    }

    /// Restore zoom 1.0 and a centred view, keeping the image.
    pub fn reset_view(&mut self) {
        self.view.zoom = DEFAULT_ZOOM;
        self.view.pan_offset = Point::ZERO;
        self.update();
    }

    pub fn pan_offset(&self) -> Point {
        self.view.pan_offset
    }

    pub fn zoom(&self) -> f32 {
        self.view.zoom
    }

    pub fn fit_to_size(&self) -> bool {
        self.view.fit_to_size
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// [`PixelFormat::Invalid`] while no image is loaded.
    pub fn format(&self) -> PixelFormat {
        self.image
            .as_ref()
            .map_or(PixelFormat::Invalid, SourceImage::format)
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Effective image size for the current image, viewport and view settings.
    pub fn effective_size(&self) -> Option<Size> {
        let image = self.image.as_ref()?;
        Some(self.view.effective_size(image.size(), self.viewport))
    }

    /// Crop rectangle of the last recompute, in effective-image pixels.
    pub fn crop_rect(&self) -> Option<PixelRect> {
        self.crop
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Recompute the crop and present it. No-op without an image or with an empty viewport.
    fn update(&mut self) {
        let Some(image) = &self.image else {
            return;
        };
        if self.viewport.is_empty() {
            return;
        }

        let target = self.view.effective_size(image.size(), self.viewport);
        let crop = self.view.clamp_crop(target, self.viewport);

        let filter = self.config.resample.filter_type();
        let buffer = if target.area() <= image.size().area() {
            // Downscaled effective images are never larger than the source; keep one.
            if self.scaled.as_ref().map(SourceImage::size) != Some(target) {
                debug!(
                    width = target.width,
                    height = target.height,
                    filter = %self.config.resample,
                    "Resampling effective image"
                );
                self.scaled = Some(image.resized(target, filter));
            }
            let Some(scaled) = &self.scaled else {
                return;
            };
            scaled.crop(&crop)
        } else {
            // Upscaled: resample only the source region under the crop.
            self.scaled = None;
            let window = source_window(&crop, image.size(), target);
            image
                .cropped(&window.source)
                .resized(window.resampled, filter)
                .crop(&window.window)
        };

        debug!(
            left = crop.left(),
            top = crop.top(),
            width = crop.width(),
            height = crop.height(),
            offset_x = self.view.pan_offset.x,
            offset_y = self.view.pan_offset.y,
            "Crop updated"
        );
        self.crop = Some(crop);
        self.surface.present(buffer);
    }
}

impl<S: DisplaySurface> PointerHandler for ViewportController<S> {
    fn on_press(&mut self, button: PointerButton, pos: Point) {
        if self.drag.press(button, pos) {
            debug!(%button, x = pos.x, y = pos.y, "Drag started");
        }
    }

    fn on_move(&mut self, pos: Point) {
        let Some(delta) = self.drag.drag_to(pos, self.config.pan_button) else {
            return;
        };
        if self.image.is_some() {
            self.view.pan_offset += delta;
            self.update();
        }
    }

    fn on_release(&mut self, button: PointerButton) {
        if self.drag.is_dragging() {
            debug!(%button, "Drag ended");
        }
        self.drag.release();
    }
}
