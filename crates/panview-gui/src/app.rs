use panview_core::config::ViewerConfig;
use panview_core::controller::ViewportController;
use panview_core::geometry::Size;
use tracing::{error, info};

use crate::panels;
use crate::pattern::{Pattern, PATTERN_HEIGHT, PATTERN_WIDTH};
use crate::surface::TextureSurface;

pub struct PanviewApp {
    pub controller: ViewportController<TextureSurface>,
    pub pattern: Pattern,
    /// Fit flag applied on the next pattern load.
    pub fit_to_size: bool,
    /// Panel size last sent to the controller, in physical pixels.
    pub last_viewport: Option<Size>,
    pub status: String,
}

impl PanviewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig) -> Self {
        info!(pan_button = %config.pan_button, resample = %config.resample, "Viewer config");
        let mut app = Self {
            controller: ViewportController::with_config(TextureSurface::new(ctx), config),
            pattern: Pattern::Gradient,
            fit_to_size: false,
            last_viewport: None,
            status: String::new(),
        };
        app.load_pattern(Pattern::Gradient);
        app
    }

    pub fn load_pattern(&mut self, pattern: Pattern) {
        let pixels = pattern.generate(PATTERN_WIDTH, PATTERN_HEIGHT);
        match self
            .controller
            .set_image_array(pixels.view(), self.fit_to_size)
        {
            Ok(()) => {
                self.pattern = pattern;
                self.status = format!(
                    "{} {}x{} ({})",
                    pattern.label(),
                    PATTERN_WIDTH,
                    PATTERN_HEIGHT,
                    self.controller.format()
                );
            }
            Err(e) => {
                error!("Failed to set image: {e}");
                self.status = format!("ERROR: {e}");
            }
        }
    }
}

impl eframe::App for PanviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
    }
}
