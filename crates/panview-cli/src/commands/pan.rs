use anyhow::{bail, Result};
use clap::Args;
use panview_core::config::ViewerConfig;
use panview_core::controller::ViewportController;
use panview_core::drag::{PointerButton, PointerHandler};
use panview_core::geometry::{Point, Size};
use panview_core::surface::FrameSlot;
use tracing::info;

use crate::parse;
use crate::summary::{print_crop_report, CropReport};

#[derive(Args)]
pub struct PanArgs {
    /// Source image size, e.g. 1920x1080
    #[arg(long, value_parser = parse::size)]
    pub image: Size,

    /// Viewport size, e.g. 640x480
    #[arg(long, value_parser = parse::size)]
    pub viewport: Size,

    /// Pointer position where the button is pressed
    #[arg(long, value_parser = parse::point, allow_hyphen_values = true)]
    pub from: Point,

    /// Pointer position where the button is released
    #[arg(long, value_parser = parse::point, allow_hyphen_values = true)]
    pub to: Point,

    /// Button held during the drag (left, right, middle, back, forward)
    #[arg(long, value_parser = parse::button, default_value = "right")]
    pub button: PointerButton,

    /// Number of intermediate pointer moves
    #[arg(long, default_value_t = 1)]
    pub steps: u32,

    /// Zoom scale (ignored with --fit)
    #[arg(long, default_value_t = 1.0)]
    pub zoom: f32,

    /// Scale the image to fit the viewport
    #[arg(long)]
    pub fit: bool,
}

/// Replay a press/move/release sequence through a controller showing a blank image.
pub fn run(args: &PanArgs, config: &ViewerConfig) -> Result<()> {
    if args.image.is_empty() || args.viewport.is_empty() {
        bail!("Image and viewport sizes must be non-zero");
    }

    let mut controller = ViewportController::with_config(FrameSlot::new(), config.clone());
    controller.on_resize(args.viewport.width, args.viewport.height);
    controller.set_image(
        vec![0; args.image.area()],
        args.image.width as usize,
        args.image.height as usize,
        1,
        args.fit,
    )?;
    if !args.fit {
        controller.set_zoom(args.zoom);
    }

    controller.on_press(args.button, args.from);
    for pos in drag_path(args.from, args.to, args.steps) {
        controller.on_move(pos);
    }
    controller.on_release(args.button);

    info!(presents = controller.surface().presents, "Drag replayed");

    let (Some(effective), Some(crop)) = (controller.effective_size(), controller.crop_rect())
    else {
        bail!("No crop was computed");
    };
    print_crop_report(
        "Drag Replay",
        &CropReport {
            image: args.image,
            viewport: args.viewport,
            effective,
            crop,
            view: controller.view().clone(),
        },
    );
    Ok(())
}

/// Evenly spaced pointer positions from `from` (exclusive) to `to` (inclusive).
fn drag_path(from: Point, to: Point, steps: u32) -> Vec<Point> {
    let steps = i64::from(steps.max(1));
    let lerp = |a: i32, b: i32, i: i64| {
        let (a, b) = (i64::from(a), i64::from(b));
        // |b - a| * i fits in i64 for any i32 endpoints and u32 step count
        (a + (b - a) * i / steps) as i32
    };
    (1..=steps)
        .map(|i| Point::new(lerp(from.x, to.x, i), lerp(from.y, to.y, i)))
        .collect()
}
