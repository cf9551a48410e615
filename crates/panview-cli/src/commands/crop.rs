use anyhow::{bail, Result};
use clap::Args;
use panview_core::config::ViewerConfig;
use panview_core::geometry::{Point, Size};
use panview_core::view::ViewState;

use crate::parse;
use crate::summary::{print_crop_report, CropReport};

#[derive(Args)]
pub struct CropArgs {
    /// Source image size, e.g. 1920x1080
    #[arg(long, value_parser = parse::size)]
    pub image: Size,

    /// Viewport size, e.g. 640x480
    #[arg(long, value_parser = parse::size)]
    pub viewport: Size,

    /// Pan offset before clamping, e.g. 120,-40
    #[arg(long, value_parser = parse::point, default_value = "0,0", allow_hyphen_values = true)]
    pub offset: Point,

    /// Zoom scale (ignored with --fit)
    #[arg(long, default_value_t = 1.0)]
    pub zoom: f32,

    /// Scale the image to fit the viewport
    #[arg(long)]
    pub fit: bool,
}

pub fn run(args: &CropArgs, config: &ViewerConfig) -> Result<()> {
    if args.image.is_empty() || args.viewport.is_empty() {
        bail!("Image and viewport sizes must be non-zero");
    }
    let Some(zoom) = config.clamp_zoom(args.zoom) else {
        bail!("Invalid zoom scale: {}", args.zoom);
    };

    let mut view = ViewState {
        pan_offset: args.offset,
        zoom,
        fit_to_size: args.fit,
    };
    let effective = view.effective_size(args.image, args.viewport);
    let crop = view.clamp_crop(effective, args.viewport);

    print_crop_report(
        "Viewport Crop",
        &CropReport {
            image: args.image,
            viewport: args.viewport,
            effective,
            crop,
            view,
        },
    );
    Ok(())
}
