mod app;
mod convert;
mod panels;
mod pattern;
mod surface;

use std::path::PathBuf;

use anyhow::{Context, Result};
use panview_core::config::ViewerConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e:#}; using default config");
            ViewerConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Panview"),
        ..Default::default()
    };

    eframe::run_native(
        "Panview",
        options,
        Box::new(move |cc| Ok(Box::new(app::PanviewApp::new(&cc.egui_ctx, config)))),
    )
}

/// Config path from the first argument, defaults when none is given.
fn load_config() -> Result<ViewerConfig> {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return Ok(ViewerConfig::default());
    };
    ViewerConfig::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}
