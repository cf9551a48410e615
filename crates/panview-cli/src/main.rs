mod commands;
mod parse;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use panview_core::config::ViewerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panview", about = "Inspect pan/zoom viewport crops without a display")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Viewer config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the crop rectangle for an image, viewport and view state
    Crop(commands::crop::CropArgs),
    /// Replay a mouse drag and report where the view ends up
    Pan(commands::pan::PanArgs),
    /// Print or save the viewer config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    match &cli.command {
        Commands::Crop(args) => commands::crop::run(args, &config),
        Commands::Pan(args) => commands::pan::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
