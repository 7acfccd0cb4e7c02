#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use domain::{PriceRange, Side, Timeframe, Zone, ZoneDraft};
pub use engine::PoiState;
pub use error::{PoiError, PoiResult};
pub use models::{PriceStatus, Projection, Viewport, ZoneRepository, build_projection, classify};
pub use ui::{PoiMirrorApp, StartupOptions};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON array of POIs to import at startup (replaces the current set)
    #[arg(long, value_name = "FILE")]
    pub zones: Option<PathBuf>,

    /// Ignore any persisted state and start from the defaults
    #[arg(long, default_value_t = false)]
    pub fresh: bool,

    /// Seed for the simulated live feed, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, options: StartupOptions) -> Box<dyn eframe::App> {
    Box::new(PoiMirrorApp::new(cc, options))
}
