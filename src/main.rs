#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;

use poi_mirror::config::APP_STATE_PATH;
use poi_mirror::data::load_zones_file;
use poi_mirror::ui::config::UI_TEXT;
use poi_mirror::{Cli, StartupOptions, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Optional POI file. A bad path is reported, not fatal.
    let zones_json = args.zones.as_deref().and_then(|path| match load_zones_file(path) {
        Ok(text) => Some(text),
        Err(e) => {
            log::error!("{:#}", e);
            None
        }
    });

    let startup = StartupOptions {
        zones_json,
        fresh: args.fresh,
        seed: args.seed,
    };

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, startup))),
    )
}
