//! Configuration module for the POI mirror application.

pub mod chart;
pub mod defaults;
pub mod live;

mod debug; // Private: files go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use chart::{CHART, ChartConfig};
pub use defaults::{DEFAULTS, PRICE_PRESETS, PricePreset, default_zones};
pub use live::{LIVE, LiveConfig};
pub use persistence::{APP_STATE_PATH, HISTORY_EXPORT_FILENAME};
