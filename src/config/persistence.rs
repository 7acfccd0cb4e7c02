//! File persistence configuration

/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".poi_mirror_state.json";

/// Default filename for the exported price history artifact
pub const HISTORY_EXPORT_FILENAME: &str = "price-history.json";
