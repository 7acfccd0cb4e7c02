// Text and file boundaries: POI import/dump and history export
pub mod history_export;
pub mod poi_json;

// Re-export commonly used items
pub use history_export::{default_history_path, write_history};
pub use poi_json::{dump_zones, load_zones_file, parse_zones};
