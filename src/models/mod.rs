// Core POI models.
// These modules contain pure logic independent of UI/visualization.

pub mod history;
pub mod projection;
pub mod repository;
pub mod status;

// Re-export key types for convenience
pub use history::{HistoryEntry, PriceChange, PriceHistory, SessionStats};
pub use projection::{
    LaneBand, LiveMarker, Margins, PriceDomain, Projection, ScaleTick, Viewport, ZoneBand,
    build_projection,
};
pub use repository::{SortKey, ZoneQuery, ZoneRepository, ZoneRow, ZoneSelection};
pub use status::{PriceStatus, ZoneStatus, classify, price_status};
