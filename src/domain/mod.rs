// Domain types and value objects
pub mod price_range;
pub mod timeframe;
pub mod zone;

// Re-export commonly used types
pub use price_range::PriceRange;
pub use timeframe::{Side, Timeframe};
pub use zone::{Zone, ZoneDraft};
