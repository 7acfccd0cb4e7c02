pub mod feed;
pub mod simulator;
pub mod state;

// Re-export key components
pub use feed::{FeedState, LiveFeed, Trend, UpdateInterval};
pub use simulator::{PriceSource, RandomWalk, WalkParams};
pub use state::PoiState;
