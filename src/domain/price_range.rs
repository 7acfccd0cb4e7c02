use serde::{Deserialize, Serialize};

/// Display/interaction bounds for the manual price control.
///
/// This is NOT the projection domain (see `models::projection::PriceDomain`):
/// it is set by the user or by bulk import and never follows the live price.
/// `min > max` is representable and simply yields a reversed control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds widened by `margin` on both sides
    pub fn padded_around(low: f64, high: f64, margin: f64) -> Self {
        Self {
            min: low - margin,
            max: high + margin,
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.min > self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
