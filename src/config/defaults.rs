//! Canonical starting state: the default POI set, price range and presets.
//!
//! `reset()` restores exactly these values.

use crate::domain::{PriceRange, Side, Timeframe, Zone};

/// Static description of a default zone (labels are `&'static str` so the
/// table can live in a const).
pub struct ZoneSpec {
    pub timeframe: Timeframe,
    pub side: Side,
    pub start: f64,
    pub end: f64,
    pub label: &'static str,
    pub strength: f64,
}

pub struct DefaultsConfig {
    pub live_price: f64,
    pub price_range: PriceRange,
    /// Margin added around zone bounds when a bulk import recomputes the price range
    pub import_range_margin: f64,
    /// Quick-add and the "new POI" form use `price ± quick_add_offset`
    pub quick_add_offset: f64,
    pub quick_add_timeframe: Timeframe,
    pub quick_add_side: Side,
    pub quick_add_strength: f64,
    pub zones: &'static [ZoneSpec],
}

pub const DEFAULTS: DefaultsConfig = DefaultsConfig {
    live_price: 1814.0,
    price_range: PriceRange {
        min: 1790.0,
        max: 1840.0,
    },
    import_range_margin: 10.0,
    quick_add_offset: 2.0,
    quick_add_timeframe: Timeframe::M15,
    quick_add_side: Side::Buy,
    quick_add_strength: 0.6,
    zones: &[
        ZoneSpec {
            timeframe: Timeframe::Monthly,
            side: Side::Sell,
            start: 1820.0,
            end: 1825.0,
            label: "Monthly Sell 1820-1825",
            strength: 1.0,
        },
        ZoneSpec {
            timeframe: Timeframe::Weekly,
            side: Side::Buy,
            start: 1800.0,
            end: 1805.0,
            label: "Weekly Buy 1800-1805",
            strength: 0.9,
        },
        ZoneSpec {
            timeframe: Timeframe::Daily,
            side: Side::Sell,
            start: 1815.0,
            end: 1818.0,
            label: "Daily Sell 1815-1818",
            strength: 0.8,
        },
        ZoneSpec {
            timeframe: Timeframe::H4,
            side: Side::Buy,
            start: 1810.0,
            end: 1812.0,
            label: "4H Buy 1810-1812",
            strength: 0.7,
        },
        ZoneSpec {
            timeframe: Timeframe::H1,
            side: Side::Sell,
            start: 1816.0,
            end: 1818.0,
            label: "1H Sell 1816-1818",
            strength: 0.6,
        },
        ZoneSpec {
            timeframe: Timeframe::M15,
            side: Side::Buy,
            start: 1813.0,
            end: 1814.0,
            label: "15M Buy 1813-1814",
            strength: 0.5,
        },
    ],
};

/// Named shortcut for the manual price control
#[derive(Debug, Clone, Copy)]
pub struct PricePreset {
    pub label: &'static str,
    pub price: f64,
}

pub const PRICE_PRESETS: &[PricePreset] = &[
    PricePreset { label: "Support 1", price: 1800.0 },
    PricePreset { label: "Support 2", price: 1810.0 },
    PricePreset { label: "Current", price: 1814.0 },
    PricePreset { label: "Resistance 1", price: 1820.0 },
    PricePreset { label: "Resistance 2", price: 1830.0 },
];

/// Materialize the default zone table
pub fn default_zones() -> Vec<Zone> {
    DEFAULTS
        .zones
        .iter()
        .map(|spec| Zone {
            timeframe: spec.timeframe,
            side: spec.side,
            start: spec.start,
            end: spec.end,
            label: spec.label.to_string(),
            strength: Some(spec.strength),
        })
        .collect()
}
