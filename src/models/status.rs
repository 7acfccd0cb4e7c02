use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{Side, Zone};

/// Where the live price sits relative to all zones
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum PriceStatus {
    #[default]
    Neutral,
    Buy,
    Sell,
    Conflict,
}

impl PriceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PriceStatus::Neutral => "neutral",
            PriceStatus::Buy => "buy",
            PriceStatus::Sell => "sell",
            PriceStatus::Conflict => "conflict",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceStatus::Neutral => "No POI Zone",
            PriceStatus::Buy => "In Buy Zone",
            PriceStatus::Sell => "In Sell Zone",
            PriceStatus::Conflict => "Conflict Zone",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PriceStatus::Neutral => "⚪",
            PriceStatus::Buy => "🟢",
            PriceStatus::Sell => "🔴",
            PriceStatus::Conflict => "🟠",
        }
    }

    fn from_activity(any_buy: bool, any_sell: bool) -> Self {
        match (any_buy, any_sell) {
            (true, true) => PriceStatus::Conflict,
            (true, false) => PriceStatus::Buy,
            (false, true) => PriceStatus::Sell,
            (false, false) => PriceStatus::Neutral,
        }
    }
}

impl fmt::Display for PriceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Classification result, borrowing the zones that contain the price
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneStatus<'a> {
    pub status: PriceStatus,
    pub active_buy: Vec<&'a Zone>,
    pub active_sell: Vec<&'a Zone>,
}

impl ZoneStatus<'_> {
    pub fn active_count(&self) -> usize {
        self.active_buy.len() + self.active_sell.len()
    }
}

/// Partition the zones containing `price` by side and derive the status.
/// Conflict wins over either single-sided match. Never cache the result:
/// zones and price change independently.
pub fn classify(zones: &[Zone], price: f64) -> ZoneStatus<'_> {
    let (active_buy, active_sell): (Vec<&Zone>, Vec<&Zone>) = zones
        .iter()
        .filter(|zone| zone.contains(price))
        .partition(|zone| zone.side == Side::Buy);

    ZoneStatus {
        status: PriceStatus::from_activity(!active_buy.is_empty(), !active_sell.is_empty()),
        active_buy,
        active_sell,
    }
}

/// Status only, without collecting the active zones
pub fn price_status(zones: &[Zone], price: f64) -> PriceStatus {
    let mut any_buy = false;
    let mut any_sell = false;
    for zone in zones.iter().filter(|zone| zone.contains(price)) {
        match zone.side {
            Side::Buy => any_buy = true,
            Side::Sell => any_sell = true,
        }
        if any_buy && any_sell {
            break;
        }
    }
    PriceStatus::from_activity(any_buy, any_sell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timeframe;

    fn zone(side: Side, start: f64, end: f64) -> Zone {
        Zone {
            timeframe: Timeframe::H1,
            side,
            start,
            end,
            label: format!("{} {}-{}", side.as_str(), start, end),
            strength: None,
        }
    }

    #[test]
    fn test_empty_zone_list_is_neutral() {
        let result = classify(&[], 1814.0);
        assert_eq!(result.status, PriceStatus::Neutral);
        assert_eq!(result.active_count(), 0);
        assert_eq!(price_status(&[], 1814.0), PriceStatus::Neutral);
    }

    #[test]
    fn test_boundaries_are_inside() {
        let zones = vec![zone(Side::Buy, 10.0, 12.0)];
        assert_eq!(classify(&zones, 10.0).status, PriceStatus::Buy);
        assert_eq!(classify(&zones, 12.0).status, PriceStatus::Buy);
        assert_eq!(classify(&zones, 12.5).status, PriceStatus::Neutral);
    }

    #[test]
    fn test_conflict_requires_both_sides() {
        let zones = vec![
            zone(Side::Buy, 1800.0, 1805.0),
            zone(Side::Sell, 1801.0, 1806.0),
            zone(Side::Buy, 1790.0, 1795.0),
        ];
        let result = classify(&zones, 1803.0);
        assert_eq!(result.status, PriceStatus::Conflict);
        assert_eq!(result.active_buy.len(), 1);
        assert_eq!(result.active_sell.len(), 1);

        assert_eq!(classify(&zones, 1800.5).status, PriceStatus::Buy);
        assert_eq!(classify(&zones, 1805.5).status, PriceStatus::Sell);
    }

    #[test]
    fn test_price_status_agrees_with_classify() {
        let zones = vec![
            zone(Side::Buy, 1800.0, 1805.0),
            zone(Side::Sell, 1815.0, 1818.0),
            zone(Side::Sell, 1803.0, 1816.0),
        ];
        let mut price = 1795.0;
        while price <= 1825.0 {
            assert_eq!(price_status(&zones, price), classify(&zones, price).status);
            price += 0.25;
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PriceStatus::Conflict).unwrap(),
            "\"conflict\""
        );
        assert_eq!(PriceStatus::Buy.to_string(), "BUY");
    }
}
