use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PoiError;

/// Chart timeframe a POI was drawn on.
///
/// Declaration order is the canonical lane order (monthly at the top,
/// 15m at the bottom); `Ord` follows it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
)]
pub enum Timeframe {
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "15m")]
    M15,
}

impl Timeframe {
    /// Canonical lane order
    pub const ALL: [Timeframe; 6] = [
        Timeframe::Monthly,
        Timeframe::Weekly,
        Timeframe::Daily,
        Timeframe::H4,
        Timeframe::H1,
        Timeframe::M15,
    ];

    /// Position in the canonical order (monthly = 0)
    pub fn rank(self) -> usize {
        match self {
            Timeframe::Monthly => 0,
            Timeframe::Weekly => 1,
            Timeframe::Daily => 2,
            Timeframe::H4 => 3,
            Timeframe::H1 => 4,
            Timeframe::M15 => 5,
        }
    }

    /// Strength used when a zone does not carry its own
    pub fn default_strength(self) -> f64 {
        match self {
            Timeframe::Monthly => 1.0,
            Timeframe::Weekly => 0.9,
            Timeframe::Daily => 0.8,
            Timeframe::H4 => 0.7,
            Timeframe::H1 => 0.6,
            Timeframe::M15 => 0.5,
        }
    }

    /// Wire spelling, as used in JSON
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Monthly => "monthly",
            Timeframe::Weekly => "weekly",
            Timeframe::Daily => "daily",
            Timeframe::H4 => "4h",
            Timeframe::H1 => "1h",
            Timeframe::M15 => "15m",
        }
    }

    /// Lane / picker label
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Monthly => "Monthly",
            Timeframe::Weekly => "Weekly",
            Timeframe::Daily => "Daily",
            Timeframe::H4 => "4H",
            Timeframe::H1 => "1H",
            Timeframe::M15 => "15M",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Timeframe {
    type Err = PoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.as_str() == wanted)
            .ok_or_else(|| PoiError::InvalidZone(format!("unknown timeframe '{}'", s)))
    }
}

/// Buy (demand) or sell (supply) zone. `Ord` is lexical on the wire name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Buy => "Buy (Demand)",
            Side::Sell => "Sell (Supply)",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl FromStr for Side {
    type Err = PoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            _ => Err(PoiError::InvalidZone(format!("unknown side '{}'", s))),
        }
    }
}
