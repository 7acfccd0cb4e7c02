use serde::{Deserialize, Serialize};

use crate::config::DEFAULTS;
use crate::domain::timeframe::{Side, Timeframe};
use crate::error::{PoiError, PoiResult};

/// A single Price of Interest: a price interval tagged with timeframe and side.
///
/// Zones are values. Editing one means replacing it in the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub timeframe: Timeframe,
    pub side: Side,
    pub start: f64,
    pub end: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
}

impl Zone {
    /// Model-boundary validation. Everything past this point assumes
    /// finite bounds with `start <= end`.
    pub fn validate(&self) -> PoiResult<()> {
        if self.label.trim().is_empty() {
            return Err(PoiError::InvalidZone("label must not be empty".to_string()));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(PoiError::InvalidZone(format!(
                "'{}' has a non-finite bound",
                self.label
            )));
        }
        if self.start > self.end {
            return Err(PoiError::InvalidZone(format!(
                "'{}' starts above its end ({} > {})",
                self.label, self.start, self.end
            )));
        }
        if let Some(strength) = self.strength {
            if !strength.is_finite() || strength <= 0.0 || strength > 1.0 {
                return Err(PoiError::InvalidZone(format!(
                    "'{}' strength {} is outside (0, 1]",
                    self.label, strength
                )));
            }
        }
        Ok(())
    }

    /// Own strength, or the timeframe default when absent
    pub fn effective_strength(&self) -> f64 {
        self.strength
            .unwrap_or_else(|| self.timeframe.default_strength())
    }

    /// Inclusive at both ends: boundary prices count as inside
    pub fn contains(&self, price: f64) -> bool {
        price >= self.start && price <= self.end
    }

    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Numeric coercion for a free-text price field. Blank or unparsable input
/// counts as missing.
pub fn coerce_price(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Raw create/edit form input, before it becomes a `Zone`.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDraft {
    pub timeframe: Timeframe,
    pub side: Side,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub label: String,
    pub strength: Option<f64>,
}

impl ZoneDraft {
    /// Form defaults for a new POI centred on `price`
    pub fn around(price: f64) -> Self {
        Self {
            timeframe: DEFAULTS.quick_add_timeframe,
            side: DEFAULTS.quick_add_side,
            start: Some(price - DEFAULTS.quick_add_offset),
            end: Some(price + DEFAULTS.quick_add_offset),
            label: String::new(),
            strength: Some(DEFAULTS.quick_add_strength),
        }
    }

    /// Prefill for editing an existing zone
    pub fn from_zone(zone: &Zone) -> Self {
        Self {
            timeframe: zone.timeframe,
            side: zone.side,
            start: Some(zone.start),
            end: Some(zone.end),
            label: zone.label.clone(),
            strength: zone.strength,
        }
    }

    /// Required-field check first (`IncompleteFormInput`), then full zone validation.
    pub fn build(&self) -> PoiResult<Zone> {
        let mut missing = Vec::new();
        if self.label.trim().is_empty() {
            missing.push("label");
        }
        if self.start.is_none() {
            missing.push("start");
        }
        if self.end.is_none() {
            missing.push("end");
        }

        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(PoiError::IncompleteFormInput { missing });
        };
        if !missing.is_empty() {
            return Err(PoiError::IncompleteFormInput { missing });
        }

        let zone = Zone {
            timeframe: self.timeframe,
            side: self.side,
            start,
            end,
            label: self.label.trim().to_string(),
            strength: self.strength,
        };
        zone.validate()?;
        Ok(zone)
    }
}
