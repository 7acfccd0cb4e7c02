use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::LIVE;
use crate::error::PoiResult;
use crate::models::status::PriceStatus;
use crate::utils::maths_utils;

/// One recorded price sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub price: f64,
    /// Classification at the moment the sample was taken
    pub status: PriceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStats {
    pub high: f64,
    pub low: f64,
}

/// Change between the two most recent samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    pub change: f64,
    pub percent: f64,
}

impl PriceChange {
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

/// Bounded FIFO log of price samples, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for PriceHistory {
    fn default() -> Self {
        Self::with_capacity(LIVE.history_capacity)
    }
}

impl PriceHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Push a sample, evicting the oldest once the log is full
    pub fn append(&mut self, entry: HistoryEntry) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// High/low over the whole log. Only meaningful with two or more samples.
    pub fn session_stats(&self) -> Option<SessionStats> {
        if self.entries.len() < 2 {
            return None;
        }
        let prices: Vec<f64> = self.entries.iter().map(|e| e.price).collect();
        maths_utils::min_max(&prices).map(|(low, high)| SessionStats { high, low })
    }

    pub fn change(&self) -> Option<PriceChange> {
        let len = self.entries.len();
        if len < 2 {
            return None;
        }
        let previous = self.entries[len - 2].price;
        let current = self.entries[len - 1].price;
        Some(PriceChange {
            change: current - previous,
            percent: maths_utils::pct_change(previous, current),
        })
    }

    /// Up to `n` samples, newest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev().take(n)
    }

    /// Pretty-printed JSON array of all entries, oldest first
    pub fn to_json_pretty(&self) -> PoiResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(timestamp: i64, price: f64) -> HistoryEntry {
        HistoryEntry {
            timestamp,
            price,
            status: PriceStatus::Neutral,
        }
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = PriceHistory::default();
        for i in 0..60 {
            history.append(entry(i, 1800.0 + i as f64));
        }
        assert_eq!(history.len(), 50);
        assert_eq!(history.entries().next().unwrap().timestamp, 10);
        assert_eq!(history.latest().unwrap().timestamp, 59);
    }

    #[test]
    fn test_stats_need_two_samples() {
        let mut history = PriceHistory::default();
        assert!(history.session_stats().is_none());
        assert!(history.change().is_none());

        history.append(entry(0, 1814.0));
        assert!(history.session_stats().is_none());
        assert!(history.change().is_none());

        history.append(entry(1, 1816.0));
        history.append(entry(2, 1811.0));
        let stats = history.session_stats().unwrap();
        assert_eq!(stats.high, 1816.0);
        assert_eq!(stats.low, 1811.0);

        let change = history.change().unwrap();
        assert_eq!(change.change, -5.0);
        assert!(!change.is_up());
        assert!((change.percent - (-5.0 / 1816.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_change_from_zero_price_is_zero_percent() {
        let mut history = PriceHistory::default();
        history.append(entry(0, 0.0));
        history.append(entry(1, 3.0));
        assert_eq!(history.change().unwrap().percent, 0.0);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut history = PriceHistory::with_capacity(5);
        for i in 0..4 {
            history.append(entry(i, i as f64));
        }
        let ts: Vec<i64> = history.recent(2).map(|e| e.timestamp).collect();
        assert_eq!(ts, vec![3, 2]);
        assert_eq!(history.recent(10).count(), 4);
    }

    #[test]
    fn test_json_export_shape() {
        let mut history = PriceHistory::default();
        history.append(HistoryEntry {
            timestamp: 1_700_000_000_000,
            price: 1812.5,
            status: PriceStatus::Buy,
        });
        let json = history.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["timestamp"], 1_700_000_000_000i64);
        assert_eq!(value[0]["price"], 1812.5);
        assert_eq!(value[0]["status"], "buy");
    }
}
