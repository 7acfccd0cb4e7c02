use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{CHART, DEFAULTS, PRICE_PRESETS};
use crate::data::{history_export, poi_json};
use crate::domain::{PriceRange, Timeframe, Zone, ZoneDraft};
use crate::engine::feed::{LiveFeed, Trend, UpdateInterval};
use crate::engine::simulator::{PriceSource, RandomWalk, WalkParams};
use crate::error::{PoiError, PoiResult};
use crate::models::{
    HistoryEntry, PriceHistory, PriceStatus, Projection, Viewport, ZoneQuery, ZoneRepository,
    ZoneRow, ZoneStatus, build_projection, classify, price_status,
};
use crate::utils::TimeUtils;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Single owner of everything the POI mirror knows: zones, live price,
/// display range, price history and the live feed.
///
/// Status and projection are derived on demand and never stored. Every
/// mutating method either completes or returns an error having changed
/// nothing.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PoiState {
    repository: ZoneRepository,
    live_price: f64,
    price_range: PriceRange,
    feed: LiveFeed,
    walk: WalkParams,

    // Runtime only: a restored state starts a new session
    #[serde(skip)]
    history: PriceHistory,
    #[serde(skip, default = "default_source")]
    source: Box<dyn PriceSource>,
}

fn default_source() -> Box<dyn PriceSource> {
    Box::new(RandomWalk::from_os_rng())
}

impl Default for PoiState {
    fn default() -> Self {
        Self::new(default_source(), TimeUtils::now_ms())
    }
}

impl PoiState {
    /// Canonical defaults, with history seeded at the default price
    pub fn new(source: Box<dyn PriceSource>, now_ms: i64) -> Self {
        let mut state = Self {
            repository: ZoneRepository::with_defaults(),
            live_price: DEFAULTS.live_price,
            price_range: DEFAULTS.price_range,
            feed: LiveFeed::default(),
            walk: WalkParams::default(),
            history: PriceHistory::default(),
            source,
        };
        state.seed_history(now_ms);
        state
    }

    // --- READS ---

    pub fn zones(&self) -> &[Zone] {
        self.repository.zones()
    }

    pub fn repository(&self) -> &ZoneRepository {
        &self.repository
    }

    pub fn live_price(&self) -> f64 {
        self.live_price
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn feed(&self) -> &LiveFeed {
        &self.feed
    }

    pub fn is_live(&self) -> bool {
        self.feed.is_live()
    }

    pub fn walk(&self) -> WalkParams {
        self.walk
    }

    pub fn status(&self) -> ZoneStatus<'_> {
        classify(self.repository.zones(), self.live_price)
    }

    pub fn price_status(&self) -> PriceStatus {
        price_status(self.repository.zones(), self.live_price)
    }

    /// Fresh layout for the given surface, lanes in canonical order
    pub fn projection(&self, viewport: Viewport) -> Projection {
        build_projection(
            self.repository.zones(),
            self.live_price,
            &Timeframe::ALL,
            viewport,
            CHART.domain_pad,
        )
    }

    pub fn view(&self, query: &ZoneQuery) -> Vec<ZoneRow<'_>> {
        self.repository.view(query)
    }

    // --- SESSION ---

    pub fn set_price_source(&mut self, source: Box<dyn PriceSource>) {
        self.source = source;
    }

    /// Start over after a restore: paused feed, history seeded at the current price
    pub fn begin_session(&mut self, now_ms: i64) {
        self.feed.stop();
        self.history.clear();
        self.seed_history(now_ms);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!(
                "Session started with {} zones at {:.2}",
                self.repository.len(),
                self.live_price
            );
        }
    }

    fn seed_history(&mut self, now_ms: i64) {
        self.record_sample(now_ms);
    }

    fn record_sample(&mut self, now_ms: i64) {
        let entry = HistoryEntry {
            timestamp: now_ms,
            price: self.live_price,
            status: self.price_status(),
        };
        self.history.append(entry);
    }

    // --- BULK IMPORT / EXPORT ---

    /// Replace every zone with the parsed array and refit the price range
    /// around the new bounds. On any error nothing changes.
    pub fn import_json(&mut self, text: &str) -> PoiResult<usize> {
        let zones = match poi_json::parse_zones(text) {
            Ok(zones) => zones,
            Err(e) => {
                log::warn!("POI import rejected: {}", e);
                return Err(e);
            }
        };
        let count = zones.len();
        self.repository.replace_all(zones);

        if let Some((low, high)) = self.repository.bounds() {
            self.price_range =
                PriceRange::padded_around(low, high, DEFAULTS.import_range_margin);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_import_events {
            log::info!(
                "Imported {} POIs, price range now {:.2}..{:.2}",
                count,
                self.price_range.min,
                self.price_range.max
            );
        }
        Ok(count)
    }

    pub fn dump_json(&self) -> PoiResult<String> {
        poi_json::dump_zones(self.repository.zones())
    }

    pub fn history_json(&self) -> PoiResult<String> {
        self.history.to_json_pretty()
    }

    pub fn export_history(&self, path: &Path) -> PoiResult<()> {
        history_export::write_history(path, &self.history)?;
        log::info!(
            "Exported {} history samples to {}",
            self.history.len(),
            path.display()
        );
        Ok(())
    }

    // --- PRICE CONTROL ---

    /// Non-finite input is dropped; the price stays where it was
    pub fn set_live_price(&mut self, price: f64) {
        if !price.is_finite() {
            log::warn!("Ignoring non-finite live price {}", price);
            return;
        }
        self.live_price = price;
    }

    /// Plain setter; a reversed range is kept as given
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.price_range = PriceRange::new(min, max);
    }

    pub fn jump_to_preset(&mut self, index: usize) -> PoiResult<()> {
        let preset = PRICE_PRESETS.get(index).ok_or(PoiError::IndexOutOfRange {
            index,
            len: PRICE_PRESETS.len(),
        })?;
        self.set_live_price(preset.price);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Jumped to preset '{}' ({:.2})", preset.label, preset.price);
        }
        Ok(())
    }

    /// Move the live price to the centre of a zone
    pub fn jump_to_zone(&mut self, index: usize) -> PoiResult<()> {
        let center = self
            .repository
            .get(index)
            .map(Zone::center)
            .ok_or(PoiError::IndexOutOfRange {
                index,
                len: self.repository.len(),
            })?;
        self.set_live_price(center);
        Ok(())
    }

    // --- ZONE EDITING ---

    /// Returns the index of the new zone
    pub fn create_zone(&mut self, draft: &ZoneDraft) -> PoiResult<usize> {
        let zone = draft.build()?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Created POI '{}'", zone.label);
        }
        self.repository.add(zone);
        Ok(self.repository.len() - 1)
    }

    /// Returns the zone that was replaced
    pub fn edit_zone(&mut self, index: usize, draft: &ZoneDraft) -> PoiResult<Zone> {
        let zone = draft.build()?;
        self.repository.replace_at(index, zone)
    }

    /// 15m buy zone hugging the live price
    pub fn quick_add(&mut self) -> usize {
        let start = self.live_price - DEFAULTS.quick_add_offset;
        let end = self.live_price + DEFAULTS.quick_add_offset;
        self.repository.add(Zone {
            timeframe: DEFAULTS.quick_add_timeframe,
            side: DEFAULTS.quick_add_side,
            start,
            end,
            label: format!("Quick POI {:.1}-{:.1}", start, end),
            strength: Some(DEFAULTS.quick_add_strength),
        });
        self.repository.len() - 1
    }

    pub fn remove_zone(&mut self, index: usize) -> PoiResult<Zone> {
        self.repository.remove_at(index)
    }

    pub fn remove_zones(&mut self, indices: &[usize]) -> PoiResult<Vec<Zone>> {
        let removed = self.repository.remove_many(indices)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Removed {} POIs", removed.len());
        }
        Ok(removed)
    }

    /// Back to canonical zones, price and range, with a fresh session
    pub fn reset(&mut self) {
        self.reset_at(TimeUtils::now_ms());
    }

    pub fn reset_at(&mut self, now_ms: i64) {
        self.repository.reset();
        self.live_price = DEFAULTS.live_price;
        self.price_range = DEFAULTS.price_range;
        self.begin_session(now_ms);
        log::info!("State reset to defaults");
    }

    // --- HISTORY ---

    /// Empty the log; the current price immediately becomes its first sample
    pub fn clear_history(&mut self, now_ms: i64) {
        self.history.clear();
        self.seed_history(now_ms);
    }

    // --- LIVE MODE ---

    /// Paused -> live starts a new schedule and records the current price.
    /// Live -> paused stops the schedule. Repeating the current mode is a no-op.
    pub fn set_live_mode(&mut self, enabled: bool, now_ms: i64) {
        match (enabled, self.feed.is_live()) {
            (true, false) => {
                self.feed.start(now_ms);
                self.record_sample(now_ms);
                log::info!(
                    "Live mode on (every {}, generation {})",
                    self.feed.interval(),
                    self.feed.generation()
                );
            }
            (false, true) => {
                self.feed.stop();
                log::info!("Live mode paused");
            }
            _ => {}
        }
    }

    /// Drive the feed from the frame loop. Returns true when a tick fired.
    pub fn poll_live(&mut self, now_ms: i64) -> bool {
        if !self.feed.poll(now_ms) {
            return false;
        }
        let next = self.source.next_price(self.live_price, &self.walk);
        self.set_live_price(next);
        self.record_sample(now_ms);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_live_ticks {
            log::info!("Live tick {:.2} ({})", self.live_price, self.price_status());
        }
        true
    }

    pub fn set_update_interval(&mut self, interval: UpdateInterval, now_ms: i64) {
        self.feed.set_interval(interval, now_ms);
    }

    pub fn set_trend(&mut self, trend: Trend) {
        self.walk.trend = trend;
    }

    /// Clamped to the supported volatility band
    pub fn set_volatility(&mut self, volatility: f64) {
        if volatility.is_finite() {
            self.walk.volatility = WalkParams::clamp_volatility(volatility);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Side;

    /// Plays back fixed prices, then holds
    #[derive(Debug)]
    struct Scripted(Vec<f64>);

    impl PriceSource for Scripted {
        fn next_price(&mut self, current: f64, _params: &WalkParams) -> f64 {
            if self.0.is_empty() {
                current
            } else {
                self.0.remove(0)
            }
        }
    }

    fn state_with(prices: Vec<f64>) -> PoiState {
        PoiState::new(Box::new(Scripted(prices)), 0)
    }

    #[test]
    fn test_fresh_state_defaults() {
        let state = state_with(vec![]);
        assert_eq!(state.zones().len(), 6);
        assert_eq!(state.live_price(), 1814.0);
        assert_eq!(state.price_range(), PriceRange::new(1790.0, 1840.0));
        assert_eq!(state.history().len(), 1);
        assert!(!state.is_live());
        // 15m buy 1813-1814 contains 1814, nothing sell does
        assert_eq!(state.price_status(), PriceStatus::Buy);
    }

    #[test]
    fn test_import_replaces_and_refits_range() {
        let mut state = state_with(vec![]);
        let text = r#"[
            {"timeframe":"daily","side":"buy","start":1700,"end":1710,"label":"A"},
            {"timeframe":"1h","side":"sell","start":1750,"end":1760,"label":"B"}
        ]"#;
        assert_eq!(state.import_json(text).unwrap(), 2);
        assert_eq!(state.zones().len(), 2);
        assert_eq!(state.price_range(), PriceRange::new(1690.0, 1770.0));
    }

    #[test]
    fn test_import_empty_array_keeps_range() {
        let mut state = state_with(vec![]);
        state.set_price_range(1000.0, 2000.0);
        state.import_json("[]").unwrap();
        assert!(state.zones().is_empty());
        assert_eq!(state.price_range(), PriceRange::new(1000.0, 2000.0));
        assert_eq!(state.price_status(), PriceStatus::Neutral);
    }

    #[test]
    fn test_failed_import_changes_nothing() {
        let mut state = state_with(vec![]);
        let before = state.dump_json().unwrap();
        let text = r#"[
            {"timeframe":"daily","side":"buy","start":1,"end":2,"label":"ok"},
            {"timeframe":"daily","side":"buy","start":5,"end":2,"label":"bad"}
        ]"#;
        assert!(matches!(
            state.import_json(text),
            Err(PoiError::MalformedImport(_))
        ));
        assert!(state.import_json("{\"zones\": []}").is_err());
        assert_eq!(state.dump_json().unwrap(), before);
        assert_eq!(state.price_range(), DEFAULTS.price_range);
    }

    #[test]
    fn test_non_finite_live_price_is_dropped() {
        let mut state = state_with(vec![]);
        state.set_live_price(1802.5);
        state.set_live_price(f64::NAN);
        state.set_live_price(f64::INFINITY);
        assert_eq!(state.live_price(), 1802.5);
    }

    #[test]
    fn test_reversed_price_range_is_accepted() {
        let mut state = state_with(vec![]);
        state.set_price_range(1840.0, 1790.0);
        assert!(state.price_range().is_reversed());
    }

    #[test]
    fn test_presets_and_zone_jumps() {
        let mut state = state_with(vec![]);
        state.jump_to_preset(3).unwrap();
        assert_eq!(state.live_price(), 1820.0);
        assert!(state.jump_to_preset(PRICE_PRESETS.len()).is_err());

        // 4H Buy 1810-1812
        state.jump_to_zone(3).unwrap();
        assert_eq!(state.live_price(), 1811.0);
        assert!(matches!(
            state.jump_to_zone(99),
            Err(PoiError::IndexOutOfRange { index: 99, len: 6 })
        ));
        assert_eq!(state.live_price(), 1811.0);
    }

    #[test]
    fn test_quick_add_uses_live_price() {
        let mut state = state_with(vec![]);
        state.set_live_price(1802.0);
        let index = state.quick_add();
        let zone = &state.zones()[index];
        assert_eq!(zone.timeframe, Timeframe::M15);
        assert_eq!(zone.side, Side::Buy);
        assert_eq!(zone.start, 1800.0);
        assert_eq!(zone.end, 1804.0);
        assert_eq!(zone.label, "Quick POI 1800.0-1804.0");
        assert_eq!(zone.strength, Some(0.6));
    }

    #[test]
    fn test_incomplete_form_does_not_mutate() {
        let mut state = state_with(vec![]);
        let draft = ZoneDraft {
            end: None,
            ..ZoneDraft::around(1814.0)
        };
        assert!(matches!(
            state.create_zone(&draft),
            Err(PoiError::IncompleteFormInput { .. })
        ));
        assert!(state.edit_zone(0, &draft).is_err());
        assert_eq!(state.zones().len(), 6);
        assert_eq!(state.zones()[0].label, "Monthly Sell 1820-1825");
    }

    #[test]
    fn test_create_and_edit_zone() {
        let mut state = state_with(vec![]);
        let draft = ZoneDraft {
            label: "New".to_string(),
            ..ZoneDraft::around(1790.0)
        };
        let index = state.create_zone(&draft).unwrap();
        assert_eq!(index, 6);

        let mut edited = ZoneDraft::from_zone(&state.zones()[index]);
        edited.side = Side::Sell;
        let old = state.edit_zone(index, &edited).unwrap();
        assert_eq!(old.side, Side::Buy);
        assert_eq!(state.zones()[index].side, Side::Sell);
        assert!(state.edit_zone(42, &edited).is_err());
    }

    #[test]
    fn test_reset_restores_defaults_and_reseeds() {
        let mut state = state_with(vec![]);
        state.remove_zones(&[0, 1, 2]).unwrap();
        state.set_live_price(1900.0);
        state.set_price_range(0.0, 1.0);
        state.set_live_mode(true, 10);
        state.reset_at(20);

        assert_eq!(state.zones().len(), 6);
        assert_eq!(state.live_price(), 1814.0);
        assert_eq!(state.price_range(), DEFAULTS.price_range);
        assert!(!state.is_live());
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history().latest().unwrap().timestamp, 20);
    }

    #[test]
    fn test_enabling_live_mode_appends_immediately() {
        let mut state = state_with(vec![1816.0]);
        state.set_live_mode(true, 1_000);
        assert_eq!(state.history().len(), 2);

        // already live: no second sample, no new generation
        let generation = state.feed().generation();
        state.set_live_mode(true, 1_500);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.feed().generation(), generation);
    }

    #[test]
    fn test_live_ticks_follow_interval() {
        let mut state = state_with(vec![1816.0, 1817.0]);
        state.set_update_interval(UpdateInterval::OneSecond, 0);
        state.set_live_mode(true, 0);

        assert!(!state.poll_live(500));
        assert!(state.poll_live(1_000));
        assert_eq!(state.live_price(), 1816.0);

        let latest = state.history().latest().unwrap();
        assert_eq!(latest.price, 1816.0);
        assert_eq!(latest.timestamp, 1_000);
        // daily sell 1815-1818 and 1h sell 1816-1818
        assert_eq!(latest.status, PriceStatus::Sell);

        state.set_live_mode(false, 1_200);
        assert!(!state.poll_live(10_000));
        assert_eq!(state.live_price(), 1816.0);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_interval_change_while_live_restarts_timer() {
        let mut state = state_with(vec![1815.0]);
        state.set_live_mode(true, 0);
        state.set_update_interval(UpdateInterval::OneSecond, 4_500);
        assert!(!state.poll_live(5_000));
        assert!(state.poll_live(5_500));
    }

    #[test]
    fn test_volatility_and_trend_setters() {
        let mut state = state_with(vec![]);
        state.set_volatility(9.0);
        assert_eq!(state.walk().volatility, 2.0);
        state.set_volatility(f64::NAN);
        assert_eq!(state.walk().volatility, 2.0);
        state.set_trend(Trend::Down);
        assert_eq!(state.walk().trend, Trend::Down);
    }

    #[test]
    fn test_clear_history_reseeds() {
        let mut state = state_with(vec![1815.0, 1816.0]);
        state.set_update_interval(UpdateInterval::OneSecond, 0);
        state.set_live_mode(true, 0);
        state.poll_live(1_000);
        state.poll_live(2_000);
        assert!(state.history().session_stats().is_some());

        state.clear_history(3_000);
        assert_eq!(state.history().len(), 1);
        assert!(state.history().session_stats().is_none());
    }

    #[test]
    fn test_projection_tracks_live_price() {
        let mut state = state_with(vec![]);
        state.set_live_price(1900.0);
        let projection = state.projection(Viewport::default());
        assert_eq!(projection.domain.max, 1908.0);
        assert_eq!(projection.domain.min, 1792.0);
        assert_eq!(projection.zones.len(), 6);
    }

    #[test]
    fn test_serde_restores_paused_with_settings() {
        let mut state = state_with(vec![]);
        state.set_update_interval(UpdateInterval::FifteenSeconds, 0);
        state.set_trend(Trend::Up);
        state.set_live_mode(true, 0);
        state.quick_add();

        let json = serde_json::to_string(&state).unwrap();
        let mut restored: PoiState = serde_json::from_str(&json).unwrap();
        restored.begin_session(5);

        assert!(!restored.is_live());
        assert_eq!(restored.feed().interval(), UpdateInterval::FifteenSeconds);
        assert_eq!(restored.walk().trend, Trend::Up);
        assert_eq!(restored.zones(), state.zones());
        assert_eq!(restored.history().len(), 1);
    }

    #[test]
    fn test_restore_drops_invalid_persisted_zones() {
        let json = r#"{
            "repository": [
                {"timeframe":"weekly","side":"sell","start":1830,"end":1800,"label":""},
                {"timeframe":"daily","side":"sell","start":1812,"end":1818,"label":"D sell"}
            ],
            "live_price": 1815.0
        }"#;
        let mut restored: PoiState = serde_json::from_str(json).unwrap();
        restored.begin_session(0);

        assert_eq!(restored.zones().len(), 1);
        assert!(restored.zones().iter().all(|zone| zone.validate().is_ok()));
        assert_eq!(restored.price_status(), PriceStatus::Sell);

        let projection = restored.projection(Viewport::default());
        assert!(projection.zones.iter().all(|band| band.y_bottom >= band.y_top));
    }
}
