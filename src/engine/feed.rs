use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::LIVE;
use crate::utils::TimeUtils;

/// Tick period choices offered by the live tracker
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum UpdateInterval {
    OneSecond,
    #[default]
    FiveSeconds,
    FifteenSeconds,
    OneMinute,
    FiveMinutes,
}

impl UpdateInterval {
    pub fn ms(self) -> i64 {
        match self {
            UpdateInterval::OneSecond => TimeUtils::MS_IN_S,
            UpdateInterval::FiveSeconds => 5 * TimeUtils::MS_IN_S,
            UpdateInterval::FifteenSeconds => 15 * TimeUtils::MS_IN_S,
            UpdateInterval::OneMinute => TimeUtils::MS_IN_MIN,
            UpdateInterval::FiveMinutes => 5 * TimeUtils::MS_IN_MIN,
        }
    }
}

impl fmt::Display for UpdateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TimeUtils::interval_ms_to_string(self.ms()))
    }
}

/// Directional drift added to every simulated step
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum Trend {
    Up,
    #[default]
    Sideways,
    Down,
}

impl Trend {
    pub fn bias(self) -> f64 {
        match self {
            Trend::Up => LIVE.trend_bias,
            Trend::Sideways => 0.0,
            Trend::Down => -LIVE.trend_bias,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Trend::Up => "📈 Bullish",
            Trend::Sideways => "➡ Sideways",
            Trend::Down => "📉 Bearish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedState {
    #[default]
    Paused,
    /// Next tick fires once the clock reaches `next_due_ms`
    Live { next_due_ms: i64 },
}

/// Timer side of live mode. Holds no prices; the caller decides what a tick does.
///
/// Every `start` bumps `generation`, so a schedule from a previous live
/// session can never be mistaken for the current one. Only the interval
/// persists; a restored feed always comes back paused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveFeed {
    #[serde(skip)]
    state: FeedState,
    #[serde(default)]
    interval: UpdateInterval,
    #[serde(skip)]
    generation: u64,
}

impl Default for LiveFeed {
    fn default() -> Self {
        Self::new(UpdateInterval::default())
    }
}

impl LiveFeed {
    pub fn new(interval: UpdateInterval) -> Self {
        Self {
            state: FeedState::Paused,
            interval,
            generation: 0,
        }
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn is_live(&self) -> bool {
        matches!(self.state, FeedState::Live { .. })
    }

    pub fn interval(&self) -> UpdateInterval {
        self.interval
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin a fresh schedule: first tick one interval from `now_ms`
    pub fn start(&mut self, now_ms: i64) {
        self.generation += 1;
        self.state = FeedState::Live {
            next_due_ms: now_ms + self.interval.ms(),
        };
    }

    pub fn stop(&mut self) {
        self.state = FeedState::Paused;
    }

    /// Change the period. A running schedule restarts from `now_ms`.
    pub fn set_interval(&mut self, interval: UpdateInterval, now_ms: i64) {
        self.interval = interval;
        if self.is_live() {
            self.start(now_ms);
        }
    }

    /// True at most once per call when a tick is due. The next deadline is
    /// measured from `now_ms`, so a long stall yields one tick, not a burst.
    pub fn poll(&mut self, now_ms: i64) -> bool {
        match self.state {
            FeedState::Live { next_due_ms } if now_ms >= next_due_ms => {
                self.state = FeedState::Live {
                    next_due_ms: now_ms + self.interval.ms(),
                };
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, for repaint scheduling
    pub fn ms_until_due(&self, now_ms: i64) -> Option<i64> {
        match self.state {
            FeedState::Live { next_due_ms } => Some((next_due_ms - now_ms).max(0)),
            FeedState::Paused => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_interval_presets() {
        let ms: Vec<i64> = UpdateInterval::iter().map(|i| i.ms()).collect();
        assert_eq!(ms, vec![1_000, 5_000, 15_000, 60_000, 300_000]);
        assert_eq!(UpdateInterval::default(), UpdateInterval::FiveSeconds);
        assert_eq!(UpdateInterval::OneMinute.to_string(), "1 minute");
    }

    #[test]
    fn test_trend_bias() {
        assert_eq!(Trend::Up.bias(), 0.3);
        assert_eq!(Trend::Sideways.bias(), 0.0);
        assert_eq!(Trend::Down.bias(), -0.3);
    }

    #[test]
    fn test_paused_never_ticks() {
        let mut feed = LiveFeed::default();
        assert!(!feed.poll(i64::MAX));
        assert_eq!(feed.ms_until_due(0), None);
    }

    #[test]
    fn test_one_tick_per_due_period() {
        let mut feed = LiveFeed::new(UpdateInterval::OneSecond);
        feed.start(0);
        assert!(!feed.poll(999));
        assert!(feed.poll(1_000));
        assert!(!feed.poll(1_500));
        // stalled for ten periods: still one tick
        assert!(feed.poll(12_000));
        assert!(!feed.poll(12_001));
        assert_eq!(feed.ms_until_due(12_500), Some(500));
    }

    #[test]
    fn test_stop_clears_schedule() {
        let mut feed = LiveFeed::new(UpdateInterval::OneSecond);
        feed.start(0);
        feed.stop();
        assert!(!feed.poll(5_000));
        assert_eq!(feed.state(), FeedState::Paused);
    }

    #[test]
    fn test_interval_change_restarts_live_timer() {
        let mut feed = LiveFeed::new(UpdateInterval::FiveSeconds);
        feed.start(0);
        let first_generation = feed.generation();

        feed.set_interval(UpdateInterval::OneSecond, 4_000);
        assert!(feed.generation() > first_generation);
        assert!(!feed.poll(4_999));
        assert!(feed.poll(5_000));
    }

    #[test]
    fn test_interval_change_while_paused_stays_paused() {
        let mut feed = LiveFeed::default();
        feed.set_interval(UpdateInterval::FiveMinutes, 10);
        assert!(!feed.is_live());
        assert_eq!(feed.generation(), 0);
        assert_eq!(feed.interval(), UpdateInterval::FiveMinutes);
    }
}
