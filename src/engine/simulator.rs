use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::LIVE;
use crate::engine::feed::Trend;

/// User-tunable shape of the simulated walk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkParams {
    pub volatility: f64,
    pub trend: Trend,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            volatility: LIVE.default_volatility,
            trend: Trend::default(),
        }
    }
}

impl WalkParams {
    pub fn clamp_volatility(volatility: f64) -> f64 {
        volatility.clamp(LIVE.volatility_min, LIVE.volatility_max)
    }
}

/// Anything that can produce the next live price from the current one.
/// The coordinator owns one and calls it once per live tick.
pub trait PriceSource: std::fmt::Debug {
    fn next_price(&mut self, current: f64, params: &WalkParams) -> f64;
}

/// Uniform random step plus trend drift, clamped to the sanity band
#[derive(Debug)]
pub struct RandomWalk {
    rng: StdRng,
}

impl RandomWalk {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible walk (CLI `--seed`, tests)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl PriceSource for RandomWalk {
    fn next_price(&mut self, current: f64, params: &WalkParams) -> f64 {
        let unit: f64 = self.rng.random();
        let step = (unit - 0.5) * params.volatility * 2.0;
        (current + step + params.trend.bias()).clamp(LIVE.clamp_min, LIVE.clamp_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_within_volatility_plus_bias() {
        let mut walk = RandomWalk::seeded(7);
        let params = WalkParams {
            volatility: 0.5,
            trend: Trend::Up,
        };
        for _ in 0..200 {
            let next = walk.next_price(1814.0, &params);
            assert!(next >= 1814.0 - 0.5 + 0.3 - 1e-9);
            assert!(next <= 1814.0 + 0.5 + 0.3 + 1e-9);
        }
    }

    #[test]
    fn test_clamped_to_sanity_band() {
        let mut walk = RandomWalk::seeded(1);
        let up = WalkParams {
            volatility: 2.0,
            trend: Trend::Up,
        };
        let mut price = 1839.5;
        for _ in 0..50 {
            price = walk.next_price(price, &up);
            assert!(price <= LIVE.clamp_max);
        }

        let down = WalkParams {
            volatility: 2.0,
            trend: Trend::Down,
        };
        assert!(walk.next_price(1000.0, &down) >= LIVE.clamp_min);
    }

    #[test]
    fn test_same_seed_same_path() {
        let params = WalkParams::default();
        let mut a = RandomWalk::seeded(42);
        let mut b = RandomWalk::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_price(1814.0, &params), b.next_price(1814.0, &params));
        }
    }

    #[test]
    fn test_volatility_clamp() {
        assert_eq!(WalkParams::clamp_volatility(0.0), 0.1);
        assert_eq!(WalkParams::clamp_volatility(5.0), 2.0);
        assert_eq!(WalkParams::clamp_volatility(0.7), 0.7);
    }
}
