//! Live (simulated) price feed and history settings

pub struct LiveConfig {
    /// Most recent history samples retained (oldest evicted first)
    pub history_capacity: usize,
    /// Sanity clamp for simulated prices. Not tied to zone extents.
    pub clamp_min: f64,
    pub clamp_max: f64,
    /// A random step spans `(-volatility, +volatility)` price units
    pub volatility_min: f64,
    pub volatility_max: f64,
    pub default_volatility: f64,
    /// Per-tick drift applied by a bullish/bearish trend
    pub trend_bias: f64,
}

pub const LIVE: LiveConfig = LiveConfig {
    history_capacity: 50,
    clamp_min: 1790.0,
    clamp_max: 1840.0,
    volatility_min: 0.1,
    volatility_max: 2.0,
    default_volatility: 0.5,
    trend_bias: 0.3,
};
