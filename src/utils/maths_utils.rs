use argminmax::ArgMinMax;

/// `(min, max)` of a price slice, `None` when empty.
/// Callers only pass validated (finite) prices.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let (min_index, max_index) = values.argminmax();
    Some((values[min_index], values[max_index]))
}

/// Percent change from `previous` to `current`; 0 when `previous` is 0
pub fn pct_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}
