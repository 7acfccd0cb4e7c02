use chrono::{DateTime, Local, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const CLOCK_FORMAT: &'static str = "%H:%M:%S";

    /// Wall clock in milliseconds since the Unix epoch
    pub fn now_ms() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Local wall-clock rendering of an epoch-ms timestamp (history rows)
    pub fn format_clock(timestamp_ms: i64) -> String {
        match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
            Some(utc) => utc
                .with_timezone(&Local)
                .format(Self::CLOCK_FORMAT)
                .to_string(),
            None => "--:--:--".to_string(),
        }
    }

    /// Short human label for a period, e.g. `5 seconds`, `1 minute`
    pub fn interval_ms_to_string(interval_ms: i64) -> String {
        let plural = |n: i64, unit: &str| {
            if n == 1 {
                format!("1 {}", unit)
            } else {
                format!("{} {}s", n, unit)
            }
        };
        if interval_ms >= Self::MS_IN_MIN && interval_ms % Self::MS_IN_MIN == 0 {
            plural(interval_ms / Self::MS_IN_MIN, "minute")
        } else if interval_ms % Self::MS_IN_S == 0 {
            plural(interval_ms / Self::MS_IN_S, "second")
        } else {
            format!("{}ms", interval_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_labels() {
        assert_eq!(TimeUtils::interval_ms_to_string(1_000), "1 second");
        assert_eq!(TimeUtils::interval_ms_to_string(15_000), "15 seconds");
        assert_eq!(TimeUtils::interval_ms_to_string(60_000), "1 minute");
        assert_eq!(TimeUtils::interval_ms_to_string(300_000), "5 minutes");
        assert_eq!(TimeUtils::interval_ms_to_string(1_500), "1500ms");
    }

    #[test]
    fn test_format_clock_shape() {
        let text = TimeUtils::format_clock(0);
        assert_eq!(text.len(), 8);
        assert_eq!(text.matches(':').count(), 2);
    }
}
