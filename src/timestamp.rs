use chrono::{DateTime, SecondsFormat, Utc};

pub struct TimestampManager;

impl TimestampManager {
    /// Current wall-clock time in epoch milliseconds
    pub fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Current time as ISO-8601 with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
    pub fn iso_now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Format an epoch-millisecond timestamp for logging
    pub fn format(timestamp: i64) -> String {
        DateTime::from_timestamp_millis(timestamp)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_else(|| "Invalid timestamp".to_string())
    }
}
