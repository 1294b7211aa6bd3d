//! Time utilities for latency statistics

use chrono::{DateTime, Utc};

/// Minutes elapsed between two timestamps
///
/// Negative when `end` precedes `start`; callers decide whether out-of-order
/// timestamps are meaningful for their statistic.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use safe_history_analyser::utils::time::minutes_between;
///
/// let start = Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2023, 1, 1, 11, 30, 0).unwrap();
/// assert_eq!(minutes_between(start, end), 90.0);
/// ```
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 60_000.0
}
