// Hour bucketizer - fixed hourly slots over one evaluation day
use chrono::{DateTime, NaiveDate, Timelike, Utc};

/// Buckets per evaluation day. Wall-clock-hour based: a DST-bearing zone
/// would still yield 24 buckets. This engine pins bucketing to UTC.
pub const HOURS_PER_DAY: usize = 24;

/// The shared x-axis label sequence, always 24 gap-free entries
/// ("00:00".."23:00") regardless of data sparsity.
pub fn hour_labels() -> Vec<String> {
    (0..HOURS_PER_DAY).map(|hour| format!("{hour:02}:00")).collect()
}

/// Maps a timestamp to its bucket ordinal within `day`, or `None` when the
/// timestamp falls outside the day. Hour intervals are half-open: an event
/// exactly on an hour boundary belongs to the bucket starting there, and
/// next-day midnight never wraps into bucket 23.
pub fn classify(day: NaiveDate, timestamp: DateTime<Utc>) -> Option<usize> {
    if timestamp.date_naive() == day {
        Some(timestamp.hour() as usize)
    } else {
        None
    }
}
