//! Timestamp codec for IOV boundaries
//!
//! Boundaries are stored as signed 64-bit nanosecond counts since
//! 1970-01-01T00:00:00 UTC, the sort key of every `IOVs` file.

use chrono::{DateTime, TimeZone, Utc};

/// Convert a calendar moment to nanoseconds since the epoch.
///
/// Monotonic and lossless for the whole range an `i64` nanosecond count can
/// express (years 1677–2262), which comfortably covers fixture dates.
pub fn to_nanos(moment: DateTime<Utc>) -> i64 {
    moment.timestamp() * 1_000_000_000 + i64::from(moment.timestamp_subsec_nanos())
}

/// Inverse of [`to_nanos`].
pub fn from_nanos(nanos: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_nanos(nanos)
}

/// Midnight UTC on the given calendar date.
///
/// # Panics
/// Panics if the date does not exist in the proleptic Gregorian calendar.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid calendar date")
}
