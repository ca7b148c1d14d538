//! Timestamp normalization.
//!
//! Every walk operates on offset-aware timestamps. Callers may still hand in
//! naive wall-clock values; those are read as UTC rather than local time, so
//! a naive `2024-01-01T09:00:00` and `2024-01-01T09:00:00Z` always produce
//! the same result.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// A point in time, with or without an attached UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Wall-clock value with no offset information.
    Naive(NaiveDateTime),
    /// Instant with an explicit offset.
    Aware(DateTime<FixedOffset>),
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::Naive(naive)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Timestamp::Aware(dt.fixed_offset())
    }
}

impl Timestamp {
    /// Whether this timestamp carries an offset.
    pub fn is_aware(&self) -> bool {
        matches!(self, Timestamp::Aware(_))
    }
}

/// Attach UTC to a naive timestamp; aware timestamps pass through unchanged.
///
/// # Examples
///
/// ```
/// use business_time::normalize;
/// use chrono::NaiveDate;
///
/// let naive = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
/// let aware = normalize(naive);
/// assert_eq!(aware.to_rfc3339(), "2024-01-01T09:00:00+00:00");
/// ```
pub fn normalize(timestamp: impl Into<Timestamp>) -> DateTime<FixedOffset> {
    match timestamp.into() {
        Timestamp::Aware(dt) => dt,
        Timestamp::Naive(naive) => Utc.from_utc_datetime(&naive).fixed_offset(),
    }
}
