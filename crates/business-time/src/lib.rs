//! # business-time
//!
//! Deterministic business-time arithmetic.
//!
//! Adds or subtracts a duration that only elapses inside *active periods*
//! (working hours, shifts, service windows) and returns the calendar
//! timestamp where it runs out. Which periods are active is never decided
//! here: the caller supplies a [`RuleProvider`] and the engine walks the
//! periods it returns.
//!
//! ## Modules
//!
//! - [`mod@normalize`] — Naive timestamps → UTC-aware timestamps
//! - [`rule`] — The [`RuleProvider`] contract and [`Period`]
//! - [`duration`] — [`BusinessDuration`] value type and compact string parsing
//! - [`delta`] — [`BusinessTimeDelta`]: forward and backward period walks
//! - [`difference`] — Business time elapsed between two timestamps
//! - [`options`] — [`WalkOptions`] (opt-in period cap)
//! - [`adjust`] — String-level entry points with serializable results
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use business_time::{BusinessTimeDelta, Period, RuleProvider};
//! use chrono::{DateTime, FixedOffset, NaiveTime, TimeDelta};
//!
//! /// 09:00–17:00 UTC, every day.
//! struct NineToFive;
//!
//! impl NineToFive {
//!     fn window(day: DateTime<FixedOffset>) -> Period {
//!         let date = day.date_naive();
//!         let open = date.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
//!         let close = date.and_time(NaiveTime::from_hms_opt(17, 0, 0).unwrap());
//!         Period::new(open.and_utc().fixed_offset(), close.and_utc().fixed_offset())
//!     }
//! }
//!
//! impl RuleProvider for NineToFive {
//!     fn next_period(&self, at: DateTime<FixedOffset>) -> Period {
//!         let today = Self::window(at);
//!         if at < today.start {
//!             today
//!         } else if at < today.end {
//!             Period::new(at, today.end)
//!         } else {
//!             Self::window(at + TimeDelta::days(1))
//!         }
//!     }
//!
//!     fn previous_period(&self, at: DateTime<FixedOffset>) -> Period {
//!         let today = Self::window(at);
//!         if at > today.end {
//!             today
//!         } else if at > today.start {
//!             Period::new(today.start, at)
//!         } else {
//!             Self::window(at - TimeDelta::days(1))
//!         }
//!     }
//! }
//!
//! let rule = NineToFive;
//! let ten_hours = BusinessTimeDelta::new(&rule, 10, 0);
//! let monday = DateTime::parse_from_rfc3339("2024-01-01T09:00:00Z").unwrap();
//! assert_eq!(
//!     (monday + ten_hours).to_rfc3339(),
//!     "2024-01-02T11:00:00+00:00"
//! );
//! ```

pub mod adjust;
pub mod delta;
pub mod difference;
pub mod duration;
pub mod error;
pub mod normalize;
pub mod options;
pub mod rule;

#[cfg(test)]
mod testing;

pub use adjust::{
    adjust_business_time, compute_business_duration, parse_timestamp,
    AdjustedBusinessTimestamp, BusinessDurationInfo,
};
pub use delta::BusinessTimeDelta;
pub use difference::business_time_between;
pub use duration::BusinessDuration;
pub use error::BusinessTimeError;
pub use normalize::{normalize, Timestamp};
pub use options::WalkOptions;
pub use rule::{Period, RuleProvider};
