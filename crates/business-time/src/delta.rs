//! The business-duration engine.
//!
//! A [`BusinessTimeDelta`] pairs a [`BusinessDuration`] with a borrowed
//! [`RuleProvider`] and turns that duration into a calendar timestamp by
//! walking active periods:
//!
//! - **forward** ([`BusinessTimeDelta::add_to`]): ask for the next period at
//!   the cursor. If it is strictly longer than what is left, land inside it.
//!   Otherwise consume all of it and continue from its end.
//! - **backward** ([`BusinessTimeDelta::subtract_from`]): the mirror image,
//!   using previous periods and landing `remaining` before a period's end.
//!
//! The comparison is strict, so a period exactly as long as the remaining
//! duration is consumed whole and the walk lands at the start (forward) or
//! end (backward) of the following period. Zero-length periods never end a
//! walk.
//!
//! Walks are unbounded unless a cap is set through [`WalkOptions`]; a rule
//! provider that stops making progress keeps an unbounded walk spinning.

use std::convert::Infallible;
use std::fmt;
use std::ops::{Add, Sub};

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, TimeZone};
use tracing::{debug, trace, warn};

use crate::duration::BusinessDuration;
use crate::error::{BusinessTimeError, Result};
use crate::normalize::{normalize, Timestamp};
use crate::options::WalkOptions;
use crate::rule::{Period, RuleProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Where a walk stopped: the period it landed in and the duration still to
/// be placed inside it.
struct Landing {
    period: Period,
    remaining: TimeDelta,
}

/// A business duration bound to the rule provider that defines its periods.
///
/// Immutable; every call to [`add_to`](Self::add_to) or
/// [`subtract_from`](Self::subtract_from) works on its own copies of the
/// cursor and remaining duration.
///
/// # Examples
///
/// ```
/// use business_time::{BusinessTimeDelta, Period, RuleProvider};
/// use chrono::{DateTime, FixedOffset, TimeDelta};
///
/// /// Every hour from :00 to :30 is active.
/// struct HalfHours;
///
/// impl RuleProvider for HalfHours {
///     fn next_period(&self, at: DateTime<FixedOffset>) -> Period {
///         let hour = at - TimeDelta::seconds(at.timestamp() % 3600);
///         let close = hour + TimeDelta::minutes(30);
///         if at < close {
///             Period::new(at, close)
///         } else {
///             let next = hour + TimeDelta::hours(1);
///             Period::new(next, next + TimeDelta::minutes(30))
///         }
///     }
///
///     fn previous_period(&self, at: DateTime<FixedOffset>) -> Period {
///         let hour = at - TimeDelta::seconds(at.timestamp() % 3600);
///         let close = hour + TimeDelta::minutes(30);
///         if at > hour {
///             Period::new(hour, at.min(close))
///         } else {
///             let prev = hour - TimeDelta::hours(1);
///             Period::new(prev, prev + TimeDelta::minutes(30))
///         }
///     }
/// }
///
/// let rule = HalfHours;
/// let delta = BusinessTimeDelta::new(&rule, 0, 45 * 60);
/// let start = DateTime::parse_from_rfc3339("2024-01-01T09:00:00Z").unwrap();
/// assert_eq!(delta.add_to(start).to_rfc3339(), "2024-01-01T10:15:00+00:00");
/// ```
pub struct BusinessTimeDelta<'r, R: ?Sized> {
    rule: &'r R,
    duration: BusinessDuration,
}

impl<'r, R: RuleProvider + ?Sized> BusinessTimeDelta<'r, R> {
    /// `hours * 3600 + seconds` of business time under `rule`.
    pub fn new(rule: &'r R, hours: i64, seconds: i64) -> Self {
        Self::from_duration(rule, BusinessDuration::new(hours, seconds))
    }

    pub fn from_duration(rule: &'r R, duration: BusinessDuration) -> Self {
        Self { rule, duration }
    }

    pub fn duration(&self) -> BusinessDuration {
        self.duration
    }

    pub fn rule(&self) -> &'r R {
        self.rule
    }

    /// The timestamp reached by spending this much business time from
    /// `timestamp` onward.
    ///
    /// Naive timestamps are read as UTC.
    ///
    /// # Panics
    ///
    /// Panics if the result is outside chrono's representable range. Use
    /// [`checked_add_to`](Self::checked_add_to) to get `None` instead.
    pub fn add_to(&self, timestamp: impl Into<Timestamp>) -> DateTime<FixedOffset> {
        let Ok(landing) = self.walk(normalize(timestamp), Direction::Forward, |_| {
            Ok::<(), Infallible>(())
        });
        landing.period.start + landing.remaining
    }

    /// The timestamp from which spending this much business time arrives at
    /// `timestamp`.
    ///
    /// # Panics
    ///
    /// Panics if the result is outside chrono's representable range. Use
    /// [`checked_subtract_from`](Self::checked_subtract_from) to get `None`
    /// instead.
    pub fn subtract_from(&self, timestamp: impl Into<Timestamp>) -> DateTime<FixedOffset> {
        let Ok(landing) = self.walk(normalize(timestamp), Direction::Backward, |_| {
            Ok::<(), Infallible>(())
        });
        landing.period.end - landing.remaining
    }

    /// Like [`add_to`](Self::add_to), returning `None` on overflow.
    pub fn checked_add_to(&self, timestamp: impl Into<Timestamp>) -> Option<DateTime<FixedOffset>> {
        self.add_to_with_options(timestamp, &WalkOptions::default())
            .ok()
    }

    /// Like [`subtract_from`](Self::subtract_from), returning `None` on
    /// overflow.
    pub fn checked_subtract_from(
        &self,
        timestamp: impl Into<Timestamp>,
    ) -> Option<DateTime<FixedOffset>> {
        self.subtract_from_with_options(timestamp, &WalkOptions::default())
            .ok()
    }

    /// Forward walk with checked arithmetic and an optional period cap.
    ///
    /// # Errors
    ///
    /// Returns [`BusinessTimeError::PeriodLimitExceeded`] if the walk needs
    /// more than `options.max_periods` periods, or
    /// [`BusinessTimeError::OutOfRange`] if the result cannot be represented.
    pub fn add_to_with_options(
        &self,
        timestamp: impl Into<Timestamp>,
        options: &WalkOptions,
    ) -> Result<DateTime<FixedOffset>> {
        let landing = self.walk(
            normalize(timestamp),
            Direction::Forward,
            period_limit(options.max_periods),
        )?;
        landing
            .period
            .start
            .checked_add_signed(landing.remaining)
            .ok_or_else(|| out_of_range(&landing))
    }

    /// Backward walk with checked arithmetic and an optional period cap.
    ///
    /// # Errors
    ///
    /// Same as [`add_to_with_options`](Self::add_to_with_options).
    pub fn subtract_from_with_options(
        &self,
        timestamp: impl Into<Timestamp>,
        options: &WalkOptions,
    ) -> Result<DateTime<FixedOffset>> {
        let landing = self.walk(
            normalize(timestamp),
            Direction::Backward,
            period_limit(options.max_periods),
        )?;
        landing
            .period
            .end
            .checked_sub_signed(landing.remaining)
            .ok_or_else(|| out_of_range(&landing))
    }

    /// Consume periods until one is strictly longer than what is left.
    ///
    /// `before_query` sees the number of periods already requested and may
    /// abort the walk.
    fn walk<E>(
        &self,
        start: DateTime<FixedOffset>,
        direction: Direction,
        mut before_query: impl FnMut(usize) -> std::result::Result<(), E>,
    ) -> std::result::Result<Landing, E> {
        let mut remaining = self.duration.as_time_delta();
        let mut cursor = start;
        let mut queried = 0usize;

        loop {
            before_query(queried)?;
            let period = match direction {
                Direction::Forward => self.rule.next_period(cursor),
                Direction::Backward => self.rule.previous_period(cursor),
            };
            queried += 1;

            let length = period.length();
            if length > remaining {
                debug!(
                    ?direction,
                    periods = queried,
                    start = %period.start,
                    end = %period.end,
                    remaining_secs = remaining.num_seconds(),
                    "business time walk landed"
                );
                return Ok(Landing { period, remaining });
            }

            trace!(
                ?direction,
                start = %period.start,
                end = %period.end,
                length_secs = length.num_seconds(),
                "consumed period"
            );
            remaining = remaining - length;
            cursor = match direction {
                Direction::Forward => period.end,
                Direction::Backward => period.start,
            };
        }
    }
}

fn period_limit(
    max_periods: Option<usize>,
) -> impl FnMut(usize) -> std::result::Result<(), BusinessTimeError> {
    move |queried| match max_periods {
        Some(limit) if queried >= limit => {
            warn!(limit, "business time walk hit its period limit");
            Err(BusinessTimeError::PeriodLimitExceeded { limit })
        }
        _ => Ok(()),
    }
}

fn out_of_range(landing: &Landing) -> BusinessTimeError {
    BusinessTimeError::OutOfRange(format!(
        "{}s from period {}..{} is not representable",
        landing.remaining.num_seconds(),
        landing.period.start.to_rfc3339(),
        landing.period.end.to_rfc3339()
    ))
}

// ── Value semantics ─────────────────────────────────────────────────────────

impl<R: ?Sized> Clone for BusinessTimeDelta<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for BusinessTimeDelta<'_, R> {}

/// Engines compare by duration only; the rule providers are not consulted.
impl<R: ?Sized, S: ?Sized> PartialEq<BusinessTimeDelta<'_, S>> for BusinessTimeDelta<'_, R> {
    fn eq(&self, other: &BusinessTimeDelta<'_, S>) -> bool {
        self.duration == other.duration
    }
}

impl<R: ?Sized> Eq for BusinessTimeDelta<'_, R> {}

impl<R: ?Sized> fmt::Debug for BusinessTimeDelta<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusinessTimeDelta")
            .field("hours", &self.duration.hours())
            .field("seconds", &self.duration.seconds())
            .finish()
    }
}

impl<R: ?Sized> fmt::Display for BusinessTimeDelta<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<BusinessTimeDelta {}>", self.duration)
    }
}

// ── Operators ───────────────────────────────────────────────────────────────
//
// `delta + t` and `t + delta` are the same forward walk; `delta - t` and
// `t - delta` are the same backward walk.

impl<Tz: TimeZone, R: RuleProvider + ?Sized> Add<DateTime<Tz>> for BusinessTimeDelta<'_, R> {
    type Output = DateTime<FixedOffset>;

    fn add(self, rhs: DateTime<Tz>) -> Self::Output {
        self.add_to(rhs)
    }
}

impl<Tz: TimeZone, R: RuleProvider + ?Sized> Add<BusinessTimeDelta<'_, R>> for DateTime<Tz> {
    type Output = DateTime<FixedOffset>;

    fn add(self, rhs: BusinessTimeDelta<'_, R>) -> Self::Output {
        rhs.add_to(self)
    }
}

impl<Tz: TimeZone, R: RuleProvider + ?Sized> Sub<DateTime<Tz>> for BusinessTimeDelta<'_, R> {
    type Output = DateTime<FixedOffset>;

    fn sub(self, rhs: DateTime<Tz>) -> Self::Output {
        self.subtract_from(rhs)
    }
}

impl<Tz: TimeZone, R: RuleProvider + ?Sized> Sub<BusinessTimeDelta<'_, R>> for DateTime<Tz> {
    type Output = DateTime<FixedOffset>;

    fn sub(self, rhs: BusinessTimeDelta<'_, R>) -> Self::Output {
        rhs.subtract_from(self)
    }
}

impl<R: RuleProvider + ?Sized> Add<NaiveDateTime> for BusinessTimeDelta<'_, R> {
    type Output = DateTime<FixedOffset>;

    fn add(self, rhs: NaiveDateTime) -> Self::Output {
        self.add_to(rhs)
    }
}

impl<R: RuleProvider + ?Sized> Add<BusinessTimeDelta<'_, R>> for NaiveDateTime {
    type Output = DateTime<FixedOffset>;

    fn add(self, rhs: BusinessTimeDelta<'_, R>) -> Self::Output {
        rhs.add_to(self)
    }
}

impl<R: RuleProvider + ?Sized> Sub<NaiveDateTime> for BusinessTimeDelta<'_, R> {
    type Output = DateTime<FixedOffset>;

    fn sub(self, rhs: NaiveDateTime) -> Self::Output {
        self.subtract_from(rhs)
    }
}

impl<R: RuleProvider + ?Sized> Sub<BusinessTimeDelta<'_, R>> for NaiveDateTime {
    type Output = DateTime<FixedOffset>;

    fn sub(self, rhs: BusinessTimeDelta<'_, R>) -> Self::Output {
        rhs.subtract_from(self)
    }
}
