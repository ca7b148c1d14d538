//! The business-duration value type.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::BusinessTimeError;

const SECONDS_PER_HOUR: i64 = 3600;

/// An amount of elapsed time counted only inside active periods.
///
/// Equality and ordering compare total elapsed time, so `1h + 3600s` equals
/// `2h`. The hours/seconds split exists only for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BusinessDuration(TimeDelta);

impl BusinessDuration {
    /// `hours * 3600 + seconds`.
    ///
    /// # Panics
    ///
    /// Panics if the total is outside the range chrono can represent.
    pub fn new(hours: i64, seconds: i64) -> Self {
        Self(TimeDelta::hours(hours) + TimeDelta::seconds(seconds))
    }

    pub fn from_hours(hours: i64) -> Self {
        Self::new(hours, 0)
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self::new(0, seconds)
    }

    pub fn zero() -> Self {
        Self(TimeDelta::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn as_time_delta(&self) -> TimeDelta {
        self.0
    }

    /// Total whole seconds, rounded toward negative infinity.
    pub fn num_seconds(&self) -> i64 {
        let secs = self.0.num_seconds();
        if self.0.subsec_nanos() < 0 {
            secs - 1
        } else {
            secs
        }
    }

    /// `floor(total_seconds / 3600)`.
    pub fn hours(&self) -> i64 {
        self.num_seconds().div_euclid(SECONDS_PER_HOUR)
    }

    /// `total_seconds mod 3600`, always in `0..3600`.
    pub fn seconds(&self) -> i64 {
        self.num_seconds().rem_euclid(SECONDS_PER_HOUR)
    }

    /// Compact rendering such as `"2h30m15s"`, prefixed with
    /// `-` when negative. Sub-second precision is dropped.
    pub fn compact(&self) -> String {
        let total = self.num_seconds();
        let abs = total.unsigned_abs();
        let hours = abs / 3600;
        let minutes = (abs % 3600) / 60;
        let seconds = abs % 60;

        let mut out = String::new();
        if total < 0 {
            out.push('-');
        }
        if hours != 0 {
            out.push_str(&format!("{hours}h"));
        }
        if minutes != 0 {
            out.push_str(&format!("{minutes}m"));
        }
        if seconds != 0 || abs == 0 {
            out.push_str(&format!("{seconds}s"));
        }
        out
    }
}

impl From<TimeDelta> for BusinessDuration {
    fn from(delta: TimeDelta) -> Self {
        Self(delta)
    }
}

impl From<BusinessDuration> for TimeDelta {
    fn from(duration: BusinessDuration) -> Self {
        duration.0
    }
}

impl Neg for BusinessDuration {
    type Output = BusinessDuration;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl fmt::Display for BusinessDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours {} seconds", self.hours(), self.seconds())
    }
}

/// Parse a compact duration (e.g. `"8h"`, `"-1h30m"`, `"+2d"`, `"3600s"`).
///
/// An optional leading sign is followed by one or more `<number><unit>`
/// components. Units are `w` (7 × 24h), `d` (24h), `h`, `m` and `s`,
/// case-insensitive. Days and weeks are plain elapsed time, not calendar
/// days: `1d` is 24 hours of business time.
impl FromStr for BusinessDuration {
    type Err = BusinessTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BusinessTimeError::InvalidDuration(
                "empty duration".to_string(),
            ));
        }

        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1i64, &s[1..]),
            Some(b'-') => (-1i64, &s[1..]),
            _ => (1i64, s),
        };

        if rest.is_empty() {
            return Err(BusinessTimeError::InvalidDuration(format!(
                "duration has no components: '{s}'"
            )));
        }

        let overflow = || BusinessTimeError::InvalidDuration(format!("'{s}' is out of range"));

        let mut total: i64 = 0;
        let mut num_buf = String::new();

        for ch in rest.chars() {
            if ch.is_ascii_digit() {
                num_buf.push(ch);
                continue;
            }
            if num_buf.is_empty() {
                return Err(BusinessTimeError::InvalidDuration(format!(
                    "expected number before '{ch}' in '{s}'"
                )));
            }
            let n: i64 = num_buf
                .parse()
                .map_err(|_| BusinessTimeError::InvalidDuration(format!("invalid number in '{s}'")))?;
            num_buf.clear();

            let unit_seconds = match ch.to_ascii_lowercase() {
                'w' => 7 * 24 * SECONDS_PER_HOUR,
                'd' => 24 * SECONDS_PER_HOUR,
                'h' => SECONDS_PER_HOUR,
                'm' => 60,
                's' => 1,
                _ => {
                    return Err(BusinessTimeError::InvalidDuration(format!(
                        "unknown unit '{ch}' in '{s}'"
                    )));
                }
            };
            total = n
                .checked_mul(unit_seconds)
                .and_then(|secs| total.checked_add(secs))
                .ok_or_else(overflow)?;
        }

        // Trailing number without unit
        if !num_buf.is_empty() {
            return Err(BusinessTimeError::InvalidDuration(format!(
                "number without unit at end of '{s}'"
            )));
        }

        TimeDelta::try_seconds(sign * total)
            .map(Self)
            .ok_or_else(overflow)
    }
}
