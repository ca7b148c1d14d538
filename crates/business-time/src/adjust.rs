//! String-level entry points.
//!
//! These wrap the engine for callers that hold timestamps and durations as
//! text (request payloads, config files, tool calls). Inputs are parsed
//! strictly and every failure is a [`BusinessTimeError`]; nothing here
//! panics on out-of-range results.
//!
//! # Functions
//!
//! - [`parse_timestamp`] — RFC 3339 or naive ISO 8601 (read as UTC)
//! - [`adjust_business_time`] — Add or subtract business time from a timestamp
//! - [`compute_business_duration`] — Business time between two timestamps

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::delta::BusinessTimeDelta;
use crate::difference::business_time_between;
use crate::duration::BusinessDuration;
use crate::error::BusinessTimeError;
use crate::normalize::normalize;
use crate::options::WalkOptions;
use crate::rule::RuleProvider;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

// ── adjust_business_time ────────────────────────────────────────────────────

/// The result of moving a timestamp by a business duration.
#[derive(Debug, Clone, Serialize)]
pub struct AdjustedBusinessTimestamp {
    /// The original datetime (echoed back).
    pub original: String,
    /// The adjusted datetime in UTC (RFC 3339).
    pub adjusted_utc: String,
    /// The adjusted datetime in the requested timezone (RFC 3339 with offset).
    pub adjusted_local: String,
    /// The normalized adjustment applied (e.g., "+10h30m").
    pub adjustment_applied: String,
    /// Business seconds moved, signed by direction.
    pub business_seconds: i64,
}

/// Add or subtract business time from a timestamp.
///
/// # Arguments
///
/// * `rule` — The rule provider defining active periods
/// * `datetime` — RFC 3339, or naive ISO 8601 interpreted as UTC
/// * `adjustment` — A signed duration string (e.g., `"+10h"`, `"-1h30m"`);
///   `+` walks forward through active periods, `-` walks backward
/// * `timezone` — An IANA timezone name used to render `adjusted_local`
/// * `options` — Walk options (period cap)
///
/// # Errors
///
/// Returns [`BusinessTimeError::InvalidDatetime`],
/// [`BusinessTimeError::InvalidTimezone`] or
/// [`BusinessTimeError::InvalidDuration`] for unparseable input, and
/// propagates walk errors from
/// [`BusinessTimeDelta::add_to_with_options`].
pub fn adjust_business_time<R: RuleProvider + ?Sized>(
    rule: &R,
    datetime: &str,
    adjustment: &str,
    timezone: &str,
    options: &WalkOptions,
) -> Result<AdjustedBusinessTimestamp, BusinessTimeError> {
    let dt = parse_timestamp(datetime)?;
    let tz = parse_timezone(timezone)?;

    let trimmed = adjustment.trim();
    let (backward, magnitude) = match trimmed.as_bytes().first() {
        Some(b'+') => (false, &trimmed[1..]),
        Some(b'-') => (true, &trimmed[1..]),
        _ => {
            return Err(BusinessTimeError::InvalidDuration(format!(
                "adjustment must start with '+' or '-': '{trimmed}'"
            )));
        }
    };
    if magnitude.starts_with(['+', '-']) {
        return Err(BusinessTimeError::InvalidDuration(format!(
            "adjustment has more than one sign: '{trimmed}'"
        )));
    }
    let duration: BusinessDuration = magnitude.parse()?;

    let delta = BusinessTimeDelta::from_duration(rule, duration);
    let adjusted = if backward {
        delta.subtract_from_with_options(dt, options)?
    } else {
        delta.add_to_with_options(dt, options)?
    };

    let sign = if backward { "-" } else { "+" };
    let business_seconds = if backward {
        -duration.num_seconds()
    } else {
        duration.num_seconds()
    };

    Ok(AdjustedBusinessTimestamp {
        original: datetime.to_string(),
        adjusted_utc: adjusted.with_timezone(&Utc).to_rfc3339(),
        adjusted_local: adjusted.with_timezone(&tz).to_rfc3339(),
        adjustment_applied: format!("{sign}{}", duration.compact()),
        business_seconds,
    })
}

// ── compute_business_duration ───────────────────────────────────────────────

/// Business time between two timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessDurationInfo {
    /// Total business seconds (negative if end is before start).
    pub total_seconds: i64,
    /// Whole hours of the absolute duration.
    pub hours: i64,
    /// Minutes component (0-59).
    pub minutes: i64,
    /// Seconds component (0-59).
    pub seconds: i64,
    /// Human-readable representation (e.g., "10 hours, 30 minutes").
    pub human_readable: String,
}

/// Compute the business time between two timestamps.
///
/// Business durations are not decomposed into days: a "day" of business
/// time depends entirely on the rule provider, so hours are the largest unit.
///
/// # Errors
///
/// Returns [`BusinessTimeError::InvalidDatetime`] if either datetime string
/// cannot be parsed.
pub fn compute_business_duration<R: RuleProvider + ?Sized>(
    rule: &R,
    start: &str,
    end: &str,
) -> Result<BusinessDurationInfo, BusinessTimeError> {
    let start_dt = parse_timestamp(start)?;
    let end_dt = parse_timestamp(end)?;

    let total_seconds = business_time_between(rule, start_dt, end_dt).num_seconds();
    let abs_seconds = total_seconds.unsigned_abs();

    let hours = (abs_seconds / 3600) as i64;
    let remainder = abs_seconds % 3600;
    let minutes = (remainder / 60) as i64;
    let seconds = (remainder % 60) as i64;

    Ok(BusinessDurationInfo {
        total_seconds,
        hours,
        minutes,
        seconds,
        human_readable: format_human_duration(hours, minutes, seconds),
    })
}

// ── Parsing helpers ─────────────────────────────────────────────────────────

/// Parse a timestamp string.
///
/// RFC 3339 input keeps its offset. Naive ISO 8601 input
/// (`YYYY-MM-DDTHH:MM:SS[.fff]`, `T` or space separated) is read as UTC.
///
/// # Errors
///
/// Returns [`BusinessTimeError::InvalidDatetime`] if neither form matches.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, BusinessTimeError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(normalize)
        .ok_or_else(|| {
            BusinessTimeError::InvalidDatetime(format!(
                "'{s}': expected RFC 3339 or YYYY-MM-DDTHH:MM:SS"
            ))
        })
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz, BusinessTimeError> {
    s.parse::<Tz>()
        .map_err(|_| BusinessTimeError::InvalidTimezone(format!("'{}'", s)))
}

/// Format a human-readable duration string.
fn format_human_duration(hours: i64, minutes: i64, seconds: i64) -> String {
    fn unit(n: i64, name: &str) -> String {
        format!("{} {}{}", n, name, if n == 1 { "" } else { "s" })
    }

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(unit(minutes, "minute"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(unit(seconds, "second"));
    }
    parts.join(", ")
}

// ── Tests ───────────────────────────────────────────────────────────────────
