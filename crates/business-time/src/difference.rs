//! Business time elapsed between two timestamps.

use chrono::TimeDelta;
use tracing::trace;

use crate::duration::BusinessDuration;
use crate::normalize::{normalize, Timestamp};
use crate::rule::RuleProvider;

/// Sum of the active time `rule` reports between `from` and `to`.
///
/// Negative when `to` is before `from`. For any `t` strictly inside an
/// active period and a non-negative `d`,
/// `business_time_between(rule, t, BusinessTimeDelta::from_duration(rule, d).add_to(t)) == d`.
///
/// Only `next_period` is consulted, so the same progress requirement as a
/// forward walk applies.
pub fn business_time_between<R: RuleProvider + ?Sized>(
    rule: &R,
    from: impl Into<Timestamp>,
    to: impl Into<Timestamp>,
) -> BusinessDuration {
    let from = normalize(from);
    let to = normalize(to);
    if from > to {
        return -business_time_between(rule, to, from);
    }

    let mut total = TimeDelta::zero();
    let mut cursor = from;
    loop {
        let period = rule.next_period(cursor);
        if period.start >= to {
            break;
        }
        let end = period.end.min(to);
        trace!(start = %period.start, end = %end, "counting period");
        total = total + (end - period.start);
        if period.end >= to {
            break;
        }
        cursor = period.end;
    }
    BusinessDuration::from(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::BusinessTimeDelta;
    use crate::testing::{naive, utc, DailyHours};

    #[test]
    fn test_within_one_period() {
        let rule = DailyHours::nine_to_five();
        let d = business_time_between(
            &rule,
            utc("2024-01-01T10:00:00Z"),
            utc("2024-01-01T12:30:00Z"),
        );
        assert_eq!(d, BusinessDuration::new(2, 1800));
    }

    #[test]
    fn test_across_nights() {
        let rule = DailyHours::nine_to_five();
        let d = business_time_between(
            &rule,
            utc("2024-01-01T08:00:00Z"),
            utc("2024-01-03T10:00:00Z"),
        );
        assert_eq!(d, BusinessDuration::from_hours(17));
    }

    #[test]
    fn test_weekend_counts_nothing() {
        // Saturday through Sunday
        let rule = DailyHours::weekdays_nine_to_five();
        let d = business_time_between(
            &rule,
            utc("2024-01-06T00:00:00Z"),
            utc("2024-01-07T23:59:59Z"),
        );
        assert!(d.is_zero());
    }

    #[test]
    fn test_reversed_is_negative() {
        let rule = DailyHours::nine_to_five();
        let a = utc("2024-01-01T10:00:00Z");
        let b = utc("2024-01-02T10:00:00Z");
        assert_eq!(
            business_time_between(&rule, b, a),
            -business_time_between(&rule, a, b)
        );
        assert_eq!(business_time_between(&rule, b, a), BusinessDuration::from_hours(-8));
    }

    #[test]
    fn test_same_instant_is_zero() {
        let rule = DailyHours::nine_to_five();
        let t = utc("2024-01-01T10:00:00Z");
        assert!(business_time_between(&rule, t, t).is_zero());
    }

    #[test]
    fn test_naive_inputs() {
        let rule = DailyHours::nine_to_five();
        let d = business_time_between(
            &rule,
            naive("2024-01-01T09:00:00"),
            utc("2024-01-01T17:00:00Z"),
        );
        assert_eq!(d, BusinessDuration::from_hours(8));
    }

    #[test]
    fn test_inverts_forward_walk() {
        let rule = DailyHours::weekdays_nine_to_five();
        let t = utc("2024-01-04T11:17:00Z");
        let d = BusinessDuration::new(29, 42);
        let arrival = BusinessTimeDelta::from_duration(&rule, d).add_to(t);
        assert_eq!(business_time_between(&rule, t, arrival), d);
    }
}
