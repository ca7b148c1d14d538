//! The rule-provider contract.
//!
//! This crate never decides which hours count as business hours. A
//! [`RuleProvider`] answers that question one period at a time, and the walks
//! in [`crate::delta`] only add up the lengths of what it returns.

use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::Serialize;

/// An active period `[start, end)` during which business time accrues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl Period {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end }
    }

    /// Wall-clock length of the period. Negative if the provider returned
    /// `end < start`.
    pub fn length(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Source of active periods adjacent to a timestamp.
///
/// # Contract
///
/// - `next_period(at)` returns the active period beginning at-or-after `at`.
///   If `at` falls inside an active period, the returned period starts at
///   `at` and runs to that period's end.
/// - `previous_period(at)` returns the active period ending at-or-before
///   `at`, clipped to end at `at` when `at` is inside one.
/// - Every returned period satisfies `end >= start`.
/// - Feeding `next_period(..).end` back into `next_period` makes
///   non-decreasing progress, and feeding `previous_period(..).start` back
///   into `previous_period` makes non-increasing progress, so that a walk
///   eventually accumulates any finite duration.
///
/// None of this is checked. A provider that breaks the contract produces
/// meaningless results, or a walk that never returns.
pub trait RuleProvider {
    /// The active period at-or-after `at`.
    fn next_period(&self, at: DateTime<FixedOffset>) -> Period;

    /// The active period at-or-before `at`.
    fn previous_period(&self, at: DateTime<FixedOffset>) -> Period;
}

impl<R: RuleProvider + ?Sized> RuleProvider for &R {
    fn next_period(&self, at: DateTime<FixedOffset>) -> Period {
        (**self).next_period(at)
    }

    fn previous_period(&self, at: DateTime<FixedOffset>) -> Period {
        (**self).previous_period(at)
    }
}

impl<R: RuleProvider + ?Sized> RuleProvider for Box<R> {
    fn next_period(&self, at: DateTime<FixedOffset>) -> Period {
        (**self).next_period(at)
    }

    fn previous_period(&self, at: DateTime<FixedOffset>) -> Period {
        (**self).previous_period(at)
    }
}

impl<R: RuleProvider + ?Sized> RuleProvider for Rc<R> {
    fn next_period(&self, at: DateTime<FixedOffset>) -> Period {
        (**self).next_period(at)
    }

    fn previous_period(&self, at: DateTime<FixedOffset>) -> Period {
        (**self).previous_period(at)
    }
}

impl<R: RuleProvider + ?Sized> RuleProvider for Arc<R> {
    fn next_period(&self, at: DateTime<FixedOffset>) -> Period {
        (**self).next_period(at)
    }

    fn previous_period(&self, at: DateTime<FixedOffset>) -> Period {
        (**self).previous_period(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{utc, DailyHours};

    #[test]
    fn test_period_length() {
        let p = Period::new(utc("2024-01-01T09:00:00Z"), utc("2024-01-01T17:00:00Z"));
        assert_eq!(p.length(), TimeDelta::hours(8));
    }

    #[test]
    fn test_period_length_negative_when_reversed() {
        let p = Period::new(utc("2024-01-01T17:00:00Z"), utc("2024-01-01T09:00:00Z"));
        assert_eq!(p.length(), TimeDelta::hours(-8));
    }

    #[test]
    fn test_period_length_across_offsets() {
        // 09:00+01:00 is 08:00Z
        let p = Period::new(utc("2024-01-01T09:00:00+01:00"), utc("2024-01-01T09:00:00Z"));
        assert_eq!(p.length(), TimeDelta::hours(1));
    }

    #[test]
    fn test_boxed_and_shared_providers_delegate() {
        let at = utc("2024-01-01T10:00:00Z");
        let direct = DailyHours::nine_to_five().next_period(at);

        let boxed: Box<dyn RuleProvider> = Box::new(DailyHours::nine_to_five());
        assert_eq!(boxed.next_period(at), direct);

        let shared = Arc::new(DailyHours::nine_to_five());
        assert_eq!(shared.next_period(at), direct);
        assert_eq!(
            shared.previous_period(at),
            DailyHours::nine_to_five().previous_period(at)
        );

        let rc = Rc::new(DailyHours::nine_to_five());
        assert_eq!(rc.next_period(at), direct);
    }
}
