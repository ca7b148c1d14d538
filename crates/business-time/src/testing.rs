//! Rule providers used by the unit tests.

use std::cell::Cell;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::rule::{Period, RuleProvider};

pub fn utc(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

pub fn naive(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn at_utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    naive.and_utc().fixed_offset()
}

/// One active window per day, in UTC.
#[derive(Debug, Clone)]
pub struct DailyHours {
    open: NaiveTime,
    close: NaiveTime,
    weekdays_only: bool,
}

impl DailyHours {
    pub fn nine_to_five() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            weekdays_only: false,
        }
    }

    pub fn weekdays_nine_to_five() -> Self {
        Self {
            weekdays_only: true,
            ..Self::nine_to_five()
        }
    }

    fn is_working_day(&self, day: NaiveDate) -> bool {
        !self.weekdays_only || !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl RuleProvider for DailyHours {
    fn next_period(&self, at: DateTime<FixedOffset>) -> Period {
        let t = at.naive_utc();
        let mut day = t.date();
        loop {
            if self.is_working_day(day) {
                let open = day.and_time(self.open);
                let close = day.and_time(self.close);
                if t < open {
                    return Period::new(at_utc(open), at_utc(close));
                }
                if t < close {
                    return Period::new(at_utc(t), at_utc(close));
                }
            }
            day = day.succ_opt().unwrap();
        }
    }

    fn previous_period(&self, at: DateTime<FixedOffset>) -> Period {
        let t = at.naive_utc();
        let mut day = t.date();
        loop {
            if self.is_working_day(day) {
                let open = day.and_time(self.open);
                let close = day.and_time(self.close);
                if t > close {
                    return Period::new(at_utc(open), at_utc(close));
                }
                if t > open {
                    return Period::new(at_utc(open), at_utc(t));
                }
            }
            day = day.pred_opt().unwrap();
        }
    }
}

/// Returns a zero-length period at the cursor forever.
pub struct Stuck;

impl RuleProvider for Stuck {
    fn next_period(&self, at: DateTime<FixedOffset>) -> Period {
        Period::new(at, at)
    }

    fn previous_period(&self, at: DateTime<FixedOffset>) -> Period {
        Period::new(at, at)
    }
}

/// Replays a fixed list of periods in order, ignoring the cursor, and counts
/// how many were handed out.
pub struct Scripted {
    periods: Vec<Period>,
    served: Cell<usize>,
}

impl Scripted {
    pub fn new(periods: Vec<Period>) -> Self {
        Self {
            periods,
            served: Cell::new(0),
        }
    }

    pub fn served(&self) -> usize {
        self.served.get()
    }

    fn serve(&self) -> Period {
        let i = self.served.get();
        self.served.set(i + 1);
        self.periods[i]
    }
}

impl RuleProvider for Scripted {
    fn next_period(&self, _at: DateTime<FixedOffset>) -> Period {
        self.serve()
    }

    fn previous_period(&self, _at: DateTime<FixedOffset>) -> Period {
        self.serve()
    }
}
