#![allow(dead_code)]

use business_time::{Period, RuleProvider};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

pub fn utc(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn at_utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    naive.and_utc().fixed_offset()
}

/// One active window per day in UTC, optionally weekdays only.
#[derive(Debug, Clone)]
pub struct DailyHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
    pub weekdays_only: bool,
}

impl DailyHours {
    pub fn new(open_hour: u32, close_hour: u32, weekdays_only: bool) -> Self {
        Self {
            open: NaiveTime::from_hms_opt(open_hour, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(close_hour, 0, 0).unwrap(),
            weekdays_only,
        }
    }

    pub fn nine_to_five() -> Self {
        Self::new(9, 17, false)
    }

    pub fn office() -> Self {
        Self::new(9, 17, true)
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
