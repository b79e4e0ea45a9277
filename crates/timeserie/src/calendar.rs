//! Whole-day helpers for building sampling grids. All days are UTC days.

use jiff::civil::{Date, Weekday};
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};

use crate::error::{Result, TimeserieError};

pub const DAY: SignedDuration = SignedDuration::from_hours(24);

/// UTC midnight of the given civil day.
pub fn day_date(year: i16, month: i8, day: i8) -> Result<Timestamp> {
    let date = Date::new(year, month, day)
        .map_err(|e| TimeserieError::invalid_date(year, month, day, e))?;
    midnight(date)
}

/// UTC civil day containing `t`.
pub fn date_of(t: Timestamp) -> Date {
    t.to_zoned(TimeZone::UTC).date()
}

/// `t` truncated to its UTC midnight.
pub fn truncate_to_day(t: Timestamp) -> Result<Timestamp> {
    midnight(date_of(t))
}

/// Every day from `from`'s day (included) that starts strictly before `end`,
/// filtered by `accept`.
pub fn days(from: Timestamp, end: Timestamp, accept: &impl TimeCond) -> Result<Vec<Timestamp>> {
    let mut result = Vec::new();
    let mut date = date_of(from);
    loop {
        let d = midnight(date)?;
        if d >= end {
            return Ok(result);
        }
        if accept.accept(d) {
            result.push(d);
        }
        date = date.tomorrow().map_err(TimeserieError::OutOfRange)?;
    }
}

fn midnight(date: Date) -> Result<Timestamp> {
    date.to_zoned(TimeZone::UTC)
        .map(|z| z.timestamp())
        .map_err(TimeserieError::OutOfRange)
}

/// Predicate over event times.
pub trait TimeCond {
    fn accept(&self, t: Timestamp) -> bool;
}

impl<F: Fn(Timestamp) -> bool> TimeCond for F {
    fn accept(&self, t: Timestamp) -> bool {
        self(t)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EveryDay;

impl TimeCond for EveryDay {
    fn accept(&self, _t: Timestamp) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OnWeekday(pub Weekday);

impl TimeCond for OnWeekday {
    fn accept(&self, t: Timestamp) -> bool {
        date_of(t).weekday() == self.0
    }
}

/// Day of the month, 1-based.
#[derive(Debug, Clone, Copy)]
pub struct OnMonthday(pub i8);

impl TimeCond for OnMonthday {
    fn accept(&self, t: Timestamp) -> bool {
        date_of(t).day() == self.0
    }
}

/// Last day of its month.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndOfMonth;

impl TimeCond for EndOfMonth {
    fn accept(&self, t: Timestamp) -> bool {
        let d = date_of(t);
        d.day() == d.days_in_month()
    }
}

/// First day of a quarter: January, April, July or October 1st.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quarterly;

impl TimeCond for Quarterly {
    fn accept(&self, t: Timestamp) -> bool {
        let d = date_of(t);
        d.day() == 1 && d.month() % 3 == 1
    }
}

/// January 1st.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yearly;

impl TimeCond for Yearly {
    fn accept(&self, t: Timestamp) -> bool {
        let d = date_of(t);
        d.day() == 1 && d.month() == 1
    }
}
