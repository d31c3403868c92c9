//! Tenure measurement functionality.
//!
//! This module provides the whole-calendar-month difference used to measure
//! tenure. A month counts once the day-of-month anniversary is reached;
//! when the anniversary does not exist in the target month (a join on the
//! 31st evaluated in February), the last day of that month stands in for it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Tenure expressed in whole months and whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureBreakdown {
    /// Whole calendar months elapsed.
    pub months_worked: u32,
    /// Whole years elapsed (`months_worked / 12`).
    pub years_worked: u32,
}

impl TenureBreakdown {
    /// Months beyond the last completed year, for display such as
    /// "3 years 4 months".
    pub fn remainder_months(&self) -> u32 {
        self.months_worked % 12
    }
}

/// Counts whole calendar months elapsed from `start` to `end`.
///
/// Fractional months truncate: Jan 15 to Feb 14 is 0 whole months, Jan 15
/// to Feb 15 is 1. Dates before `start` yield 0.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::calculation::whole_months_between;
///
/// let join = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
/// let anniversary = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
///
/// assert_eq!(whole_months_between(join, day_before), 0);
/// assert_eq!(whole_months_between(join, anniversary), 1);
/// ```
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;

    // The month is incomplete until the anniversary day, or until the end
    // of the month when the start day does not exist in it.
    if end.day() < start.day() && end.day() < days_in_month(end.year(), end.month()) {
        months -= 1;
    }

    months.max(0) as u32
}

/// Measures tenure between two dates as whole months and whole years.
pub fn tenure_between(start: NaiveDate, end: NaiveDate) -> TenureBreakdown {
    let months_worked = whole_months_between(start, end);
    TenureBreakdown {
        months_worked,
        years_worked: months_worked / 12,
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}
