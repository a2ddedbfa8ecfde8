//! Proleptic Gregorian month and weekday helpers.
//!
//! Everything here is a pure function over chrono's naive (zone-free)
//! date types. Month lengths and leap years are delegated to chrono;
//! this module only adds the anchoring and ordinal-weekday queries the
//! recurrence generators need on every step.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Weekday};

use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Resolves `day` to the nearest valid date within the given month.
///
/// A requested day beyond the month's length clamps downward to the last
/// valid day (e.g. day 31 in April resolves to April 30); day 0 resolves
/// to day 1. The probe is a bounded downward loop, never recursion.
///
/// Returns `None` when `month` is not a valid month number or `year` is
/// outside chrono's supported range.
#[must_use]
pub fn month_anchor(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let mut day = day.max(1);
    loop {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
        if day == 1 {
            return None;
        }
        day -= 1;
    }
}

/// Last calendar day of the given month.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    month_anchor(year, month, 31)
}

/// Number of days in the given month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    last_day_of_month(year, month).map(|date| date.day())
}

/// ## Summary
/// Ordinal occurrence of `date`'s weekday within its month.
///
/// The first seven days of a month hold the first occurrence of every
/// weekday, the next seven the second, and so on; 2023-01-30 is the 5th
/// Monday of its month, so its ordinal is 5.
#[must_use]
pub fn weekday_ordinal(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// ## Summary
/// Highest ordinal the given month offers for `weekday`.
///
/// Every month holds each weekday at least four times and at most five.
/// Returns `None` when the month itself is invalid.
#[must_use]
pub fn weekday_ordinal_max(year: i32, month: u32, weekday: Weekday) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = days_until_weekday(first.weekday(), weekday);
    let days = days_in_month(year, month)?;
    Some((days - 1 - offset) / 7 + 1)
}

/// ## Summary
/// Date of the `ordinal`-th occurrence of `weekday` in the given month.
///
/// Returns `None` when the month has no such occurrence (a valid ordinal
/// is between 1 and 5, and a 5th occurrence exists only in long months).
#[must_use]
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    ordinal: u32,
) -> Option<NaiveDate> {
    if !(1..=5).contains(&ordinal) {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = days_until_weekday(first.weekday(), weekday);
    NaiveDate::from_ymd_opt(year, month, 1 + offset + 7 * (ordinal - 1))
}

/// ## Summary
/// Advances a date-time by whole days, preserving the time-of-day.
///
/// ## Errors
/// Fails with [`CoreError::DateOutOfRange`] when the result exceeds
/// chrono's supported date range.
pub fn step_days(at: NaiveDateTime, days: u64) -> CoreResult<NaiveDateTime> {
    at.checked_add_days(Days::new(days))
        .ok_or_else(|| CoreError::DateOutOfRange(format!("{at} + {days} days")))
}

/// ## Summary
/// Advances a date-time by whole months, preserving the time-of-day.
///
/// Month arithmetic carries year overflow and clamps the day-of-month
/// into shorter target months (Jan 31 + 1 month is Feb 28 or Feb 29).
///
/// ## Errors
/// Fails with [`CoreError::DateOutOfRange`] when the result exceeds
/// chrono's supported date range.
pub fn step_months(at: NaiveDateTime, months: u32) -> CoreResult<NaiveDateTime> {
    at.checked_add_months(Months::new(months))
        .ok_or_else(|| CoreError::DateOutOfRange(format!("{at} + {months} months")))
}

/// Days from `from` forward to the next `to`, zero when equal.
fn days_until_weekday(from: Weekday, to: Weekday) -> u32 {
    (to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7
}
