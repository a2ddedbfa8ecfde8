//! Weekly recurrence generator.

use cadence_core::error::CoreError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::{Cutoff, nonzero_interval};
use crate::WeekdaySet;
use crate::error::{RecurError, RecurResult};

/// ## Summary
/// Produces `count` occurrences on the given weekdays, in weeks whose
/// index from `start`'s week is a multiple of `interval`.
///
/// The walk runs at day granularity from `start`, with the week boundary
/// on Monday; every emitted occurrence reuses `start`'s time-of-day.
/// Unlike the other generators, `start` itself is emitted only when its
/// weekday is in `weekdays` — the sequence otherwise begins at the first
/// matching day after it.
///
/// ## Errors
/// Fails with [`crate::RecurError::InvalidInterval`] or
/// [`crate::RecurError::InvalidCount`] when either argument is zero, and
/// with [`crate::RecurError::EmptyWeekdaySet`] when `weekdays` is empty.
#[tracing::instrument]
pub fn generate_weekly(
    start: NaiveDateTime,
    interval: u32,
    weekdays: WeekdaySet,
    count: u32,
) -> RecurResult<WeeklyOccurrences> {
    Ok(WeeklyOccurrences::new(
        start,
        nonzero_interval(interval)?,
        nonempty_weekdays(weekdays)?,
        Cutoff::count(count)?,
    ))
}

/// ## Summary
/// Produces occurrences on the given weekdays, in weeks whose index from
/// `start`'s week is a multiple of `interval`, for as long as the walked
/// date is on or before `end_date`'s date.
///
/// The first-element behavior and week accounting match
/// [`generate_weekly`]. The day whose date first exceeds the bound stops
/// the walk without being emitted, even when it would otherwise qualify.
///
/// ## Errors
/// Fails with [`crate::RecurError::InvalidInterval`] when `interval` is
/// zero, and with [`crate::RecurError::EmptyWeekdaySet`] when `weekdays`
/// is empty.
#[tracing::instrument]
pub fn generate_weekly_until(
    start: NaiveDateTime,
    interval: u32,
    weekdays: WeekdaySet,
    end_date: NaiveDateTime,
) -> RecurResult<WeeklyOccurrences> {
    Ok(WeeklyOccurrences::new(
        start,
        nonzero_interval(interval)?,
        nonempty_weekdays(weekdays)?,
        Cutoff::until(end_date),
    ))
}

/// An empty set would make the walk skip forever.
fn nonempty_weekdays(weekdays: WeekdaySet) -> RecurResult<WeekdaySet> {
    if weekdays.is_empty() {
        tracing::warn!("weekly recurrence rejected: no weekdays selected");
        return Err(RecurError::EmptyWeekdaySet);
    }
    Ok(weekdays)
}

/// Lazy sequence of weekly occurrences.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct WeeklyOccurrences {
    cursor: NaiveDate,
    time: NaiveTime,
    weekdays: WeekdaySet,
    interval: u32,
    week: u32,
    cutoff: Cutoff,
    started: bool,
    done: bool,
}

impl WeeklyOccurrences {
    fn new(start: NaiveDateTime, interval: u32, weekdays: WeekdaySet, cutoff: Cutoff) -> Self {
        Self {
            cursor: start.date(),
            time: start.time(),
            weekdays,
            interval,
            week: 0,
            cutoff,
            started: false,
            done: false,
        }
    }
}

impl Iterator for WeeklyOccurrences {
    type Item = RecurResult<NaiveDateTime>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.cutoff.exhausted() {
            self.done = true;
            return None;
        }
        loop {
            let day = if self.started {
                let Some(next) = self.cursor.succ_opt() else {
                    self.done = true;
                    return Some(Err(CoreError::DateOutOfRange(format!(
                        "{} + 1 day",
                        self.cursor
                    ))
                    .into()));
                };
                if next.weekday() == Weekday::Mon {
                    self.week += 1;
                }
                self.cursor = next;
                if let Cutoff::Until { end } = &self.cutoff
                    && next > *end
                {
                    self.done = true;
                    return None;
                }
                next
            } else {
                self.started = true;
                self.cursor
            };
            if self.week % self.interval == 0 && self.weekdays.contains(day.weekday()) {
                if let Cutoff::Count { remaining } = &mut self.cutoff {
                    *remaining -= 1;
                }
                return Some(Ok(day.and_time(self.time)));
            }
        }
    }
}

impl std::iter::FusedIterator for WeeklyOccurrences {}
