//! Monthly recurrence anchored to the start's ordinal weekday.

use cadence_core::calendar;
use cadence_core::error::CoreError;
use chrono::{Datelike, NaiveDateTime, Weekday};

use super::{Cutoff, nonzero_interval};
use crate::error::RecurResult;

/// ## Summary
/// Produces `count` occurrences on the same ordinal weekday as `start`,
/// stepping `interval` months between them.
///
/// A start on the 2nd Tuesday of its month recurs on the 2nd Tuesday of
/// every stepped month. When the stepped month has one fewer occurrence
/// of that weekday than the ordinal asks for (a "5th Monday" in a
/// four-Monday month), the ordinal degrades by one for that step only;
/// the original ordinal is re-applied on every later step. Time-of-day
/// is carried from `start`.
///
/// ## Errors
/// Fails with [`crate::RecurError::InvalidInterval`] or
/// [`crate::RecurError::InvalidCount`] when either argument is zero.
#[tracing::instrument]
pub fn generate_monthly_by_weekday(
    start: NaiveDateTime,
    interval: u32,
    count: u32,
) -> RecurResult<MonthlyByWeekdayOccurrences> {
    Ok(MonthlyByWeekdayOccurrences::new(
        start,
        nonzero_interval(interval)?,
        Cutoff::count(count)?,
    ))
}

/// ## Summary
/// Produces occurrences on the same ordinal weekday as `start`, stepping
/// `interval` months, for as long as the occurrence date is on or before
/// `end_date`'s date.
///
/// `start` is emitted unconditionally; ordinal degradation behaves as
/// described on [`generate_monthly_by_weekday`].
///
/// ## Errors
/// Fails with [`crate::RecurError::InvalidInterval`] when `interval` is
/// zero.
#[tracing::instrument]
pub fn generate_monthly_by_weekday_until(
    start: NaiveDateTime,
    interval: u32,
    end_date: NaiveDateTime,
) -> RecurResult<MonthlyByWeekdayOccurrences> {
    Ok(MonthlyByWeekdayOccurrences::new(
        start,
        nonzero_interval(interval)?,
        Cutoff::until(end_date),
    ))
}

/// Lazy sequence of ordinal-weekday anchored monthly occurrences.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct MonthlyByWeekdayOccurrences {
    current: NaiveDateTime,
    step_months: u32,
    weekday: Weekday,
    ordinal: u32,
    cutoff: Cutoff,
    started: bool,
    done: bool,
}

impl MonthlyByWeekdayOccurrences {
    fn new(start: NaiveDateTime, interval: u32, cutoff: Cutoff) -> Self {
        Self {
            current: start,
            step_months: interval,
            weekday: start.weekday(),
            ordinal: calendar::weekday_ordinal(start.date()),
            cutoff,
            started: false,
            done: false,
        }
    }

    /// One month step: advance, census the new month's weekday, resolve
    /// the (possibly degraded) ordinal back to a date.
    fn advance(&self) -> RecurResult<NaiveDateTime> {
        let stepped = calendar::step_months(self.current, self.step_months)?;
        let (year, month) = (stepped.year(), stepped.month());
        let max = calendar::weekday_ordinal_max(year, month, self.weekday).ok_or(
            CoreError::InvariantViolation("a reachable month must have a weekday census"),
        )?;
        let effective = if max < self.ordinal {
            self.ordinal - 1
        } else {
            self.ordinal
        };
        let resolved = calendar::nth_weekday_of_month(year, month, self.weekday, effective)
            .ok_or(CoreError::InvariantViolation(
                "degraded weekday ordinal absent from stepped month",
            ))?;
        Ok(resolved.and_time(stepped.time()))
    }
}

impl Iterator for MonthlyByWeekdayOccurrences {
    type Item = RecurResult<NaiveDateTime>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            self.cutoff.claim_start();
            return Some(Ok(self.current));
        }
        if self.cutoff.exhausted() {
            self.done = true;
            return None;
        }
        let next = match self.advance() {
            Ok(next) => next,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };
        if self.cutoff.admit(next.date()) {
            self.current = next;
            Some(Ok(next))
        } else {
            self.done = true;
            None
        }
    }
}

impl std::iter::FusedIterator for MonthlyByWeekdayOccurrences {}
