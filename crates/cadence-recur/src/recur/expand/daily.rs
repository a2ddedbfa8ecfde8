//! Daily recurrence generator.

use cadence_core::calendar;
use chrono::NaiveDateTime;

use super::{Cutoff, nonzero_interval};
use crate::error::RecurResult;

/// ## Summary
/// Produces `count` occurrences starting at `start`, stepping `interval`
/// days between them.
///
/// The first occurrence is always `start` itself.
///
/// ## Errors
/// Fails with [`crate::RecurError::InvalidInterval`] or
/// [`crate::RecurError::InvalidCount`] when either argument is zero.
#[tracing::instrument]
pub fn generate_daily(
    start: NaiveDateTime,
    interval: u32,
    count: u32,
) -> RecurResult<DailyOccurrences> {
    Ok(DailyOccurrences::new(
        start,
        nonzero_interval(interval)?,
        Cutoff::count(count)?,
    ))
}

/// ## Summary
/// Produces occurrences starting at `start`, stepping `interval` days,
/// for as long as the occurrence date is on or before `end_date`'s date.
///
/// `start` is emitted unconditionally; the bound applies to the stepped
/// occurrences and ignores `end_date`'s time-of-day.
///
/// ## Errors
/// Fails with [`crate::RecurError::InvalidInterval`] when `interval` is
/// zero.
#[tracing::instrument]
pub fn generate_daily_until(
    start: NaiveDateTime,
    interval: u32,
    end_date: NaiveDateTime,
) -> RecurResult<DailyOccurrences> {
    Ok(DailyOccurrences::new(
        start,
        nonzero_interval(interval)?,
        Cutoff::until(end_date),
    ))
}

/// Lazy sequence of daily occurrences.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DailyOccurrences {
    current: NaiveDateTime,
    step_days: u64,
    cutoff: Cutoff,
    started: bool,
    done: bool,
}

impl DailyOccurrences {
    fn new(start: NaiveDateTime, interval: u32, cutoff: Cutoff) -> Self {
        Self {
            current: start,
            step_days: u64::from(interval),
            cutoff,
            started: false,
            done: false,
        }
    }
}

impl Iterator for DailyOccurrences {
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
        let next = match calendar::step_days(self.current, self.step_days) {
            Ok(next) => next,
            Err(err) => {
                self.done = true;
                return Some(Err(err.into()));
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

impl std::iter::FusedIterator for DailyOccurrences {}
