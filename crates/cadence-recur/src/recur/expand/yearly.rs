//! Yearly recurrence generator.

use cadence_core::calendar;
use cadence_core::error::CoreError;
use chrono::NaiveDateTime;

use super::{Cutoff, nonzero_interval};
use crate::error::RecurResult;

/// ## Summary
/// Produces `count` occurrences starting at `start`, stepping `interval`
/// years between them.
///
/// A start on Feb 29 clamps to Feb 28 in non-leap target years; the
/// original Feb 29 anchor is kept, so leap target years land on Feb 29
/// again.
///
/// ## Errors
/// Fails with [`crate::RecurError::InvalidInterval`] or
/// [`crate::RecurError::InvalidCount`] when either argument is zero, and
/// with [`crate::RecurError::CalendarOverflow`] when `interval` exceeds
/// the representable month span.
#[tracing::instrument]
pub fn generate_yearly(
    start: NaiveDateTime,
    interval: u32,
    count: u32,
) -> RecurResult<YearlyOccurrences> {
    Ok(YearlyOccurrences::new(
        start,
        months_per_step(interval)?,
        Cutoff::count(count)?,
    ))
}

/// ## Summary
/// Produces occurrences starting at `start`, stepping `interval` years,
/// for as long as the occurrence date is on or before `end_date`'s date.
///
/// `start` is emitted unconditionally; Feb 29 starts clamp as described
/// on [`generate_yearly`].
///
/// ## Errors
/// Fails with [`crate::RecurError::InvalidInterval`] when `interval` is
/// zero, and with [`crate::RecurError::CalendarOverflow`] when `interval`
/// exceeds the representable month span.
#[tracing::instrument]
pub fn generate_yearly_until(
    start: NaiveDateTime,
    interval: u32,
    end_date: NaiveDateTime,
) -> RecurResult<YearlyOccurrences> {
    Ok(YearlyOccurrences::new(
        start,
        months_per_step(interval)?,
        Cutoff::until(end_date),
    ))
}

/// Year steps are carried out in months so short-month clamping applies.
fn months_per_step(interval: u32) -> RecurResult<u32> {
    nonzero_interval(interval)?
        .checked_mul(12)
        .ok_or_else(|| {
            CoreError::DateOutOfRange(format!("{interval} years exceeds the month span")).into()
        })
}

/// Lazy sequence of yearly occurrences.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct YearlyOccurrences {
    current: NaiveDateTime,
    step_months: u32,
    cutoff: Cutoff,
    started: bool,
    done: bool,
}

impl YearlyOccurrences {
    fn new(start: NaiveDateTime, step_months: u32, cutoff: Cutoff) -> Self {
        Self {
            current: start,
            step_months,
            cutoff,
            started: false,
            done: false,
        }
    }
}

impl Iterator for YearlyOccurrences {
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
        let next = match calendar::step_months(self.current, self.step_months) {
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

impl std::iter::FusedIterator for YearlyOccurrences {}
