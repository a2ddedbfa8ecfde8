//! Monthly recurrence anchored to the start's calendar day.

use cadence_core::calendar;
use cadence_core::error::CoreError;
use chrono::{Datelike, NaiveDateTime};

use super::{Cutoff, nonzero_interval};
use crate::error::RecurResult;

/// ## Summary
/// Produces `count` occurrences on the same day-of-month as `start`,
/// stepping `interval` months between them.
///
/// The target day is taken from `start` once and re-applied fresh on
/// every step: a month too short for it clamps that occurrence to its
/// last day, but later months long enough return to the original day
/// (Jan 31 → Feb 28 → Mar 31). Time-of-day is carried from `start`.
///
/// ## Errors
/// Fails with [`crate::RecurError::InvalidInterval`] or
/// [`crate::RecurError::InvalidCount`] when either argument is zero.
#[tracing::instrument]
pub fn generate_monthly_by_calendar_day(
    start: NaiveDateTime,
    interval: u32,
    count: u32,
) -> RecurResult<MonthlyByDayOccurrences> {
    Ok(MonthlyByDayOccurrences::new(
        start,
        nonzero_interval(interval)?,
        Cutoff::count(count)?,
    ))
}

/// ## Summary
/// Produces occurrences on the same day-of-month as `start`, stepping
/// `interval` months, for as long as the occurrence date is on or before
/// `end_date`'s date.
///
/// `start` is emitted unconditionally; clamping behaves as described on
/// [`generate_monthly_by_calendar_day`].
///
/// ## Errors
/// Fails with [`crate::RecurError::InvalidInterval`] when `interval` is
/// zero.
#[tracing::instrument]
pub fn generate_monthly_by_calendar_day_until(
    start: NaiveDateTime,
    interval: u32,
    end_date: NaiveDateTime,
) -> RecurResult<MonthlyByDayOccurrences> {
    Ok(MonthlyByDayOccurrences::new(
        start,
        nonzero_interval(interval)?,
        Cutoff::until(end_date),
    ))
}

/// Lazy sequence of day-of-month anchored monthly occurrences.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct MonthlyByDayOccurrences {
    current: NaiveDateTime,
    step_months: u32,
    target_day: u32,
    cutoff: Cutoff,
    started: bool,
    done: bool,
}

impl MonthlyByDayOccurrences {
    fn new(start: NaiveDateTime, interval: u32, cutoff: Cutoff) -> Self {
        Self {
            current: start,
            step_months: interval,
            target_day: start.day(),
            cutoff,
            started: false,
            done: false,
        }
    }

    /// One month step: advance, then re-anchor to the original target day.
    fn advance(&self) -> RecurResult<NaiveDateTime> {
        let stepped = calendar::step_months(self.current, self.step_months)?;
        let anchored = calendar::month_anchor(stepped.year(), stepped.month(), self.target_day)
            .ok_or(CoreError::InvariantViolation(
                "a reachable month must accept a day anchor",
            ))?;
        Ok(anchored.and_time(stepped.time()))
    }
}

impl Iterator for MonthlyByDayOccurrences {
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

impl std::iter::FusedIterator for MonthlyByDayOccurrences {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(14, 15, 0)
            .unwrap()
    }

    #[test]
    fn short_months_clamp_without_shrinking_the_target() {
        let dates: Vec<NaiveDateTime> = generate_monthly_by_calendar_day(at(2023, 1, 31), 1, 3)
            .unwrap()
            .collect::<RecurResult<_>>()
            .unwrap();
        // February clamps to its last day; March returns to the 31st.
        assert_eq!(dates, vec![at(2023, 1, 31), at(2023, 2, 28), at(2023, 3, 31)]);
    }

    #[test]
    fn leap_february_keeps_one_more_day() {
        let dates: Vec<NaiveDateTime> = generate_monthly_by_calendar_day(at(2024, 1, 31), 1, 4)
            .unwrap()
            .collect::<RecurResult<_>>()
            .unwrap();
        assert_eq!(
            dates,
            vec![at(2024, 1, 31), at(2024, 2, 29), at(2024, 3, 31), at(2024, 4, 30)]
        );
    }

    #[test]
    fn mid_month_days_never_clamp() {
        let dates: Vec<NaiveDateTime> = generate_monthly_by_calendar_day(at(2023, 5, 12), 2, 4)
            .unwrap()
            .collect::<RecurResult<_>>()
            .unwrap();
        assert_eq!(
            dates,
            vec![at(2023, 5, 12), at(2023, 7, 12), at(2023, 9, 12), at(2023, 11, 12)]
        );
    }

    #[test]
    fn steps_carry_year_overflow() {
        let dates: Vec<NaiveDateTime> = generate_monthly_by_calendar_day(at(2023, 11, 30), 3, 3)
            .unwrap()
            .collect::<RecurResult<_>>()
            .unwrap();
        assert_eq!(dates, vec![at(2023, 11, 30), at(2024, 2, 29), at(2024, 5, 30)]);
    }

    #[test]
    fn end_date_bound_is_inclusive() {
        let dates: Vec<NaiveDateTime> =
            generate_monthly_by_calendar_day_until(at(2023, 1, 15), 1, at(2023, 4, 15))
                .unwrap()
                .collect::<RecurResult<_>>()
                .unwrap();
        assert_eq!(
            dates,
            vec![at(2023, 1, 15), at(2023, 2, 15), at(2023, 3, 15), at(2023, 4, 15)]
        );
    }

    #[test]
    fn end_date_just_before_next_occurrence() {
        let dates: Vec<NaiveDateTime> =
            generate_monthly_by_calendar_day_until(at(2023, 1, 15), 1, at(2023, 4, 14))
                .unwrap()
                .collect::<RecurResult<_>>()
                .unwrap();
        assert_eq!(dates, vec![at(2023, 1, 15), at(2023, 2, 15), at(2023, 3, 15)]);
    }
}
