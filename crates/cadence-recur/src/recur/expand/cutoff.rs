//! Termination state shared by the occurrence iterators.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{RecurError, RecurResult};

/// Bound on an occurrence sequence: either a fixed number of occurrences
/// or an inclusive end date. Only the date component of the bound is
/// compared; the time-of-day of an occurrence never affects termination.
#[derive(Debug, Clone)]
pub(crate) enum Cutoff {
    Count { remaining: u32 },
    Until { end: NaiveDate },
}

impl Cutoff {
    /// Count-bounded cutoff, rejecting a zero count up front.
    pub(crate) fn count(count: u32) -> RecurResult<Self> {
        if count == 0 {
            tracing::warn!("occurrence count must be at least 1");
            return Err(RecurError::InvalidCount(count));
        }
        Ok(Self::Count { remaining: count })
    }

    /// Date-bounded cutoff; `end_date`'s time-of-day is ignored.
    pub(crate) fn until(end_date: NaiveDateTime) -> Self {
        Self::Until {
            end: end_date.date(),
        }
    }

    /// Claims the slot taken by the unconditionally emitted start instant.
    pub(crate) fn claim_start(&mut self) {
        if let Self::Count { remaining } = self {
            *remaining -= 1;
        }
    }

    /// Whether a stepped occurrence dated `date` may still be emitted,
    /// claiming its slot when it may.
    pub(crate) fn admit(&mut self, date: NaiveDate) -> bool {
        match self {
            Self::Count { remaining } => {
                if *remaining == 0 {
                    false
                } else {
                    *remaining -= 1;
                    true
                }
            }
            Self::Until { end } => date <= *end,
        }
    }

    /// Whether a count bound has been fully consumed. Lets iterators
    /// return `None` without computing the step they would discard.
    pub(crate) fn exhausted(&self) -> bool {
        matches!(self, Self::Count { remaining: 0 })
    }
}
