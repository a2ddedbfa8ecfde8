use cadence_core::error::CoreError;
use thiserror::Error;

/// Recurrence-generation errors
#[derive(Error, Debug)]
pub enum RecurError {
    #[error("Recurrence interval must be at least 1, got {0}")]
    InvalidInterval(u32),

    #[error("Occurrence count must be at least 1, got {0}")]
    InvalidCount(u32),

    #[error("Weekly recurrence requires a non-empty weekday set")]
    EmptyWeekdaySet,

    #[error("Calendar arithmetic failed: {0}")]
    CalendarOverflow(#[from] CoreError),
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
