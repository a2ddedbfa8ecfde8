//! Pattern-specific occurrence generators.
//!
//! Each generator is a lazy iterator over `RecurResult<NaiveDateTime>`:
//! input validation happens once at construction, calendar failures
//! discovered mid-sequence are yielded as a single error after which the
//! iterator fuses. One `next()` call performs exactly one step of
//! calendar arithmetic.

mod cutoff;
mod daily;
mod monthly_day;
mod monthly_weekday;
mod weekly;
mod yearly;

pub use daily::{DailyOccurrences, generate_daily, generate_daily_until};
pub use monthly_day::{
    MonthlyByDayOccurrences, generate_monthly_by_calendar_day,
    generate_monthly_by_calendar_day_until,
};
pub use monthly_weekday::{
    MonthlyByWeekdayOccurrences, generate_monthly_by_weekday, generate_monthly_by_weekday_until,
};
pub use weekly::{WeeklyOccurrences, generate_weekly, generate_weekly_until};
pub use yearly::{YearlyOccurrences, generate_yearly, generate_yearly_until};

pub(crate) use cutoff::Cutoff;

use crate::error::{RecurError, RecurResult};

/// Validates the step multiplier shared by every generator.
pub(crate) fn nonzero_interval(interval: u32) -> RecurResult<u32> {
    if interval == 0 {
        tracing::warn!("recurrence interval must be at least 1");
        return Err(RecurError::InvalidInterval(interval));
    }
    Ok(interval)
}
