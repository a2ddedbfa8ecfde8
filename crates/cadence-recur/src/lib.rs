//! Recurrence expansion for calendar schedules.
//!
//! Given a start date-time and a recurrence pattern, the generators in
//! this crate produce the ordered sequence of occurrences as a lazy
//! iterator: daily and yearly steps, weekly steps over a set of
//! weekdays, and monthly steps anchored either to the start's calendar
//! day (clamping into shorter months) or to its ordinal weekday (the
//! "3rd Friday" kind of rule).
//!
//! Each pattern comes in two variants: one bounded by a fixed number of
//! occurrences, one by an inclusive end date. All date-times are naive
//! (zone-free) chrono values; time zones and DST are out of scope.

pub mod error;
pub mod recur;

pub use error::{RecurError, RecurResult};
pub use recur::core::WeekdaySet;
pub use recur::expand::{
    DailyOccurrences, MonthlyByDayOccurrences, MonthlyByWeekdayOccurrences, WeeklyOccurrences,
    YearlyOccurrences, generate_daily, generate_daily_until, generate_monthly_by_calendar_day,
    generate_monthly_by_calendar_day_until, generate_monthly_by_weekday,
    generate_monthly_by_weekday_until, generate_weekly, generate_weekly_until, generate_yearly,
    generate_yearly_until,
};
