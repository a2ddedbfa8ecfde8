//! Core recurrence value types.

mod weekdays;

pub use weekdays::WeekdaySet;
