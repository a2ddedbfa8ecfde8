//! Example producing a small team schedule from the recurrence API.
//!
//! Run with: `cargo run --package cadence-recur --example team_schedule`

use cadence_recur::{
    RecurResult, WeekdaySet, generate_monthly_by_calendar_day, generate_monthly_by_weekday,
    generate_weekly, generate_yearly,
};
use chrono::{NaiveDate, NaiveDateTime, Weekday};

fn main() -> RecurResult<()> {
    let kickoff = NaiveDate::from_ymd_opt(2026, 1, 5)
        .expect("valid date")
        .and_hms_opt(9, 30, 0)
        .expect("valid time");

    println!("=== Standup: Monday/Wednesday/Friday, every week ===");
    let standup_days = WeekdaySet::from([Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    let standups: Vec<NaiveDateTime> =
        generate_weekly(kickoff, 1, standup_days, 9)?.collect::<RecurResult<_>>()?;
    for occurrence in &standups {
        println!("  {occurrence}");
    }

    println!("\n=== Retrospective: 1st Monday of every month ===");
    let retros: Vec<NaiveDateTime> =
        generate_monthly_by_weekday(kickoff, 1, 6)?.collect::<RecurResult<_>>()?;
    for occurrence in &retros {
        println!("  {occurrence}");
    }

    println!("\n=== Invoicing: the 31st, clamped into shorter months ===");
    let month_end = NaiveDate::from_ymd_opt(2026, 1, 31)
        .expect("valid date")
        .and_hms_opt(17, 0, 0)
        .expect("valid time");
    let invoices: Vec<NaiveDateTime> =
        generate_monthly_by_calendar_day(month_end, 1, 6)?.collect::<RecurResult<_>>()?;
    for occurrence in &invoices {
        println!("  {occurrence}");
    }

    println!("\n=== Anniversary: yearly from the kickoff ===");
    let anniversaries: Vec<NaiveDateTime> =
        generate_yearly(kickoff, 1, 4)?.collect::<RecurResult<_>>()?;
    for occurrence in &anniversaries {
        println!("  {occurrence}");
    }

    Ok(())
}
