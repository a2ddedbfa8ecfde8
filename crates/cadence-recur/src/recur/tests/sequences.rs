//! Properties every generator family must uphold, checked across the
//! whole API surface rather than per module.

use chrono::{NaiveDate, NaiveDateTime, Weekday};

use crate::error::RecurResult;
use crate::recur::core::WeekdaySet;
use crate::recur::expand::{
    generate_daily, generate_daily_until, generate_monthly_by_calendar_day,
    generate_monthly_by_calendar_day_until, generate_monthly_by_weekday,
    generate_monthly_by_weekday_until, generate_weekly, generate_yearly, generate_yearly_until,
};

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(11, 20, 30)
        .unwrap()
}

fn collect<I>(iter: I) -> Vec<NaiveDateTime>
where
    I: Iterator<Item = RecurResult<NaiveDateTime>>,
{
    iter.collect::<RecurResult<Vec<_>>>().unwrap()
}

#[test_log::test]
fn count_bounded_sequences_have_exact_length_and_start() {
    let start = at(2023, 1, 31);
    for count in [1_u32, 2, 5, 12] {
        let runs = [
            collect(generate_daily(start, 3, count).unwrap()),
            collect(generate_monthly_by_calendar_day(start, 1, count).unwrap()),
            collect(generate_monthly_by_weekday(start, 2, count).unwrap()),
            collect(generate_yearly(start, 1, count).unwrap()),
        ];
        for dates in runs {
            assert_eq!(dates.len(), usize::try_from(count).unwrap());
            assert_eq!(dates[0], start);
        }
    }
}

#[test_log::test]
fn every_sequence_is_strictly_increasing() {
    let start = at(2023, 1, 30);
    let weekdays = WeekdaySet::from([Weekday::Tue, Weekday::Sat]);
    let runs = [
        collect(generate_daily(start, 2, 20).unwrap()),
        collect(generate_weekly(start, 3, weekdays, 20).unwrap()),
        collect(generate_monthly_by_calendar_day(start, 1, 20).unwrap()),
        collect(generate_monthly_by_weekday(start, 1, 20).unwrap()),
        collect(generate_yearly(start, 2, 20).unwrap()),
    ];
    for dates in runs {
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }
}

#[test_log::test]
fn repeated_invocation_yields_identical_sequences() {
    let start = at(2024, 2, 29);
    let weekdays = WeekdaySet::from([Weekday::Mon, Weekday::Thu]);
    assert_eq!(
        collect(generate_daily(start, 5, 9).unwrap()),
        collect(generate_daily(start, 5, 9).unwrap())
    );
    assert_eq!(
        collect(generate_weekly(start, 2, weekdays, 9).unwrap()),
        collect(generate_weekly(start, 2, weekdays, 9).unwrap())
    );
    assert_eq!(
        collect(generate_monthly_by_calendar_day(start, 3, 9).unwrap()),
        collect(generate_monthly_by_calendar_day(start, 3, 9).unwrap())
    );
    assert_eq!(
        collect(generate_monthly_by_weekday(start, 1, 9).unwrap()),
        collect(generate_monthly_by_weekday(start, 1, 9).unwrap())
    );
    assert_eq!(
        collect(generate_yearly(start, 1, 9).unwrap()),
        collect(generate_yearly(start, 1, 9).unwrap())
    );
}

#[test_log::test]
fn time_of_day_is_carried_through_every_generator() {
    let start = at(2023, 3, 31);
    let weekdays = WeekdaySet::from([Weekday::Fri]);
    let runs = [
        collect(generate_daily(start, 10, 6).unwrap()),
        collect(generate_weekly(start, 1, weekdays, 6).unwrap()),
        collect(generate_monthly_by_calendar_day(start, 1, 6).unwrap()),
        collect(generate_monthly_by_weekday(start, 1, 6).unwrap()),
        collect(generate_yearly(start, 1, 6).unwrap()),
    ];
    for dates in runs {
        for date in dates {
            assert_eq!(date.time(), start.time());
        }
    }
}

/// The date-bounded run must be a prefix of the count-bounded run, stay
/// within the bound, and leave no admissible occurrence unemitted.
fn assert_maximal(bounded: &[NaiveDateTime], extended: &[NaiveDateTime], end: NaiveDate) {
    assert!(!bounded.is_empty());
    assert_eq!(extended[..bounded.len()], *bounded);
    assert!(bounded.iter().all(|date| date.date() <= end));
    assert!(extended[bounded.len()].date() > end);
}

#[test_log::test]
fn date_bounded_sequences_stop_exactly_at_the_bound() {
    let start = at(2023, 1, 31);
    let end = at(2024, 6, 1);

    let bounded = collect(generate_daily_until(start, 11, end).unwrap());
    let extended = collect(generate_daily(start, 11, u32::try_from(bounded.len()).unwrap() + 1).unwrap());
    assert_maximal(&bounded, &extended, end.date());

    let bounded = collect(generate_monthly_by_calendar_day_until(start, 2, end).unwrap());
    let extended = collect(
        generate_monthly_by_calendar_day(start, 2, u32::try_from(bounded.len()).unwrap() + 1)
            .unwrap(),
    );
    assert_maximal(&bounded, &extended, end.date());

    let bounded = collect(generate_monthly_by_weekday_until(start, 1, end).unwrap());
    let extended = collect(
        generate_monthly_by_weekday(start, 1, u32::try_from(bounded.len()).unwrap() + 1).unwrap(),
    );
    assert_maximal(&bounded, &extended, end.date());

    let bounded = collect(generate_yearly_until(start, 1, end).unwrap());
    let extended =
        collect(generate_yearly(start, 1, u32::try_from(bounded.len()).unwrap() + 1).unwrap());
    assert_maximal(&bounded, &extended, end.date());
}

#[test_log::test]
fn weekly_interval_two_emits_only_even_week_indices() {
    let start = at(2023, 1, 4);
    let weekdays = WeekdaySet::from([Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    let week_anchor = start.date().week(Weekday::Mon).first_day();
    let dates = collect(generate_weekly(start, 2, weekdays, 12).unwrap());
    for date in dates {
        let weeks_from_start = (date.date() - week_anchor).num_days() / 7;
        assert_eq!(weeks_from_start % 2, 0, "{date} falls in an odd week");
    }
}
