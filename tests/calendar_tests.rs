mod common;
use chrono::{Datelike, Weekday};
use common::date;
use workledger::core::calendar::{build_month, build_weeks};
use workledger::models::MonthRef;

#[test]
fn test_january_2024_starts_on_monday() {
    let grid = build_weeks(2024, 1);

    assert_eq!(grid.weeks.len(), 5);
    assert_eq!(grid.weeks[0][0], date("2024-01-01"));
    assert_eq!(grid.weeks[0].len(), 5);
    assert_eq!(*grid.weeks[4].last().unwrap(), date("2024-01-31"));
    assert_eq!(grid.weeks[4].len(), 3);
    assert_eq!(grid.day_count(), 23);
}

#[test]
fn test_days_before_first_monday_are_not_in_grid() {
    // May 2024 starts on a Wednesday; the first Monday is the 6th.
    let grid = build_weeks(2024, 5);

    assert_eq!(grid.weeks[0][0], date("2024-05-06"));
    assert!(!grid.contains(date("2024-05-01")));
    assert!(!grid.contains(date("2024-05-03")));
    assert_eq!(grid.weeks.len(), 4);
    assert_eq!(*grid.weeks[3].last().unwrap(), date("2024-05-31"));
}

#[test]
fn test_month_starting_on_weekend() {
    // June 2024 starts on a Saturday.
    let grid = build_weeks(2024, 6);
    assert_eq!(grid.weeks[0][0], date("2024-06-03"));
    assert_eq!(grid.weeks.len(), 4);
    assert!(grid.weeks.iter().all(|w| w.len() == 5));

    // September 2024 starts on a Sunday and ends on a Monday.
    let grid = build_weeks(2024, 9);
    assert_eq!(grid.weeks[0][0], date("2024-09-02"));
    assert_eq!(grid.weeks.len(), 5);
    assert_eq!(grid.weeks[4], vec![date("2024-09-30")]);
}

#[test]
fn test_february_non_leap_exact_four_weeks() {
    let grid = build_weeks(2021, 2);
    assert_eq!(grid.weeks.len(), 4);
    assert_eq!(grid.day_count(), 20);
    assert_eq!(*grid.weeks[3].last().unwrap(), date("2021-02-26"));
}

#[test]
fn test_grid_properties_hold_for_many_months() {
    for year in 1999..=2031 {
        for month in 1..=12 {
            let grid = build_weeks(year, month);
            let days: Vec<_> = grid.days().collect();

            assert!(!grid.weeks.is_empty(), "{year}-{month} has no weeks");

            for d in &days {
                assert!(
                    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun),
                    "{d} is a weekend day"
                );
                assert_eq!((d.year(), d.month()), (year, month), "{d} outside month");
            }

            // strictly increasing, hence no duplicates
            assert!(days.windows(2).all(|w| w[0] < w[1]), "{year}-{month} not ascending");

            // every week but the last is a full Mon..Fri week
            let last = grid.weeks.len() - 1;
            for (i, week) in grid.weeks.iter().enumerate() {
                assert_eq!(week[0].weekday(), Weekday::Mon, "{year}-{month} week {i}");
                if i < last {
                    assert_eq!(week.len(), 5, "{year}-{month} week {i} is partial");
                }
                let iso = week[0].date().iso_week();
                assert!(week.iter().all(|d| d.date().iso_week() == iso));
            }

            // nothing after the first Monday is left out
            let mut cursor = days[0].date();
            let mut expected = 0;
            while cursor.month() == month {
                if !matches!(cursor.weekday(), Weekday::Sat | Weekday::Sun) {
                    expected += 1;
                }
                cursor = cursor.succ_opt().unwrap();
            }
            assert_eq!(days.len(), expected, "{year}-{month} misses weekdays");
        }
    }
}

#[test]
fn test_grid_is_deterministic() {
    assert_eq!(build_weeks(2025, 3), build_weeks(2025, 3));
    assert_eq!(build_month(MonthRef::new(2025, 3).unwrap()), build_weeks(2025, 3));
}

#[test]
fn test_invalid_month_yields_empty_grid() {
    assert!(build_weeks(2024, 0).weeks.is_empty());
    assert!(build_weeks(2024, 13).weeks.is_empty());
}

#[test]
fn test_month_navigation_wraps_years() {
    let jan = MonthRef::new(2024, 1).unwrap();
    assert_eq!(jan.previous(), MonthRef::new(2023, 12).unwrap());
    assert_eq!(jan.previous().next(), jan);

    let dec = MonthRef::new(2024, 12).unwrap();
    assert_eq!(dec.next(), MonthRef::new(2025, 1).unwrap());

    assert_eq!(jan.label(), "January 2024");
    assert_eq!(MonthRef::parse("2024-09").unwrap(), MonthRef::new(2024, 9).unwrap());
    assert!(MonthRef::parse("2024-13").is_err());
    assert!(MonthRef::new(2024, 0).is_err());
}
