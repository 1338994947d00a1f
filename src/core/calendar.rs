//! Business-week grid for a month.

use crate::models::{DateKey, MonthRef};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Monday-to-Friday weeks of one month, in ascending date order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    pub month: MonthRef,
    pub weeks: Vec<Vec<DateKey>>,
}

impl WeekGrid {
    /// All dates in grid order (week by week).
    pub fn days(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.weeks.iter().flatten().copied()
    }

    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, date: DateKey) -> bool {
        self.days().any(|d| d == date)
    }
}

/// Build the week grid for `month` (1-based).
///
/// The grid starts on the first Monday on or after the 1st; weekdays before
/// that Monday belong to no week. Each week is a Mon..Fri span cut off at
/// the end of the month, so only the last week can be shorter than five
/// days. Invalid months yield an empty grid.
pub fn build_weeks(year: i32, month: u32) -> WeekGrid {
    let month_ref = MonthRef { year, month };
    let mut weeks = Vec::new();

    let Some(mut current) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return WeekGrid {
            month: month_ref,
            weeks,
        };
    };

    while current.weekday() != Weekday::Mon {
        current = next_day(current);
    }

    while current.month() == month {
        let mut week = Vec::with_capacity(5);

        for _ in 0..5 {
            if current.month() == month {
                week.push(DateKey::new(current));
            }
            current = next_day(current);
        }

        if !week.is_empty() {
            weeks.push(week);
        }

        // skip Saturday and Sunday
        current = current + Days::new(2);
    }

    WeekGrid {
        month: month_ref,
        weeks,
    }
}

pub fn build_month(month: MonthRef) -> WeekGrid {
    build_weeks(month.year, month.month)
}

fn next_day(d: NaiveDate) -> NaiveDate {
    d + Days::new(1)
}
