//! Week and month totals over the ledger.

use crate::core::calendar::WeekGrid;
use crate::core::ledger::Ledger;
use crate::models::{DateKey, DayRecord};

/// Worked hours a week must reach to count as "target met".
pub const WEEKLY_TARGET_HOURS: f64 = 40.0;

/// Time-off credit for a full day of vacation.
pub const VACATION_CREDIT_HOURS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeekStat {
    /// 1-based position of the week in its grid.
    pub week_number: usize,
    pub worked_hours: f64,
    pub time_off_hours: f64,
}

impl WeekStat {
    pub fn target_met(&self) -> bool {
        self.worked_hours >= WEEKLY_TARGET_HOURS
    }

    /// Hours still missing to the weekly target, 0 once it is met.
    pub fn hours_to_target(&self) -> f64 {
        (WEEKLY_TARGET_HOURS - self.worked_hours).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthStat {
    pub worked_hours: f64,
    pub time_off_hours: f64,
    pub days_worked: usize,
    pub avg_hours_per_day: f64,
}

/// Hours a day adds to the worked total. Vacation days add nothing.
pub fn worked_contribution(day: &DayRecord) -> f64 {
    if day.is_vacation {
        0.0
    } else {
        day.worked_hours()
    }
}

/// Hours a day adds to the time-off total. Vacation days add the fixed
/// credit whatever else is filled in.
pub fn time_off_contribution(day: &DayRecord) -> f64 {
    if day.is_vacation {
        VACATION_CREDIT_HOURS
    } else {
        day.time_off().unwrap_or(0.0)
    }
}

pub fn week_stat(week_number: usize, week: &[DateKey], ledger: &Ledger) -> WeekStat {
    let (worked, off) = week
        .iter()
        .map(|d| ledger.get_or_default(*d))
        .fold((0.0, 0.0), |(w, o), day| {
            (w + worked_contribution(&day), o + time_off_contribution(&day))
        });

    WeekStat {
        week_number,
        worked_hours: worked,
        time_off_hours: off,
    }
}

pub fn weekly_stats(grid: &WeekGrid, ledger: &Ledger) -> Vec<WeekStat> {
    grid.weeks
        .iter()
        .enumerate()
        .map(|(i, week)| week_stat(i + 1, week, ledger))
        .collect()
}

pub fn month_stat(grid: &WeekGrid, ledger: &Ledger) -> MonthStat {
    let mut stat = MonthStat::default();

    for date in grid.days() {
        let day = ledger.get_or_default(date);
        let worked = worked_contribution(&day);

        stat.worked_hours += worked;
        stat.time_off_hours += time_off_contribution(&day);

        if !day.is_vacation && worked > 0.0 {
            stat.days_worked += 1;
        }
    }

    stat.avg_hours_per_day = if stat.days_worked > 0 {
        stat.worked_hours / stat.days_worked as f64
    } else {
        0.0
    };

    stat
}
