use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::stats::{MonthStat, WEEKLY_TARGET_HOURS, WeekStat};
use crate::errors::AppResult;
use crate::models::{DateKey, DayRecord};
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use crate::utils::time::{format_hours, format_hours_short};

use super::{open_session, resolve_month};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { month, details } = cmd {
        let month = resolve_month(month)?;
        let session = open_session(cfg, month)?;
        let grid = session.grid();

        println!("📅 {}", month.label());

        if grid.weeks.is_empty() {
            info("No business weeks in this month.");
            return Ok(());
        }

        for (i, week) in grid.weeks.iter().enumerate() {
            header(format!("Week {}", i + 1));
            let mut table = Table::new(["Day", "Start", "End", "Pauses", "Time off", "Worked"]);
            for date in week {
                table.add_row(day_cells(*date, &session.day(*date), *details));
            }
            print!("{}", table.render());
        }

        header("Weekly Breakdown");
        print!("{}", weekly_table(&session.weekly_stats()).render());

        header("Month Summary");
        print_month(&session.month_stat());
    }
    Ok(())
}

fn day_cells(date: DateKey, day: &DayRecord, details: bool) -> Vec<String> {
    if day.is_vacation {
        return vec![
            date.card_label(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            "Full Day Off".into(),
        ];
    }

    let pauses = if details {
        day.pauses
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ")
    } else if day.pauses.is_empty() {
        String::new()
    } else {
        format!("{} pause(s)", day.pauses.len())
    };

    let time_off = day
        .time_off()
        .filter(|h| *h > 0.0)
        .map(|h| format!("{}h", format_hours(h)))
        .unwrap_or_default();

    vec![
        date.card_label(),
        day.work_start.clone().unwrap_or_default(),
        day.work_end.clone().unwrap_or_default(),
        pauses,
        time_off,
        format!("{}h", format_hours(day.worked_hours())),
    ]
}

fn weekly_table(stats: &[WeekStat]) -> Table {
    let mut table = Table::new(["Week", "Worked", "Target", "Time off"]);
    for w in stats {
        let target = if w.target_met() {
            "✓ Target Met".to_string()
        } else {
            format!(
                "{}h to {}h",
                format_hours_short(w.hours_to_target()),
                WEEKLY_TARGET_HOURS
            )
        };
        let off = if w.time_off_hours > 0.0 {
            format!("{}h", format_hours_short(w.time_off_hours))
        } else {
            String::new()
        };
        table.add_row([
            format!("Week {}", w.week_number),
            format!("{}h", format_hours_short(w.worked_hours)),
            target,
            off,
        ]);
    }
    table
}

fn print_month(stat: &MonthStat) {
    println!("Total Hours : {}h", format_hours_short(stat.worked_hours));
    println!("Days Worked : {}", stat.days_worked);
    println!("Avg per Day : {}h", format_hours_short(stat.avg_hours_per_day));
    println!("Time Off    : {}h", format_hours_short(stat.time_off_hours));
}
