//! Monthly CSV report.

use crate::core::calculator::stats::month_stat;
use crate::core::calendar::WeekGrid;
use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::{DateKey, DayRecord};
use crate::utils::time::format_hours;
use ::csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

pub(crate) const HEADERS: [&str; 8] = [
    "Date",
    "Day",
    "Start",
    "End",
    "Pauses",
    "Time Off (h)",
    "Worked (h)",
    "Status",
];

const PLACEHOLDER: &str = "-";

// Fields are quoted by `cell`/`quoted` below: the pause list is always
// quoted, everything else only when it carries a comma, quote or newline.
fn writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn into_bytes(wtr: Writer<Vec<u8>>) -> AppResult<Vec<u8>> {
    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {}", e.error())))
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn cell(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        quoted(s)
    } else {
        s.to_string()
    }
}

/// One report row for `date`, already quoted.
pub(crate) fn day_row(date: DateKey, day: &DayRecord) -> [String; 8] {
    let label = cell(&date.short_label());
    let weekday = date.weekday_abbrev();

    if day.is_vacation {
        return [
            label,
            weekday,
            PLACEHOLDER.into(),
            PLACEHOLDER.into(),
            PLACEHOLDER.into(),
            PLACEHOLDER.into(),
            PLACEHOLDER.into(),
            "Full Day Off".into(),
        ];
    }

    let or_dash = |v: &Option<String>| cell(v.as_deref().unwrap_or(PLACEHOLDER));

    let pauses = if day.pauses.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        day.pauses
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join("; ")
    };

    [
        label,
        weekday,
        or_dash(&day.work_start),
        or_dash(&day.work_end),
        quoted(&pauses),
        or_dash(&day.time_off_hours),
        format_hours(day.worked_hours()),
        "Worked".into(),
    ]
}

/// Render the report for `grid`: header, one row per grid day in order,
/// a blank line, then the summary block.
///
/// The month label only names the file; see [`export_filename`].
pub fn export_csv(grid: &WeekGrid, ledger: &Ledger) -> AppResult<Vec<u8>> {
    let mut wtr = writer();
    wtr.write_record(HEADERS)?;

    for date in grid.days() {
        let day = ledger.get_or_default(date);
        wtr.write_record(day_row(date, &day))?;
    }

    let mut out = into_bytes(wtr)?;
    out.push(b'\n');

    let stat = month_stat(grid, ledger);
    let mut wtr = writer();
    wtr.write_record(["Summary"])?;
    wtr.write_record(["Total Hours Worked", format_hours(stat.worked_hours).as_str()])?;
    wtr.write_record(["Total Time Off (h)", format_hours(stat.time_off_hours).as_str()])?;
    out.extend(into_bytes(wtr)?);

    Ok(out)
}

/// `work-hours-January-2024.csv` for the label "January 2024".
pub fn export_filename(month_label: &str) -> String {
    format!("work-hours-{}.csv", month_label.trim().replace(' ', "-"))
}
