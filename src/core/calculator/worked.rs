use crate::models::DayRecord;
use crate::utils::time::{duration_hours, parse_time};

/// Net worked hours for a day: `end - start` minus every completed pause.
///
/// - 0 when start or end is missing or does not parse.
/// - Pauses with a missing or unparsable side count as 0.
/// - No clamping: end before start (or an inverted pause) goes negative.
///
/// The vacation flag is not consulted here; aggregation decides what a
/// vacation day contributes.
pub fn worked_hours(day: &DayRecord) -> f64 {
    let (Some(start), Some(end)) = (
        day.work_start.as_deref().and_then(parse_time),
        day.work_end.as_deref().and_then(parse_time),
    ) else {
        return 0.0;
    };

    let paused: f64 = day
        .pauses
        .iter()
        .filter_map(|p| p.duration_hours())
        .sum();

    duration_hours(start, end) - paused
}
