//! Time utilities: parsing H:MM / HH:MM, hour durations, time-off amounts.

use regex::Regex;
use std::sync::LazyLock;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid time regex"));

/// A clock reading as entered by the user.
///
/// Hours and minutes are not range-checked: `25:70` is accepted and simply
/// counts as 25 * 60 + 70 minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    minutes: i64,
}

impl TimeOfDay {
    pub fn from_hm(hours: i64, minutes: i64) -> Self {
        Self {
            minutes: hours * 60 + minutes,
        }
    }

    pub fn minutes_from_midnight(&self) -> i64 {
        self.minutes
    }
}

/// Parse `H:MM` or `HH:MM`. Surrounding whitespace is ignored.
pub fn parse_time(t: &str) -> Option<TimeOfDay> {
    let caps = TIME_RE.captures(t.trim())?;
    let h: i64 = caps[1].parse().ok()?;
    let m: i64 = caps[2].parse().ok()?;
    Some(TimeOfDay::from_hm(h, m))
}

/// `end - start` in hours. Negative when `end` precedes `start`.
pub fn duration_hours(start: TimeOfDay, end: TimeOfDay) -> f64 {
    (end.minutes - start.minutes) as f64 / 60.0
}

/// Parse a time-off amount in hours.
///
/// Only finite, non-negative numbers count; everything else is treated as
/// "not entered". The whole value must be numeric, so "2h" is rejected
/// rather than read as 2.
pub fn parse_hours(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite() && *h >= 0.0)
}

/// Hours with two decimals, as used in reports.
pub fn format_hours(h: f64) -> String {
    // avoid "-0.00" for tiny negative rounding noise
    let rounded = (h * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", h)
}

/// Hours with one decimal, as used in on-screen summaries.
pub fn format_hours_short(h: f64) -> String {
    let rounded = (h * 10.0).round() / 10.0;
    if rounded == 0.0 {
        return "0.0".to_string();
    }
    format!("{:.1}", h)
}
