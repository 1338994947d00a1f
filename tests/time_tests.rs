mod common;
use common::assert_close;
use workledger::models::{DayRecord, PauseInterval};
use workledger::utils::time::{
    TimeOfDay, duration_hours, format_hours, parse_hours, parse_time,
};

#[test]
fn test_parse_time_accepts_short_and_long_hours() {
    assert_eq!(parse_time("9:00"), Some(TimeOfDay::from_hm(9, 0)));
    assert_eq!(parse_time("09:30"), Some(TimeOfDay::from_hm(9, 30)));
    assert_eq!(parse_time(" 17:05 "), Some(TimeOfDay::from_hm(17, 5)));
}

#[test]
fn test_parse_time_is_permissive_about_ranges() {
    let t = parse_time("25:70").expect("no range check");
    assert_eq!(t.minutes_from_midnight(), 25 * 60 + 70);
}

#[test]
fn test_parse_time_rejects_malformed_input() {
    for bad in ["", "  ", "9", "9:0", "9:000", "ab:cd", "9.30", "123:00", "-1:00"] {
        assert_eq!(parse_time(bad), None, "{bad:?} should not parse");
    }
}

#[test]
fn test_duration_can_be_negative() {
    let a = parse_time("17:00").unwrap();
    let b = parse_time("9:00").unwrap();
    assert_close(duration_hours(b, a), 8.0);
    assert_close(duration_hours(a, b), -8.0);
}

#[test]
fn test_parse_hours() {
    assert_eq!(parse_hours("1.5"), Some(1.5));
    assert_eq!(parse_hours(" 2 "), Some(2.0));
    assert_eq!(parse_hours("abc"), None);
    assert_eq!(parse_hours("-1"), None);
    assert_eq!(parse_hours("NaN"), None);
}

#[test]
fn test_parse_hours_rejects_trailing_units() {
    // a leading number is not enough; the whole value must be numeric
    assert_eq!(parse_hours("2h"), None);
    assert_eq!(parse_hours("1.5 hours"), None);
    assert_eq!(parse_hours("2.0"), Some(2.0));
}

#[test]
fn test_format_hours_two_decimals() {
    assert_eq!(format_hours(7.0), "7.00");
    assert_eq!(format_hours(7.5 + 1.0 / 60.0), "7.52");
    assert_eq!(format_hours(-8.0), "-8.00");
    assert_eq!(format_hours(-0.001), "0.00");
}

#[test]
fn test_worked_hours_subtracts_completed_pause() {
    let day = DayRecord::new("9:00", "17:00").with_pause("12:00", "13:00");
    assert_close(day.worked_hours(), 7.0);
}

#[test]
fn test_incomplete_pause_contributes_nothing() {
    let day = DayRecord::new("9:00", "17:00").with_pause("12:00", "");
    assert_close(day.worked_hours(), 8.0);

    let day = DayRecord::new("9:00", "17:00").with_pause("", "13:00");
    assert_close(day.worked_hours(), 8.0);
}

#[test]
fn test_unparsable_pause_contributes_nothing() {
    let day = DayRecord::new("9:00", "17:00").with_pause("noon", "13:00");
    assert_close(day.worked_hours(), 8.0);
}

#[test]
fn test_missing_or_bad_bounds_give_zero() {
    assert_close(DayRecord::new("9:00", "").worked_hours(), 0.0);
    assert_close(DayRecord::new("", "17:00").worked_hours(), 0.0);
    assert_close(DayRecord::new("nine", "17:00").worked_hours(), 0.0);
    assert_close(DayRecord::default().worked_hours(), 0.0);
}

#[test]
fn test_worked_hours_is_span_minus_pauses() {
    let day = DayRecord::new("8:15", "18:40")
        .with_pause("10:00", "10:20")
        .with_pause("12:30", "13:15")
        .with_pause("16:00", "");

    let span = duration_hours(parse_time("8:15").unwrap(), parse_time("18:40").unwrap());
    let paused: f64 = day
        .pauses
        .iter()
        .filter_map(PauseInterval::duration_hours)
        .sum();

    assert_close(day.worked_hours(), span - paused);
    assert_close(day.worked_hours(), 10.0 + 25.0 / 60.0 - 65.0 / 60.0);
}

#[test]
fn test_no_clamping_of_negative_results() {
    assert_close(DayRecord::new("17:00", "9:00").worked_hours(), -8.0);

    let inverted_pause = DayRecord::new("9:00", "17:00").with_pause("13:00", "12:00");
    assert_close(inverted_pause.worked_hours(), 9.0);
}
