mod common;
use common::{date, ledger_of};
use workledger::core::calculator::stats::month_stat;
use workledger::core::calendar::build_weeks;
use workledger::core::ledger::Ledger;
use workledger::core::session::Session;
use workledger::export::{export_csv, export_filename};
use workledger::models::{DayRecord, MonthRef};
use workledger::store::MemoryKv;

fn sample_ledger() -> Ledger {
    ledger_of(&[
        (
            "2024-01-01",
            DayRecord::new("9:00", "17:00").with_pause("12:00", "13:00"),
        ),
        (
            "2024-01-02",
            DayRecord::new("9:00", "17:00").with_time_off("2"),
        ),
        (
            "2024-01-03",
            DayRecord::new("8:30", "17:00")
                .with_pause("12:00", "12:30")
                .with_pause("15:00", "")
                .with_time_off("1.5"),
        ),
        ("2024-01-05", DayRecord::vacation()),
    ])
}

fn render(ledger: &Ledger) -> String {
    let grid = build_weeks(2024, 1);
    String::from_utf8(export_csv(&grid, ledger).unwrap()).unwrap()
}

#[test]
fn test_csv_header_and_rows() {
    let csv = render(&sample_ledger());
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "Date,Day,Start,End,Pauses,Time Off (h),Worked (h),Status"
    );
    assert_eq!(
        lines[1],
        "\"Jan 1, 2024\",Mon,9:00,17:00,\"12:00-13:00\",-,7.00,Worked"
    );
    assert_eq!(lines[2], "\"Jan 2, 2024\",Tue,9:00,17:00,\"-\",2,8.00,Worked");
    assert_eq!(
        lines[3],
        "\"Jan 3, 2024\",Wed,8:30,17:00,\"12:00-12:30; 15:00-\",1.5,8.00,Worked"
    );
    assert_eq!(lines[4], "\"Jan 4, 2024\",Thu,-,-,\"-\",-,0.00,Worked");
    assert_eq!(lines[5], "\"Jan 5, 2024\",Fri,-,-,-,-,-,Full Day Off");
    assert_eq!(lines[6], "\"Jan 8, 2024\",Mon,-,-,\"-\",-,0.00,Worked");
}

#[test]
fn test_csv_structure_and_summary_match_month_stat() {
    let ledger = sample_ledger();
    let grid = build_weeks(2024, 1);
    let csv = render(&ledger);
    let lines: Vec<&str> = csv.lines().collect();

    let days = grid.day_count();
    assert_eq!(lines.len(), 1 + days + 1 + 3);
    assert_eq!(lines[1 + days], "");
    assert_eq!(lines[2 + days], "Summary");

    let stat = month_stat(&grid, &ledger);
    assert_eq!(
        lines[3 + days],
        format!("Total Hours Worked,{:.2}", stat.worked_hours)
    );
    assert_eq!(
        lines[4 + days],
        format!("Total Time Off (h),{:.2}", stat.time_off_hours)
    );
    assert_eq!(lines[3 + days], "Total Hours Worked,23.00");
    assert_eq!(lines[4 + days], "Total Time Off (h),11.50");
    assert!(csv.ends_with('\n'));
}

#[test]
fn test_csv_rows_follow_grid_order() {
    let csv = render(&Ledger::new());
    let grid = build_weeks(2024, 1);

    let labels: Vec<String> = csv
        .lines()
        .skip(1)
        .take(grid.day_count())
        .map(|l| l.split("\",").next().unwrap().trim_start_matches('"').to_string())
        .collect();
    let expected: Vec<String> = grid.days().map(|d| d.short_label()).collect();
    assert_eq!(labels, expected);
    assert_eq!(labels.last().unwrap(), "Jan 31, 2024");
}

#[test]
fn test_csv_is_deterministic() {
    let ledger = sample_ledger();
    assert_eq!(render(&ledger), render(&ledger.clone()));
}

#[test]
fn test_csv_uses_stored_text_verbatim() {
    let ledger = ledger_of(&[(
        "2024-01-01",
        DayRecord::new("9:00", "17:00").with_time_off("two"),
    )]);
    let csv = render(&ledger);
    assert!(csv.contains("\"Jan 1, 2024\",Mon,9:00,17:00,\"-\",two,8.00,Worked"));
    assert!(csv.ends_with("Total Time Off (h),0.00\n"));
}

#[test]
fn test_time_off_with_unit_suffix_counts_as_zero() {
    let ledger = ledger_of(&[(
        "2024-01-01",
        DayRecord::new("9:00", "17:00").with_time_off("2h"),
    )]);
    let csv = render(&ledger);
    assert!(csv.contains(",\"-\",2h,8.00,Worked"));
    assert!(csv.ends_with("Total Time Off (h),0.00\n"));
}

#[test]
fn test_pause_column_is_always_quoted() {
    let ledger = ledger_of(&[(
        "2024-01-01",
        DayRecord::new("9:00", "17:00").with_pause("12:00", "13:00"),
    )]);
    let csv = render(&ledger);
    assert!(csv.contains(",\"12:00-13:00\","));

    // the vacation row keeps bare placeholders
    let csv = render(&ledger_of(&[("2024-01-01", DayRecord::vacation())]));
    assert!(csv.contains("\"Jan 1, 2024\",Mon,-,-,-,-,-,Full Day Off\n"));
}

#[test]
fn test_embedded_commas_and_quotes_are_escaped() {
    let ledger = ledger_of(&[(
        "2024-01-01",
        DayRecord::new("9\"00", "17,00").with_pause("12,00", "12\"30"),
    )]);
    let csv = render(&ledger);
    let row = csv.lines().nth(1).unwrap();
    assert_eq!(
        row,
        "\"Jan 1, 2024\",Mon,\"9\"\"00\",\"17,00\",\"12,00-12\"\"30\",-,0.00,Worked"
    );

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv.as_bytes());
    let first = reader.records().next().unwrap().unwrap();
    assert_eq!(first.len(), 8);
    assert_eq!(&first[2], "9\"00");
    assert_eq!(&first[4], "12,00-12\"30");
}

#[test]
fn test_export_filename() {
    assert_eq!(
        export_filename("January 2024"),
        "work-hours-January-2024.csv"
    );
    assert_eq!(
        export_filename(&MonthRef::new(2025, 3).unwrap().label()),
        "work-hours-March-2025.csv"
    );
}

#[test]
fn test_session_export_report() {
    let mut kv = MemoryKv::new();
    sample_ledger().save(&mut kv, "wd").unwrap();

    let session = Session::open(kv, "wd", MonthRef::new(2024, 1).unwrap());
    let report = session.export().unwrap();

    assert_eq!(report.filename, "work-hours-January-2024.csv");
    assert_eq!(String::from_utf8(report.bytes).unwrap(), render(&sample_ledger()));
    assert!(session.ledger().get(date("2024-01-05")).unwrap().is_vacation);
}
