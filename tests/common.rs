#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::Path;
use tempfile::TempDir;
use workledger::core::ledger::Ledger;
use workledger::models::{DateKey, DayRecord};

/// The CLI with HOME pointed at `home`, so no real config is touched.
pub fn wl(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("workledger");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// A scratch directory plus a database path inside it.
pub fn setup_home() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("ledger.sqlite");
    let db = db.to_string_lossy().to_string();
    (dir, db)
}

pub fn date(s: &str) -> DateKey {
    s.parse().expect("valid date")
}

pub fn ledger_of(entries: &[(&str, DayRecord)]) -> Ledger {
    let mut ledger = Ledger::new();
    for (d, rec) in entries {
        ledger.insert(date(d), rec.clone());
    }
    ledger
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
