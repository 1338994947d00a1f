pub mod config;
pub mod export;
pub mod init;
pub mod pause;
pub mod set;
pub mod show;
pub mod vacation;

use crate::config::Config;
use crate::core::calendar::build_month;
use crate::core::session::Session;
use crate::db::SqliteKv;
use crate::errors::{AppError, AppResult};
use crate::models::{DateKey, MonthRef};
use crate::ui::messages::warning;

/// Open an editing session on the configured database.
pub(crate) fn open_session(cfg: &Config, month: MonthRef) -> AppResult<Session<SqliteKv>> {
    let store = SqliteKv::open(&cfg.database)?;
    Ok(Session::open(store, &cfg.ledger_key, month))
}

/// `--month YYYY-MM`, defaulting to the current month.
pub(crate) fn resolve_month(month: &Option<String>) -> AppResult<MonthRef> {
    match month {
        Some(m) => MonthRef::parse(m),
        None => Ok(MonthRef::current()),
    }
}

/// Parse a date argument. Dates outside their month's week grid (weekends,
/// and weekdays before the first Monday) are stored but never shown.
pub(crate) fn parse_date_arg(s: &str) -> AppResult<DateKey> {
    let date: DateKey = s.parse()?;
    if !build_month(month_of(date)).contains(date) {
        let reason = if date.is_weekday() {
            "falls before the month's first Monday".to_string()
        } else {
            format!("is a {}", date.weekday_abbrev())
        };
        warning(format!(
            "{date} {reason}: it is stored but not part of any week grid."
        ));
    }
    Ok(date)
}

/// Convert a 1-based pause number from the command line.
pub(crate) fn pause_index(n: usize) -> AppResult<usize> {
    n.checked_sub(1).ok_or(AppError::InvalidPause(n))
}

/// Report pause errors with the number the user typed.
pub(crate) fn user_pause_error(n: usize) -> impl Fn(AppError) -> AppError {
    move |e| match e {
        AppError::InvalidPause(_) => AppError::InvalidPause(n),
        other => other,
    }
}

pub(crate) fn month_of(date: DateKey) -> MonthRef {
    MonthRef {
        year: date.year(),
        month: date.month(),
    }
}
