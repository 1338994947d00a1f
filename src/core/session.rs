//! A single-owner editing session over the ledger.
//!
//! The session loads the ledger once, applies edits one at a time and writes
//! the whole ledger back after each of them (last write wins).

use crate::core::calculator::stats::{self, MonthStat, WeekStat};
use crate::core::calendar::{WeekGrid, build_month};
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::export::csv::{export_csv, export_filename};
use crate::models::{DateKey, DayField, DayRecord, MonthRef, PauseEnd, PauseInterval};
use crate::store::KvStore;
use tracing::{debug, info};

/// A rendered report, ready to hand to whatever saves files.
#[derive(Debug, Clone)]
pub struct Report {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub struct Session<S: KvStore> {
    store: S,
    key: String,
    ledger: Ledger,
    month: MonthRef,
}

impl<S: KvStore> Session<S> {
    pub fn open(store: S, key: &str, month: MonthRef) -> Self {
        let ledger = Ledger::load(&store, key);
        Self {
            store,
            key: key.to_string(),
            ledger,
            month,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn month(&self) -> MonthRef {
        self.month
    }

    // ---------------------------
    // Navigation
    // ---------------------------

    pub fn go_to(&mut self, month: MonthRef) {
        self.month = month;
    }

    pub fn previous_month(&mut self) -> MonthRef {
        self.month = self.month.previous();
        self.month
    }

    pub fn next_month(&mut self) -> MonthRef {
        self.month = self.month.next();
        self.month
    }

    // ---------------------------
    // Reads
    // ---------------------------

    pub fn grid(&self) -> WeekGrid {
        build_month(self.month)
    }

    pub fn day(&self, date: DateKey) -> DayRecord {
        self.ledger.get_or_default(date).into_owned()
    }

    pub fn weekly_stats(&self) -> Vec<WeekStat> {
        stats::weekly_stats(&self.grid(), &self.ledger)
    }

    pub fn month_stat(&self) -> MonthStat {
        stats::month_stat(&self.grid(), &self.ledger)
    }

    pub fn export(&self) -> AppResult<Report> {
        let grid = self.grid();
        let bytes = export_csv(&grid, &self.ledger)?;
        let filename = export_filename(&self.month.label());
        info!(month = %self.month, days = grid.day_count(), "report rendered");
        Ok(Report { filename, bytes })
    }

    // ---------------------------
    // Edits (each one is persisted)
    // ---------------------------

    pub fn set_field(&mut self, date: DateKey, field: DayField, value: &str) -> AppResult<()> {
        self.ledger.entry(date).set_field(field, value);
        debug!(date = %date, ?field, value, "field updated");
        self.persist()
    }

    pub fn add_pause(&mut self, date: DateKey) -> AppResult<usize> {
        let index = self.ledger.entry(date).add_pause();
        debug!(date = %date, index, "pause added");
        self.persist()?;
        Ok(index)
    }

    pub fn update_pause(
        &mut self,
        date: DateKey,
        index: usize,
        side: PauseEnd,
        value: &str,
    ) -> AppResult<()> {
        self.ledger.entry(date).update_pause(index, side, value)?;
        debug!(date = %date, index, ?side, value, "pause updated");
        self.persist()
    }

    pub fn remove_pause(&mut self, date: DateKey, index: usize) -> AppResult<PauseInterval> {
        let removed = self.ledger.entry(date).remove_pause(index)?;
        debug!(date = %date, index, "pause removed");
        self.persist()?;
        Ok(removed)
    }

    pub fn toggle_vacation(&mut self, date: DateKey) -> AppResult<bool> {
        let on = self.ledger.entry(date).toggle_vacation();
        debug!(date = %date, vacation = on, "vacation toggled");
        self.persist()?;
        Ok(on)
    }

    fn persist(&mut self) -> AppResult<()> {
        self.ledger.save(&mut self.store, &self.key)
    }
}
