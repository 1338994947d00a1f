//! The date-keyed ledger of day records and its persisted form.

use crate::errors::AppResult;
use crate::models::{DateKey, DayRecord};
use crate::store::KvStore;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Default storage key for the whole ledger.
pub const DEFAULT_LEDGER_KEY: &str = "workDays";

/// DateKey -> DayRecord. A missing key reads as an empty record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    days: BTreeMap<DateKey, DayRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: DateKey) -> Option<&DayRecord> {
        self.days.get(&date)
    }

    pub fn get_or_default(&self, date: DateKey) -> Cow<'_, DayRecord> {
        match self.days.get(&date) {
            Some(day) => Cow::Borrowed(day),
            None => Cow::Owned(DayRecord::default()),
        }
    }

    /// Mutable access, creating an empty record on first touch.
    pub fn entry(&mut self, date: DateKey) -> &mut DayRecord {
        self.days.entry(date).or_default()
    }

    pub fn insert(&mut self, date: DateKey, day: DayRecord) -> Option<DayRecord> {
        self.days.insert(date, day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Serialize as a JSON object keyed by `YYYY-MM-DD`, sorted by date.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.days)?)
    }

    /// Parse the stored JSON form.
    ///
    /// Entries whose key is not a date or whose value is not a day record
    /// are dropped; anything that is not a JSON object yields an error.
    pub fn from_json(s: &str) -> AppResult<Self> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(s)?;
        let mut days = BTreeMap::new();

        for (key, value) in raw {
            let Ok(date) = key.parse::<DateKey>() else {
                warn!(key = %key, "skipping ledger entry with invalid date key");
                continue;
            };
            match serde_json::from_value::<DayRecord>(value) {
                Ok(day) => {
                    days.insert(date, day);
                }
                Err(e) => warn!(date = %date, error = %e, "skipping malformed day record"),
            }
        }

        Ok(Self { days })
    }

    /// Load from the store. Absent or unreadable data gives an empty ledger.
    pub fn load<S: KvStore + ?Sized>(store: &S, key: &str) -> Self {
        let stored = match store.load(key) {
            Ok(Some(s)) => s,
            Ok(None) => {
                debug!(key, "no stored ledger, starting empty");
                return Self::new();
            }
            Err(e) => {
                warn!(key, error = %e, "failed to read stored ledger, starting empty");
                return Self::new();
            }
        };

        match Self::from_json(&stored) {
            Ok(ledger) => {
                debug!(key, entries = ledger.len(), "ledger loaded");
                ledger
            }
            Err(e) => {
                warn!(key, error = %e, "stored ledger is corrupt, starting empty");
                Self::new()
            }
        }
    }

    /// Persist the whole ledger under `key`.
    pub fn save<S: KvStore + ?Sized>(&self, store: &mut S, key: &str) -> AppResult<()> {
        let json = self.to_json()?;
        store.save(key, &json)?;
        debug!(key, entries = self.len(), "ledger saved");
        Ok(())
    }
}
