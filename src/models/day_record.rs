use crate::core::calculator::worked;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_hours;
use serde::{Deserialize, Deserializer, Serialize};

use super::pause::{PauseEnd, PauseInterval};
use super::text::{normalize, opt_text, ser_opt_text};

/// Everything recorded for one business day.
///
/// A date with no record behaves exactly like `DayRecord::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(default, deserialize_with = "opt_text", serialize_with = "ser_opt_text")]
    pub work_start: Option<String>,
    #[serde(default, deserialize_with = "opt_text", serialize_with = "ser_opt_text")]
    pub work_end: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pauses: Vec<PauseInterval>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_vacation: bool,
    #[serde(default, deserialize_with = "opt_text", serialize_with = "ser_opt_text")]
    pub time_off_hours: Option<String>,
}

/// Single-value fields editable on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayField {
    Start,
    End,
    TimeOff,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl DayRecord {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            work_start: normalize(start),
            work_end: normalize(end),
            ..Default::default()
        }
    }

    pub fn with_pause(mut self, start: &str, end: &str) -> Self {
        self.pauses.push(PauseInterval::new(start, end));
        self
    }

    pub fn with_time_off(mut self, hours: &str) -> Self {
        self.time_off_hours = normalize(hours);
        self
    }

    pub fn vacation() -> Self {
        Self {
            is_vacation: true,
            ..Default::default()
        }
    }

    /// Net worked hours; see [`worked::worked_hours`].
    pub fn worked_hours(&self) -> f64 {
        worked::worked_hours(self)
    }

    /// Parsed time-off amount, `None` when empty or not a number.
    pub fn time_off(&self) -> Option<f64> {
        self.time_off_hours.as_deref().and_then(parse_hours)
    }

    /// Replace one field; an empty value clears it.
    pub fn set_field(&mut self, field: DayField, value: &str) {
        let v = normalize(value);
        match field {
            DayField::Start => self.work_start = v,
            DayField::End => self.work_end = v,
            DayField::TimeOff => self.time_off_hours = v,
        }
    }

    pub fn add_pause(&mut self) -> usize {
        self.pauses.push(PauseInterval::default());
        self.pauses.len() - 1
    }

    pub fn update_pause(&mut self, index: usize, side: PauseEnd, value: &str) -> AppResult<()> {
        let pause = self
            .pauses
            .get_mut(index)
            .ok_or(AppError::InvalidPause(index))?;
        pause.set(side, value);
        Ok(())
    }

    pub fn remove_pause(&mut self, index: usize) -> AppResult<PauseInterval> {
        if index >= self.pauses.len() {
            return Err(AppError::InvalidPause(index));
        }
        Ok(self.pauses.remove(index))
    }

    pub fn toggle_vacation(&mut self) -> bool {
        self.is_vacation = !self.is_vacation;
        self.is_vacation
    }
}
