use crate::utils::time::{duration_hours, parse_time};
use serde::{Deserialize, Serialize};

use super::text::{opt_text, ser_opt_text};

/// A break inside a working day. Either side may still be missing while the
/// user is typing; an incomplete pause contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PauseInterval {
    #[serde(
        rename = "pauseStart",
        default,
        deserialize_with = "opt_text",
        serialize_with = "ser_opt_text"
    )]
    pub start: Option<String>,
    #[serde(
        rename = "pauseEnd",
        default,
        deserialize_with = "opt_text",
        serialize_with = "ser_opt_text"
    )]
    pub end: Option<String>,
}

/// Which side of a pause an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseEnd {
    Start,
    End,
}

impl PauseInterval {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: super::text::normalize(start),
            end: super::text::normalize(end),
        }
    }

    /// Length in hours, or `None` unless both sides parse.
    pub fn duration_hours(&self) -> Option<f64> {
        let start = parse_time(self.start.as_deref()?)?;
        let end = parse_time(self.end.as_deref()?)?;
        Some(duration_hours(start, end))
    }

    /// `start-end`, with a missing side left blank.
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            self.start.as_deref().unwrap_or(""),
            self.end.as_deref().unwrap_or("")
        )
    }

    pub fn set(&mut self, side: PauseEnd, value: &str) {
        let v = super::text::normalize(value);
        match side {
            PauseEnd::Start => self.start = v,
            PauseEnd::End => self.end = v,
        }
    }
}
