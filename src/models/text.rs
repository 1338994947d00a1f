//! Free-form text fields as stored in the ledger.
//!
//! The stored format writes a cleared field as `""`; in memory that is `None`.
//! Older payloads may carry numbers (e.g. `"timeOffHours": 2`) or `null`.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Str(String),
    Int(i64),
    Float(f64),
}

/// Empty or whitespace-only input means "absent".
pub fn normalize(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawText>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(RawText::Str(s)) => normalize(&s),
        Some(RawText::Int(n)) => Some(n.to_string()),
        Some(RawText::Float(f)) => Some(f.to_string()),
    })
}

pub fn ser_opt_text<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}
