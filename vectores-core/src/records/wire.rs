//! Lenient decoders for fields the web forms send in more than one shape.

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::TimeSlot;

/// Accept `YYYY-MM-DD` or a stored ISO timestamp, keeping the date part.
pub(super) fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let day = raw.split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|err| D::Error::custom(format!("invalid date {raw:?}: {err}")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accept a JSON number or the text of the form's number input.
pub(super) fn quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) if text.trim().is_empty() => Ok(0.0),
        NumberOrText::Text(text) => text
            .trim()
            .parse()
            .map_err(|err| D::Error::custom(format!("invalid quantity {text:?}: {err}"))),
    }
}

/// Treat a missing, null or blank slot as "no fixed time".
pub(super) fn optional_slot<'de, D>(deserializer: D) -> Result<Option<TimeSlot>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(text) if !text.trim().is_empty() => text.parse().map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}
