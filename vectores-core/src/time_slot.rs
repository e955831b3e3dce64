//! Fixed wall-clock appointments.
//!
//! A [`TimeSlot`] is the hour and minute a technician has promised to be at
//! a property. Slots are written as `HH:MM` by the office staff and compared
//! by their minute of the day. The hour may drop its leading zero (`9:30`);
//! the minute is always two digits.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

const SLOT_FORMAT: &str = "%H:%M";

/// A committed visiting time, precise to the minute.
///
/// # Examples
/// ```
/// use vectores_core::TimeSlot;
///
/// # fn main() -> Result<(), vectores_core::TimeSlotError> {
/// let slot: TimeSlot = "9:30".parse()?;
/// assert_eq!(slot.minute_of_day(), 570);
/// assert_eq!(slot.to_string(), "09:30");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TimeSlot(NaiveTime);

/// Errors returned when parsing a [`TimeSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSlotError {
    /// The text is not an `HH:MM` time of day.
    #[error("{input:?} is not a time of day in HH:MM form")]
    Malformed {
        /// Offending input, untrimmed.
        input: String,
    },
}

impl TimeSlot {
    /// Build a slot from an hour (`0..24`) and minute (`0..60`).
    ///
    /// Returns `None` when either component is out of range.
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Hour component.
    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Minute component.
    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight (`hour * 60 + minute`).
    #[must_use]
    pub fn minute_of_day(self) -> u16 {
        u16::try_from(self.hour() * 60 + self.minute()).unwrap_or(u16::MAX)
    }
}

impl FromStr for TimeSlot {
    type Err = TimeSlotError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeSlotError::Malformed {
            input: input.to_owned(),
        };
        let text = input.trim();
        let two_digit_minute = text
            .split_once(':')
            .is_some_and(|(_, minute)| minute.len() == 2);
        if !two_digit_minute {
            return Err(malformed());
        }
        NaiveTime::parse_from_str(text, SLOT_FORMAT)
            .map(Self)
            .map_err(|_| malformed())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SLOT_FORMAT))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = TimeSlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}
