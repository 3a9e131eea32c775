use crate::core::time::{minutes_to_time, time_to_minutes_with};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::logging::{self, Logger};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    #[strum(serialize = "monday", serialize = "mon", to_string = "monday")]
    #[serde(alias = "mon")]
    Monday,
    #[strum(serialize = "tuesday", serialize = "tue", to_string = "tuesday")]
    #[serde(alias = "tue")]
    Tuesday,
    #[strum(serialize = "wednesday", serialize = "wed", to_string = "wednesday")]
    #[serde(alias = "wed")]
    Wednesday,
    #[strum(serialize = "thursday", serialize = "thu", to_string = "thursday")]
    #[serde(alias = "thu")]
    Thursday,
    #[strum(serialize = "friday", serialize = "fri", to_string = "friday")]
    #[serde(alias = "fri")]
    Friday,
    #[strum(serialize = "saturday", serialize = "sat", to_string = "saturday")]
    #[serde(alias = "sat")]
    Saturday,
    #[strum(serialize = "sunday", serialize = "sun", to_string = "sunday")]
    #[serde(alias = "sun")]
    Sunday,
}

impl DayOfWeek {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid day of the week: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<DayOfWeek>()
            ))
        })
    }
}

/// Pan direction for the court window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(serialize = "left", serialize = "<", serialize = "l", to_string = "left")]
    Left,
    #[strum(serialize = "right", serialize = ">", serialize = "r", to_string = "right")]
    Right,
}

impl Direction {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid direction: '{}'. Valid directions: {}",
                s.trim(),
                valid_csv::<Direction>()
            ))
        })
    }
}

/// Wall-clock interval as delivered by the branch record: two `HH:mm` strings.
/// Nothing checks that `start` precedes `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn from_minutes(start: u32, end: u32) -> Self {
        Self::new(minutes_to_time(start), minutes_to_time(end))
    }

    pub fn start_minutes(&self) -> u32 {
        self.start_minutes_with(logging::global())
    }

    pub fn end_minutes(&self) -> u32 {
        self.end_minutes_with(logging::global())
    }

    pub fn start_minutes_with(&self, logger: &Logger) -> u32 {
        time_to_minutes_with(logger, Some(&self.start))
    }

    pub fn end_minutes_with(&self, logger: &Logger) -> u32 {
        time_to_minutes_with(logger, Some(&self.end))
    }

    /// Half-open: `start <= minute < end`.
    pub fn contains(&self, minute: u32) -> bool {
        self.start_minutes() <= minute && minute < self.end_minutes()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
