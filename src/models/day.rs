use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbolic day, relative to the current calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Day {
    Today,              //  0
    Yesterday,          // -1
    DayBeforeYesterday, // -2
    Tomorrow,           // +1
}

impl Day {
    /// Days the previous wake-up may have happened on.
    pub const PAST: [Day; 3] = [Day::Today, Day::Yesterday, Day::DayBeforeYesterday];

    /// Days the next wake-up may happen on.
    pub const FUTURE: [Day; 2] = [Day::Today, Day::Tomorrow];

    /// Signed offset in days from today.
    pub fn offset(&self) -> i64 {
        match self {
            Day::Today => 0,
            Day::Yesterday => -1,
            Day::DayBeforeYesterday => -2,
            Day::Tomorrow => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Today => "Today",
            Day::Yesterday => "Yesterday",
            Day::DayBeforeYesterday => "DayBeforeYesterday",
            Day::Tomorrow => "Tomorrow",
        }
    }

    /// Human readable label used in prompts and the summary.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Today => "today",
            Day::Yesterday => "yesterday",
            Day::DayBeforeYesterday => "the day before yesterday",
            Day::Tomorrow => "tomorrow",
        }
    }

    /// Parse a day symbol (case-insensitive).
    /// The German labels written by older versions of the state file are accepted too.
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "today" | "heute" => Ok(Day::Today),
            "yesterday" | "gestern" => Ok(Day::Yesterday),
            "daybeforeyesterday" | "day_before_yesterday" | "vorgestern" => {
                Ok(Day::DayBeforeYesterday)
            }
            "tomorrow" | "morgen" => Ok(Day::Tomorrow),
            _ => Err(AppError::InvalidDaySelection(code.to_string())),
        }
    }
}

/// Offset for a raw day symbol.
pub fn day_offset(symbol: &str) -> AppResult<i64> {
    Day::from_code(symbol).map(|d| d.offset())
}

impl FromStr for Day {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::from_code(s)
    }
}

impl TryFrom<String> for Day {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Day::from_code(&value)
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.as_str().to_string()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
