use super::day::Day;
use serde::{Deserialize, Serialize};

/// One wake-up event as selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSection {
    #[serde(alias = "Day")]
    pub day: Day,
    #[serde(alias = "Hour")]
    pub hour: u32, // 0..=23
    #[serde(alias = "Minute")]
    pub minute: u32, // 0..=59, the prompts only offer multiples of 5
}

impl InputSection {
    pub fn new(day: Day, hour: u32, minute: u32) -> Self {
        Self { day, hour, minute }
    }
}

impl Default for InputSection {
    fn default() -> Self {
        Self::new(Day::Today, 0, 0)
    }
}

/// The last selections, persisted between runs.
/// PascalCase keys from older state files are accepted on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValues {
    #[serde(alias = "PreviousWakeup")]
    pub previous_wakeup: InputSection,
    #[serde(alias = "FutureWakeup")]
    pub future_wakeup: InputSection,
}
