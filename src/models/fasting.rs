use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FastStatus {
    Fasted,
    Missed,
}

impl FastStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FastStatus::Fasted => "fasted",
            FastStatus::Missed => "missed",
        }
    }
}

impl FromStr for FastStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fasted" => Ok(FastStatus::Fasted),
            "missed" => Ok(FastStatus::Missed),
            _ => Err(anyhow::anyhow!("Unknown fast status: {}", s)),
        }
    }
}

/// One logged day of the fasting record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastEntry {
    pub date: String,
    pub status: FastStatus,
}

/// Season totals for the stats view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FastingStats {
    pub fasted: u32,
    pub missed: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}
