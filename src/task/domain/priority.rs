//! Priority classes and their urgency ranking.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority class of a task, totally ordered `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Least urgent class.
    Low,
    /// Default urgency.
    Medium,
    /// Most urgent class.
    High,
}

impl Priority {
    /// Returns the numeric rank used by urgency comparison.
    ///
    /// `High` ranks 3, `Medium` 2, `Low` 1.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Ranks a raw priority label without rejecting it.
    ///
    /// Unrecognised labels rank 0, below every real priority class. Typed
    /// [`Priority`] values never take this path.
    #[must_use]
    pub fn rank_of_label(label: &str) -> u8 {
        Self::try_from(label).map_or(0, Self::rank)
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" | "alta" => Ok(Self::High),
            "medium" | "media" => Ok(Self::Medium),
            "low" | "baja" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
