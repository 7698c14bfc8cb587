//! Timeline upper limit.

use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Boundary at which a timecode timeline wraps or is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UpperLimit {
    /// 00:00:00:00 up to (but not including) 24 hours. Days are always 0.
    #[serde(rename = "24 hours")]
    Max24Hours,
    /// Up to (but not including) 100 days.
    #[serde(rename = "100 days")]
    Max100Days,
}

impl UpperLimit {
    /// Number of whole days the timeline spans.
    #[must_use]
    pub const fn max_days(&self) -> i64 {
        match self {
            Self::Max24Hours => 1,
            Self::Max100Days => 100,
        }
    }

    /// Largest valid days component.
    #[must_use]
    pub const fn max_days_expressible(&self) -> i64 {
        self.max_days() - 1
    }

    /// Identifier string.
    #[must_use]
    pub fn string_value(&self) -> &'static str {
        match self {
            Self::Max24Hours => "24 hours",
            Self::Max100Days => "100 days",
        }
    }
}

impl Default for UpperLimit {
    fn default() -> Self {
        Self::Max24Hours
    }
}

impl fmt::Display for UpperLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.string_value())
    }
}

impl FromStr for UpperLimit {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "24 hours" => Ok(Self::Max24Hours),
            "100 days" => Ok(Self::Max100Days),
            other => Err(TimecodeError::invalid_format(format!(
                "Unknown upper limit: {}",
                other
            ))),
        }
    }
}
