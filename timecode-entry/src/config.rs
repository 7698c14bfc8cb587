//! Entry field configuration.

use serde::{Deserialize, Serialize};

/// How typed digits fill a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputStyle {
    /// Move to the next component once the focused one has all its digits.
    #[default]
    AutoAdvance,
    /// Stay on the component, shifting new digits in from the right.
    ContinuousWithinComponent,
    /// Stay on the component and keep appending digits without a width limit.
    Unbounded,
}

/// Whether typed values must be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Accept any value; the caller validates later.
    #[default]
    AllowInvalid,
    /// Reject keys that would make the focused component invalid.
    EnforceValid,
}

/// Configuration for [`handle_key`](crate::handle_key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    /// Digit entry style.
    pub input_style: InputStyle,
    /// Validation of typed values.
    pub validation_policy: ValidationPolicy,
    /// Show the days component even at a 24-hour limit.
    pub show_days: bool,
    /// Show the sub-frames component.
    pub show_sub_frames: bool,
}

impl EntryConfig {
    /// Set the input style.
    #[must_use]
    pub fn with_input_style(mut self, input_style: InputStyle) -> Self {
        self.input_style = input_style;
        self
    }

    /// Set the validation policy.
    #[must_use]
    pub fn with_validation_policy(mut self, validation_policy: ValidationPolicy) -> Self {
        self.validation_policy = validation_policy;
        self
    }

    /// Show or hide days.
    #[must_use]
    pub fn with_days(mut self, show: bool) -> Self {
        self.show_days = show;
        self
    }

    /// Show or hide sub-frames.
    #[must_use]
    pub fn with_sub_frames(mut self, show: bool) -> Self {
        self.show_sub_frames = show;
        self
    }
}
