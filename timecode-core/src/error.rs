//! Error types for timecode operations.

use crate::components::TimecodeComponent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// Invalid timecode format in string.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// One or more components are outside their valid range.
    #[error("Invalid timecode components: {}", join_components(components))]
    InvalidComponents {
        /// The offending components, largest unit first.
        components: BTreeSet<TimecodeComponent>,
    },

    /// A rational rate or frame duration that matches no known frame rate.
    #[error("Invalid frame rate: {numerator}/{denominator}")]
    InvalidFrameRate {
        /// Frame rate numerator.
        numerator: i64,
        /// Frame rate denominator.
        denominator: i64,
    },

    /// A frame rate identifier that is not recognised.
    #[error("Unknown frame rate: {value}")]
    UnknownFrameRate {
        /// The identifier that failed to parse.
        value: String,
    },

    /// A sub-frames base other than 80, 100 or 4.
    #[error("Invalid sub-frames base: {value}")]
    InvalidSubFramesBase {
        /// The rejected base.
        value: u32,
    },

    /// Overflow during timecode arithmetic.
    #[error("Timecode overflow")]
    Overflow,

    /// Underflow during timecode arithmetic.
    #[error("Timecode underflow")]
    Underflow,

    /// An operation produced a NaN or infinite frame position.
    #[error("Non-finite value in {operation}")]
    NonFinite {
        /// The operation that produced the value.
        operation: String,
    },

    /// No timecode is present in the source.
    #[error("No timecode present")]
    NoTimecode,

    /// An encoded timecode carries neither components nor text.
    #[error("Encoded timecode has no components or text")]
    MissingRepresentation,
}

fn join_components(components: &BTreeSet<TimecodeComponent>) -> String {
    components
        .iter()
        .map(TimecodeComponent::name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl TimecodeError {
    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an invalid components error.
    pub fn invalid_components(components: impl IntoIterator<Item = TimecodeComponent>) -> Self {
        Self::InvalidComponents {
            components: components.into_iter().collect(),
        }
    }

    /// Create an invalid frame rate error.
    pub fn invalid_frame_rate(numerator: i64, denominator: i64) -> Self {
        Self::InvalidFrameRate {
            numerator,
            denominator,
        }
    }

    /// Create an unknown frame rate error.
    pub fn unknown_frame_rate(value: impl Into<String>) -> Self {
        Self::UnknownFrameRate {
            value: value.into(),
        }
    }

    /// Create a non-finite value error.
    pub fn non_finite(operation: impl Into<String>) -> Self {
        Self::NonFinite {
            operation: operation.into(),
        }
    }
}
