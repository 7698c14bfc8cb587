//! Error types for timecode entry.

use thiserror::Error;
use timecode_core::TimecodeComponent;

/// Timecode entry error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The component is not shown by the field's configuration.
    #[error("Component not shown in this field: {0}")]
    HiddenComponent(TimecodeComponent),

    /// Core library error.
    #[error("Timecode error: {0}")]
    Timecode(#[from] timecode_core::TimecodeError),
}

/// Result type for timecode entry operations.
pub type Result<T> = std::result::Result<T, EntryError>;
