//! SMPTE timecode values, arithmetic and conversion.
//!
//! This crate provides:
//!
//! - **Frame rates**: the closed set of timecode rates (23.976 through
//!   120-drop) with their rational rates, plus video frame rates
//! - **Conversion engine**: exact elapsed-frame ⇄ component conversion,
//!   including drop-frame counting
//! - **Validation**: context-sensitive component ranges with clamping,
//!   wrapping or raw storage
//! - **Arithmetic**: checked, saturating and wrapping add/subtract/multiply/divide
//! - **Codecs**: timecode strings, real time in seconds, exact rational seconds
//!   and a structured serde form
//!
//! # Quick Start
//!
//! ```rust
//! use timecode_core::{Components, Properties, Timecode, TimecodeFrameRate};
//!
//! let props = Properties::new(TimecodeFrameRate::Fps24);
//!
//! // Create a timecode
//! let tc = Timecode::new(Components::hmsf(1, 30, 45, 12), props).unwrap();
//! assert_eq!(tc.to_string(), "01:30:45:12");
//!
//! // Parse from string
//! let tc2 = Timecode::new("01:30:45:12", props).unwrap();
//! assert_eq!(tc, tc2);
//!
//! // Elapsed frames
//! assert_eq!(tc.frame_count().whole_frames(), 130_692);
//!
//! // Arithmetic
//! let tc3 = tc.checked_add(Components::hmsf(0, 0, 0, 100)).unwrap();
//! assert_eq!(tc3.to_string(), "01:30:49:16");
//! ```
//!
//! # Drop-Frame Timecode
//!
//! Drop-frame rates skip frame numbers at the start of most minutes so the
//! timecode keeps pace with wall-clock time:
//!
//! ```rust
//! use timecode_core::{Properties, Timecode, TimecodeFrameRate};
//!
//! let props = Properties::new(TimecodeFrameRate::Fps29_97d);
//! let tc = Timecode::new("00:00:59;29", props).unwrap();
//! assert_eq!(tc.next_frame().to_string(), "00:01:00;02");
//!
//! // frames 00 and 01 do not exist at minute 1
//! assert!(Timecode::new("00:01:00;00", props).is_err());
//! ```
//!
//! # Out-of-Range Values
//!
//! ```rust
//! use timecode_core::{Components, Properties, Timecode, TimecodeFrameRate, ValidationRule};
//!
//! let props = Properties::new(TimecodeFrameRate::Fps24);
//! let over = Components::hmsf(25, 0, 0, 0);
//!
//! assert!(Timecode::new(over, props).is_err());
//! let clamped = Timecode::with_rule(over, props, ValidationRule::Clamping).unwrap();
//! assert_eq!(clamped.to_string(), "23:59:59:23");
//! let wrapped = Timecode::with_rule(over, props, ValidationRule::Wrapping).unwrap();
//! assert_eq!(wrapped.to_string(), "01:00:00:00");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

mod arithmetic;
pub mod components;
mod conversion;
pub mod counting;
pub mod dropframe;
pub mod error;
pub mod format;
pub mod fraction;
pub mod frame_count;
pub mod frame_rate;
pub mod interval;
pub mod properties;
mod realtime;
pub mod record;
pub mod source;
pub mod sub_frames;
pub mod timecode;
pub mod upper_limit;
pub mod validation;
pub mod video_rate;

// Re-export main types
pub use arithmetic::TimecodeOperand;
pub use components::{Components, TimecodeComponent};
pub use error::{Result, TimecodeError};
pub use format::StringFormat;
pub use fraction::Fraction;
pub use frame_count::{FrameCount, FrameCountValue};
pub use frame_rate::TimecodeFrameRate;
pub use interval::{Sign, TimecodeInterval};
pub use properties::Properties;
pub use record::TimecodeRecord;
pub use source::{RichTimecodeSourceValue, TimecodeSourceValue};
pub use sub_frames::SubFramesBase;
pub use timecode::Timecode;
pub use upper_limit::UpperLimit;
pub use validation::ValidationRule;
pub use video_rate::VideoFrameRate;

// Re-export drop-frame utilities
pub use dropframe::{is_dropped_frame, DropFrameConfig};

/// Create a timecode from hours, minutes, seconds and frames at default
/// sub-frames base and upper limit.
///
/// # Example
/// ```rust
/// use timecode_core::{timecode, TimecodeFrameRate};
///
/// let tc = timecode(1, 30, 45, 12, TimecodeFrameRate::Fps24).unwrap();
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
pub fn timecode(
    hours: i32,
    minutes: i32,
    seconds: i32,
    frames: i32,
    frame_rate: TimecodeFrameRate,
) -> Result<Timecode> {
    Timecode::new(
        Components::hmsf(hours, minutes, seconds, frames),
        Properties::new(frame_rate),
    )
}

/// Real time between two timecodes in seconds (negative if `end` is before
/// `start`).
#[must_use]
pub fn duration_seconds(start: &Timecode, end: &Timecode) -> f64 {
    start.interval(end).real_time_value()
}
