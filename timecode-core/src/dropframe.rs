//! Drop-frame counting.
//!
//! Drop-frame timecode keeps 29.97 (and its 59.94 / 119.88 multiples) in step
//! with wall-clock time by skipping frame *numbers*, never frames:
//!
//! - frame numbers `0..dropped_per_minute` are skipped at second 0 of each minute
//! - except for minutes divisible by 10
//!
//! Everything that depends on this rule (component to frame-count conversion,
//! its inverse, and frame validity) goes through [`DropFrameConfig`], so the
//! three can never disagree.

use crate::frame_rate::TimecodeFrameRate;
use serde::{Deserialize, Serialize};

/// Drop-frame constants for one frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameConfig {
    /// Frame numbers dropped per minute (except every 10th minute).
    pub frames_dropped_per_minute: i64,
    /// Frame numbers per timecode second.
    pub nominal_fps: i64,
    /// Frames per 10 minutes, accounting for drops.
    pub frames_per_10_minutes: i64,
    /// Frames per minute for minutes that drop.
    pub frames_per_minute: i64,
}

impl DropFrameConfig {
    /// Build the constants for a nominal rate and drop count.
    #[must_use]
    pub const fn new(nominal_fps: i64, frames_dropped_per_minute: i64) -> Self {
        Self {
            frames_dropped_per_minute,
            nominal_fps,
            // 30 * 60 * 10 - 9 * 2 = 17982 for 29.97
            frames_per_10_minutes: nominal_fps * 600 - 9 * frames_dropped_per_minute,
            // 30 * 60 - 2 = 1798 for 29.97
            frames_per_minute: nominal_fps * 60 - frames_dropped_per_minute,
        }
    }

    /// Get the configuration for a frame rate, if it is a drop-frame rate.
    #[must_use]
    pub fn for_frame_rate(frame_rate: TimecodeFrameRate) -> Option<Self> {
        frame_rate
            .is_drop()
            .then(|| Self::new(frame_rate.nominal_fps(), frame_rate.frames_dropped_per_minute()))
    }

    /// Whether frame numbers are skipped at this minute and second.
    #[must_use]
    pub fn skips_frames_at(&self, minutes: i64, seconds: i64) -> bool {
        seconds == 0 && minutes % 10 != 0
    }

    /// Lowest valid frame number at this minute and second.
    #[must_use]
    pub fn first_frame_at(&self, minutes: i64, seconds: i64) -> i64 {
        if self.skips_frames_at(minutes, seconds) {
            self.frames_dropped_per_minute
        } else {
            0
        }
    }

    /// Frame numbers skipped before the start of `total_minutes` elapsed minutes.
    ///
    /// Linear in its argument for negative values as well, so negative
    /// component sets convert symmetrically.
    pub fn frames_dropped_before(&self, total_minutes: i64) -> Option<i64> {
        let dropping_minutes = total_minutes.checked_sub(total_minutes / 10)?;
        dropping_minutes.checked_mul(self.frames_dropped_per_minute)
    }

    /// Map an elapsed frame count onto the nominal (non-drop) frame numbering
    /// by adding back the skipped frame numbers. `frame_number` must be >= 0.
    pub fn nominal_frame_number(&self, frame_number: i64) -> Option<i64> {
        let drop = self.frames_dropped_per_minute;
        let ten_minute_blocks = frame_number / self.frames_per_10_minutes;
        let remainder = frame_number % self.frames_per_10_minutes;

        // The first minute of each block keeps all its frame numbers.
        let dropped_in_block = if remainder > drop {
            drop * ((remainder - drop) / self.frames_per_minute)
        } else {
            0
        };

        ten_minute_blocks
            .checked_mul(9 * drop)?
            .checked_add(dropped_in_block)?
            .checked_add(frame_number)
    }
}

/// Check if a frame number is skipped at the given minute and second.
#[must_use]
pub fn is_dropped_frame(minutes: i64, seconds: i64, frames: i64, frame_rate: TimecodeFrameRate) -> bool {
    match DropFrameConfig::for_frame_rate(frame_rate) {
        Some(config) => frames >= 0 && frames < config.first_frame_at(minutes, seconds),
        None => false,
    }
}
