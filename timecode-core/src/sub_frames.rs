//! Sub-frame subdivision of a frame.

use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of sub-frames each frame is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SubFramesBase {
    /// 80 sub-frames per frame (0-79), common in audio workstations.
    Max80SubFrames,
    /// 100 sub-frames per frame (0-99).
    Max100SubFrames,
    /// Quarter-frames (0-3), as used by MIDI timecode.
    QuarterFrames,
}

impl SubFramesBase {
    /// Every case, in order.
    pub const ALL: [Self; 3] = [
        Self::Max80SubFrames,
        Self::Max100SubFrames,
        Self::QuarterFrames,
    ];

    /// Number of sub-frames per frame.
    #[must_use]
    pub const fn raw_value(&self) -> i64 {
        match self {
            Self::Max80SubFrames => 80,
            Self::Max100SubFrames => 100,
            Self::QuarterFrames => 4,
        }
    }

    /// Largest sub-frame number.
    #[must_use]
    pub const fn max_sub_frames_expressible(&self) -> i64 {
        self.raw_value() - 1
    }

    /// Digits needed to display the sub-frames component.
    #[must_use]
    pub fn number_of_digits(&self) -> usize {
        self.max_sub_frames_expressible().to_string().len()
    }

    /// Rescale a sub-frame value from this base to `other`, truncating.
    ///
    /// The conversion is lossy: 79 of 80 becomes 98 of 100, which converts
    /// back to 78 of 80.
    #[must_use]
    pub fn convert(&self, sub_frames: i64, other: SubFramesBase) -> i64 {
        if *self == other {
            return sub_frames;
        }
        ((sub_frames as f64 / self.raw_value() as f64) * other.raw_value() as f64) as i64
    }
}

impl Default for SubFramesBase {
    fn default() -> Self {
        Self::Max80SubFrames
    }
}

impl fmt::Display for SubFramesBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuarterFrames => write!(f, "Quarter-frames"),
            _ => write!(f, "{} sub-frames", self.raw_value()),
        }
    }
}

impl TryFrom<u32> for SubFramesBase {
    type Error = TimecodeError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            80 => Ok(Self::Max80SubFrames),
            100 => Ok(Self::Max100SubFrames),
            4 => Ok(Self::QuarterFrames),
            other => Err(TimecodeError::InvalidSubFramesBase { value: other }),
        }
    }
}

impl From<SubFramesBase> for u32 {
    fn from(base: SubFramesBase) -> Self {
        base.raw_value() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digits() {
        assert_eq!(SubFramesBase::Max80SubFrames.number_of_digits(), 2);
        assert_eq!(SubFramesBase::Max100SubFrames.number_of_digits(), 2);
        assert_eq!(SubFramesBase::QuarterFrames.number_of_digits(), 1);
    }

    #[test]
    fn test_convert_is_truncating() {
        let base = SubFramesBase::Max80SubFrames;
        assert_eq!(base.convert(40, SubFramesBase::Max100SubFrames), 50);
        assert_eq!(base.convert(79, SubFramesBase::Max100SubFrames), 98);
        assert_eq!(SubFramesBase::Max100SubFrames.convert(98, base), 78);
        assert_eq!(base.convert(79, SubFramesBase::QuarterFrames), 3);
        assert_eq!(base.convert(12, base), 12);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SubFramesBase::Max100SubFrames).unwrap();
        assert_eq!(json, "100");
        let decoded: SubFramesBase = serde_json::from_str("4").unwrap();
        assert_eq!(decoded, SubFramesBase::QuarterFrames);
        assert!(serde_json::from_str::<SubFramesBase>("3").is_err());
    }
}
