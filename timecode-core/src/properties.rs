//! Timecode configuration bundle.

use crate::frame_count::FrameCount;
use crate::frame_rate::TimecodeFrameRate;
use crate::sub_frames::SubFramesBase;
use crate::upper_limit::UpperLimit;
use serde::{Deserialize, Serialize};

/// Frame rate, sub-frames base and upper limit carried by every timecode.
///
/// Two timecodes can be combined without implicit conversion only when their
/// properties match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Properties {
    /// Frame rate.
    pub frame_rate: TimecodeFrameRate,
    /// Sub-frames base.
    #[serde(default)]
    pub sub_frames_base: SubFramesBase,
    /// Upper limit of the timeline.
    #[serde(default)]
    pub upper_limit: UpperLimit,
}

impl Properties {
    /// Properties at `frame_rate` with default sub-frames base and upper limit.
    #[must_use]
    pub fn new(frame_rate: TimecodeFrameRate) -> Self {
        Self {
            frame_rate,
            ..Default::default()
        }
    }

    /// Replace the frame rate.
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: TimecodeFrameRate) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Replace the sub-frames base.
    #[must_use]
    pub fn with_sub_frames_base(mut self, sub_frames_base: SubFramesBase) -> Self {
        self.sub_frames_base = sub_frames_base;
        self
    }

    /// Replace the upper limit.
    #[must_use]
    pub fn with_upper_limit(mut self, upper_limit: UpperLimit) -> Self {
        self.upper_limit = upper_limit;
        self
    }

    /// Number of sub-frames in the whole timeline (exclusive upper bound of
    /// valid sub-frame counts).
    #[must_use]
    pub fn max_sub_frame_count(&self) -> i64 {
        self.frame_rate.max_total_frames(self.upper_limit) * self.sub_frames_base.raw_value()
    }

    /// Largest frame count a valid timecode can hold: the last frame, with
    /// its last sub-frame.
    #[must_use]
    pub fn max_frame_count_expressible(&self) -> FrameCount {
        FrameCount::split(
            self.frame_rate.max_total_frames_expressible(self.upper_limit),
            self.sub_frames_base.max_sub_frames_expressible(),
            self.sub_frames_base,
        )
    }
}

impl From<TimecodeFrameRate> for Properties {
    fn from(frame_rate: TimecodeFrameRate) -> Self {
        Self::new(frame_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builders() {
        let props = Properties::new(TimecodeFrameRate::Fps25)
            .with_sub_frames_base(SubFramesBase::Max100SubFrames)
            .with_upper_limit(UpperLimit::Max100Days);
        assert_eq!(props.frame_rate, TimecodeFrameRate::Fps25);
        assert_eq!(props.sub_frames_base, SubFramesBase::Max100SubFrames);
        assert_eq!(props.upper_limit, UpperLimit::Max100Days);
    }

    #[test]
    fn test_max_counts() {
        let props = Properties::new(TimecodeFrameRate::Fps24);
        assert_eq!(props.max_sub_frame_count(), 2_073_600 * 80);
        assert_eq!(
            props.max_frame_count_expressible().sub_frame_count(),
            props.max_sub_frame_count() - 1
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let props: Properties = serde_json::from_str(r#"{"frame_rate": "29.97d"}"#).unwrap();
        assert_eq!(props, Properties::new(TimecodeFrameRate::Fps29_97d));
    }
}
