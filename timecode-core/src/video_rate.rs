//! Video frame rates.
//!
//! A video rate describes how fast pictures are captured or displayed, which is
//! related to but not the same thing as a timecode rate: 29.97p video can be
//! labelled with either 29.97 or 29.97d timecode.

use crate::fraction::Fraction;
use crate::frame_rate::TimecodeFrameRate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Video frame rate, progressive (`p`) or interlaced (`i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VideoFrameRate {
    /// 23.98p (24000/1001)
    #[serde(rename = "23.98p")]
    Fps23_98p,
    /// 24p
    #[serde(rename = "24p")]
    Fps24p,
    /// 25p
    #[serde(rename = "25p")]
    Fps25p,
    /// 25i (50 fields per second)
    #[serde(rename = "25i")]
    Fps25i,
    /// 29.97p (30000/1001)
    #[serde(rename = "29.97p")]
    Fps29_97p,
    /// 29.97i (59.94 fields per second)
    #[serde(rename = "29.97i")]
    Fps29_97i,
    /// 30p
    #[serde(rename = "30p")]
    Fps30p,
    /// 47.95p (48000/1001)
    #[serde(rename = "47.95p")]
    Fps47_95p,
    /// 48p
    #[serde(rename = "48p")]
    Fps48p,
    /// 50p
    #[serde(rename = "50p")]
    Fps50p,
    /// 50i (100 fields per second)
    #[serde(rename = "50i")]
    Fps50i,
    /// 59.94p (60000/1001)
    #[serde(rename = "59.94p")]
    Fps59_94p,
    /// 59.94i (119.88 fields per second)
    #[serde(rename = "59.94i")]
    Fps59_94i,
    /// 60p
    #[serde(rename = "60p")]
    Fps60p,
    /// 60i (120 fields per second)
    #[serde(rename = "60i")]
    Fps60i,
    /// 90p
    #[serde(rename = "90p")]
    Fps90p,
    /// 95.9p (96000/1001)
    #[serde(rename = "95.9p")]
    Fps95_9p,
    /// 96p
    #[serde(rename = "96p")]
    Fps96p,
    /// 100p
    #[serde(rename = "100p")]
    Fps100p,
    /// 119.88p (120000/1001)
    #[serde(rename = "119.88p")]
    Fps119_88p,
    /// 120p
    #[serde(rename = "120p")]
    Fps120p,
}

impl VideoFrameRate {
    /// Every case, in order.
    pub const ALL: [Self; 21] = [
        Self::Fps23_98p,
        Self::Fps24p,
        Self::Fps25p,
        Self::Fps25i,
        Self::Fps29_97p,
        Self::Fps29_97i,
        Self::Fps30p,
        Self::Fps47_95p,
        Self::Fps48p,
        Self::Fps50p,
        Self::Fps50i,
        Self::Fps59_94p,
        Self::Fps59_94i,
        Self::Fps60p,
        Self::Fps60i,
        Self::Fps90p,
        Self::Fps95_9p,
        Self::Fps96p,
        Self::Fps100p,
        Self::Fps119_88p,
        Self::Fps120p,
    ];

    /// Identifier string, e.g. `"29.97i"`.
    #[must_use]
    pub fn string_value(&self) -> &'static str {
        match self {
            Self::Fps23_98p => "23.98p",
            Self::Fps24p => "24p",
            Self::Fps25p => "25p",
            Self::Fps25i => "25i",
            Self::Fps29_97p => "29.97p",
            Self::Fps29_97i => "29.97i",
            Self::Fps30p => "30p",
            Self::Fps47_95p => "47.95p",
            Self::Fps48p => "48p",
            Self::Fps50p => "50p",
            Self::Fps50i => "50i",
            Self::Fps59_94p => "59.94p",
            Self::Fps59_94i => "59.94i",
            Self::Fps60p => "60p",
            Self::Fps60i => "60i",
            Self::Fps90p => "90p",
            Self::Fps95_9p => "95.9p",
            Self::Fps96p => "96p",
            Self::Fps100p => "100p",
            Self::Fps119_88p => "119.88p",
            Self::Fps120p => "120p",
        }
    }

    /// Whole frames per second as a rational number.
    #[must_use]
    pub fn rate(&self) -> Fraction {
        match self {
            Self::Fps23_98p => Fraction::new(24000, 1001),
            Self::Fps24p => Fraction::new(24, 1),
            Self::Fps25p | Self::Fps25i => Fraction::new(25, 1),
            Self::Fps29_97p | Self::Fps29_97i => Fraction::new(30000, 1001),
            Self::Fps30p => Fraction::new(30, 1),
            Self::Fps47_95p => Fraction::new(48000, 1001),
            Self::Fps48p => Fraction::new(48, 1),
            Self::Fps50p | Self::Fps50i => Fraction::new(50, 1),
            Self::Fps59_94p | Self::Fps59_94i => Fraction::new(60000, 1001),
            Self::Fps60p | Self::Fps60i => Fraction::new(60, 1),
            Self::Fps90p => Fraction::new(90, 1),
            Self::Fps95_9p => Fraction::new(96000, 1001),
            Self::Fps96p => Fraction::new(96, 1),
            Self::Fps100p => Fraction::new(100, 1),
            Self::Fps119_88p => Fraction::new(120000, 1001),
            Self::Fps120p => Fraction::new(120, 1),
        }
    }

    /// Duration of one whole frame in seconds.
    #[must_use]
    pub fn frame_duration(&self) -> Fraction {
        self.rate().inverted()
    }

    /// Whether the rate is interlaced (two fields per frame).
    #[must_use]
    pub fn is_interlaced(&self) -> bool {
        matches!(
            self,
            Self::Fps25i | Self::Fps29_97i | Self::Fps50i | Self::Fps59_94i | Self::Fps60i
        )
    }

    /// Fields per second; equal to the frame rate for progressive video.
    #[must_use]
    pub fn field_rate(&self) -> Fraction {
        let rate = self.rate();
        if self.is_interlaced() {
            Fraction::new(rate.numerator() * 2, rate.denominator())
        } else {
            rate
        }
    }

    /// The timecode rate used to label this video, if any.
    ///
    /// Only 29.97, 59.94 and 119.88 based video has a drop-frame timecode
    /// counterpart; asking for drop-frame on any other rate yields `None`.
    #[must_use]
    pub fn timecode_frame_rate(&self, drop: bool) -> Option<TimecodeFrameRate> {
        use TimecodeFrameRate as Tc;

        let rate = match (self, drop) {
            (Self::Fps23_98p, false) => Tc::Fps23_976,
            (Self::Fps24p, false) => Tc::Fps24,
            (Self::Fps25p | Self::Fps25i, false) => Tc::Fps25,
            (Self::Fps29_97p | Self::Fps29_97i, false) => Tc::Fps29_97,
            (Self::Fps29_97p | Self::Fps29_97i, true) => Tc::Fps29_97d,
            (Self::Fps30p, false) => Tc::Fps30,
            (Self::Fps47_95p, false) => Tc::Fps47_952,
            (Self::Fps48p, false) => Tc::Fps48,
            (Self::Fps50p | Self::Fps50i, false) => Tc::Fps50,
            (Self::Fps59_94p | Self::Fps59_94i, false) => Tc::Fps59_94,
            (Self::Fps59_94p | Self::Fps59_94i, true) => Tc::Fps59_94d,
            (Self::Fps60p | Self::Fps60i, false) => Tc::Fps60,
            (Self::Fps90p, false) => Tc::Fps90,
            (Self::Fps95_9p, false) => Tc::Fps95_904,
            (Self::Fps96p, false) => Tc::Fps96,
            (Self::Fps100p, false) => Tc::Fps100,
            (Self::Fps119_88p, false) => Tc::Fps119_88,
            (Self::Fps119_88p, true) => Tc::Fps119_88d,
            (Self::Fps120p, false) => Tc::Fps120,
            _ => return None,
        };
        Some(rate)
    }

    /// Match a rational frame rate, by literal fraction or by value.
    #[must_use]
    pub fn from_rate(rate: Fraction, interlaced: bool) -> Option<Self> {
        let ratio = rate.double_value();
        Self::ALL.into_iter().find(|case| {
            let case_rate = case.rate();
            case.is_interlaced() == interlaced
                && (case_rate.is_equal(&rate) || case_rate.double_value() == ratio)
        })
    }
}

impl fmt::Display for VideoFrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.string_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_rate() {
        assert_eq!(VideoFrameRate::Fps29_97i.field_rate(), Fraction::new(60000, 1001));
        assert_eq!(VideoFrameRate::Fps25i.field_rate(), Fraction::new(50, 1));
        assert_eq!(VideoFrameRate::Fps25p.field_rate(), Fraction::new(25, 1));
    }

    #[test]
    fn test_timecode_frame_rate() {
        assert_eq!(
            VideoFrameRate::Fps29_97i.timecode_frame_rate(true),
            Some(TimecodeFrameRate::Fps29_97d)
        );
        assert_eq!(
            VideoFrameRate::Fps23_98p.timecode_frame_rate(false),
            Some(TimecodeFrameRate::Fps23_976)
        );
        assert_eq!(VideoFrameRate::Fps24p.timecode_frame_rate(true), None);
    }

    #[test]
    fn test_timecode_to_video_round_trip() {
        for video in VideoFrameRate::ALL.into_iter().filter(|v| !v.is_interlaced()) {
            let timecode = video.timecode_frame_rate(false).unwrap();
            assert_eq!(timecode.video_frame_rate(false), Some(video));
            assert!(timecode.rate().is_equal(&video.rate()));
        }
        assert_eq!(TimecodeFrameRate::Fps30d.video_frame_rate(false), None);
        assert_eq!(
            TimecodeFrameRate::Fps59_94d.video_frame_rate(true),
            Some(VideoFrameRate::Fps59_94i)
        );
    }

    #[test]
    fn test_from_rate() {
        assert_eq!(
            VideoFrameRate::from_rate(Fraction::new(50, 1), true),
            Some(VideoFrameRate::Fps50i)
        );
        assert_eq!(
            VideoFrameRate::from_rate(Fraction::new(48000, 1001), false),
            Some(VideoFrameRate::Fps47_95p)
        );
        assert_eq!(VideoFrameRate::from_rate(Fraction::new(24, 1), true), None);
    }
}
