//! Timecode frame rates.
//!
//! The set of rates is closed: every industry timecode rate is a case of
//! [`TimecodeFrameRate`] and its properties live in a single static table.
//! Case order is meaningful and defines `Ord` (it is not alphabetic).

use crate::dropframe::DropFrameConfig;
use crate::error::{Result, TimecodeError};
use crate::fraction::Fraction;
use crate::upper_limit::UpperLimit;
use crate::video_rate::VideoFrameRate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timecode frame rate.
///
/// Drop-frame cases carry a `d` suffix in their string form (`"29.97d"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimecodeFrameRate {
    /// 23.976 fps (24000/1001)
    #[serde(rename = "23.976")]
    Fps23_976,
    /// 24 fps
    #[serde(rename = "24")]
    Fps24,
    /// 24.98 fps (25000/1001)
    #[serde(rename = "24.98")]
    Fps24_98,
    /// 25 fps
    #[serde(rename = "25")]
    Fps25,
    /// 29.97 fps non-drop (30000/1001)
    #[serde(rename = "29.97")]
    Fps29_97,
    /// 29.97 fps drop-frame (30000/1001)
    #[serde(rename = "29.97d")]
    Fps29_97d,
    /// 30 fps
    #[serde(rename = "30")]
    Fps30,
    /// 30 fps drop-frame
    #[serde(rename = "30d")]
    Fps30d,
    /// 47.952 fps (48000/1001)
    #[serde(rename = "47.952")]
    Fps47_952,
    /// 48 fps
    #[serde(rename = "48")]
    Fps48,
    /// 50 fps
    #[serde(rename = "50")]
    Fps50,
    /// 59.94 fps non-drop (60000/1001)
    #[serde(rename = "59.94")]
    Fps59_94,
    /// 59.94 fps drop-frame (60000/1001)
    #[serde(rename = "59.94d")]
    Fps59_94d,
    /// 60 fps
    #[serde(rename = "60")]
    Fps60,
    /// 60 fps drop-frame
    #[serde(rename = "60d")]
    Fps60d,
    /// 90 fps
    #[serde(rename = "90")]
    Fps90,
    /// 95.904 fps (96000/1001)
    #[serde(rename = "95.904")]
    Fps95_904,
    /// 96 fps
    #[serde(rename = "96")]
    Fps96,
    /// 100 fps
    #[serde(rename = "100")]
    Fps100,
    /// 119.88 fps non-drop (120000/1001)
    #[serde(rename = "119.88")]
    Fps119_88,
    /// 119.88 fps drop-frame (120000/1001)
    #[serde(rename = "119.88d")]
    Fps119_88d,
    /// 120 fps
    #[serde(rename = "120")]
    Fps120,
    /// 120 fps drop-frame
    #[serde(rename = "120d")]
    Fps120d,
}

/// Static properties of one frame rate case.
struct RateEntry {
    name: &'static str,
    numerator: i64,
    denominator: i64,
    /// Frames counted per timecode second.
    nominal_fps: i64,
    /// Frame numbers skipped per minute; zero for non-drop rates.
    dropped_per_minute: i64,
}

const fn entry(
    name: &'static str,
    numerator: i64,
    denominator: i64,
    nominal_fps: i64,
    dropped_per_minute: i64,
) -> RateEntry {
    RateEntry {
        name,
        numerator,
        denominator,
        nominal_fps,
        dropped_per_minute,
    }
}

// Indexed by enum discriminant; keep in case order.
const RATE_TABLE: [RateEntry; 23] = [
    entry("23.976", 24000, 1001, 24, 0),
    entry("24", 24, 1, 24, 0),
    entry("24.98", 25000, 1001, 25, 0),
    entry("25", 25, 1, 25, 0),
    entry("29.97", 30000, 1001, 30, 0),
    entry("29.97d", 30000, 1001, 30, 2),
    entry("30", 30, 1, 30, 0),
    entry("30d", 30, 1, 30, 2),
    entry("47.952", 48000, 1001, 48, 0),
    entry("48", 48, 1, 48, 0),
    entry("50", 50, 1, 50, 0),
    entry("59.94", 60000, 1001, 60, 0),
    entry("59.94d", 60000, 1001, 60, 4),
    entry("60", 60, 1, 60, 0),
    entry("60d", 60, 1, 60, 4),
    entry("90", 90, 1, 90, 0),
    entry("95.904", 96000, 1001, 96, 0),
    entry("96", 96, 1, 96, 0),
    entry("100", 100, 1, 100, 0),
    entry("119.88", 120000, 1001, 120, 0),
    entry("119.88d", 120000, 1001, 120, 8),
    entry("120", 120, 1, 120, 0),
    entry("120d", 120, 1, 120, 8),
];

impl TimecodeFrameRate {
    /// Every case, in order.
    pub const ALL: [Self; 23] = [
        Self::Fps23_976,
        Self::Fps24,
        Self::Fps24_98,
        Self::Fps25,
        Self::Fps29_97,
        Self::Fps29_97d,
        Self::Fps30,
        Self::Fps30d,
        Self::Fps47_952,
        Self::Fps48,
        Self::Fps50,
        Self::Fps59_94,
        Self::Fps59_94d,
        Self::Fps60,
        Self::Fps60d,
        Self::Fps90,
        Self::Fps95_904,
        Self::Fps96,
        Self::Fps100,
        Self::Fps119_88,
        Self::Fps119_88d,
        Self::Fps120,
        Self::Fps120d,
    ];

    fn entry(&self) -> &'static RateEntry {
        &RATE_TABLE[*self as usize]
    }

    /// Identifier string, e.g. `"29.97d"`.
    #[must_use]
    pub fn string_value(&self) -> &'static str {
        self.entry().name
    }

    /// Whether this is a drop-frame rate.
    #[must_use]
    pub fn is_drop(&self) -> bool {
        self.entry().dropped_per_minute > 0
    }

    /// Frame numbers skipped at the start of each non-tenth minute (0 for non-drop rates).
    #[must_use]
    pub fn frames_dropped_per_minute(&self) -> i64 {
        self.entry().dropped_per_minute
    }

    /// Integer number of frames counted per timecode second.
    ///
    /// This is the rate's frame-number ceiling, not its real-time rate:
    /// 29.97 counts 30 frames per timecode second.
    #[must_use]
    pub fn nominal_fps(&self) -> i64 {
        self.entry().nominal_fps
    }

    /// Largest frame number a timecode at this rate can display.
    #[must_use]
    pub fn max_frame_number_displayable(&self) -> i64 {
        self.nominal_fps() - 1
    }

    /// Number of digits needed to display the frames component (2 or 3).
    #[must_use]
    pub fn number_of_digits(&self) -> usize {
        if self.max_frame_number_displayable() >= 100 {
            3
        } else {
            2
        }
    }

    /// Frame rate as a rational number of frames per second.
    #[must_use]
    pub fn rate(&self) -> Fraction {
        let entry = self.entry();
        Fraction::new(entry.numerator, entry.denominator)
    }

    /// Duration of one frame in seconds.
    #[must_use]
    pub fn frame_duration(&self) -> Fraction {
        self.rate().inverted()
    }

    /// Real frames per wall-clock second.
    #[must_use]
    pub fn frame_rate_for_real_time_calculation(&self) -> f64 {
        self.rate().double_value()
    }

    /// Frames per second implied by the timecode counting scheme.
    ///
    /// Equal to [`nominal_fps`](Self::nominal_fps) for non-drop rates; for
    /// drop rates it is the average over a ten minute cycle (29.97 for both
    /// 29.97d and 30d).
    #[must_use]
    pub fn frame_rate_for_elapsed_frames_calculation(&self) -> f64 {
        match DropFrameConfig::for_frame_rate(*self) {
            Some(config) => config.frames_per_10_minutes as f64 / 600.0,
            None => self.nominal_fps() as f64,
        }
    }

    /// Total number of frames in one day of timecode.
    #[must_use]
    pub fn frames_per_day(&self) -> i64 {
        match DropFrameConfig::for_frame_rate(*self) {
            Some(config) => config.frames_per_10_minutes * 6 * 24,
            None => self.nominal_fps() * 60 * 60 * 24,
        }
    }

    /// Total number of frames before the timeline wraps at `limit`.
    #[must_use]
    pub fn max_total_frames(&self, limit: UpperLimit) -> i64 {
        self.frames_per_day() * limit.max_days()
    }

    /// Highest elapsed frame number that can be expressed under `limit`.
    #[must_use]
    pub fn max_total_frames_expressible(&self, limit: UpperLimit) -> i64 {
        self.max_total_frames(limit) - 1
    }

    /// Match a rational frame rate against the closed set of cases.
    ///
    /// A case matches when its rate is the same literal fraction, an equal
    /// fraction by value, or an equal floating-point ratio. `drop` selects
    /// between cases sharing a rate (29.97 and 29.97d).
    #[must_use]
    pub fn from_rate(rate: Fraction, drop: bool) -> Option<Self> {
        let ratio = rate.double_value();
        Self::ALL.into_iter().find(|case| {
            let case_rate = case.rate();
            case.is_drop() == drop
                && (case_rate == rate
                    || case_rate.is_equal(&rate)
                    || case_rate.double_value() == ratio)
        })
    }

    /// Match a rational frame duration against the closed set of cases.
    #[must_use]
    pub fn from_frame_duration(duration: Fraction, drop: bool) -> Option<Self> {
        Self::from_rate(duration.inverted(), drop)
    }

    /// Like [`from_rate`](Self::from_rate) but fails with an error naming the rate.
    pub fn try_from_rate(rate: Fraction, drop: bool) -> Result<Self> {
        Self::from_rate(rate, drop).ok_or_else(|| {
            TimecodeError::invalid_frame_rate(rate.numerator(), rate.denominator())
        })
    }

    /// Whether two rates run at the same real-time speed (29.97 and 29.97d do).
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.rate().is_equal(&other.rate())
    }

    /// The video frame rate this timecode rate describes, if there is one.
    ///
    /// Drop-frame counting at an integer rate (30d, 60d, 120d) has no video
    /// counterpart.
    #[must_use]
    pub fn video_frame_rate(&self, interlaced: bool) -> Option<VideoFrameRate> {
        VideoFrameRate::ALL
            .into_iter()
            .filter(|video| video.is_interlaced() == interlaced)
            .find(|video| video.timecode_frame_rate(self.is_drop()) == Some(*self))
    }
}

impl Default for TimecodeFrameRate {
    fn default() -> Self {
        Self::Fps24
    }
}

impl fmt::Display for TimecodeFrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.string_value())
    }
}

impl FromStr for TimecodeFrameRate {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s
            .strip_suffix("fps")
            .or_else(|| s.strip_suffix("FPS"))
            .map(str::trim_end)
            .unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|case| case.string_value().eq_ignore_ascii_case(s))
            .ok_or_else(|| TimecodeError::unknown_frame_rate(s))
    }
}
