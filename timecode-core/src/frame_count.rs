//! Elapsed frame counts.
//!
//! A [`FrameCount`] can be written four ways (whole frames, frames plus
//! sub-frames, a fractional frame count, or frames plus a sub-frame unit
//! interval). All four collapse to one canonical sub-frame count, and every
//! comparison, hash and arithmetic operation goes through it.

use crate::fraction::gcd;
use crate::sub_frames::SubFramesBase;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Slack applied when truncating a fractional value to whole sub-frames, so
/// that `0.29 * 100` (28.999999999999996) lands on 29.
const SUB_FRAME_EPSILON: f64 = 0.0001;

/// The encodings a frame count can take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameCountValue {
    /// Whole frames.
    Frames(i64),
    /// Whole frames plus sub-frames in the count's base.
    Split {
        /// Whole frames.
        frames: i64,
        /// Sub-frames.
        sub_frames: i64,
    },
    /// Fractional frame count.
    Combined(f64),
    /// Whole frames plus a sub-frame fraction of one frame (0.0 up to 1.0).
    SplitUnitInterval {
        /// Whole frames.
        frames: i64,
        /// Fraction of a frame.
        sub_frames_unit_interval: f64,
    },
}

/// Total elapsed frames, with sub-frame precision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrameCount {
    value: FrameCountValue,
    sub_frames_base: SubFramesBase,
}

impl FrameCount {
    /// Create a frame count.
    pub fn new(value: FrameCountValue, sub_frames_base: SubFramesBase) -> Self {
        Self {
            value,
            sub_frames_base,
        }
    }

    /// Zero frames.
    pub fn zero(sub_frames_base: SubFramesBase) -> Self {
        Self::new(FrameCountValue::Frames(0), sub_frames_base)
    }

    /// Whole frames.
    pub fn frames(frames: i64, sub_frames_base: SubFramesBase) -> Self {
        Self::new(FrameCountValue::Frames(frames), sub_frames_base)
    }

    /// Whole frames plus sub-frames.
    pub fn split(frames: i64, sub_frames: i64, sub_frames_base: SubFramesBase) -> Self {
        Self::new(
            FrameCountValue::Split { frames, sub_frames },
            sub_frames_base,
        )
    }

    /// Fractional frame count.
    pub fn combined(frames: f64, sub_frames_base: SubFramesBase) -> Self {
        Self::new(FrameCountValue::Combined(frames), sub_frames_base)
    }

    /// Build from a canonical sub-frame count.
    pub fn from_sub_frame_count(count: i64, sub_frames_base: SubFramesBase) -> Self {
        let base = sub_frames_base.raw_value();
        Self::split(count / base, count % base, sub_frames_base)
    }

    /// The stored encoding.
    pub fn value(&self) -> FrameCountValue {
        self.value
    }

    /// Sub-frames base the count is expressed in.
    pub fn sub_frames_base(&self) -> SubFramesBase {
        self.sub_frames_base
    }

    /// Canonical count: `frames * base + sub_frames`.
    ///
    /// Saturates instead of overflowing; non-finite fractional values resolve
    /// to zero (NaN) or the saturated extremes (infinities).
    pub fn sub_frame_count(&self) -> i64 {
        let base = self.sub_frames_base.raw_value();
        match self.value {
            FrameCountValue::Frames(frames) => frames.saturating_mul(base),
            FrameCountValue::Split { frames, sub_frames } => {
                frames.saturating_mul(base).saturating_add(sub_frames)
            }
            FrameCountValue::Combined(frames) => truncate_sub_frames(frames * base as f64),
            FrameCountValue::SplitUnitInterval {
                frames,
                sub_frames_unit_interval,
            } => frames
                .saturating_mul(base)
                .saturating_add(truncate_sub_frames(sub_frames_unit_interval * base as f64)),
        }
    }

    /// Whole frames, truncated toward zero.
    pub fn whole_frames(&self) -> i64 {
        self.sub_frame_count() / self.sub_frames_base.raw_value()
    }

    /// Sub-frames beyond [`whole_frames`](Self::whole_frames); negative for
    /// negative counts.
    pub fn sub_frames(&self) -> i64 {
        self.sub_frame_count() % self.sub_frames_base.raw_value()
    }

    /// Sub-frames as a fraction of one frame.
    pub fn sub_frames_unit_interval(&self) -> f64 {
        self.sub_frames() as f64 / self.sub_frames_base.raw_value() as f64
    }

    /// Fractional frame count.
    pub fn double_value(&self) -> f64 {
        match self.value {
            FrameCountValue::Combined(frames) => frames,
            _ => self.sub_frame_count() as f64 / self.sub_frames_base.raw_value() as f64,
        }
    }

    /// Whether the count is below zero.
    pub fn is_negative(&self) -> bool {
        self.sub_frame_count() < 0
    }

    /// Whether the count is zero.
    pub fn is_zero(&self) -> bool {
        self.sub_frame_count() == 0
    }

    /// Re-express the count in another sub-frames base (truncating).
    #[must_use]
    pub fn converted(&self, sub_frames_base: SubFramesBase) -> Self {
        if sub_frames_base == self.sub_frames_base {
            return *self;
        }
        Self::from_sub_frame_count(
            rescale(self.sub_frame_count(), self.sub_frames_base, sub_frames_base),
            sub_frames_base,
        )
    }

    /// Canonical count re-expressed in `sub_frames_base`.
    pub(crate) fn sub_frame_count_in(&self, sub_frames_base: SubFramesBase) -> i64 {
        rescale(self.sub_frame_count(), self.sub_frames_base, sub_frames_base)
    }

    /// Count reduced to lowest terms, used for equality and hashing across bases.
    fn reduced(&self) -> (i64, i64) {
        let count = self.sub_frame_count();
        let base = self.sub_frames_base.raw_value();
        let g = gcd(count.unsigned_abs(), base as u64).max(1) as i64;
        (count / g, base / g)
    }
}

fn rescale(count: i64, from: SubFramesBase, to: SubFramesBase) -> i64 {
    let scaled = count as i128 * to.raw_value() as i128 / from.raw_value() as i128;
    scaled.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

fn truncate_sub_frames(value: f64) -> i64 {
    if !value.is_finite() {
        // `as` saturates infinities and maps NaN to zero
        return value as i64;
    }
    (value + value.signum() * SUB_FRAME_EPSILON).trunc() as i64
}

/// Sub-frame position of a fractional frame count, without the `i64` cap of
/// [`FrameCount::sub_frame_count`]. `frames` must be finite.
pub(crate) fn sub_frame_position(frames: f64, sub_frames_base: SubFramesBase) -> i128 {
    let value = frames * sub_frames_base.raw_value() as f64;
    (value + value.signum() * SUB_FRAME_EPSILON).trunc() as i128
}

impl PartialEq for FrameCount {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrameCount {}

impl Hash for FrameCount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reduced().hash(state);
    }
}

impl PartialOrd for FrameCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrameCount {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.sub_frame_count() as i128 * other.sub_frames_base.raw_value() as i128;
        let rhs = other.sub_frame_count() as i128 * self.sub_frames_base.raw_value() as i128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for FrameCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sub_frames = self.sub_frames();
        if sub_frames == 0 {
            write!(f, "{} frames", self.whole_frames())
        } else {
            write!(
                f,
                "{} frames + {}/{} sub-frames",
                self.whole_frames(),
                sub_frames,
                self.sub_frames_base.raw_value()
            )
        }
    }
}

impl Add for FrameCount {
    type Output = Self;

    /// The result is expressed in the left operand's base.
    fn add(self, rhs: Self) -> Self::Output {
        let count = self
            .sub_frame_count()
            .saturating_add(rhs.sub_frame_count_in(self.sub_frames_base));
        Self::from_sub_frame_count(count, self.sub_frames_base)
    }
}

impl Sub for FrameCount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let count = self
            .sub_frame_count()
            .saturating_sub(rhs.sub_frame_count_in(self.sub_frames_base));
        Self::from_sub_frame_count(count, self.sub_frames_base)
    }
}

impl Mul<f64> for FrameCount {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::combined(self.double_value() * rhs, self.sub_frames_base)
    }
}

impl Div<f64> for FrameCount {
    type Output = Self;

    /// Division by zero yields a non-finite combined value, which resolves to
    /// a saturated (or, for `0 / 0`, zero) sub-frame count.
    fn div(self, rhs: f64) -> Self::Output {
        Self::combined(self.double_value() / rhs, self.sub_frames_base)
    }
}

impl Neg for FrameCount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_sub_frame_count(self.sub_frame_count().saturating_neg(), self.sub_frames_base)
    }
}
