//! Timecode arithmetic.
//!
//! Every operation runs on canonical sub-frame counts in the left operand's
//! properties and converts back through the counting engine. Each comes in
//! three flavours:
//!
//! - `checked_*`: fails with [`TimecodeError::Overflow`] /
//!   [`TimecodeError::Underflow`] when the result leaves the timeline
//! - `saturating_*`: clamps to `[zero, max expressible]`
//! - `wrapping_*`: wraps around the upper limit
//!
//! The `+ - * /` operators use the saturating flavour.

use crate::components::Components;
use crate::counting;
use crate::error::Result;
use crate::frame_count::{sub_frame_position, FrameCount};
use crate::properties::Properties;
use crate::source::position_of_timecode;
use crate::timecode::Timecode;
use crate::validation::{self, FramePosition, Policy, ValidationRule};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Right-hand side of an addition or subtraction.
#[derive(Debug, Clone, Copy)]
pub enum TimecodeOperand {
    /// Raw components, counted at the left operand's rate and base.
    Components(Components),
    /// Elapsed frames.
    FrameCount(FrameCount),
    /// Another timecode, converted by real time if its rate differs.
    Timecode(Timecode),
}

impl TimecodeOperand {
    fn position_in(&self, properties: &Properties) -> FramePosition {
        match self {
            Self::Components(components) => FramePosition::Count(
                counting::frame_count_of(
                    components,
                    properties.frame_rate,
                    properties.sub_frames_base,
                )
                .sub_frame_count() as i128,
            ),
            Self::FrameCount(frame_count) => {
                FramePosition::Count(frame_count.sub_frame_count_in(properties.sub_frames_base) as i128)
            }
            Self::Timecode(timecode) => position_of_timecode(timecode, properties),
        }
    }
}

impl From<Components> for TimecodeOperand {
    fn from(components: Components) -> Self {
        Self::Components(components)
    }
}

impl From<(i32, i32, i32, i32)> for TimecodeOperand {
    fn from(hmsf: (i32, i32, i32, i32)) -> Self {
        Self::Components(hmsf.into())
    }
}

impl From<FrameCount> for TimecodeOperand {
    fn from(frame_count: FrameCount) -> Self {
        Self::FrameCount(frame_count)
    }
}

impl From<Timecode> for TimecodeOperand {
    fn from(timecode: Timecode) -> Self {
        Self::Timecode(timecode)
    }
}

impl From<&Timecode> for TimecodeOperand {
    fn from(timecode: &Timecode) -> Self {
        Self::Timecode(*timecode)
    }
}

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
}

impl Timecode {
    fn offset(&self, rhs: TimecodeOperand, op: Op, policy: Policy) -> Result<Self> {
        let properties = self.properties();
        let lhs = self.sub_frame_count() as i128;
        let position = match rhs.position_in(&properties) {
            FramePosition::Count(rhs) => FramePosition::Count(match op {
                Op::Add => lhs + rhs,
                Op::Sub => lhs - rhs,
            }),
            non_finite => non_finite,
        };
        let operation = match op {
            Op::Add => "add",
            Op::Sub => "subtract",
        };
        let components =
            validation::components_for_position(position, &properties, policy, operation)?;
        Ok(Self::from_parts(components, properties))
    }

    fn scale(&self, factor: f64, divide: bool, policy: Policy) -> Result<Self> {
        let properties = self.properties();
        let frames = self.frame_count().double_value();
        let scaled = if divide { frames / factor } else { frames * factor };
        let position = if scaled.is_finite() {
            FramePosition::Count(sub_frame_position(scaled, properties.sub_frames_base))
        } else {
            FramePosition::NonFinite(scaled)
        };
        let operation = if divide { "divide" } else { "multiply" };
        let components =
            validation::components_for_position(position, &properties, policy, operation)?;
        Ok(Self::from_parts(components, properties))
    }

    // only exact mode can fail
    fn infallible(result: Result<Self>, fallback: &Self) -> Self {
        result.unwrap_or(*fallback)
    }

    /// Add, failing if the result leaves the timeline.
    pub fn checked_add(&self, rhs: impl Into<TimecodeOperand>) -> Result<Self> {
        self.offset(rhs.into(), Op::Add, Policy::Exact)
    }

    /// Subtract, failing if the result leaves the timeline.
    pub fn checked_sub(&self, rhs: impl Into<TimecodeOperand>) -> Result<Self> {
        self.offset(rhs.into(), Op::Sub, Policy::Exact)
    }

    /// Multiply the elapsed frame count, failing if the result leaves the
    /// timeline or is not finite.
    pub fn checked_mul(&self, factor: f64) -> Result<Self> {
        self.scale(factor, false, Policy::Exact)
    }

    /// Divide the elapsed frame count, failing if the result leaves the
    /// timeline or is not finite.
    pub fn checked_div(&self, divisor: f64) -> Result<Self> {
        self.scale(divisor, true, Policy::Exact)
    }

    /// Add, clamping to the timeline.
    ///
    /// ```rust
    /// use timecode_core::{Components, Properties, Timecode, TimecodeFrameRate};
    ///
    /// let tc = Timecode::zero(Properties::new(TimecodeFrameRate::Fps24));
    /// let sum = tc.saturating_add(Components::hmsf(25, 0, 0, 0));
    /// assert_eq!(sum.to_string(), "23:59:59:23");
    /// ```
    #[must_use]
    pub fn saturating_add(&self, rhs: impl Into<TimecodeOperand>) -> Self {
        self.offset_with_rule(rhs.into(), Op::Add, ValidationRule::Clamping)
    }

    /// Subtract, clamping to the timeline.
    #[must_use]
    pub fn saturating_sub(&self, rhs: impl Into<TimecodeOperand>) -> Self {
        self.offset_with_rule(rhs.into(), Op::Sub, ValidationRule::Clamping)
    }

    /// Multiply, clamping to the timeline.
    #[must_use]
    pub fn saturating_mul(&self, factor: f64) -> Self {
        Self::infallible(
            self.scale(factor, false, ValidationRule::Clamping.into()),
            self,
        )
    }

    /// Divide, clamping to the timeline.
    #[must_use]
    pub fn saturating_div(&self, divisor: f64) -> Self {
        Self::infallible(
            self.scale(divisor, true, ValidationRule::Clamping.into()),
            self,
        )
    }

    /// Add, wrapping around the upper limit.
    #[must_use]
    pub fn wrapping_add(&self, rhs: impl Into<TimecodeOperand>) -> Self {
        self.offset_with_rule(rhs.into(), Op::Add, ValidationRule::Wrapping)
    }

    /// Subtract, wrapping below zero.
    #[must_use]
    pub fn wrapping_sub(&self, rhs: impl Into<TimecodeOperand>) -> Self {
        self.offset_with_rule(rhs.into(), Op::Sub, ValidationRule::Wrapping)
    }

    /// Multiply, wrapping around the upper limit.
    #[must_use]
    pub fn wrapping_mul(&self, factor: f64) -> Self {
        Self::infallible(
            self.scale(factor, false, ValidationRule::Wrapping.into()),
            self,
        )
    }

    /// Divide, wrapping around the upper limit.
    #[must_use]
    pub fn wrapping_div(&self, divisor: f64) -> Self {
        Self::infallible(
            self.scale(divisor, true, ValidationRule::Wrapping.into()),
            self,
        )
    }

    fn offset_with_rule(&self, rhs: TimecodeOperand, op: Op, rule: ValidationRule) -> Self {
        Self::infallible(self.offset(rhs, op, rule.into()), self)
    }
}

impl<T: Into<TimecodeOperand>> Add<T> for Timecode {
    type Output = Timecode;

    fn add(self, rhs: T) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl<T: Into<TimecodeOperand>> Sub<T> for Timecode {
    type Output = Timecode;

    fn sub(self, rhs: T) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl Mul<f64> for Timecode {
    type Output = Timecode;

    fn mul(self, rhs: f64) -> Self::Output {
        self.saturating_mul(rhs)
    }
}

impl Div<f64> for Timecode {
    type Output = Timecode;

    fn div(self, rhs: f64) -> Self::Output {
        self.saturating_div(rhs)
    }
}

impl<T: Into<TimecodeOperand>> AddAssign<T> for Timecode {
    fn add_assign(&mut self, rhs: T) {
        *self = self.saturating_add(rhs);
    }
}

impl<T: Into<TimecodeOperand>> SubAssign<T> for Timecode {
    fn sub_assign(&mut self, rhs: T) {
        *self = self.saturating_sub(rhs);
    }
}

impl MulAssign<f64> for Timecode {
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.saturating_mul(rhs);
    }
}

impl DivAssign<f64> for Timecode {
    fn div_assign(&mut self, rhs: f64) {
        *self = self.saturating_div(rhs);
    }
}
