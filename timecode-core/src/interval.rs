//! Signed timecode durations.

use crate::error::{Result, TimecodeError};
use crate::fraction::Fraction;
use crate::properties::Properties;
use crate::realtime;
use crate::source::position_of_timecode;
use crate::timecode::Timecode;
use crate::validation::{self, FramePosition, ValidationRule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// Direction of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    /// Forward in time.
    #[default]
    Plus,
    /// Backward in time.
    Minus,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

/// A signed duration: a non-negative timecode magnitude plus a sign.
///
/// The magnitude is stored without validation, so intervals longer than the
/// upper limit keep their full length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimecodeInterval {
    absolute: Timecode,
    sign: Sign,
}

impl TimecodeInterval {
    /// Create an interval. A negative `absolute` value flips the sign.
    pub fn new(absolute: Timecode, sign: Sign) -> Self {
        let count = absolute.sub_frame_count();
        if count < 0 {
            Self::from_count(-(count as i128), absolute.properties(), -sign)
        } else {
            Self { absolute, sign }
        }
    }

    /// Interval from signed real time in seconds.
    pub fn from_real_time(seconds: f64, properties: Properties) -> Result<Self> {
        let position = realtime::position_of_real_time(seconds, &properties);
        Self::from_position(position, properties, "real time")
    }

    /// Interval from a signed exact number of seconds.
    pub fn from_rational(seconds: Fraction, properties: Properties) -> Result<Self> {
        let position = realtime::position_of_rational(seconds, &properties);
        Self::from_position(position, properties, "rational")
    }

    fn from_position(
        position: FramePosition,
        properties: Properties,
        operation: &str,
    ) -> Result<Self> {
        match position {
            FramePosition::Count(count) if count < 0 => {
                Ok(Self::from_count(-count, properties, Sign::Minus))
            }
            FramePosition::Count(count) => Ok(Self::from_count(count, properties, Sign::Plus)),
            FramePosition::NonFinite(_) => Err(TimecodeError::non_finite(operation)),
        }
    }

    pub(crate) fn from_count(magnitude: i128, properties: Properties, sign: Sign) -> Self {
        let components =
            validation::components_with_rule(magnitude, &properties, ValidationRule::AllowingInvalid);
        Self {
            absolute: Timecode::from_parts(components, properties),
            sign,
        }
    }

    /// Magnitude.
    pub fn absolute(&self) -> Timecode {
        self.absolute
    }

    /// Direction.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Whether the interval points backward (and is non-zero).
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus && self.absolute.sub_frame_count() != 0
    }

    /// Resolve to a timecode on the clock, wrapping below zero for negative
    /// intervals and around the upper limit for long ones.
    pub fn flattened(&self) -> Timecode {
        match self.sign {
            Sign::Plus => self.absolute.wrapped(),
            Sign::Minus => Timecode::zero(self.absolute.properties()).wrapping_sub(self.absolute),
        }
    }

    /// Signed real time in seconds.
    pub fn real_time_value(&self) -> f64 {
        match self.sign {
            Sign::Plus => self.absolute.real_time_value(),
            Sign::Minus => -self.absolute.real_time_value(),
        }
    }

    /// Signed exact number of seconds.
    pub fn rational_value(&self) -> Fraction {
        match self.sign {
            Sign::Plus => self.absolute.rational_value(),
            Sign::Minus => -self.absolute.rational_value(),
        }
    }

    /// `timecode` moved by this interval, wrapping around the clock.
    pub fn timecode(&self, offsetting: &Timecode) -> Timecode {
        match self.sign {
            Sign::Plus => offsetting.wrapping_add(self.absolute),
            Sign::Minus => offsetting.wrapping_sub(self.absolute),
        }
    }
}

impl Neg for TimecodeInterval {
    type Output = TimecodeInterval;

    fn neg(self) -> Self::Output {
        Self {
            absolute: self.absolute,
            sign: -self.sign,
        }
    }
}

impl fmt::Display for TimecodeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.absolute)
    }
}

impl Timecode {
    /// Signed interval from `self` to `other`.
    ///
    /// ```rust
    /// use timecode_core::{Properties, Timecode, TimecodeFrameRate};
    ///
    /// let props = Properties::new(TimecodeFrameRate::Fps24);
    /// let start = Timecode::new("01:00:00:00", props).unwrap();
    /// let end = Timecode::new("00:59:59:00", props).unwrap();
    /// assert_eq!(start.interval(&end).to_string(), "-00:00:01:00");
    /// ```
    pub fn interval(&self, other: &Timecode) -> TimecodeInterval {
        let properties = self.properties();
        let lhs = self.sub_frame_count() as i128;
        let rhs = match position_of_timecode(other, &properties) {
            FramePosition::Count(count) => count,
            FramePosition::NonFinite(_) => lhs,
        };
        let delta = rhs - lhs;
        if delta < 0 {
            TimecodeInterval::from_count(-delta, properties, Sign::Minus)
        } else {
            TimecodeInterval::from_count(delta, properties, Sign::Plus)
        }
    }
}
