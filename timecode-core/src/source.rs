//! The values a timecode can be built from.
//!
//! Every construction path goes through [`TimecodeSourceValue::resolve`],
//! which turns the source into components under a validation policy.

use crate::components::Components;
use crate::error::{Result, TimecodeError};
use crate::format;
use crate::fraction::Fraction;
use crate::frame_count::FrameCount;
use crate::frame_rate::TimecodeFrameRate;
use crate::properties::Properties;
use crate::realtime;
use crate::timecode::Timecode;
use crate::validation::{self, FramePosition, Policy};
use tracing::trace;

/// A source whose frame rate is supplied by the caller.
#[derive(Debug, Clone)]
pub enum TimecodeSourceValue {
    /// Raw components.
    Components(Components),
    /// Elapsed frames.
    FrameCount(FrameCount),
    /// A timecode string such as `01:00:00:00`.
    String(String),
    /// Elapsed real time in seconds.
    RealTime(f64),
    /// Elapsed time as an exact fraction of seconds.
    Rational(Fraction),
    /// Another timecode, converted by real time if its properties differ.
    Timecode(Timecode),
}

impl TimecodeSourceValue {
    pub(crate) fn resolve(self, properties: &Properties, policy: Policy) -> Result<Components> {
        match self {
            Self::Components(components) => {
                validation::resolve_components(components, properties, policy)
            }
            Self::FrameCount(frame_count) => {
                let count = frame_count.sub_frame_count_in(properties.sub_frames_base);
                validation::components_for_count(count as i128, properties, policy)
            }
            Self::String(text) => {
                validation::resolve_components(format::decode(&text)?, properties, policy)
            }
            Self::RealTime(seconds) => validation::components_for_position(
                realtime::position_of_real_time(seconds, properties),
                properties,
                policy,
                "real time",
            ),
            Self::Rational(seconds) => validation::components_for_position(
                realtime::position_of_rational(seconds, properties),
                properties,
                policy,
                "rational",
            ),
            Self::Timecode(timecode) if timecode.properties() == *properties => {
                validation::resolve_components(timecode.components(), properties, policy)
            }
            Self::Timecode(timecode) => {
                trace!(from = %timecode.properties().frame_rate, to = %properties.frame_rate, "Converting timecode source");
                validation::components_for_position(
                    position_of_timecode(&timecode, properties),
                    properties,
                    policy,
                    "timecode",
                )
            }
        }
    }
}

/// Sub-frame position of `timecode` at `properties`.
///
/// Same-rate sources only rescale sub-frames; others convert through exact
/// real time.
pub(crate) fn position_of_timecode(timecode: &Timecode, properties: &Properties) -> FramePosition {
    if timecode.frame_rate() == properties.frame_rate {
        let count = timecode
            .frame_count()
            .sub_frame_count_in(properties.sub_frames_base);
        FramePosition::Count(count as i128)
    } else {
        realtime::position_of_rational(timecode.rational_value(), properties)
    }
}

impl From<Components> for TimecodeSourceValue {
    fn from(components: Components) -> Self {
        Self::Components(components)
    }
}

impl From<(i32, i32, i32, i32)> for TimecodeSourceValue {
    fn from(hmsf: (i32, i32, i32, i32)) -> Self {
        Self::Components(hmsf.into())
    }
}

impl From<FrameCount> for TimecodeSourceValue {
    fn from(frame_count: FrameCount) -> Self {
        Self::FrameCount(frame_count)
    }
}

impl From<&str> for TimecodeSourceValue {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for TimecodeSourceValue {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<f64> for TimecodeSourceValue {
    fn from(seconds: f64) -> Self {
        Self::RealTime(seconds)
    }
}

impl From<Fraction> for TimecodeSourceValue {
    fn from(seconds: Fraction) -> Self {
        Self::Rational(seconds)
    }
}

impl From<Timecode> for TimecodeSourceValue {
    fn from(timecode: Timecode) -> Self {
        Self::Timecode(timecode)
    }
}

/// A source that carries its own frame rate, such as a media sample or a
/// timecode read from a file.
#[derive(Debug, Clone)]
pub enum RichTimecodeSourceValue {
    /// An existing timecode; its frame rate is kept.
    Timecode(Timecode),
    /// A media sample time with the track's frame duration.
    MediaSample {
        /// Sample time in seconds.
        time: Fraction,
        /// Duration of one frame in seconds.
        frame_duration: Fraction,
        /// Whether the track counts drop-frame timecode.
        drop_frame: bool,
    },
    /// Text of the form `"01:00:00;00 @ 29.97d"`.
    Text {
        /// The text.
        text: String,
    },
}

impl RichTimecodeSourceValue {
    /// A text source.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Split into a plain source and the frame rate it carries.
    pub(crate) fn into_source(self) -> Result<(TimecodeSourceValue, TimecodeFrameRate)> {
        match self {
            Self::Timecode(timecode) => {
                let frame_rate = timecode.frame_rate();
                Ok((TimecodeSourceValue::Timecode(timecode), frame_rate))
            }
            Self::MediaSample {
                time,
                frame_duration,
                drop_frame,
            } => {
                let frame_rate = TimecodeFrameRate::from_frame_duration(frame_duration, drop_frame)
                    .ok_or_else(|| {
                        let rate = frame_duration.inverted();
                        TimecodeError::invalid_frame_rate(rate.numerator(), rate.denominator())
                    })?;
                Ok((TimecodeSourceValue::Rational(time), frame_rate))
            }
            Self::Text { text } => {
                let (timecode, frame_rate) = text.split_once('@').ok_or_else(|| {
                    TimecodeError::invalid_format(format!("missing '@ <frame rate>' in {:?}", text))
                })?;
                let frame_rate = frame_rate.trim().parse()?;
                Ok((TimecodeSourceValue::String(timecode.trim().to_owned()), frame_rate))
            }
        }
    }
}

impl From<Timecode> for RichTimecodeSourceValue {
    fn from(timecode: Timecode) -> Self {
        Self::Timecode(timecode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sub_frames::SubFramesBase;
    use crate::upper_limit::UpperLimit;
    use crate::validation::ValidationRule;
    use pretty_assertions::assert_eq;

    fn props(rate: TimecodeFrameRate) -> Properties {
        Properties::new(rate)
    }

    #[test]
    fn test_frame_count_source() {
        let p = props(TimecodeFrameRate::Fps29_97d);
        let timecode = Timecode::new(FrameCount::frames(1800, SubFramesBase::default()), p).unwrap();
        assert_eq!(timecode.to_string(), "00:01:00;02");

        let err = Timecode::new(FrameCount::frames(-1, SubFramesBase::default()), p).unwrap_err();
        assert_eq!(err, TimecodeError::Underflow);
    }

    #[test]
    fn test_real_time_source() {
        let p = props(TimecodeFrameRate::Fps29_97);
        let timecode = Timecode::new(3603.6, p).unwrap();
        assert_eq!(timecode.to_string(), "01:00:00:00");

        assert_eq!(
            Timecode::new(f64::NAN, p).unwrap_err(),
            TimecodeError::non_finite("real time")
        );
        let clamped = Timecode::with_rule(f64::INFINITY, p, ValidationRule::Clamping).unwrap();
        assert_eq!(clamped.to_string(), "23:59:59:29");
    }

    #[test]
    fn test_rational_source() {
        let p = props(TimecodeFrameRate::Fps30);
        let timecode = Timecode::new(Fraction::new(18018, 5), p).unwrap();
        assert_eq!(timecode.components(), Components::hmsf(1, 0, 3, 18));
    }

    #[test]
    fn test_timecode_source_converts() {
        let source = Timecode::new("01:00:00:00", props(TimecodeFrameRate::Fps25)).unwrap();
        let timecode = Timecode::new(source, props(TimecodeFrameRate::Fps50)).unwrap();
        assert_eq!(timecode.to_string(), "01:00:00:00");
    }

    #[test]
    fn test_rich_media_sample() {
        let timecode = Timecode::new_rich(
            RichTimecodeSourceValue::MediaSample {
                time: Fraction::new(3600, 1),
                frame_duration: Fraction::new(1, 25),
                drop_frame: false,
            },
            SubFramesBase::default(),
            UpperLimit::default(),
        )
        .unwrap();
        assert_eq!(timecode.frame_rate(), TimecodeFrameRate::Fps25);
        assert_eq!(timecode.to_string(), "01:00:00:00");

        let err = Timecode::new_rich(
            RichTimecodeSourceValue::MediaSample {
                time: Fraction::zero(),
                frame_duration: Fraction::new(1, 31),
                drop_frame: false,
            },
            SubFramesBase::default(),
            UpperLimit::default(),
        )
        .unwrap_err();
        assert_eq!(err, TimecodeError::invalid_frame_rate(31, 1));
    }

    #[test]
    fn test_rich_text() {
        let timecode = Timecode::new_rich_with_rule(
            RichTimecodeSourceValue::text("2 01:00:00:00 @ 25"),
            SubFramesBase::default(),
            UpperLimit::Max100Days,
            ValidationRule::Clamping,
        )
        .unwrap();
        assert_eq!(timecode.days(), 2);
        assert_eq!(
            Timecode::new_rich(
                RichTimecodeSourceValue::text("01:00:00:00 @ 12"),
                SubFramesBase::default(),
                UpperLimit::default(),
            )
            .unwrap_err(),
            TimecodeError::unknown_frame_rate("12")
        );
    }
}
