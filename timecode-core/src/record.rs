//! Structured encoding of a timecode.
//!
//! A record carries the properties plus two payloads: the raw components
//! (lossless) and the formatted string (lossy). Decoding prefers the
//! components and falls back to the string.

use crate::components::Components;
use crate::error::{Result, TimecodeError};
use crate::format::{self, StringFormat};
use crate::frame_rate::TimecodeFrameRate;
use crate::properties::Properties;
use crate::sub_frames::SubFramesBase;
use crate::timecode::Timecode;
use crate::upper_limit::UpperLimit;
use serde::{Deserialize, Serialize};

/// Serialized form of a [`Timecode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecodeRecord {
    /// Frame rate.
    pub frame_rate: TimecodeFrameRate,
    /// Sub-frames base.
    #[serde(default)]
    pub sub_frames_base: SubFramesBase,
    /// Upper limit.
    #[serde(default)]
    pub upper_limit: UpperLimit,
    /// Raw components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    /// Formatted string, including sub-frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TimecodeRecord {
    fn properties(&self) -> Properties {
        Properties::new(self.frame_rate)
            .with_sub_frames_base(self.sub_frames_base)
            .with_upper_limit(self.upper_limit)
    }
}

impl From<Timecode> for TimecodeRecord {
    fn from(timecode: Timecode) -> Self {
        let properties = timecode.properties();
        Self {
            frame_rate: properties.frame_rate,
            sub_frames_base: properties.sub_frames_base,
            upper_limit: properties.upper_limit,
            components: Some(timecode.components()),
            text: Some(timecode.string_value(StringFormat::default().with_sub_frames(true))),
        }
    }
}

impl TryFrom<TimecodeRecord> for Timecode {
    type Error = TimecodeError;

    /// Values are restored as stored, without validation.
    fn try_from(record: TimecodeRecord) -> Result<Self> {
        let properties = record.properties();
        let components = match (record.components, record.text) {
            (Some(components), _) => components,
            (None, Some(text)) => format::decode(&text)?,
            (None, None) => return Err(TimecodeError::MissingRepresentation),
        };
        Ok(Timecode::from_parts(components, properties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationRule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_writes_both_payloads() {
        let timecode = Timecode::new(
            Components::new(0, 1, 0, 0, 2, 12),
            Properties::new(TimecodeFrameRate::Fps29_97d),
        )
        .unwrap();
        let value = serde_json::to_value(timecode).unwrap();
        assert_eq!(value["frame_rate"], "29.97d");
        assert_eq!(value["sub_frames_base"], 80);
        assert_eq!(value["text"], "01:00:00;02.12");
        assert_eq!(value["components"]["frames"], 2);
    }

    #[test]
    fn test_components_win_over_text() {
        let json = r#"{
            "frame_rate": "25",
            "components": {"hours": 2},
            "text": "01:00:00:00"
        }"#;
        let timecode: Timecode = serde_json::from_str(json).unwrap();
        assert_eq!(timecode.components(), Components::hmsf(2, 0, 0, 0));
    }

    #[test]
    fn test_text_fallback() {
        let json = r#"{"frame_rate": "25", "text": "01:00:00:10.40"}"#;
        let timecode: Timecode = serde_json::from_str(json).unwrap();
        assert_eq!(timecode.components(), Components::new(0, 1, 0, 0, 10, 40));
    }

    #[test]
    fn test_missing_representation() {
        let record = TimecodeRecord {
            frame_rate: TimecodeFrameRate::Fps24,
            sub_frames_base: SubFramesBase::default(),
            upper_limit: UpperLimit::default(),
            components: None,
            text: None,
        };
        assert_eq!(
            Timecode::try_from(record).unwrap_err(),
            TimecodeError::MissingRepresentation
        );
        assert!(serde_json::from_str::<Timecode>(r#"{"frame_rate": "24"}"#).is_err());
    }

    #[test]
    fn test_invalid_values_survive() {
        let raw = Timecode::with_rule(
            Components::hmsf(30, 0, 0, 0),
            Properties::new(TimecodeFrameRate::Fps24),
            ValidationRule::AllowingInvalid,
        )
        .unwrap();
        let json = serde_json::to_string(&raw).unwrap();
        let decoded: Timecode = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.components(), raw.components());
        assert_eq!(decoded.properties(), raw.properties());
    }
}
