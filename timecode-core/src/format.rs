//! Timecode string encoding and decoding.
//!
//! Layout: `[D ]HH:MM:SS{:|;}FF[.SF]`. The frames separator is `;` at
//! drop-frame rates. Decoding yields raw components; validation is the
//! caller's choice.

use crate::components::Components;
use crate::error::{Result, TimecodeError};
use crate::properties::Properties;
use crate::upper_limit::UpperLimit;
use serde::{Deserialize, Serialize};

/// Options for [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StringFormat {
    /// Append `.SF` sub-frames.
    pub show_sub_frames: bool,
    /// Show the days prefix even when it is zero at a 24-hour limit.
    pub always_show_days: bool,
    /// Replace `:` with `_` and `;` with `.` so the string is usable in file names.
    pub filename_compatible: bool,
}

impl StringFormat {
    /// Enable or disable sub-frames.
    #[must_use]
    pub fn with_sub_frames(mut self, show: bool) -> Self {
        self.show_sub_frames = show;
        self
    }

    /// Enable or disable the forced days prefix.
    #[must_use]
    pub fn with_days(mut self, show: bool) -> Self {
        self.always_show_days = show;
        self
    }

    /// Enable or disable file-name-safe separators.
    #[must_use]
    pub fn with_filename_compatible(mut self, enabled: bool) -> Self {
        self.filename_compatible = enabled;
        self
    }
}

/// Format components at `properties`.
#[must_use]
pub fn encode(components: &Components, properties: &Properties, format: StringFormat) -> String {
    let show_days = format.always_show_days
        || properties.upper_limit == UpperLimit::Max100Days
        || components.days != 0;
    let days = if show_days {
        format!("{} ", components.days)
    } else {
        String::new()
    };

    let separator = if properties.frame_rate.is_drop() { ';' } else { ':' };
    let mut out = format!(
        "{days}{:02}:{:02}:{:02}{separator}{:0width$}",
        components.hours,
        components.minutes,
        components.seconds,
        components.frames,
        width = properties.frame_rate.number_of_digits()
    );

    if format.show_sub_frames {
        out.push_str(&format!(
            ".{:0width$}",
            components.sub_frames,
            width = properties.sub_frames_base.number_of_digits()
        ));
    }

    if format.filename_compatible {
        out = out.replace(':', "_").replace(';', ".");
    }
    out
}

/// Parse a timecode string into raw components.
///
/// Accepts an optional day count (either a `D ` prefix or a fifth leading
/// field), `:` or `;` between fields, and an optional `.SF` suffix. Fields
/// must be unsigned decimal numbers.
pub fn decode(text: &str) -> Result<Components> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimecodeError::invalid_format("empty string"));
    }

    let (days, rest) = match text.split_once(' ') {
        Some((days, rest)) => (Some(parse_field(days, "days")?), rest.trim_start()),
        None => (None, text),
    };

    let (main, sub_frames) = match rest.split_once('.') {
        Some((main, sub)) => (main, parse_field(sub, "sub-frames")?),
        None => (rest, 0),
    };

    let fields: Vec<&str> = main.split([':', ';']).collect();
    let (days, hms) = match (days, fields.as_slice()) {
        (None, [d, h, m, s, f]) => (parse_field(d, "days")?, [*h, *m, *s, *f]),
        (days, [h, m, s, f]) => (days.unwrap_or(0), [*h, *m, *s, *f]),
        _ => {
            return Err(TimecodeError::invalid_format(format!(
                "expected 4 fields separated by ':' or ';', found {}",
                fields.len()
            )))
        }
    };

    Ok(Components::new(
        days,
        parse_field(hms[0], "hours")?,
        parse_field(hms[1], "minutes")?,
        parse_field(hms[2], "seconds")?,
        parse_field(hms[3], "frames")?,
        sub_frames,
    ))
}

fn parse_field(field: &str, name: &str) -> Result<i32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimecodeError::invalid_format(format!(
            "{} must be digits, found {:?}",
            name, field
        )));
    }
    field
        .parse()
        .map_err(|_| TimecodeError::invalid_format(format!("{} out of range: {}", name, field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TimecodeComponent;
    use crate::frame_rate::TimecodeFrameRate;
    use crate::sub_frames::SubFramesBase;
    use pretty_assertions::assert_eq;

    fn props(rate: TimecodeFrameRate) -> Properties {
        Properties::new(rate)
    }

    #[test]
    fn test_encode_non_drop() {
        let c = Components::hmsf(1, 2, 3, 4);
        assert_eq!(
            encode(&c, &props(TimecodeFrameRate::Fps24), StringFormat::default()),
            "01:02:03:04"
        );
    }

    #[test]
    fn test_encode_drop_and_three_digit_frames() {
        let c = Components::hmsf(1, 0, 0, 2);
        assert_eq!(
            encode(&c, &props(TimecodeFrameRate::Fps29_97d), StringFormat::default()),
            "01:00:00;02"
        );
        assert_eq!(
            encode(&c, &props(TimecodeFrameRate::Fps120), StringFormat::default()),
            "01:00:00:002"
        );
    }

    #[test]
    fn test_encode_days_and_sub_frames() {
        let c = Components::new(2, 1, 0, 0, 0, 5);
        let p = props(TimecodeFrameRate::Fps25);
        assert_eq!(encode(&c, &p, StringFormat::default()), "2 01:00:00:00");

        let c = Components::hmsf(1, 0, 0, 0).with(TimecodeComponent::SubFrames, 5);
        let format = StringFormat::default().with_sub_frames(true).with_days(true);
        assert_eq!(encode(&c, &p, format), "0 01:00:00:00.05");

        let p = p
            .with_upper_limit(UpperLimit::Max100Days)
            .with_sub_frames_base(SubFramesBase::QuarterFrames);
        let c = c.with(TimecodeComponent::SubFrames, 3);
        let format = StringFormat::default().with_sub_frames(true);
        assert_eq!(encode(&c, &p, format), "0 01:00:00:00.3");
    }

    #[test]
    fn test_encode_full_layout() {
        let c = Components::new(12, 1, 0, 0, 4, 7);
        let p = props(TimecodeFrameRate::Fps119_88d)
            .with_upper_limit(UpperLimit::Max100Days)
            .with_sub_frames_base(SubFramesBase::Max100SubFrames);
        let format = StringFormat::default().with_sub_frames(true);
        assert_eq!(encode(&c, &p, format), "12 01:00:00;004.07");
        assert_eq!(
            encode(&c, &p, format.with_filename_compatible(true)),
            "12 01_00_00.004.07"
        );
    }

    #[test]
    fn test_encode_filename_compatible() {
        let c = Components::hmsf(1, 0, 0, 2);
        let format = StringFormat::default().with_filename_compatible(true);
        assert_eq!(
            encode(&c, &props(TimecodeFrameRate::Fps29_97d), format),
            "01_00_00.02"
        );
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("01:02:03:04").unwrap(), Components::hmsf(1, 2, 3, 4));
        assert_eq!(decode("01:02:03;04").unwrap(), Components::hmsf(1, 2, 3, 4));
        assert_eq!(
            decode("3 01:02:03:04.79").unwrap(),
            Components::new(3, 1, 2, 3, 4, 79)
        );
        assert_eq!(
            decode("3:01:02:03:04").unwrap(),
            Components::new(3, 1, 2, 3, 4, 0)
        );
        // raw, unvalidated
        assert_eq!(decode("99:99:99:99").unwrap(), Components::hmsf(99, 99, 99, 99));
    }

    #[test]
    fn test_decode_rejects_malformed() {
        for text in [
            "",
            "01:02:03",
            "01:02:03:04:05:06",
            "1 2:03:04:05:06",
            "01:02:3a:04",
            "01:02::04",
            "01-02-03-04",
            "01:02:03:04.",
            "-1:02:03:04",
            "99999999999:00:00:00",
        ] {
            assert!(
                matches!(decode(text), Err(TimecodeError::InvalidFormat { .. })),
                "{:?} should not decode",
                text
            );
        }
    }
}
