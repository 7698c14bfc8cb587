//! Raw timecode components.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw day/hour/minute/second/frame/sub-frame values.
///
/// No validation happens here: values may be negative or out of range. The
/// timecode layer decides what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    /// Days
    pub days: i32,
    /// Hours
    pub hours: i32,
    /// Minutes
    pub minutes: i32,
    /// Seconds
    pub seconds: i32,
    /// Frames
    pub frames: i32,
    /// Sub-frames
    pub sub_frames: i32,
}

impl Components {
    /// Create components from all six values.
    pub const fn new(
        days: i32,
        hours: i32,
        minutes: i32,
        seconds: i32,
        frames: i32,
        sub_frames: i32,
    ) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
            frames,
            sub_frames,
        }
    }

    /// Create components from hours, minutes, seconds and frames.
    pub const fn hmsf(hours: i32, minutes: i32, seconds: i32, frames: i32) -> Self {
        Self::new(0, hours, minutes, seconds, frames, 0)
    }

    /// All zeros.
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0, 0, 0)
    }

    /// Check if every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Read one component.
    pub fn get(&self, component: TimecodeComponent) -> i32 {
        match component {
            TimecodeComponent::Days => self.days,
            TimecodeComponent::Hours => self.hours,
            TimecodeComponent::Minutes => self.minutes,
            TimecodeComponent::Seconds => self.seconds,
            TimecodeComponent::Frames => self.frames,
            TimecodeComponent::SubFrames => self.sub_frames,
        }
    }

    /// Overwrite one component.
    pub fn set(&mut self, component: TimecodeComponent, value: i32) {
        match component {
            TimecodeComponent::Days => self.days = value,
            TimecodeComponent::Hours => self.hours = value,
            TimecodeComponent::Minutes => self.minutes = value,
            TimecodeComponent::Seconds => self.seconds = value,
            TimecodeComponent::Frames => self.frames = value,
            TimecodeComponent::SubFrames => self.sub_frames = value,
        }
    }

    /// Copy with one component replaced.
    #[must_use]
    pub fn with(mut self, component: TimecodeComponent, value: i32) -> Self {
        self.set(component, value);
        self
    }
}

impl From<(i32, i32, i32, i32)> for Components {
    fn from((hours, minutes, seconds, frames): (i32, i32, i32, i32)) -> Self {
        Self::hmsf(hours, minutes, seconds, frames)
    }
}

/// Identifies one timecode component.
///
/// Declaration order is display order, from largest unit to smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimecodeComponent {
    /// Days
    Days,
    /// Hours
    Hours,
    /// Minutes
    Minutes,
    /// Seconds
    Seconds,
    /// Frames
    Frames,
    /// Sub-frames
    SubFrames,
}

impl TimecodeComponent {
    /// Every component, largest unit first.
    pub const ALL: [Self; 6] = [
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Frames,
        Self::SubFrames,
    ];

    /// Lowercase name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Frames => "frames",
            Self::SubFrames => "sub-frames",
        }
    }
}

impl fmt::Display for TimecodeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_components_are_raw() {
        let c = Components::new(-1, 99, 75, -3, 1000, 200);
        assert_eq!(c.hours, 99);
        assert_eq!(c.seconds, -3);
        assert!(!c.is_zero());
        assert!(Components::default().is_zero());
    }

    #[test]
    fn test_get_set() {
        let mut c = Components::hmsf(1, 2, 3, 4);
        for component in TimecodeComponent::ALL {
            c.set(component, c.get(component) + 1);
        }
        assert_eq!(c, Components::new(1, 2, 3, 4, 5, 1));
        assert_eq!(c.with(TimecodeComponent::Frames, 0).frames, 0);
    }

    #[test]
    fn test_partial_deserialization() {
        let c: Components = serde_json::from_str(r#"{"hours": 1, "frames": 12}"#).unwrap();
        assert_eq!(c, Components::hmsf(1, 0, 0, 12));
    }
}
