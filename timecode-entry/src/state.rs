//! Component state of an entry field.

use crate::config::{EntryConfig, ValidationPolicy};
use crate::error::{EntryError, Result};
use serde::{Deserialize, Serialize};
use timecode_core::{Components, Properties, Timecode, TimecodeComponent, UpperLimit, ValidationRule};

/// What an entry field holds between key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryState {
    /// Values as typed, possibly invalid.
    pub components: Components,
    /// Properties the values are read against.
    pub properties: Properties,
    /// Component receiving digits.
    pub focus: TimecodeComponent,
    /// Digits typed into the focused component since it gained focus.
    pub digits_entered: usize,
}

impl EntryState {
    /// Zero state focused on hours.
    pub fn new(properties: Properties) -> Self {
        Self {
            components: Components::zero(),
            properties,
            focus: TimecodeComponent::Hours,
            digits_entered: 0,
        }
    }

    /// State showing an existing timecode.
    pub fn from_timecode(timecode: &Timecode) -> Self {
        Self {
            components: timecode.components(),
            ..Self::new(timecode.properties())
        }
    }

    /// Move focus to `component`, which must be shown under `config`.
    pub fn focused(mut self, component: TimecodeComponent, config: &EntryConfig) -> Result<Self> {
        if !self.visible_components(config).contains(&component) {
            return Err(EntryError::HiddenComponent(component));
        }
        self.focus = component;
        self.digits_entered = 0;
        Ok(self)
    }

    /// Components the field shows, largest unit first.
    pub fn visible_components(&self, config: &EntryConfig) -> Vec<TimecodeComponent> {
        let show_days = config.show_days || self.properties.upper_limit == UpperLimit::Max100Days;
        TimecodeComponent::ALL
            .into_iter()
            .filter(|component| match component {
                TimecodeComponent::Days => show_days,
                TimecodeComponent::SubFrames => config.show_sub_frames,
                _ => true,
            })
            .collect()
    }

    /// Number of digits a component takes.
    pub fn digit_count(&self, component: TimecodeComponent) -> usize {
        match component {
            TimecodeComponent::Days => match self.properties.upper_limit {
                UpperLimit::Max100Days => 2,
                UpperLimit::Max24Hours => 1,
            },
            TimecodeComponent::Hours | TimecodeComponent::Minutes | TimecodeComponent::Seconds => 2,
            TimecodeComponent::Frames => self.properties.frame_rate.number_of_digits(),
            TimecodeComponent::SubFrames => self.properties.sub_frames_base.number_of_digits(),
        }
    }

    /// The typed values as a timecode.
    ///
    /// With [`ValidationPolicy::EnforceValid`] invalid values are an error;
    /// otherwise they are kept as typed.
    pub fn timecode(&self, policy: ValidationPolicy) -> Result<Timecode> {
        let timecode = match policy {
            ValidationPolicy::EnforceValid => Timecode::new(self.components, self.properties)?,
            ValidationPolicy::AllowInvalid => {
                Timecode::with_rule(self.components, self.properties, ValidationRule::AllowingInvalid)?
            }
        };
        Ok(timecode)
    }
}
