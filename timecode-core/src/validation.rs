//! Component ranges and out-of-range policies.
//!
//! Ranges are context sensitive: at drop-frame rates the lowest valid frame
//! number depends on the current minute and second, so [`valid_range`] takes
//! the whole component set rather than a single value.

use crate::components::{Components, TimecodeComponent};
use crate::counting;
use crate::dropframe::DropFrameConfig;
use crate::error::{Result, TimecodeError};
use crate::frame_count::FrameCount;
use crate::properties::Properties;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// What to do with values outside the valid range.
///
/// Exact validation (failing instead of normalizing) is expressed by the
/// fallible constructors and `checked_*` operations rather than a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// Clamp the whole timecode to `[zero, max expressible]`.
    #[default]
    Clamping,
    /// Clamp every component into its own range independently.
    ClampingComponents,
    /// Wrap around the upper limit.
    Wrapping,
    /// Store values as given.
    AllowingInvalid,
}

/// Validation rule plus the exact (reject) mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Policy {
    Exact,
    Rule(ValidationRule),
}

impl From<ValidationRule> for Policy {
    fn from(rule: ValidationRule) -> Self {
        Self::Rule(rule)
    }
}

/// A frame position in sub-frames, before any range policy is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum FramePosition {
    /// Sub-frame count in the target base.
    Count(i128),
    /// A NaN or infinite frame position.
    NonFinite(f64),
}

/// Valid range of one component, given the rest of `components`.
///
/// At drop-frame rates the frames range starts above zero at second 0 of
/// every minute not divisible by ten.
#[must_use]
pub fn valid_range(
    component: TimecodeComponent,
    components: &Components,
    properties: &Properties,
) -> RangeInclusive<i32> {
    match component {
        TimecodeComponent::Days => 0..=properties.upper_limit.max_days_expressible() as i32,
        TimecodeComponent::Hours => 0..=23,
        TimecodeComponent::Minutes | TimecodeComponent::Seconds => 0..=59,
        TimecodeComponent::Frames => {
            let rate = properties.frame_rate;
            let first = DropFrameConfig::for_frame_rate(rate)
                .map(|config| {
                    config.first_frame_at(components.minutes as i64, components.seconds as i64)
                })
                .unwrap_or(0);
            first as i32..=rate.max_frame_number_displayable() as i32
        }
        TimecodeComponent::SubFrames => {
            0..=properties.sub_frames_base.max_sub_frames_expressible() as i32
        }
    }
}

/// Components that fall outside their valid range. Empty iff `components`
/// is a valid timecode under `properties`.
#[must_use]
pub fn invalid_components(
    components: &Components,
    properties: &Properties,
) -> BTreeSet<TimecodeComponent> {
    TimecodeComponent::ALL
        .into_iter()
        .filter(|&component| {
            !valid_range(component, components, properties).contains(&components.get(component))
        })
        .collect()
}

/// Clamp each component into its range, largest unit first.
///
/// Later ranges see the already clamped values, so a drop-frame frame number
/// is checked against the clamped minute and second.
#[must_use]
pub fn clamp_components(components: &Components, properties: &Properties) -> Components {
    let mut clamped = *components;
    for component in TimecodeComponent::ALL {
        let range = valid_range(component, &clamped, properties);
        let value = clamped.get(component).clamp(*range.start(), *range.end());
        clamped.set(component, value);
    }
    clamped
}

/// Apply `rule` to a sub-frame count expressed in `properties`' base.
pub(crate) fn normalize_count(count: i128, properties: &Properties, rule: ValidationRule) -> i64 {
    let max = properties.max_sub_frame_count() as i128;
    let resolved = match rule {
        ValidationRule::Clamping | ValidationRule::ClampingComponents => count.clamp(0, max - 1),
        ValidationRule::Wrapping => count.rem_euclid(max),
        ValidationRule::AllowingInvalid => count.clamp(i64::MIN as i128, i64::MAX as i128),
    };
    if resolved != count {
        debug!(%count, %resolved, ?rule, "Frame count normalized");
    }
    resolved as i64
}

/// Apply `policy` to a sub-frame count, failing in exact mode when the count
/// leaves the timeline.
pub(crate) fn resolve_count(count: i128, properties: &Properties, policy: Policy) -> Result<i64> {
    match policy {
        Policy::Exact if count < 0 => Err(TimecodeError::Underflow),
        Policy::Exact if count >= properties.max_sub_frame_count() as i128 => {
            Err(TimecodeError::Overflow)
        }
        Policy::Exact => Ok(count as i64),
        Policy::Rule(rule) => Ok(normalize_count(count, properties, rule)),
    }
}

/// Components for a canonical sub-frame count in `properties`' base.
pub(crate) fn components_at(count: i64, properties: &Properties) -> Components {
    let frame_count = FrameCount::from_sub_frame_count(count, properties.sub_frames_base);
    counting::components_of(&frame_count, properties.frame_rate, properties.sub_frames_base)
}

/// Components for a sub-frame count after applying `rule`. Never fails.
pub(crate) fn components_with_rule(
    count: i128,
    properties: &Properties,
    rule: ValidationRule,
) -> Components {
    components_at(normalize_count(count, properties, rule), properties)
}

/// Components for a sub-frame count after applying `policy`.
pub(crate) fn components_for_count(
    count: i128,
    properties: &Properties,
    policy: Policy,
) -> Result<Components> {
    let resolved = resolve_count(count, properties, policy)?;
    Ok(components_at(resolved, properties))
}

/// Components for a frame position, which may be non-finite.
///
/// Exact mode rejects non-finite positions. Clamping sends NaN and negative
/// infinity to zero and positive infinity to the end of the timeline;
/// wrapping and allowing-invalid fall back to zero.
pub(crate) fn components_for_position(
    position: FramePosition,
    properties: &Properties,
    policy: Policy,
    operation: &str,
) -> Result<Components> {
    let count = match position {
        FramePosition::Count(count) => count,
        FramePosition::NonFinite(_) if policy == Policy::Exact => {
            return Err(TimecodeError::non_finite(operation));
        }
        FramePosition::NonFinite(value) => match policy {
            Policy::Rule(ValidationRule::Clamping | ValidationRule::ClampingComponents)
                if value > 0.0 =>
            {
                properties.max_sub_frame_count() as i128
            }
            Policy::Rule(ValidationRule::Clamping | ValidationRule::ClampingComponents) => 0,
            _ => {
                warn!(value, operation, "Non-finite frame position, using zero");
                0
            }
        },
    };
    components_for_count(count, properties, policy)
}

/// Apply `policy` to raw components. Valid components pass through untouched
/// under every policy.
pub(crate) fn resolve_components(
    components: Components,
    properties: &Properties,
    policy: Policy,
) -> Result<Components> {
    let invalid = invalid_components(&components, properties);
    if invalid.is_empty() {
        return Ok(components);
    }
    let rule = match policy {
        Policy::Exact => {
            return Err(TimecodeError::InvalidComponents {
                components: invalid,
            })
        }
        Policy::Rule(rule) => rule,
    };
    Ok(apply_rule(components, properties, rule))
}

/// Apply `rule` to raw components. Never fails.
pub(crate) fn apply_rule(
    components: Components,
    properties: &Properties,
    rule: ValidationRule,
) -> Components {
    if rule == ValidationRule::AllowingInvalid || is_valid(&components, properties) {
        return components;
    }
    if rule == ValidationRule::ClampingComponents {
        let clamped = clamp_components(&components, properties);
        debug!(?components, ?clamped, "Components clamped");
        return clamped;
    }
    let count = counting::frame_count_of(
        &components,
        properties.frame_rate,
        properties.sub_frames_base,
    )
    .sub_frame_count();
    components_with_rule(count as i128, properties, rule)
}

/// Whether every component is within its valid range.
#[must_use]
pub fn is_valid(components: &Components, properties: &Properties) -> bool {
    TimecodeComponent::ALL.into_iter().all(|component| {
        valid_range(component, components, properties).contains(&components.get(component))
    })
}
