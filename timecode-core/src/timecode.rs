//! The timecode value type.

use crate::components::{Components, TimecodeComponent};
use crate::counting;
use crate::error::{Result, TimecodeError};
use crate::format::{self, StringFormat};
use crate::fraction::Fraction;
use crate::frame_count::FrameCount;
use crate::frame_rate::TimecodeFrameRate;
use crate::properties::Properties;
use crate::realtime;
use crate::record::TimecodeRecord;
use crate::source::{RichTimecodeSourceValue, TimecodeSourceValue};
use crate::sub_frames::SubFramesBase;
use crate::upper_limit::UpperLimit;
use crate::validation::{self, Policy, ValidationRule};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A timecode: raw components plus the properties they are counted at.
///
/// Components are normalized by the validation rule used to build the value;
/// only [`ValidationRule::AllowingInvalid`] stores out-of-range values.
///
/// Equality, ordering and hashing compare the real time the timecode
/// represents, rounded to whole nanoseconds. Upper limit and sub-frames base
/// take no part, so `01:00:00:00 @ 24` with a 24-hour limit equals the same
/// value with a 100-day limit. Compare [`components`](Self::components) and
/// [`properties`](Self::properties) when the full value matters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "TimecodeRecord", try_from = "TimecodeRecord")]
pub struct Timecode {
    components: Components,
    properties: Properties,
}

impl Timecode {
    /// Build a timecode, failing if the source is out of range.
    ///
    /// # Example
    /// ```rust
    /// use timecode_core::{Components, Properties, Timecode, TimecodeFrameRate};
    ///
    /// let props = Properties::new(TimecodeFrameRate::Fps24);
    /// let tc = Timecode::new(Components::hmsf(1, 30, 45, 12), props).unwrap();
    /// assert_eq!(tc.to_string(), "01:30:45:12");
    /// assert!(Timecode::new(Components::hmsf(24, 0, 0, 0), props).is_err());
    /// ```
    pub fn new(source: impl Into<TimecodeSourceValue>, properties: Properties) -> Result<Self> {
        Self::resolve(source.into(), properties, Policy::Exact)
    }

    /// Build a timecode, normalizing out-of-range values with `rule`.
    ///
    /// Only sources that can fail to decode (strings) return an error.
    pub fn with_rule(
        source: impl Into<TimecodeSourceValue>,
        properties: Properties,
        rule: ValidationRule,
    ) -> Result<Self> {
        Self::resolve(source.into(), properties, rule.into())
    }

    /// Build a timecode from a source that carries its own frame rate,
    /// failing if it is out of range.
    pub fn new_rich(
        source: impl Into<RichTimecodeSourceValue>,
        sub_frames_base: SubFramesBase,
        upper_limit: UpperLimit,
    ) -> Result<Self> {
        Self::resolve_rich(source.into(), sub_frames_base, upper_limit, Policy::Exact)
    }

    /// Build a timecode from a source that carries its own frame rate,
    /// normalizing out-of-range values with `rule`.
    pub fn new_rich_with_rule(
        source: impl Into<RichTimecodeSourceValue>,
        sub_frames_base: SubFramesBase,
        upper_limit: UpperLimit,
        rule: ValidationRule,
    ) -> Result<Self> {
        Self::resolve_rich(source.into(), sub_frames_base, upper_limit, rule.into())
    }

    /// Timecode at zero.
    #[must_use]
    pub fn zero(properties: Properties) -> Self {
        Self::from_parts(Components::zero(), properties)
    }

    /// Replace the value, failing (and leaving `self` untouched) if the
    /// source is out of range.
    pub fn set(&mut self, source: impl Into<TimecodeSourceValue>) -> Result<()> {
        *self = Self::new(source, self.properties)?;
        Ok(())
    }

    /// Replace the value, normalizing it with `rule`.
    pub fn set_with_rule(
        &mut self,
        source: impl Into<TimecodeSourceValue>,
        rule: ValidationRule,
    ) -> Result<()> {
        *self = Self::with_rule(source, self.properties, rule)?;
        Ok(())
    }

    pub(crate) fn from_parts(components: Components, properties: Properties) -> Self {
        Self {
            components,
            properties,
        }
    }

    fn resolve(source: TimecodeSourceValue, properties: Properties, policy: Policy) -> Result<Self> {
        let components = source.resolve(&properties, policy)?;
        Ok(Self::from_parts(components, properties))
    }

    fn resolve_rich(
        source: RichTimecodeSourceValue,
        sub_frames_base: SubFramesBase,
        upper_limit: UpperLimit,
        policy: Policy,
    ) -> Result<Self> {
        let (source, frame_rate) = source.into_source()?;
        let properties = Properties::new(frame_rate)
            .with_sub_frames_base(sub_frames_base)
            .with_upper_limit(upper_limit);
        Self::resolve(source, properties, policy)
    }

    // Accessors

    /// Raw components.
    pub fn components(&self) -> Components {
        self.components
    }

    /// Frame rate, sub-frames base and upper limit.
    pub fn properties(&self) -> Properties {
        self.properties
    }

    /// Frame rate.
    pub fn frame_rate(&self) -> TimecodeFrameRate {
        self.properties.frame_rate
    }

    /// Sub-frames base.
    pub fn sub_frames_base(&self) -> SubFramesBase {
        self.properties.sub_frames_base
    }

    /// Upper limit.
    pub fn upper_limit(&self) -> UpperLimit {
        self.properties.upper_limit
    }

    /// Days
    pub fn days(&self) -> i32 {
        self.components.days
    }

    /// Hours
    pub fn hours(&self) -> i32 {
        self.components.hours
    }

    /// Minutes
    pub fn minutes(&self) -> i32 {
        self.components.minutes
    }

    /// Seconds
    pub fn seconds(&self) -> i32 {
        self.components.seconds
    }

    /// Frames
    pub fn frames(&self) -> i32 {
        self.components.frames
    }

    /// Sub-frames
    pub fn sub_frames(&self) -> i32 {
        self.components.sub_frames
    }

    // Derived values

    /// Total elapsed frames.
    pub fn frame_count(&self) -> FrameCount {
        counting::frame_count_of(
            &self.components,
            self.properties.frame_rate,
            self.properties.sub_frames_base,
        )
    }

    pub(crate) fn sub_frame_count(&self) -> i64 {
        self.frame_count().sub_frame_count()
    }

    /// Elapsed real time in seconds.
    pub fn real_time_value(&self) -> f64 {
        realtime::real_time_value(self.sub_frame_count(), &self.properties)
    }

    /// Elapsed real time as an exact fraction of seconds, in lowest terms.
    pub fn rational_value(&self) -> Fraction {
        realtime::rational_value(self.sub_frame_count(), &self.properties)
    }

    fn nanoseconds(&self) -> i128 {
        realtime::nanoseconds(self.sub_frame_count(), &self.properties)
    }

    // Validation

    /// Whether every component is within its valid range.
    pub fn is_valid(&self) -> bool {
        validation::is_valid(&self.components, &self.properties)
    }

    /// Components that fall outside their valid range.
    pub fn invalid_components(&self) -> BTreeSet<TimecodeComponent> {
        validation::invalid_components(&self.components, &self.properties)
    }

    /// Valid range of one component given the current values of the others.
    pub fn valid_range(&self, component: TimecodeComponent) -> RangeInclusive<i32> {
        validation::valid_range(component, &self.components, &self.properties)
    }

    /// Clamp the whole timecode into range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        self.normalized(ValidationRule::Clamping)
    }

    /// Clamp each component into its own range.
    #[must_use]
    pub fn clamped_components(&self) -> Self {
        self.normalized(ValidationRule::ClampingComponents)
    }

    /// Wrap around the upper limit.
    #[must_use]
    pub fn wrapped(&self) -> Self {
        self.normalized(ValidationRule::Wrapping)
    }

    fn normalized(&self, rule: ValidationRule) -> Self {
        Self::from_parts(
            validation::apply_rule(self.components, &self.properties, rule),
            self.properties,
        )
    }

    // Formatting

    /// Format with explicit options.
    ///
    /// ```rust
    /// use timecode_core::{Components, Properties, StringFormat, Timecode, TimecodeFrameRate};
    ///
    /// let props = Properties::new(TimecodeFrameRate::Fps29_97d);
    /// let tc = Timecode::new(Components::new(0, 1, 0, 0, 2, 12), props).unwrap();
    /// let format = StringFormat::default().with_sub_frames(true);
    /// assert_eq!(tc.string_value(format), "01:00:00;02.12");
    /// ```
    pub fn string_value(&self, format: StringFormat) -> String {
        format::encode(&self.components, &self.properties, format)
    }

    /// File-name-safe string, e.g. `01_00_00.02` for `01:00:00;02`.
    pub fn filename_compatible_string(&self) -> String {
        self.string_value(StringFormat::default().with_filename_compatible(true))
    }

    // Navigation

    /// The next frame, wrapping at the upper limit.
    #[must_use]
    pub fn next_frame(&self) -> Self {
        self.wrapping_add(FrameCount::frames(1, self.sub_frames_base()))
    }

    /// The previous frame, wrapping below zero.
    #[must_use]
    pub fn previous_frame(&self) -> Self {
        self.wrapping_sub(FrameCount::frames(1, self.sub_frames_base()))
    }

    /// Whether `self` lies within `start..=end`.
    ///
    /// When `start` is after `end` the range is taken to wrap around the
    /// upper limit, e.g. `23:00:00:00 ..= 01:00:00:00`.
    pub fn is_within(&self, start: &Timecode, end: &Timecode) -> bool {
        if start <= end {
            start <= self && self <= end
        } else {
            self >= start || self <= end
        }
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.nanoseconds() == other.nanoseconds()
    }
}

impl Eq for Timecode {}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nanoseconds().hash(state);
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.nanoseconds().cmp(&other.nanoseconds())
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_value(StringFormat::default()))
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    /// Parse `"<timecode> @ <frame rate>"`, e.g. `"01:00:00;00 @ 29.97d"`,
    /// with default sub-frames base and upper limit. Out-of-range values are
    /// rejected.
    fn from_str(s: &str) -> Result<Self> {
        Self::new_rich(
            RichTimecodeSourceValue::text(s),
            SubFramesBase::default(),
            UpperLimit::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn props(rate: TimecodeFrameRate) -> Properties {
        Properties::new(rate)
    }

    fn tc(s: &str, rate: TimecodeFrameRate) -> Timecode {
        Timecode::new(s, props(rate)).unwrap()
    }

    #[test]
    fn test_new_is_exact() {
        let p = props(TimecodeFrameRate::Fps29_97d);
        assert!(Timecode::new(Components::hmsf(0, 10, 0, 0), p).is_ok());
        assert_eq!(
            Timecode::new(Components::hmsf(0, 1, 0, 0), p).unwrap_err(),
            TimecodeError::invalid_components([TimecodeComponent::Frames])
        );
    }

    #[test]
    fn test_with_rule() {
        let p = props(TimecodeFrameRate::Fps24);
        let over = Components::hmsf(25, 0, 0, 0);

        let clamped = Timecode::with_rule(over, p, ValidationRule::Clamping).unwrap();
        assert_eq!(clamped.to_string(), "23:59:59:23");
        assert_eq!(clamped.sub_frames(), 79);

        let wrapped = Timecode::with_rule(over, p, ValidationRule::Wrapping).unwrap();
        assert_eq!(wrapped.to_string(), "01:00:00:00");

        let raw = Timecode::with_rule(over, p, ValidationRule::AllowingInvalid).unwrap();
        assert_eq!(raw.hours(), 25);
        assert!(!raw.is_valid());
        assert_eq!(raw.invalid_components(), BTreeSet::from([TimecodeComponent::Hours]));
        assert_eq!(raw.clamped_components().hours(), 23);
        assert_eq!(raw.wrapped().hours(), 1);
    }

    #[test]
    fn test_set_keeps_value_on_failure() {
        let mut timecode = tc("01:00:00:00", TimecodeFrameRate::Fps25);
        assert!(timecode.set(Components::hmsf(1, 0, 0, 25)).is_err());
        assert_eq!(timecode.to_string(), "01:00:00:00");

        timecode
            .set_with_rule(Components::hmsf(1, 0, 0, 25), ValidationRule::Wrapping)
            .unwrap();
        assert_eq!(timecode.to_string(), "01:00:01:00");
    }

    #[test]
    fn test_equality_is_real_time() {
        let a = tc("01:00:00:00", TimecodeFrameRate::Fps24);
        let b = Timecode::new(
            "01:00:00:00",
            props(TimecodeFrameRate::Fps24)
                .with_upper_limit(UpperLimit::Max100Days)
                .with_sub_frames_base(SubFramesBase::Max100SubFrames),
        )
        .unwrap();
        assert_eq!(a, b);

        // same moment at a different rate
        let c = tc("01:00:00:00", TimecodeFrameRate::Fps25);
        assert_eq!(a, c);

        // 29.97 runs slower than 30
        let d = tc("01:00:00:00", TimecodeFrameRate::Fps29_97);
        let e = tc("01:00:00:00", TimecodeFrameRate::Fps30);
        assert!(d > e);
        assert_ne!(d, e);
    }

    #[test]
    fn test_real_time_and_rational_values() {
        let timecode = tc("01:00:00:00", TimecodeFrameRate::Fps23_976);
        assert_eq!(timecode.rational_value(), Fraction::new(18018, 5));
        assert!((timecode.real_time_value() - 3603.6).abs() < 1e-9);
    }

    #[test]
    fn test_next_and_previous_frame_wrap() {
        let zero = Timecode::zero(props(TimecodeFrameRate::Fps24));
        assert_eq!(zero.previous_frame().to_string(), "23:59:59:23");
        assert_eq!(zero.previous_frame().next_frame(), zero);

        let df = tc("00:00:59;29", TimecodeFrameRate::Fps29_97d);
        assert_eq!(df.next_frame().to_string(), "00:01:00;02");
    }

    #[test]
    fn test_is_within() {
        let rate = TimecodeFrameRate::Fps24;
        let start = tc("01:00:00:00", rate);
        let end = tc("02:00:00:00", rate);
        assert!(tc("01:30:00:00", rate).is_within(&start, &end));
        assert!(end.is_within(&start, &end));
        assert!(!tc("03:00:00:00", rate).is_within(&start, &end));

        // wraps over midnight
        let start = tc("23:00:00:00", rate);
        let end = tc("01:00:00:00", rate);
        assert!(tc("00:30:00:00", rate).is_within(&start, &end));
        assert!(!tc("12:00:00:00", rate).is_within(&start, &end));
    }

    #[test]
    fn test_from_str() {
        let timecode: Timecode = "01:00:00;02 @ 29.97d".parse().unwrap();
        assert_eq!(timecode.frame_rate(), TimecodeFrameRate::Fps29_97d);
        assert_eq!(timecode.components(), Components::hmsf(1, 0, 0, 2));
        assert_eq!(timecode.to_string(), "01:00:00;02");

        assert!("01:00:00:00".parse::<Timecode>().is_err());
        assert!("01:00:00:00 @ 31".parse::<Timecode>().is_err());
        assert!("25:00:00:00 @ 24".parse::<Timecode>().is_err());
    }

    #[test]
    fn test_filename_compatible_string() {
        let timecode = tc("01:00:00;02", TimecodeFrameRate::Fps29_97d);
        assert_eq!(timecode.filename_compatible_string(), "01_00_00.02");
    }
}
