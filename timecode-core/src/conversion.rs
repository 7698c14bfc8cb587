//! Converting timecodes between frame rates, sub-frames bases and upper limits.

use crate::error::Result;
use crate::frame_rate::TimecodeFrameRate;
use crate::properties::Properties;
use crate::source::position_of_timecode;
use crate::sub_frames::SubFramesBase;
use crate::timecode::Timecode;
use crate::upper_limit::UpperLimit;
use crate::validation::{self, Policy, ValidationRule};
use tracing::trace;

impl Timecode {
    /// Express the same moment in time at another frame rate.
    ///
    /// Fails if the moment lies beyond the upper limit at the new rate.
    ///
    /// ```rust
    /// use timecode_core::{Components, Properties, Timecode, TimecodeFrameRate};
    ///
    /// let tc = Timecode::new("01:00:00:00", Properties::new(TimecodeFrameRate::Fps23_976)).unwrap();
    /// let converted = tc.converted(TimecodeFrameRate::Fps30).unwrap();
    /// assert_eq!(converted.components(), Components::hmsf(1, 0, 3, 18));
    /// ```
    pub fn converted(&self, frame_rate: TimecodeFrameRate) -> Result<Self> {
        self.converted_with(frame_rate, None, false)
    }

    /// Convert to another frame rate and, optionally, sub-frames base.
    ///
    /// With `preserving_values` the displayed components are kept as long
    /// as they are valid at the new rate (`01:00:00:12` at 24 stays
    /// `01:00:00:12` at 25); otherwise the real time is preserved.
    pub fn converted_with(
        &self,
        frame_rate: TimecodeFrameRate,
        sub_frames_base: Option<SubFramesBase>,
        preserving_values: bool,
    ) -> Result<Self> {
        let base = sub_frames_base.unwrap_or(self.sub_frames_base());
        let properties = self
            .properties()
            .with_frame_rate(frame_rate)
            .with_sub_frames_base(base);

        if properties == self.properties() {
            return Ok(*self);
        }

        if frame_rate == self.frame_rate() || preserving_values {
            let mut components = self.components();
            let sub_frames = self
                .sub_frames_base()
                .convert(components.sub_frames as i64, base);
            components.sub_frames = sub_frames.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
            if frame_rate == self.frame_rate()
                || validation::is_valid(&components, &properties)
            {
                trace!(from = %self.frame_rate(), to = %frame_rate, "Kept component values");
                return Ok(Self::from_parts(components, properties));
            }
        }

        trace!(from = %self.frame_rate(), to = %frame_rate, "Converting by real time");
        let components = validation::components_for_position(
            position_of_timecode(self, &properties),
            &properties,
            Policy::Exact,
            "frame rate conversion",
        )?;
        Ok(Self::from_parts(components, properties))
    }

    /// Change the upper limit, failing if the timecode does not fit in it.
    pub fn with_upper_limit(&self, upper_limit: UpperLimit) -> Result<Self> {
        let properties = self.properties().with_upper_limit(upper_limit);
        let components =
            validation::resolve_components(self.components(), &properties, Policy::Exact)?;
        Ok(Self::from_parts(components, properties))
    }

    /// Change the upper limit, normalizing the timecode with `rule` if it
    /// does not fit in it.
    #[must_use]
    pub fn with_upper_limit_and_rule(&self, upper_limit: UpperLimit, rule: ValidationRule) -> Self {
        let properties: Properties = self.properties().with_upper_limit(upper_limit);
        Self::from_parts(
            validation::apply_rule(self.components(), &properties, rule),
            properties,
        )
    }
}
