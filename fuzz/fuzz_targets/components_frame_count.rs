#![no_main]

//! Fuzz target for the components to frame count path.
//!
//! Degenerate component values (negative, huge, out of range) must never
//! panic, and valid components must survive the round trip.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use timecode_core::counting::{components_of, frame_count_of};
use timecode_core::validation::is_valid;
use timecode_core::{Components, Properties, SubFramesBase, TimecodeFrameRate, UpperLimit};

#[derive(Arbitrary, Debug)]
struct ComponentsInput {
    values: [i32; 6],
    rate_index: u8,
    base_index: u8,
    hundred_days: bool,
}

fuzz_target!(|input: ComponentsInput| {
    let rates = TimecodeFrameRate::ALL;
    let rate = rates[input.rate_index as usize % rates.len()];
    let base = SubFramesBase::ALL[input.base_index as usize % SubFramesBase::ALL.len()];
    let limit = if input.hundred_days {
        UpperLimit::Max100Days
    } else {
        UpperLimit::Max24Hours
    };
    let props = Properties::new(rate)
        .with_sub_frames_base(base)
        .with_upper_limit(limit);

    let [days, hours, minutes, seconds, frames, sub_frames] = input.values;
    let components = Components::new(days, hours, minutes, seconds, frames, sub_frames);

    let count = frame_count_of(&components, rate, base);
    let back = components_of(&count, rate, base);

    if is_valid(&components, &props) {
        assert_eq!(back, components, "{} {:?}", rate, count);
    }
});
