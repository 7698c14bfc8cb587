#![no_main]

//! Fuzz target for timecode arithmetic.
//!
//! Saturating and wrapping results stay on the timeline for any operand,
//! including non-finite factors.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use timecode_core::{FrameCount, Properties, Timecode, TimecodeFrameRate, ValidationRule};

#[derive(Arbitrary, Debug)]
struct ArithmeticInput {
    rate_index: u8,
    start: i64,
    offset: i64,
    factor: f64,
}

fuzz_target!(|input: ArithmeticInput| {
    let rates = TimecodeFrameRate::ALL;
    let rate = rates[input.rate_index as usize % rates.len()];
    let props = Properties::new(rate);
    let base = props.sub_frames_base;

    let Ok(start) = Timecode::with_rule(
        FrameCount::from_sub_frame_count(input.start, base),
        props,
        ValidationRule::Wrapping,
    ) else {
        return;
    };
    let offset = FrameCount::from_sub_frame_count(input.offset, base);

    assert!(start.saturating_add(offset).is_valid());
    assert!(start.wrapping_sub(offset).is_valid());
    assert!(start.saturating_mul(input.factor).is_valid());
    assert!(start.wrapping_div(input.factor).is_valid());
    let _ = start.checked_mul(input.factor);
});
