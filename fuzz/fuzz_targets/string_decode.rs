#![no_main]

//! Fuzz target for timecode string decoding.
//!
//! Arbitrary text must either fail to decode or produce components that
//! every validation rule can resolve without panicking.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use timecode_core::{format, Properties, Timecode, TimecodeFrameRate, ValidationRule};

#[derive(Arbitrary, Debug)]
struct DecodeInput {
    text: String,
    rate_index: u8,
    rule: Rule,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Rule {
    Exact,
    Clamping,
    ClampingComponents,
    Wrapping,
    AllowingInvalid,
}

fuzz_target!(|input: DecodeInput| {
    let rates = TimecodeFrameRate::ALL;
    let rate = rates[input.rate_index as usize % rates.len()];
    let props = Properties::new(rate);

    let _ = format::decode(&input.text);

    let result = match input.rule {
        Rule::Exact => Timecode::new(input.text.as_str(), props),
        Rule::Clamping => Timecode::with_rule(input.text.as_str(), props, ValidationRule::Clamping),
        Rule::ClampingComponents => {
            Timecode::with_rule(input.text.as_str(), props, ValidationRule::ClampingComponents)
        }
        Rule::Wrapping => Timecode::with_rule(input.text.as_str(), props, ValidationRule::Wrapping),
        Rule::AllowingInvalid => {
            Timecode::with_rule(input.text.as_str(), props, ValidationRule::AllowingInvalid)
        }
    };

    if let Ok(timecode) = result {
        if !matches!(input.rule, Rule::AllowingInvalid) {
            assert!(timecode.is_valid(), "{:?} from {:?}", timecode, input.text);
        }
        let _ = timecode.to_string();
        let _ = timecode.real_time_value();
    }

    // Rich text carries its own rate
    let _ = input.text.parse::<Timecode>();
});
