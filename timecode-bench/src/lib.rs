//! Benchmark fixtures for the timecode workspace.
//!
//! Shared inputs for the criterion benches in `benches/`.

use timecode_core::{FrameCount, Properties, StringFormat, Timecode, TimecodeFrameRate, UpperLimit};

/// Frame rates benchmarked individually: a plain rate, every drop-frame
/// family and a three-digit rate.
pub const FRAME_RATES: &[TimecodeFrameRate] = &[
    TimecodeFrameRate::Fps24,
    TimecodeFrameRate::Fps29_97d,
    TimecodeFrameRate::Fps59_94d,
    TimecodeFrameRate::Fps119_88d,
    TimecodeFrameRate::Fps100,
];

/// `count` frame numbers spread evenly over the timeline.
pub fn spread_frames(rate: TimecodeFrameRate, limit: UpperLimit, count: usize) -> Vec<i64> {
    let max = rate.max_total_frames(limit);
    let step = (max / count.max(1) as i64).max(1);
    (0..max).step_by(step as usize).take(count).collect()
}

/// Timecodes spread evenly over a 24-hour timeline.
pub fn sample_timecodes(rate: TimecodeFrameRate, count: usize) -> Vec<Timecode> {
    let props = Properties::new(rate);
    spread_frames(rate, UpperLimit::Max24Hours, count)
        .into_iter()
        .filter_map(|frame| Timecode::new(FrameCount::frames(frame, props.sub_frames_base), props).ok())
        .collect()
}

/// Formatted strings of [`sample_timecodes`], with sub-frames.
pub fn sample_strings(rate: TimecodeFrameRate, count: usize) -> Vec<String> {
    let format = StringFormat::default().with_sub_frames(true);
    sample_timecodes(rate, count)
        .iter()
        .map(|timecode| timecode.string_value(format))
        .collect()
}
