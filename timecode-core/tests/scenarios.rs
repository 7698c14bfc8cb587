//! End-to-end behaviour of the public API.

use pretty_assertions::assert_eq;
use timecode_core::{
    Components, FrameCount, Properties, SubFramesBase, Timecode, TimecodeError,
    TimecodeFrameRate, TimecodeInterval, UpperLimit,
};

fn props(rate: TimecodeFrameRate) -> Properties {
    Properties::new(rate)
}

fn tc(text: &str, rate: TimecodeFrameRate) -> Timecode {
    Timecode::new(text, props(rate)).unwrap()
}

#[test]
fn clamping_addition_saturates_at_the_last_frame() {
    let zero = Timecode::zero(props(TimecodeFrameRate::Fps24));
    let sum = zero.saturating_add(Components::hmsf(25, 0, 0, 0));
    assert_eq!(sum.to_string(), "23:59:59:23");
    assert_eq!(
        (sum.hours(), sum.minutes(), sum.seconds(), sum.frames()),
        (23, 59, 59, 23)
    );
    // clamping stops on the last sub-frame of the last frame
    assert_eq!(sum.sub_frames(), 79);
    assert_eq!(sum.components(), Components::new(0, 23, 59, 59, 23, 79));
}

#[test]
fn drop_frame_keeps_frame_numbers_at_minute_zero() {
    let zero = Timecode::zero(props(TimecodeFrameRate::Fps29_97d));
    let a = zero.checked_add((0, 0, 0, 29)).unwrap();
    assert_eq!(a.components(), Components::hmsf(0, 0, 0, 29));
    let b = a.checked_add((0, 0, 0, 1)).unwrap();
    assert_eq!(b.components(), Components::hmsf(0, 0, 1, 0));
}

#[test]
fn drop_frame_skips_frame_numbers_at_minute_one() {
    let start = tc("00:00:59;00", TimecodeFrameRate::Fps29_97d);
    let sum = start.checked_add((0, 0, 0, 30)).unwrap();
    assert_eq!(sum.components(), Components::hmsf(0, 1, 0, 2));
}

#[test]
fn clamping_multiplication_saturates() {
    let timecode = tc("01:00:00:00", TimecodeFrameRate::Fps24);
    let product = timecode.saturating_mul(25.0);
    assert_eq!(product.to_string(), "23:59:59:23");
    assert_eq!(product.sub_frames(), 79);
    assert_eq!(
        timecode.checked_mul(25.0).unwrap_err(),
        TimecodeError::Overflow
    );
}

#[test]
fn string_round_trip_at_every_non_drop_rate() {
    for rate in TimecodeFrameRate::ALL.into_iter().filter(|r| !r.is_drop()) {
        let timecode = tc("01:02:03:04", rate);
        assert_eq!(timecode.components(), Components::hmsf(1, 2, 3, 4));
        if rate.number_of_digits() == 2 {
            assert_eq!(timecode.to_string(), "01:02:03:04");
        }
    }
}

#[test]
fn frame_rate_conversion_holds_real_time() {
    let timecode = tc("01:00:00:00", TimecodeFrameRate::Fps23_976);
    let converted = timecode.converted(TimecodeFrameRate::Fps30).unwrap();
    assert_eq!(converted.components(), Components::hmsf(1, 0, 3, 18));
    assert_eq!(converted, timecode);
}

#[test]
fn drop_frame_one_hour_is_real_time() {
    let timecode = tc("01:00:00;00", TimecodeFrameRate::Fps29_97d);
    assert_eq!(timecode.frame_count().whole_frames(), 107_892);
    // 107892 * 1001 / 30000
    assert!((timecode.real_time_value() - 3599.9964).abs() < 1e-9);
}

#[test]
fn hundred_day_timeline() {
    let props = props(TimecodeFrameRate::Fps25).with_upper_limit(UpperLimit::Max100Days);
    let last = Timecode::new("99 23:59:59:24", props).unwrap();
    assert_eq!(last.next_frame().to_string(), "0 00:00:00:00");
    assert!(Timecode::new("100 00:00:00:00", props).is_err());
}

#[test]
fn sub_frames_follow_their_base() {
    let props = props(TimecodeFrameRate::Fps24).with_sub_frames_base(SubFramesBase::QuarterFrames);
    let timecode = Timecode::new(FrameCount::combined(10.75, SubFramesBase::QuarterFrames), props)
        .unwrap();
    assert_eq!(timecode.frames(), 10);
    assert_eq!(timecode.sub_frames(), 3);
    assert!(Timecode::new(Components::new(0, 0, 0, 0, 0, 4), props).is_err());
}

#[test]
fn intervals_resolve_on_the_clock() {
    let start = tc("00:00:10:00", TimecodeFrameRate::Fps24);
    let end = tc("23:59:50:00", TimecodeFrameRate::Fps24);
    let interval = end.interval(&start);
    assert!(interval.is_negative());
    assert_eq!(interval.timecode(&end), start);

    let backwards = TimecodeInterval::from_real_time(-10.0, start.properties()).unwrap();
    assert_eq!(backwards.flattened(), end);
}
