//! Real-time (seconds) and rational (exact seconds) codecs.
//!
//! All conversions run on canonical sub-frame counts so that the sub-frame
//! part of a timecode is carried through proportionally.

use crate::fraction::Fraction;
use crate::properties::Properties;
use crate::validation::FramePosition;

/// Bias applied before truncating a real-time value to sub-frames, so a value
/// a hair below a frame boundary still lands on that frame.
const REAL_TIME_EPSILON: f64 = 0.000_01;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// `(numerator, denominator)` of a sub-frame's duration in seconds.
fn sub_frame_duration(properties: &Properties) -> (i128, i128) {
    let rate = properties.frame_rate.rate();
    (
        rate.denominator() as i128,
        rate.numerator() as i128 * properties.sub_frames_base.raw_value() as i128,
    )
}

/// Seconds elapsed at `count` sub-frames.
pub(crate) fn real_time_value(count: i64, properties: &Properties) -> f64 {
    let (numerator, denominator) = sub_frame_duration(properties);
    count as f64 * numerator as f64 / denominator as f64
}

/// Exact seconds elapsed at `count` sub-frames, in lowest terms.
pub(crate) fn rational_value(count: i64, properties: &Properties) -> Fraction {
    let (numerator, denominator) = sub_frame_duration(properties);
    let mut n = count as i128 * numerator;
    let mut d = denominator;
    let g = gcd_i128(n.unsigned_abs(), d.unsigned_abs()).max(1) as i128;
    n /= g;
    d /= g;
    match (i64::try_from(n), i64::try_from(d)) {
        (Ok(n), Ok(d)) => Fraction::new(n, d),
        _ => Fraction::new(count, 1).reduced(),
    }
}

/// Seconds elapsed at `count` sub-frames, rounded to whole nanoseconds.
pub(crate) fn nanoseconds(count: i64, properties: &Properties) -> i128 {
    let (numerator, denominator) = sub_frame_duration(properties);
    let scaled = count as i128 * numerator * NANOS_PER_SECOND;
    let quotient = scaled.div_euclid(denominator);
    if scaled.rem_euclid(denominator) * 2 >= denominator {
        quotient + 1
    } else {
        quotient
    }
}

/// Sub-frame position of a real-time value.
pub(crate) fn position_of_real_time(seconds: f64, properties: &Properties) -> FramePosition {
    let padded = seconds + seconds.signum() * REAL_TIME_EPSILON;
    let sub_frames = padded
        * properties.frame_rate.frame_rate_for_real_time_calculation()
        * properties.sub_frames_base.raw_value() as f64;
    if sub_frames.is_finite() {
        // `as` saturates out-of-range values
        FramePosition::Count(sub_frames.trunc() as i128)
    } else {
        FramePosition::NonFinite(sub_frames)
    }
}

/// Sub-frame position of an exact number of seconds, truncated.
pub(crate) fn position_of_rational(seconds: Fraction, properties: &Properties) -> FramePosition {
    let (duration_numerator, duration_denominator) = sub_frame_duration(properties);
    let n = seconds.numerator() as i128;
    let d = seconds.denominator() as i128;
    if d == 0 {
        return FramePosition::NonFinite(seconds.double_value());
    }
    // seconds / sub-frame duration = n * den_rate * base / (d * num_rate)
    let scaled = n
        .checked_mul(duration_denominator)
        .zip(d.checked_mul(duration_numerator));
    match scaled {
        Some((numerator, denominator)) => FramePosition::Count(numerator / denominator),
        None if (n < 0) != (d < 0) => FramePosition::NonFinite(f64::NEG_INFINITY),
        None => FramePosition::NonFinite(f64::INFINITY),
    }
}

fn gcd_i128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
