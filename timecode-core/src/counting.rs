//! Conversion between elapsed frame counts and timecode components.
//!
//! [`frame_count_of`] and [`components_of`] are exact inverses for every
//! elapsed frame count at every rate; the drop-frame adjustment in both
//! directions comes from [`DropFrameConfig`].

use crate::components::Components;
use crate::dropframe::DropFrameConfig;
use crate::frame_count::FrameCount;
use crate::frame_rate::TimecodeFrameRate;
use crate::sub_frames::SubFramesBase;
use tracing::warn;

/// Total elapsed frames (without sub-frames) for a set of components.
///
/// Returns `None` if the arithmetic would overflow.
pub fn elapsed_frames(components: &Components, frame_rate: TimecodeFrameRate) -> Option<i64> {
    let total_hours = (components.days as i64)
        .checked_mul(24)?
        .checked_add(components.hours as i64)?;
    let total_minutes = total_hours
        .checked_mul(60)?
        .checked_add(components.minutes as i64)?;
    let total_seconds = total_minutes
        .checked_mul(60)?
        .checked_add(components.seconds as i64)?;
    let nominal = total_seconds
        .checked_mul(frame_rate.nominal_fps())?
        .checked_add(components.frames as i64)?;

    match DropFrameConfig::for_frame_rate(frame_rate) {
        Some(config) => nominal.checked_sub(config.frames_dropped_before(total_minutes)?),
        None => Some(nominal),
    }
}

/// Convert components to an elapsed frame count.
///
/// Components that overflow the frame count produce a zero count rather than
/// a panic.
pub fn frame_count_of(
    components: &Components,
    frame_rate: TimecodeFrameRate,
    sub_frames_base: SubFramesBase,
) -> FrameCount {
    let sub_frames = components.sub_frames as i64;
    let checked = elapsed_frames(components, frame_rate).and_then(|frames| {
        frames
            .checked_mul(sub_frames_base.raw_value())?
            .checked_add(sub_frames)
            .map(|_| frames)
    });

    match checked {
        Some(frames) => FrameCount::split(frames, sub_frames, sub_frames_base),
        None => {
            warn!(?components, %frame_rate, "Frame count overflow, using zero");
            FrameCount::zero(sub_frames_base)
        }
    }
}

/// Convert an elapsed frame count to components.
///
/// The count is first expressed in `sub_frames_base`. Negative counts produce
/// components with every value negated, so they convert back to the same
/// count. Counts too large to express produce zero components.
pub fn components_of(
    frame_count: &FrameCount,
    frame_rate: TimecodeFrameRate,
    sub_frames_base: SubFramesBase,
) -> Components {
    let count = frame_count.sub_frame_count_in(sub_frames_base);
    match components_from_sub_frame_count(count, frame_rate, sub_frames_base) {
        Some(components) => components,
        None => {
            warn!(count, %frame_rate, "Components overflow, using zero");
            Components::zero()
        }
    }
}

fn components_from_sub_frame_count(
    count: i64,
    frame_rate: TimecodeFrameRate,
    sub_frames_base: SubFramesBase,
) -> Option<Components> {
    let magnitude = count.checked_abs()?;
    let base = sub_frames_base.raw_value();
    let frames = magnitude / base;
    let sub_frames = magnitude % base;

    let nominal = match DropFrameConfig::for_frame_rate(frame_rate) {
        Some(config) => config.nominal_frame_number(frames)?,
        None => frames,
    };

    let fps = frame_rate.nominal_fps();
    let total_seconds = nominal / fps;
    let total_minutes = total_seconds / 60;
    let total_hours = total_minutes / 60;

    let components = Components {
        days: i32::try_from(total_hours / 24).ok()?,
        hours: (total_hours % 24) as i32,
        minutes: (total_minutes % 60) as i32,
        seconds: (total_seconds % 60) as i32,
        frames: (nominal % fps) as i32,
        sub_frames: sub_frames as i32,
    };

    if count < 0 {
        Some(negated(components))
    } else {
        Some(components)
    }
}

fn negated(c: Components) -> Components {
    Components::new(
        -c.days,
        -c.hours,
        -c.minutes,
        -c.seconds,
        -c.frames,
        -c.sub_frames,
    )
}
