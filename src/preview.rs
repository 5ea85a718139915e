//! Preview geometry: size selection, orientation correction and
//! measurement.
//!
//! Pure functions over the types in [`crate::types`]; the controller
//! wires them to live camera state.

use crate::types::{CameraFacing, DisplayRotation, PreviewSize};

/// Pick the hardware preview size that best fits a target geometry.
///
/// Runs in two passes. Sizes whose height/width ratio lies within
/// `aspect_tolerance` of the target's are preferred, and the one with the
/// height closest to the target height wins among them. When no size
/// qualifies, the ratio constraint is dropped and the closest height wins
/// outright. Ties keep the earliest candidate. An empty list yields
/// `None`.
pub fn optimal_preview_size(
    sizes: &[PreviewSize],
    target_width: u32,
    target_height: u32,
    aspect_tolerance: f64,
) -> Option<PreviewSize> {
    let target_ratio = target_height as f64 / target_width as f64;
    let target_height = target_height as f64;

    let mut optimal: Option<PreviewSize> = None;
    let mut min_diff = f64::MAX;

    for size in sizes {
        if (size.ratio() - target_ratio).abs() > aspect_tolerance {
            continue;
        }
        let diff = (size.height as f64 - target_height).abs();
        if diff < min_diff {
            optimal = Some(*size);
            min_diff = diff;
        }
    }

    // No size matched the aspect ratio; fall back to height alone.
    if optimal.is_none() {
        min_diff = f64::MAX;
        for size in sizes {
            let diff = (size.height as f64 - target_height).abs();
            if diff < min_diff {
                optimal = Some(*size);
                min_diff = diff;
            }
        }
    }

    optimal
}

/// Degrees to rotate the preview stream so it renders upright for the
/// given display rotation and sensor mounting.
///
/// Front cameras mirror, so their correction runs the opposite way around
/// the circle. The result is always in `0..360`.
pub fn display_orientation_degrees(
    facing: CameraFacing,
    rotation: DisplayRotation,
    sensor_orientation: i32,
) -> i32 {
    let degrees = rotation.degrees();
    let result = match facing {
        CameraFacing::Back => 360 - degrees + sensor_orientation,
        CameraFacing::Front => (360 - degrees - sensor_orientation) + 360,
    };
    result.rem_euclid(360)
}

/// Dimensions a layout pass should give the preview so the selected size
/// renders without distortion.
///
/// The preview fills the proposed width at the size's long-over-short
/// ratio; if that leaves it shorter than the proposed height, both
/// dimensions are stretched until the height is filled. Without a
/// selected size the proposal passes through unchanged. The arithmetic
/// runs in single precision with truncating casts.
pub fn preferred_dimensions(
    preview_size: Option<PreviewSize>,
    proposed_width: u32,
    proposed_height: u32,
) -> (u32, u32) {
    let size = match preview_size {
        Some(size) => size,
        None => return (proposed_width, proposed_height),
    };

    let ratio = if size.height >= size.width {
        size.height as f32 / size.width as f32
    } else {
        size.width as f32 / size.height as f32
    };

    let cam_height = (proposed_width as f32 * ratio).trunc();
    if cam_height < proposed_height as f32 {
        let stretch = proposed_height as f32 / size.height as f32;
        (
            (proposed_width as f32 * stretch) as u32,
            (stretch * cam_height) as u32,
        )
    } else {
        (proposed_width, cam_height as u32)
    }
}
