//! Angle-to-position resolver
//!
//! Turns a raw pointer angle plus the previous sample into a percentage.
//! Single-rotation mode is memoryless: the absolute angle decides. Multi-rotation
//! mode integrates sample-to-sample deltas so the percentage can wind past one turn.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SAMPLE_DELTA_DEGREES;
use crate::normalize_signed_degrees;

/// Everything the resolver needs for one pointer sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionInput {
    /// Current pointer angle, degrees in [0, 360)
    pub mouse_angle: f64,
    /// Angle of the previous accepted sample (`None` on first contact)
    pub previous_mouse_angle: Option<f64>,
    /// Percentage after the previous accepted sample
    pub previous_percentage: Option<f64>,
    pub angle_offset: f64,
    pub angle_range: f64,
    pub multi_rotation: bool,
}

/// Resolver output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// False when the sample was discarded; callers keep their prior state
    pub updated: bool,
    pub mouse_angle: f64,
    pub percentage: f64,
}

/// Absolute pointer angle to a percentage in [0, 1]
///
/// The angle is measured half a turn around from `angle_offset + angle_range / 2`,
/// giving a value centered on 0.5 that is then clamped. With the default
/// offset and a full range the top of the circle is the midpoint. Angles beyond
/// either end of a partial range pin to the nearer endpoint.
pub fn calculate_percentage_from_mouse_angle(
    mouse_angle: f64,
    angle_offset: f64,
    angle_range: f64,
) -> f64 {
    let center = angle_offset + angle_range / 2.0;
    let relative = normalize_signed_degrees(mouse_angle - center + 180.0);
    (0.5 + relative / angle_range).clamp(0.0, 1.0)
}

/// Resolve a pointer sample into a new position
pub fn calculate_position_from_mouse_angle(input: &PositionInput) -> Position {
    let absolute = || Position {
        updated: true,
        mouse_angle: input.mouse_angle,
        percentage: calculate_percentage_from_mouse_angle(
            input.mouse_angle,
            input.angle_offset,
            input.angle_range,
        ),
    };

    let (previous_angle, previous_percentage) =
        match (input.previous_mouse_angle, input.previous_percentage) {
            (Some(angle), Some(percentage)) => (angle, percentage),
            // First contact
            _ => return absolute(),
        };

    if !input.multi_rotation {
        return absolute();
    }

    let delta = input.mouse_angle - previous_angle;
    if delta.abs() > MAX_SAMPLE_DELTA_DEGREES {
        log::trace!(
            "Rejected pointer sample {:.2}° -> {:.2}° (jump {:.2}°)",
            previous_angle,
            input.mouse_angle,
            delta
        );
        return Position {
            updated: false,
            mouse_angle: previous_angle,
            percentage: previous_percentage,
        };
    }

    Position {
        updated: true,
        mouse_angle: input.mouse_angle,
        percentage: previous_percentage + delta / input.angle_range,
    }
}
