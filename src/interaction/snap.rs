//! Step snapping

use super::resolver::Position;

/// Gaps between `steps` evenly spaced positions over `angle_range` degrees
///
/// A partial range puts a position on both ends, so `steps` positions span
/// `steps - 1` intervals. On a full circle 100% coincides with 0%, so each
/// position owns one of `steps` intervals. Tick scales use the same grid.
pub fn snap_intervals(steps: u32, angle_range: f64) -> u32 {
    let intervals = if angle_range >= 360.0 {
        steps
    } else {
        steps.saturating_sub(1)
    };
    intervals.max(1)
}

/// Snap a percentage to the nearest multiple of `1 / intervals`
///
/// 0 and 1 are always grid points. Percentages outside [0, 1]
/// (multi-rotation winding) snap on the same grid.
pub fn snap(percentage: f64, intervals: u32) -> f64 {
    if intervals == 0 {
        return percentage;
    }
    let intervals = f64::from(intervals);
    (percentage * intervals).round() / intervals
}

/// Snap a resolved position; rejected samples and unset steps pass through
pub fn snap_position(position: Position, steps: Option<u32>, angle_range: f64) -> Position {
    match steps {
        Some(steps) if position.updated => Position {
            percentage: snap(position.percentage, snap_intervals(steps, angle_range)),
            ..position
        },
        _ => position,
    }
}
