//! Rotary Knob - interaction core for radial value controls
//!
//! Core modules:
//! - `interaction`: Angle/value state machine (resolver, snapping, controller)
//! - `geometry`: SVG path generators (arc sectors, spirals, pointers, scales)
//! - `config`: Per-widget configuration and validation
//! - `platform`: Browser bridge (wasm32 only)

pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod platform;

pub use config::KnobConfig;
pub use error::ConfigError;
pub use geometry::{ArcPath, PathData, RenderContext, SpiralPath};
pub use interaction::{Knob, KnobEvent, KnobListener, KnobPhase};

use glam::DVec2;

/// Shared constants
pub mod consts {
    /// Arc spans are nudged to this magnitude so a full turn never collapses
    /// into a zero-length SVG arc
    pub const MAX_ARC_DEGREES: f64 = 359.999;

    /// Largest pointer jump (degrees) accepted between two multi-rotation samples
    pub const MAX_SAMPLE_DELTA_DEGREES: f64 = 180.0;

    /// Spiral segments emitted per started turn
    pub const SPIRAL_SEGMENTS_PER_TURN: usize = 4;

    /// Widest sweep of a single spiral segment, drawn with the small-arc flag
    pub const MAX_SPIRAL_SEGMENT_DEGREES: f64 = 180.0;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Radians to degrees
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Normalize an angle in degrees to [-180, 180)
#[inline]
pub fn normalize_signed_degrees(degrees: f64) -> f64 {
    normalize_degrees(degrees + 180.0) - 180.0
}

/// Point at `angle` radians on a circle around (`center`, `center`)
#[inline]
pub fn point_on_circle(center: f64, radius: f64, angle: f64) -> DVec2 {
    DVec2::new(center + radius * angle.cos(), center + radius * angle.sin())
}

/// Keep an arc span strictly inside one turn
#[inline]
pub fn clamp_angle_for_arc(degrees: f64) -> f64 {
    use consts::MAX_ARC_DEGREES;
    if degrees >= 360.0 {
        MAX_ARC_DEGREES
    } else if degrees <= -360.0 {
        -MAX_ARC_DEGREES
    } else {
        degrees
    }
}

/// Convert a pointer position to a knob angle
///
/// Screen coordinates (y grows downward). The result is in degrees [0, 360),
/// 0 at the top of the circle and increasing clockwise.
#[inline]
pub fn pointer_angle(center: DVec2, point: DVec2) -> f64 {
    let d = point - center;
    normalize_degrees(rad_to_deg(d.y.atan2(d.x)) + 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_deg_rad_conversion() {
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < EPS);
        assert!((rad_to_deg(std::f64::consts::FRAC_PI_2) - 90.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(370.0) - 10.0).abs() < EPS);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < EPS);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_signed_degrees(190.0) - (-170.0)).abs() < EPS);
        assert!((normalize_signed_degrees(180.0) - (-180.0)).abs() < EPS);
    }

    #[test]
    fn test_point_on_circle() {
        let p = point_on_circle(50.0, 10.0, 0.0);
        assert!((p.x - 60.0).abs() < EPS);
        assert!((p.y - 50.0).abs() < EPS);

        let p = point_on_circle(50.0, 10.0, std::f64::consts::FRAC_PI_2);
        assert!((p.x - 50.0).abs() < EPS);
        assert!((p.y - 60.0).abs() < EPS);
    }

    #[test]
    fn test_clamp_angle_for_arc() {
        assert_eq!(clamp_angle_for_arc(360.0), 359.999);
        assert_eq!(clamp_angle_for_arc(720.0), 359.999);
        assert_eq!(clamp_angle_for_arc(-360.0), -359.999);
        assert_eq!(clamp_angle_for_arc(359.0), 359.0);
        assert_eq!(clamp_angle_for_arc(-12.5), -12.5);
    }

    #[test]
    fn test_pointer_angle_directions() {
        let c = DVec2::new(50.0, 50.0);
        // Top, right, bottom, left in screen space
        assert!(pointer_angle(c, DVec2::new(50.0, 0.0)).abs() < EPS);
        assert!((pointer_angle(c, DVec2::new(100.0, 50.0)) - 90.0).abs() < EPS);
        assert!((pointer_angle(c, DVec2::new(50.0, 100.0)) - 180.0).abs() < EPS);
        assert!((pointer_angle(c, DVec2::new(0.0, 50.0)) - 270.0).abs() < EPS);
    }
}
