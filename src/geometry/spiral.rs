//! Spiral ribbon paths
//!
//! Visualizes winding past one turn: the radius moves linearly between two
//! endpoints while the angle sweeps between their percentages. The sweep is
//! discretized into short arc segments, at least four per started turn and
//! never more than half a turn of sweep each.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::path::PathData;
use crate::consts::{MAX_SPIRAL_SEGMENT_DEGREES, SPIRAL_SEGMENTS_PER_TURN};
use crate::{deg_to_rad, point_on_circle};

/// One end of a spiral; either field may be unresolved
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpiralEndpoint {
    pub percentage: Option<f64>,
    /// Outer radius at this end
    pub radius: Option<f64>,
}

impl SpiralEndpoint {
    pub fn new(percentage: f64, radius: f64) -> Self {
        Self {
            percentage: Some(percentage),
            radius: Some(radius),
        }
    }

    fn resolve(&self) -> Option<(f64, f64)> {
        Some((self.percentage?, self.radius?))
    }
}

/// Parameters for a spiral ribbon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpiralPath {
    pub from: SpiralEndpoint,
    pub to: SpiralEndpoint,
    pub arc_width: f64,
    pub angle_offset: f64,
    pub angle_range: f64,
    pub center: f64,
}

/// Sampled edge point of a spiral
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralSample {
    pub outer: DVec2,
    pub inner: DVec2,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl SpiralPath {
    /// Number of arc segments for a percentage distance over `angle_range` degrees
    ///
    /// Every segment is drawn as a small arc, so none may sweep past 180°.
    pub fn segment_count(distance: f64, angle_range: f64) -> usize {
        let distance = distance.abs();
        let per_turn = distance.ceil() as usize * SPIRAL_SEGMENTS_PER_TURN;
        let by_sweep = (distance * angle_range.abs() / MAX_SPIRAL_SEGMENT_DEGREES).ceil() as usize;
        per_turn.max(by_sweep).max(1)
    }

    /// Edge samples ordered by increasing angle; `None` if an endpoint is unresolved
    pub fn samples(&self) -> Option<Vec<SpiralSample>> {
        let a = self.from.resolve()?;
        let b = self.to.resolve()?;
        let ((p_min, r_min), (p_max, r_max)) = if a.0 <= b.0 { (a, b) } else { (b, a) };

        let nb = Self::segment_count(p_max - p_min, self.angle_range);
        let samples = (0..=nb)
            .map(|i| {
                let t = i as f64 / nb as f64;
                let outer_radius = r_min + (r_max - r_min) * t;
                let inner_radius = outer_radius - self.arc_width;
                let percentage = p_min + (p_max - p_min) * t;
                let angle = deg_to_rad(self.angle_offset - 90.0 + self.angle_range * percentage);
                SpiralSample {
                    outer: point_on_circle(self.center, outer_radius, angle),
                    inner: point_on_circle(self.center, inner_radius, angle),
                    outer_radius,
                    inner_radius,
                }
            })
            .collect();
        Some(samples)
    }

    /// Closed ribbon path; empty if an endpoint is unresolved
    pub fn path(&self) -> PathData {
        let Some(samples) = self.samples() else {
            return PathData::empty();
        };
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return PathData::empty();
        };

        let mut path = PathData::empty().move_to(first.outer);
        for s in &samples[1..] {
            path = path.arc_to(s.outer_radius, false, true, s.outer);
        }
        path = path.line_to(last.inner);
        for s in samples[..samples.len() - 1].iter().rev() {
            path = path.arc_to(s.inner_radius, false, false, s.inner);
        }
        path.close()
    }
}
