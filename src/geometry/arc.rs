//! Arc sector paths
//!
//! A filled annulus wedge between two percentages. At most one turn is drawn;
//! winding beyond that is the spiral's job.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::RenderContext;
use super::path::PathData;
use crate::{clamp_angle_for_arc, deg_to_rad, point_on_circle};

/// Parameters for one arc sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPath {
    pub percentage_from: f64,
    pub percentage_to: f64,
    /// Degrees clockwise from the top where 0% sits
    pub angle_offset: f64,
    pub angle_range: f64,
    /// Radial thickness (inner radius = outer radius - arc width)
    pub arc_width: f64,
    pub outer_radius: f64,
    /// Center coordinate (both axes)
    pub center: f64,
}

/// Boundary points and flags of a resolved sector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSector {
    pub outer_start: DVec2,
    pub outer_end: DVec2,
    pub inner_end: DVec2,
    pub inner_start: DVec2,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Span after clamping to less than a full turn (degrees)
    pub span: f64,
    pub large_arc: bool,
    /// Clockwise along the outer edge
    pub sweep: bool,
}

/// Pick the percentage range an arc covers
///
/// Both bounds given: used as-is. One bound given: the other is the current
/// percentage. Neither: `[0, current]`. `None` when a needed current
/// percentage is unknown.
pub fn resolve_arc_range(
    from: Option<f64>,
    to: Option<f64>,
    current: Option<f64>,
) -> Option<(f64, f64)> {
    match (from, to) {
        (Some(from), Some(to)) => Some((from, to)),
        (Some(from), None) => current.map(|c| (from, c)),
        (None, Some(to)) => current.map(|c| (c, to)),
        (None, None) => current.map(|c| (0.0, c)),
    }
}

impl ArcPath {
    /// Arc for the current knob state
    ///
    /// Missing bounds resolve per [`resolve_arc_range`]; `None` when the knob
    /// has no percentage yet and a bound depends on it.
    pub fn from_context(
        ctx: &RenderContext,
        from: Option<f64>,
        to: Option<f64>,
        arc_width: f64,
        outer_radius: f64,
    ) -> Option<Self> {
        let (percentage_from, percentage_to) = resolve_arc_range(from, to, ctx.percentage)?;
        Some(Self {
            percentage_from,
            percentage_to,
            angle_offset: ctx.angle_offset,
            angle_range: ctx.angle_range,
            arc_width,
            outer_radius,
            center: ctx.center,
        })
    }

    pub fn inner_radius(&self) -> f64 {
        self.outer_radius - self.arc_width
    }

    /// Resolve boundary points and arc flags
    pub fn sector(&self) -> ArcSector {
        let span = clamp_angle_for_arc(
            self.angle_range * (self.percentage_to - self.percentage_from),
        );
        // -90 moves the angle origin from 3 o'clock to the top
        let angle_from = self.angle_offset - 90.0 + self.angle_range * self.percentage_from;
        let start = deg_to_rad(angle_from);
        let end = deg_to_rad(angle_from + span);

        let inner_radius = self.inner_radius();
        ArcSector {
            outer_start: point_on_circle(self.center, self.outer_radius, start),
            outer_end: point_on_circle(self.center, self.outer_radius, end),
            inner_end: point_on_circle(self.center, inner_radius, end),
            inner_start: point_on_circle(self.center, inner_radius, start),
            outer_radius: self.outer_radius,
            inner_radius,
            span,
            large_arc: span.abs() >= 180.0,
            sweep: span >= 0.0,
        }
    }

    /// Closed path description of the sector
    pub fn path(&self) -> PathData {
        self.sector().to_path()
    }
}

impl ArcSector {
    /// Outer edge forward, inner edge back
    pub fn to_path(&self) -> PathData {
        PathData::empty()
            .move_to(self.outer_start)
            .arc_to(self.outer_radius, self.large_arc, self.sweep, self.outer_end)
            .line_to(self.inner_end)
            .arc_to(self.inner_radius, self.large_arc, !self.sweep, self.inner_start)
            .line_to(self.outer_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn arc(from: f64, to: f64) -> ArcPath {
        ArcPath {
            percentage_from: from,
            percentage_to: to,
            angle_offset: 0.0,
            angle_range: 360.0,
            arc_width: 10.0,
            outer_radius: 50.0,
            center: 50.0,
        }
    }

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_zero_percentage_starts_at_top() {
        let sector = arc(0.0, 0.25).sector();
        assert!(close(sector.outer_start, DVec2::new(50.0, 0.0)));
        assert!(close(sector.outer_end, DVec2::new(100.0, 50.0)));
        assert!(close(sector.inner_start, DVec2::new(50.0, 10.0)));
        assert!(close(sector.inner_end, DVec2::new(90.0, 50.0)));
        assert!(!sector.large_arc);
        assert!(sector.sweep);
    }

    #[test]
    fn test_empty_range_collapses() {
        let sector = arc(0.4, 0.4).sector();
        assert!(close(sector.outer_start, sector.outer_end));
        assert!(close(sector.inner_start, sector.inner_end));
        assert_eq!(sector.span, 0.0);
    }

    #[test]
    fn test_full_turn_is_nudged() {
        let sector = arc(0.0, 1.0).sector();
        assert_eq!(sector.span, 359.999);
        assert!(sector.large_arc);
        let gap = (sector.outer_start - sector.outer_end).length();
        assert!(gap > 1e-6, "gap {}", gap);

        // Several turns still render as one
        assert_eq!(arc(0.0, 3.0).sector().span, 359.999);
    }

    #[test]
    fn test_reverse_range_flips_sweep() {
        let sector = arc(0.5, 0.0).sector();
        assert!(!sector.sweep);
        assert!(sector.large_arc);
        assert_eq!(sector.span, -180.0);
    }

    #[test]
    fn test_path_layout() {
        let path = arc(0.0, 0.25).path();
        let d = path.as_str();
        assert!(d.starts_with("M50,0 A50,50 0 0 1 "));
        assert!(d.contains(" A40,40 0 0 0 "));
        assert!(d.ends_with("L50,0"));
    }

    #[test]
    fn test_resolve_arc_range() {
        assert_eq!(resolve_arc_range(Some(0.1), Some(0.9), Some(0.5)), Some((0.1, 0.9)));
        assert_eq!(resolve_arc_range(Some(0.1), None, Some(0.5)), Some((0.1, 0.5)));
        assert_eq!(resolve_arc_range(None, Some(0.9), Some(0.5)), Some((0.5, 0.9)));
        assert_eq!(resolve_arc_range(None, None, Some(0.5)), Some((0.0, 0.5)));
        assert_eq!(resolve_arc_range(None, None, None), None);
        assert_eq!(resolve_arc_range(Some(0.2), Some(0.3), None), Some((0.2, 0.3)));
    }

    #[test]
    fn test_from_context_without_percentage() {
        let ctx = RenderContext {
            center: 50.0,
            radius: 50.0,
            angle_offset: 0.0,
            angle_range: 360.0,
            multi_rotation: false,
            steps: None,
            value: None,
            percentage: None,
        };
        assert!(ArcPath::from_context(&ctx, None, None, 5.0, 50.0).is_none());
        let explicit = ArcPath::from_context(&ctx, Some(0.0), Some(1.0), 5.0, 50.0).unwrap();
        assert_eq!(explicit.inner_radius(), 45.0);
    }
}
