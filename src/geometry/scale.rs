//! Tick scale around the knob

use super::RenderContext;
use super::path::PathData;
use super::pointer::{CustomShape, Placement, circle_path, rect_path};
use crate::interaction::snap_intervals;

/// Tick shape variants
#[derive(Debug, Clone)]
pub enum TickShape {
    Rect { width: f64, height: f64 },
    Circle { radius: f64 },
    Custom(CustomShape),
}

impl TickShape {
    pub fn path(&self, placement: &Placement) -> PathData {
        match self {
            TickShape::Rect { width, height } => rect_path(placement, *width, *height),
            TickShape::Circle { radius } => circle_path(placement, *radius),
            TickShape::Custom(shape) => shape.path(placement),
        }
    }
}

/// One tick mark
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub index: u32,
    pub percentage: f64,
    pub placement: Placement,
    pub path: PathData,
    /// Nearest tick to the current value
    pub active: bool,
}

/// Evenly spaced ticks over the knob's range
#[derive(Debug, Clone)]
pub struct Scale {
    pub steps: u32,
    /// Distance from the knob center to each tick center
    pub radius: f64,
    pub shape: TickShape,
}

impl Scale {
    pub fn new(steps: u32, radius: f64, shape: TickShape) -> Self {
        Self {
            steps,
            radius,
            shape,
        }
    }

    /// Gaps between ticks, on the same grid the controller snaps to
    fn intervals(&self, ctx: &RenderContext) -> u32 {
        snap_intervals(self.steps, ctx.angle_range)
    }

    /// Index of the tick closest to `percentage`
    pub fn active_index(&self, ctx: &RenderContext, percentage: f64) -> u32 {
        let intervals = self.intervals(ctx);
        let position = if ctx.multi_rotation {
            percentage.rem_euclid(1.0)
        } else {
            percentage.clamp(0.0, 1.0)
        };
        let nearest = (position * f64::from(intervals)).round() as u32;
        if ctx.angle_range >= 360.0 {
            nearest % intervals
        } else {
            nearest.min(self.steps.saturating_sub(1))
        }
    }

    pub fn ticks(&self, ctx: &RenderContext) -> Vec<Tick> {
        if self.steps == 0 {
            return Vec::new();
        }
        let intervals = self.intervals(ctx);
        let active = ctx.percentage.map(|p| self.active_index(ctx, p));

        (0..self.steps)
            .map(|index| {
                let percentage = f64::from(index) / f64::from(intervals);
                let placement =
                    Placement::on_circle(ctx.center, self.radius, ctx.angle_at(percentage));
                Tick {
                    index,
                    percentage,
                    path: self.shape.path(&placement),
                    placement,
                    active: active == Some(index),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(angle_range: f64, percentage: Option<f64>, multi_rotation: bool) -> RenderContext {
        RenderContext {
            center: 50.0,
            radius: 50.0,
            angle_offset: 0.0,
            angle_range,
            multi_rotation,
            steps: None,
            value: None,
            percentage,
        }
    }

    fn scale(steps: u32) -> Scale {
        Scale::new(steps, 45.0, TickShape::Rect {
            width: 1.0,
            height: 4.0,
        })
    }

    #[test]
    fn test_partial_range_includes_both_ends() {
        let ticks = scale(5).ticks(&ctx(180.0, None, false));
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].percentage, 0.0);
        assert_eq!(ticks[4].percentage, 1.0);
        assert!(ticks.iter().all(|t| !t.active));
    }

    #[test]
    fn test_full_circle_does_not_overlap() {
        let ticks = scale(4).ticks(&ctx(360.0, None, false));
        let rotations: Vec<f64> = ticks.iter().map(|t| t.placement.rotation).collect();
        assert_eq!(rotations, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn test_active_tick() {
        let ticks = scale(5).ticks(&ctx(180.0, Some(0.6), false));
        let active: Vec<u32> = ticks.iter().filter(|t| t.active).map(|t| t.index).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn test_active_tick_wraps() {
        let s = scale(4);
        // Full turn: 100% lands back on the first tick
        assert_eq!(s.active_index(&ctx(360.0, None, false), 1.0), 0);
        // Winding reduces modulo one turn
        assert_eq!(s.active_index(&ctx(360.0, None, true), 2.26), 1);
    }

    #[test]
    fn test_circle_ticks() {
        let s = Scale::new(3, 45.0, TickShape::Circle { radius: 1.5 });
        let ticks = s.ticks(&ctx(270.0, Some(0.0), false));
        assert!(ticks[0].active);
        assert!(ticks.iter().all(|t| t.path.as_str().contains("A1.5,1.5")));
    }
}
