//! Pointer placement and shapes
//!
//! A pointer sits at a fixed distance from the knob center along the current
//! angle and is rotated to face outward.

use std::fmt;
use std::sync::Arc;

use glam::DVec2;

use super::RenderContext;
use super::path::PathData;
use crate::deg_to_rad;

/// Position and orientation of a shape on the knob
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Shape center in widget coordinates
    pub center: DVec2,
    /// Degrees clockwise from the top
    pub rotation: f64,
    /// Distance from the knob center
    pub radius: f64,
}

impl Placement {
    /// Placement `radius` away from the knob center at `rotation` degrees
    pub fn on_circle(knob_center: f64, radius: f64, rotation: f64) -> Self {
        let dir = Self::outward(rotation);
        Self {
            center: DVec2::splat(knob_center) + dir * radius,
            rotation,
            radius,
        }
    }

    /// Unit vector pointing away from the knob center
    pub fn outward(rotation: f64) -> DVec2 {
        let theta = deg_to_rad(rotation);
        DVec2::new(theta.sin(), -theta.cos())
    }

    /// Map shape-local coordinates into widget coordinates
    ///
    /// `across` runs clockwise along the circle, `out` runs away from the knob center.
    pub fn to_world(&self, across: f64, out: f64) -> DVec2 {
        let outward = Self::outward(self.rotation);
        let tangent = DVec2::new(-outward.y, outward.x);
        self.center + tangent * across + outward * out
    }
}

/// Caller-supplied path generator for custom shapes
#[derive(Clone)]
pub struct CustomShape(Arc<dyn Fn(&Placement) -> PathData + Send + Sync>);

impl CustomShape {
    pub fn new(f: impl Fn(&Placement) -> PathData + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn path(&self, placement: &Placement) -> PathData {
        (self.0)(placement)
    }
}

impl fmt::Debug for CustomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomShape(..)")
    }
}

/// Pointer shape variants
#[derive(Debug, Clone)]
pub enum PointerShape {
    Rect { width: f64, height: f64 },
    Circle { radius: f64 },
    /// Apex pointing away from the center
    Triangle { width: f64, height: f64 },
    Custom(CustomShape),
}

impl PointerShape {
    /// Closed path of this shape at `placement`
    pub fn path(&self, placement: &Placement) -> PathData {
        match self {
            PointerShape::Rect { width, height } => rect_path(placement, *width, *height),
            PointerShape::Circle { radius } => circle_path(placement, *radius),
            PointerShape::Triangle { width, height } => {
                let (hw, hh) = (width / 2.0, height / 2.0);
                PathData::polygon(&[
                    placement.to_world(0.0, hh),
                    placement.to_world(hw, -hh),
                    placement.to_world(-hw, -hh),
                ])
            }
            PointerShape::Custom(shape) => shape.path(placement),
        }
    }
}

pub(crate) fn rect_path(placement: &Placement, width: f64, height: f64) -> PathData {
    let (hw, hh) = (width / 2.0, height / 2.0);
    PathData::polygon(&[
        placement.to_world(-hw, hh),
        placement.to_world(hw, hh),
        placement.to_world(hw, -hh),
        placement.to_world(-hw, -hh),
    ])
}

pub(crate) fn circle_path(placement: &Placement, radius: f64) -> PathData {
    let left = placement.to_world(-radius, 0.0);
    let right = placement.to_world(radius, 0.0);
    PathData::empty()
        .move_to(left)
        .arc_to(radius, true, true, right)
        .arc_to(radius, true, true, left)
        .close()
}

/// Resolved pointer for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PointerGeometry {
    pub placement: Placement,
    pub path: PathData,
}

/// A pointer riding the current value
#[derive(Debug, Clone)]
pub struct Pointer {
    pub shape: PointerShape,
    /// Distance from the knob center to the pointer center
    pub radius: f64,
    /// Fixed percentage instead of the knob's current one
    pub percentage: Option<f64>,
}

impl Pointer {
    pub fn new(shape: PointerShape, radius: f64) -> Self {
        Self {
            shape,
            radius,
            percentage: None,
        }
    }

    /// Place the pointer; `None` until the knob has a percentage
    pub fn place(&self, ctx: &RenderContext) -> Option<PointerGeometry> {
        let percentage = self.percentage.or(ctx.percentage)?;
        let placement = Placement::on_circle(ctx.center, self.radius, ctx.angle_at(percentage));
        let path = self.shape.path(&placement);
        Some(PointerGeometry { placement, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn ctx(percentage: Option<f64>) -> RenderContext {
        RenderContext {
            center: 50.0,
            radius: 50.0,
            angle_offset: 0.0,
            angle_range: 360.0,
            multi_rotation: false,
            steps: None,
            value: None,
            percentage,
        }
    }

    #[test]
    fn test_placement_directions() {
        let top = Placement::on_circle(50.0, 30.0, 0.0);
        assert!((top.center - DVec2::new(50.0, 20.0)).length() < EPS);

        let right = Placement::on_circle(50.0, 30.0, 90.0);
        assert!((right.center - DVec2::new(80.0, 50.0)).length() < EPS);

        // Clockwise tangent at the top points right
        assert!((top.to_world(1.0, 0.0) - DVec2::new(51.0, 20.0)).length() < EPS);
        assert!((top.to_world(0.0, 1.0) - DVec2::new(50.0, 19.0)).length() < EPS);
    }

    #[test]
    fn test_pointer_follows_percentage() {
        let pointer = Pointer::new(PointerShape::Circle { radius: 3.0 }, 40.0);
        assert!(pointer.place(&ctx(None)).is_none());

        let geometry = pointer.place(&ctx(Some(0.5))).unwrap();
        assert!((geometry.placement.center - DVec2::new(50.0, 90.0)).length() < EPS);
        assert_eq!(geometry.placement.rotation, 180.0);
        assert!(geometry.path.as_str().contains("A3,3 0 1 1"));
    }

    #[test]
    fn test_fixed_percentage_overrides_state() {
        let mut pointer = Pointer::new(PointerShape::Rect { width: 2.0, height: 8.0 }, 40.0);
        pointer.percentage = Some(0.25);
        let geometry = pointer.place(&ctx(None)).unwrap();
        assert_eq!(geometry.placement.rotation, 90.0);
        assert_eq!(geometry.path.as_str().matches('L').count(), 3);
    }

    #[test]
    fn test_triangle_apex_points_out() {
        let placement = Placement::on_circle(50.0, 30.0, 0.0);
        let path = PointerShape::Triangle {
            width: 4.0,
            height: 6.0,
        }
        .path(&placement);
        assert!(path.as_str().starts_with("M50,17 "));
    }

    #[test]
    fn test_custom_shape() {
        let shape = PointerShape::Custom(CustomShape::new(|p| {
            PathData::empty().move_to(p.center).line_to(DVec2::splat(50.0))
        }));
        let path = shape.path(&Placement::on_circle(50.0, 10.0, 0.0));
        assert_eq!(path.as_str(), "M50,40 L50,50");
    }
}
