//! Value text

use glam::DVec2;

use super::RenderContext;

/// Formatted value at the knob center
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueLabel {
    pub decimal_places: usize,
    /// Lift above the center line
    pub margin_bottom: f64,
}

impl ValueLabel {
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimal_places, value)
    }

    /// Text anchor and content; `None` until the knob has a value
    pub fn layout(&self, ctx: &RenderContext) -> Option<(DVec2, String)> {
        let value = ctx.value?;
        let anchor = DVec2::new(ctx.center, ctx.center - self.margin_bottom);
        Some((anchor, self.format(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let label = ValueLabel {
            decimal_places: 2,
            ..Default::default()
        };
        assert_eq!(label.format(1.23456), "1.23");
        assert_eq!(ValueLabel::default().format(42.6), "43");
    }

    #[test]
    fn test_layout() {
        let mut ctx = RenderContext {
            center: 50.0,
            radius: 50.0,
            angle_offset: 0.0,
            angle_range: 360.0,
            multi_rotation: false,
            steps: None,
            value: None,
            percentage: None,
        };
        let label = ValueLabel {
            decimal_places: 1,
            margin_bottom: 6.0,
        };
        assert!(label.layout(&ctx).is_none());

        ctx.value = Some(7.26);
        let (anchor, text) = label.layout(&ctx).unwrap();
        assert_eq!(anchor, DVec2::new(50.0, 44.0));
        assert_eq!(text, "7.3");
    }
}
