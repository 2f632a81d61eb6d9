//! Path geometry
//!
//! Generators turn knob state into SVG path descriptions. Nothing here draws;
//! a rendering collaborator consumes the strings.

pub mod arc;
pub mod label;
pub mod path;
pub mod pointer;
pub mod scale;
pub mod spiral;

pub use arc::{ArcPath, ArcSector, resolve_arc_range};
pub use label::ValueLabel;
pub use path::PathData;
pub use pointer::{CustomShape, Placement, Pointer, PointerGeometry, PointerShape};
pub use scale::{Scale, Tick, TickShape};
pub use spiral::{SpiralEndpoint, SpiralPath, SpiralSample};

use serde::{Deserialize, Serialize};

use crate::config::KnobConfig;
use crate::interaction::InteractionState;

/// Read-only view of one knob for renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    /// Center coordinate (both axes)
    pub center: f64,
    /// Outer radius of the widget
    pub radius: f64,
    pub angle_offset: f64,
    pub angle_range: f64,
    pub multi_rotation: bool,
    pub steps: Option<u32>,
    pub value: Option<f64>,
    pub percentage: Option<f64>,
}

impl RenderContext {
    pub fn from_config(config: &KnobConfig, state: &InteractionState) -> Self {
        Self {
            center: config.center(),
            radius: config.radius(),
            angle_offset: config.angle_offset,
            angle_range: config.angle_range,
            multi_rotation: config.multi_rotation,
            steps: config.steps,
            value: state.value,
            percentage: state.percentage,
        }
    }

    /// Rotation (degrees clockwise from the top) of a percentage
    #[inline]
    pub fn angle_at(&self, percentage: f64) -> f64 {
        self.angle_offset + self.angle_range * percentage
    }
}
