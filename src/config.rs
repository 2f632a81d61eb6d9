//! Knob configuration
//!
//! Immutable per widget instance. Loaded from JSON or built in code, then
//! validated once before a [`crate::Knob`] is created.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for one knob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnobConfig {
    /// Value at 0%
    pub min: f64,
    /// Value at 100%
    pub max: f64,
    /// Where 0% sits, in degrees clockwise from the top
    pub angle_offset: f64,
    /// Angular span mapped onto [min, max] (360 = full circle)
    pub angle_range: f64,
    /// Accumulate winding past one turn instead of clamping
    pub multi_rotation: bool,
    /// Number of discrete snap positions
    pub steps: Option<u32>,
    /// Fire `on_change` during a drag (true) or only on release (false)
    pub tracking: bool,
    /// Pixel diameter of the widget
    pub size: f64,
    /// Seed value for uncontrolled use
    pub initial_value: Option<f64>,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            angle_offset: 0.0,
            angle_range: 360.0,
            multi_rotation: false,
            steps: None,
            tracking: true,
            size: 100.0,
            initial_value: None,
        }
    }
}

impl KnobConfig {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded knob config: [{}, {}] over {}° from {}°",
            config.min,
            config.max,
            config.angle_range,
            config.angle_offset
        );
        Ok(config)
    }

    pub fn with_angles(mut self, angle_offset: f64, angle_range: f64) -> Self {
        self.angle_offset = angle_offset;
        self.angle_range = angle_range;
        self
    }

    pub fn with_multi_rotation(mut self, multi_rotation: bool) -> Self {
        self.multi_rotation = multi_rotation;
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn with_tracking(mut self, tracking: bool) -> Self {
        self.tracking = tracking;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }

    /// Reject configurations the interaction math cannot handle
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("min", self.min),
            ("max", self.max),
            ("angle_offset", self.angle_offset),
            ("angle_range", self.angle_range),
            ("size", self.size),
        ];
        for (field, v) in finite {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        if self.min >= self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.angle_range <= 0.0 {
            return Err(ConfigError::InvalidAngleRange(self.angle_range));
        }
        if let Some(steps) = self.steps {
            if steps < 2 {
                return Err(ConfigError::InvalidSteps(steps));
            }
        }
        if self.size <= 0.0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if let Some(value) = self.initial_value {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite {
                    field: "initial_value",
                });
            }
            if value < self.min || value > self.max {
                return Err(ConfigError::InitialValueOutOfRange {
                    value,
                    min: self.min,
                    max: self.max,
                });
            }
        }
        Ok(())
    }

    /// Center coordinate (both axes) of the widget
    #[inline]
    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    /// Outer radius of the widget
    #[inline]
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }
}
