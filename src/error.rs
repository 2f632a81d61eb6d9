//! Configuration errors

use thiserror::Error;

/// Rejected knob configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number")]
    NonFinite { field: &'static str },

    #[error("min ({min}) must be less than max ({max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("angle range must be positive, got {0}")]
    InvalidAngleRange(f64),

    #[error("steps must be at least 2, got {0}")]
    InvalidSteps(u32),

    #[error("size must be positive, got {0}")]
    InvalidSize(f64),

    #[error("initial value {value} is outside [{min}, {max}]")]
    InitialValueOutOfRange { value: f64, min: f64, max: f64 },

    #[error("invalid knob configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
