//! Value <-> percentage mapping

/// Value at `percentage` along [min, max]
#[inline]
pub fn get_value_from_percentage(min: f64, max: f64, percentage: f64) -> f64 {
    min + (max - min) * percentage
}

/// Fractional position of `value` along [min, max]
#[inline]
pub fn get_percentage_from_value(min: f64, max: f64, value: f64) -> f64 {
    (value - min) / (max - min)
}

#[inline]
pub fn clamp_value(min: f64, max: f64, value: f64) -> f64 {
    value.clamp(min, max)
}
