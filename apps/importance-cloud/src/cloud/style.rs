//! Visual ranges a normalized score is mapped onto.
//!
//! `t = 0` (the lowest score) lands on the minimum size and opacity, `t = 1`
//! (the highest score, or every score when they are all equal) on the maximum.

use serde::{Deserialize, Serialize};

use crate::errors::CloudError;

/// Smallest rendered size, in px.
pub const MIN_SIZE: f64 = 16.0;
/// Largest rendered size, in px.
pub const MAX_SIZE: f64 = 54.0;
/// Opacity of the lowest-scored item.
pub const MIN_ALPHA: f64 = 0.5;
/// Opacity of the highest-scored item.
pub const MAX_ALPHA: f64 = 1.0;

/// Size and opacity ranges used by the layout builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudStyle {
    pub min_size: f64,
    pub max_size: f64,
    pub min_alpha: f64,
    pub max_alpha: f64,
}

impl Default for CloudStyle {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
            min_alpha: MIN_ALPHA,
            max_alpha: MAX_ALPHA,
        }
    }
}

impl CloudStyle {
    /// Linear interpolation of the size range at `t`.
    pub fn size_at(&self, t: f64) -> f64 {
        self.min_size + t * (self.max_size - self.min_size)
    }

    /// Linear interpolation of the opacity range at `t`.
    pub fn opacity_at(&self, t: f64) -> f64 {
        self.min_alpha + t * (self.max_alpha - self.min_alpha)
    }

    /// Checks that both ranges are finite and ordered, sizes are non-negative
    /// and opacities lie within `[0, 1]`.
    pub fn validate(&self) -> Result<(), CloudError> {
        let fields = [
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("min_alpha", self.min_alpha),
            ("max_alpha", self.max_alpha),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CloudError::InvalidStyle(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if self.min_size < 0.0 {
            return Err(CloudError::InvalidStyle(format!(
                "min_size must not be negative, got {}",
                self.min_size
            )));
        }
        if self.min_size > self.max_size {
            return Err(CloudError::InvalidStyle(format!(
                "min_size ({}) exceeds max_size ({})",
                self.min_size, self.max_size
            )));
        }
        if !(0.0..=1.0).contains(&self.min_alpha) || !(0.0..=1.0).contains(&self.max_alpha) {
            return Err(CloudError::InvalidStyle(format!(
                "opacity range {}..{} must lie within 0..1",
                self.min_alpha, self.max_alpha
            )));
        }
        if self.min_alpha > self.max_alpha {
            return Err(CloudError::InvalidStyle(format!(
                "min_alpha ({}) exceeds max_alpha ({})",
                self.min_alpha, self.max_alpha
            )));
        }
        Ok(())
    }
}
