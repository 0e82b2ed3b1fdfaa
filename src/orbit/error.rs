//! Error types for the orbit engine

use thiserror::Error;

/// Invalid orbit configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    /// Orbit angle outside the 0-360 degree range
    #[error("orbit angle {angle} is out of range; choose an orbit between 0 and 360 degrees")]
    AngleOutOfRange { angle: f64 },

    /// Spacing must be a non-negative pixel count
    #[error("spacing {spacing} must be a finite, non-negative number of pixels")]
    InvalidSpacing { spacing: f64 },

    /// Offset must be finite
    #[error("offset {offset} must be a finite number of pixels")]
    InvalidOffset { offset: f64 },
}

impl OrbitError {
    pub fn angle_out_of_range(angle: f64) -> Self {
        Self::AngleOutOfRange { angle }
    }

    pub fn invalid_spacing(spacing: f64) -> Self {
        Self::InvalidSpacing { spacing }
    }

    pub fn invalid_offset(offset: f64) -> Self {
        Self::InvalidOffset { offset }
    }
}
