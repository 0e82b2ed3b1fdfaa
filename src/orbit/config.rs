//! Configuration for tooltip placement

use serde::Deserialize;

use super::error::OrbitError;

/// How a tooltip slides along a side as the angle moves off the cardinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tracking {
    /// Interpolates on the tangent scale so that the tooltip's near corner
    /// reaches the anchor corner exactly at the sector boundary. Placements
    /// on either side of a boundary meet.
    #[default]
    Flush,
    /// Follows the ray from the anchor center: the tangential shift is the
    /// opposite leg over the anchor's half extent plus the one over the
    /// tooltip's half extent. Jumps at the sector boundaries.
    Radial,
}

/// Validated placement settings.
///
/// Fields are private so that every value in circulation went through
/// validation; use [`OrbitConfig::new`] or the `with_*` builders.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawOrbitConfig")]
pub struct OrbitConfig {
    angle_degrees: f64,
    spacing: f64,
    offset: f64,
    tracking: Tracking,
}

/// Orbit settings as written in a file, before validation
#[derive(Debug, Deserialize)]
pub(crate) struct RawOrbitConfig {
    #[serde(default = "default_angle")]
    angle: f64,
    #[serde(default = "default_spacing")]
    spacing: f64,
    #[serde(default)]
    offset: f64,
    #[serde(default)]
    tracking: Tracking,
}

fn default_angle() -> f64 {
    OrbitConfig::DEFAULT_ANGLE
}

fn default_spacing() -> f64 {
    OrbitConfig::DEFAULT_SPACING
}

impl TryFrom<RawOrbitConfig> for OrbitConfig {
    type Error = OrbitError;

    fn try_from(raw: RawOrbitConfig) -> Result<Self, Self::Error> {
        let config = OrbitConfig::new(raw.angle, raw.spacing, raw.offset)?;
        Ok(config.with_tracking(raw.tracking))
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            angle_degrees: Self::DEFAULT_ANGLE,
            spacing: Self::DEFAULT_SPACING,
            offset: 0.0,
            tracking: Tracking::Flush,
        }
    }
}

impl OrbitConfig {
    /// Below the anchor
    pub const DEFAULT_ANGLE: f64 = 180.0;
    pub const DEFAULT_SPACING: f64 = 5.0;

    /// Create a configuration, rejecting out-of-range values
    pub fn new(angle_degrees: f64, spacing: f64, offset: f64) -> Result<Self, OrbitError> {
        Self::default()
            .with_angle(angle_degrees)?
            .with_spacing(spacing)?
            .with_offset(offset)
    }

    /// Set the orbit angle; 0 and 360 both mean straight above
    pub fn with_angle(mut self, angle_degrees: f64) -> Result<Self, OrbitError> {
        if !(0.0..=360.0).contains(&angle_degrees) {
            return Err(OrbitError::angle_out_of_range(angle_degrees));
        }
        self.angle_degrees = angle_degrees;
        Ok(self)
    }

    /// Set the gap between the anchor edge and the tooltip edge
    pub fn with_spacing(mut self, spacing: f64) -> Result<Self, OrbitError> {
        if !(spacing.is_finite() && spacing >= 0.0) {
            return Err(OrbitError::invalid_spacing(spacing));
        }
        self.spacing = spacing;
        Ok(self)
    }

    /// Set the tangential nudge
    pub fn with_offset(mut self, offset: f64) -> Result<Self, OrbitError> {
        if !offset.is_finite() {
            return Err(OrbitError::invalid_offset(offset));
        }
        self.offset = offset;
        Ok(self)
    }

    pub fn with_tracking(mut self, tracking: Tracking) -> Self {
        self.tracking = tracking;
        self
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn tracking(&self) -> Tracking {
        self.tracking
    }
}
