//! Orbit engine for computing tooltip positions
//!
//! This module takes the measured boxes of an anchor and a tooltip together
//! with an [`OrbitConfig`] and computes where the tooltip's top-left corner
//! goes. Every function here is pure; moving elements is the host's job.

pub mod config;
pub mod engine;
pub mod error;
pub mod sector;
pub mod trig;
pub mod types;

pub use config::{OrbitConfig, Tracking};
pub use engine::{compute_tooltip_position, plan_placement, position_for_bearing, Placement};
pub use error::OrbitError;
pub use sector::{Bearing, SectorBounds};
pub use types::*;
