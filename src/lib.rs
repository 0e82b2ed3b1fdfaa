//! Orbital Tooltip - place a tooltip at an angle around an anchor element
//!
//! Given the measured box of an anchor, the box of a tooltip and an orbit
//! angle (0 is straight above, 90 to the right, clockwise), this library
//! computes the top-left page coordinates at which the tooltip sits next to
//! the anchor without overlapping it.
//!
//! # Example
//!
//! ```rust
//! use orbital_tooltip::{compute_tooltip_position, OrbitConfig, Point, Rect};
//!
//! let anchor = Rect::new(60.0, 80.0, 80.0, 40.0);
//! let tooltip = Rect::sized(60.0, 20.0);
//! let config = OrbitConfig::new(0.0, 5.0, 0.0).unwrap();
//!
//! let position = compute_tooltip_position(&anchor, &tooltip, &config);
//! assert_eq!(position, Point::new(70.0, 55.0));
//! ```
//!
//! Out-of-range angles are rejected when the configuration is built:
//!
//! ```rust
//! use orbital_tooltip::{OrbitConfig, OrbitError};
//!
//! let err = OrbitConfig::new(400.0, 5.0, 0.0).unwrap_err();
//! assert!(matches!(err, OrbitError::AngleOutOfRange { .. }));
//! ```

pub mod error;
pub mod orbit;
pub mod scene;
pub mod tooltip;

pub use error::TooltipError;
pub use orbit::{
    compute_tooltip_position, plan_placement, Bearing, BoxEdges, OrbitConfig, OrbitError,
    Placement, Point, Rect, SectorBounds, Tracking,
};
pub use scene::{Scene, SceneError};
pub use tooltip::{OrbitalTooltip, TooltipHost, TooltipOptions};
