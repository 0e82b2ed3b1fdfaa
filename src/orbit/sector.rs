//! Sector classification.
//!
//! The orbit is split into four sectors, one per side of the anchor. The
//! boundaries are the angles at which a ray from the anchor center passes
//! through a corner, so they depend on the anchor's aspect ratio and only fall
//! on 45/135/225/315 for a square.

use super::trig::degrees_from_sides;
use super::types::{Corner, Rect, Side};

/// Where an orbit angle lands relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bearing {
    /// Exactly 0/360, 90, 180 or 270 degrees
    Cardinal(Side),
    /// Inside the sector of `side`, `delta` degrees off its cardinal, heading
    /// for `corner`
    Leaning {
        side: Side,
        corner: Corner,
        delta: f64,
    },
}

impl Bearing {
    pub fn side(&self) -> Side {
        match self {
            Bearing::Cardinal(side) | Bearing::Leaning { side, .. } => *side,
        }
    }
}

/// The four corner-crossing angles of an anchor, in whole degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorBounds {
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
    pub top_left: f64,
}

impl SectorBounds {
    /// Bounds for an anchor with the given half extents
    pub fn from_half_extents(half_width: f64, half_height: f64) -> Self {
        let mut corner = degrees_from_sides(half_height, half_width);
        if corner.is_nan() {
            // a point anchor has no aspect ratio; split the orbit evenly
            corner = 45.0;
        }
        Self {
            top_right: corner.round(),
            bottom_right: (180.0 - corner).round(),
            bottom_left: (180.0 + corner).round(),
            top_left: (360.0 - corner).round(),
        }
    }

    pub fn for_anchor(anchor: &Rect) -> Self {
        Self::from_half_extents(anchor.half_width(), anchor.half_height())
    }

    /// True when a boundary coincides with a cardinal, which happens for
    /// extremely flat or tall anchors. Such sectors have no room to lean.
    pub fn is_degenerate(&self) -> bool {
        !(self.top_right > 0.0 && self.top_right < 90.0)
    }

    /// Angular width from the cardinal of `side` to the boundary at `corner`
    pub fn span(&self, side: Side, corner: Corner) -> f64 {
        match (side, corner) {
            (Side::Top, Corner::TopRight) => self.top_right,
            (Side::Top, _) => 360.0 - self.top_left,
            (Side::Right, Corner::TopRight) => 90.0 - self.top_right,
            (Side::Right, _) => self.bottom_right - 90.0,
            (Side::Bottom, Corner::BottomRight) => 180.0 - self.bottom_right,
            (Side::Bottom, _) => self.bottom_left - 180.0,
            (Side::Left, Corner::BottomLeft) => 270.0 - self.bottom_left,
            (Side::Left, _) => self.top_left - 270.0,
        }
    }

    /// Classify an angle already known to lie in `[0, 360]`.
    ///
    /// Each sector is closed at its start and open at its end, going
    /// clockwise from the top-left boundary.
    pub fn classify(&self, degrees: f64) -> Bearing {
        if degrees == 0.0 || degrees == 360.0 {
            return Bearing::Cardinal(Side::Top);
        }
        if degrees == 90.0 {
            return Bearing::Cardinal(Side::Right);
        }
        if degrees == 180.0 {
            return Bearing::Cardinal(Side::Bottom);
        }
        if degrees == 270.0 {
            return Bearing::Cardinal(Side::Left);
        }

        let (side, corner, delta) = if degrees >= self.top_left {
            (Side::Top, Corner::TopLeft, 360.0 - degrees)
        } else if degrees < self.top_right {
            (Side::Top, Corner::TopRight, degrees)
        } else if degrees < self.bottom_right {
            if degrees < 90.0 {
                (Side::Right, Corner::TopRight, 90.0 - degrees)
            } else {
                (Side::Right, Corner::BottomRight, degrees - 90.0)
            }
        } else if degrees < self.bottom_left {
            if degrees < 180.0 {
                (Side::Bottom, Corner::BottomRight, 180.0 - degrees)
            } else {
                (Side::Bottom, Corner::BottomLeft, degrees - 180.0)
            }
        } else if degrees < 270.0 {
            (Side::Left, Corner::BottomLeft, 270.0 - degrees)
        } else {
            (Side::Left, Corner::TopLeft, degrees - 270.0)
        };

        Bearing::Leaning {
            side,
            corner,
            delta,
        }
    }
}
