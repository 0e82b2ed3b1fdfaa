//! Tooltip placement.
//!
//! Placement happens in three steps:
//! 1. Measure: centers of both boxes and the sector bounds of the anchor
//! 2. Classify: turn the orbit angle into a [`Bearing`]
//! 3. Place: start from the cardinal placement for the bearing's side and
//!    slide the tooltip along that side toward the corner it is heading for
//!
//! ## Cardinal placements
//!
//! At 0, 90, 180 and 270 degrees the tooltip is centered on the middle of the
//! corresponding side, `spacing` pixels away from the anchor's content edge.
//! The coordinate normal to the side stays the same for the whole sector; only
//! the tangential coordinate changes with the angle.
//!
//! ## Sliding toward a corner
//!
//! With [`Tracking::Flush`] the slide is interpolated on the tangent scale,
//! `t = tan(delta) / tan(span)`, where `span` is the angular distance from the
//! cardinal to the sector boundary. Two terms move by `t`:
//! - the anchor's half side, so the tooltip's reference point follows the
//!   anchor outline from the middle of the side to the corner
//! - a clearance, the distance from the tooltip center to its trailing edge
//!   plus the spacing, so that at the boundary the tooltip's near corner sits
//!   `spacing` off the anchor corner on both axes
//!
//! At the boundary both neighbouring sectors produce the same point.
//!
//! With [`Tracking::Radial`] the slide is the opposite leg of two right
//! triangles with angle `delta`: one over the anchor's half extent normal to
//! the side, one over the tooltip's.

use tracing::{debug, warn};

use super::config::{OrbitConfig, Tracking};
use super::sector::{Bearing, SectorBounds};
use super::trig::{opposite_side, tangent_ratio};
use super::types::{Corner, Point, Rect, Side};

/// Everything worked out while placing a tooltip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub bounds: SectorBounds,
    pub bearing: Bearing,
    pub anchor_center: Point,
    pub tooltip_center: Point,
    /// Top-left corner for the tooltip, in page coordinates
    pub position: Point,
}

/// Top-left page coordinates at which to draw `tooltip` so that it orbits
/// `anchor` at the configured angle
pub fn compute_tooltip_position(anchor: &Rect, tooltip: &Rect, config: &OrbitConfig) -> Point {
    plan_placement(anchor, tooltip, config).position
}

/// Like [`compute_tooltip_position`], also returning the intermediate geometry
pub fn plan_placement(anchor: &Rect, tooltip: &Rect, config: &OrbitConfig) -> Placement {
    let bounds = SectorBounds::for_anchor(anchor);
    let mut bearing = bounds.classify(config.angle_degrees());

    if let Bearing::Leaning { side, .. } = bearing {
        if anchor.is_degenerate() || bounds.is_degenerate() {
            warn!(
                width = anchor.width,
                height = anchor.height,
                angle = config.angle_degrees(),
                side = side.name(),
                "anchor too thin to lean toward a corner; using the cardinal placement"
            );
            bearing = Bearing::Cardinal(side);
        }
    }

    let position = position_for_bearing(bearing, anchor, tooltip, config);
    debug!(
        angle = config.angle_degrees(),
        ?bearing,
        x = position.x,
        y = position.y,
        "placed tooltip"
    );

    Placement {
        bounds,
        bearing,
        anchor_center: anchor.center(),
        tooltip_center: tooltip.center(),
        position,
    }
}

/// Place a tooltip for an already classified bearing.
///
/// The angle in `config` is ignored; spacing, offset and tracking apply.
pub fn position_for_bearing(
    bearing: Bearing,
    anchor: &Rect,
    tooltip: &Rect,
    config: &OrbitConfig,
) -> Point {
    let center = anchor.center();
    let spacing = config.spacing();

    let (side, shift) = match bearing {
        Bearing::Cardinal(side) => (side, 0.0),
        Bearing::Leaning {
            side,
            corner,
            delta,
        } => {
            let magnitude = match config.tracking() {
                Tracking::Flush => {
                    let span = SectorBounds::for_anchor(anchor).span(side, corner);
                    let ratio = tangent_ratio(delta, span);
                    flush_shift(side, corner, ratio, anchor, tooltip, spacing)
                }
                Tracking::Radial => radial_shift(side, delta, anchor, tooltip),
            };
            (side, corner.sign_along(side) * magnitude)
        }
    };
    let along = config.offset() + shift;

    match side {
        Side::Top => Point::new(
            center.x + along - (tooltip.width / 2.0).round(),
            center.y - (anchor.height / 2.0).round() - (tooltip.height + spacing),
        ),
        Side::Right => Point::new(
            center.x + (anchor.width / 2.0).round() + spacing,
            center.y + along - (tooltip.height / 2.0).round(),
        ),
        Side::Bottom => Point::new(
            center.x + along - (tooltip.width / 2.0).round(),
            center.y + (anchor.height / 2.0).round() + spacing,
        ),
        Side::Left => Point::new(
            center.x - (anchor.width / 2.0).round() - (tooltip.width + spacing),
            center.y + along - (tooltip.height / 2.0).round(),
        ),
    }
}

fn flush_shift(
    side: Side,
    corner: Corner,
    ratio: f64,
    anchor: &Rect,
    tooltip: &Rect,
    spacing: f64,
) -> f64 {
    let (half_side, extent) = if side.is_horizontal() {
        (anchor.half_width(), tooltip.width)
    } else {
        (anchor.half_height(), tooltip.height)
    };

    // The tooltip is positioned by its rounded center; the edge trailing
    // behind the direction of travel is what has to clear the corner.
    let leading_half = (extent / 2.0).round();
    let trailing_half = if corner.sign_along(side) > 0.0 {
        leading_half
    } else {
        extent - leading_half
    };

    (half_side * ratio).round() + ((trailing_half + spacing) * ratio).round()
}

fn radial_shift(side: Side, delta: f64, anchor: &Rect, tooltip: &Rect) -> f64 {
    let (anchor_half, tooltip_half) = if side.is_horizontal() {
        (anchor.half_height(), tooltip.half_height())
    } else {
        (anchor.half_width(), tooltip.half_width())
    };
    opposite_side(anchor_half, delta) + opposite_side(tooltip_half, delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 80x40 anchor centered on (100, 100)
    fn anchor() -> Rect {
        Rect::new(60.0, 80.0, 80.0, 40.0)
    }

    fn tooltip() -> Rect {
        Rect::sized(60.0, 20.0)
    }

    fn config(angle: f64) -> OrbitConfig {
        OrbitConfig::new(angle, 5.0, 0.0).unwrap()
    }

    fn place(angle: f64) -> Point {
        compute_tooltip_position(&anchor(), &tooltip(), &config(angle))
    }

    #[test]
    fn test_cardinal_top() {
        assert_eq!(place(0.0), Point::new(70.0, 55.0));
        assert_eq!(place(360.0), Point::new(70.0, 55.0));
    }

    #[test]
    fn test_cardinal_right() {
        assert_eq!(place(90.0), Point::new(145.0, 90.0));
    }

    #[test]
    fn test_cardinal_bottom() {
        assert_eq!(place(180.0), Point::new(70.0, 125.0));
    }

    #[test]
    fn test_cardinal_left() {
        assert_eq!(place(270.0), Point::new(-5.0, 90.0));
    }

    #[test]
    fn test_flush_top_sector() {
        // t = tan 30 / tan 63 = 0.2942; 40t = 11.77, 35t = 10.30
        assert_eq!(place(30.0), Point::new(92.0, 55.0));
        assert_eq!(place(330.0), Point::new(48.0, 55.0));
    }

    #[test]
    fn test_flush_right_sector_leans_up_then_down() {
        let up = place(80.0);
        let down = place(100.0);
        assert_eq!(up.x, 145.0);
        assert_eq!(down.x, 145.0);
        assert!(up.y < 90.0, "got {}", up.y);
        assert!(down.y > 90.0, "got {}", down.y);
        assert_eq!(90.0 - up.y, down.y - 90.0);
    }

    #[test]
    fn test_flush_corner_clears_anchor() {
        // At the top-right boundary the tooltip's bottom-left corner sits
        // exactly `spacing` off the anchor's top-right corner.
        let p = place(63.0);
        assert_eq!(p, Point::new(145.0, 55.0));
    }

    #[test]
    fn test_radial_top_sector() {
        let config = config(30.0).with_tracking(Tracking::Radial);
        // opposite(20, 30) = 12, opposite(10, 30) = 6
        let p = compute_tooltip_position(&anchor(), &tooltip(), &config);
        assert_eq!(p, Point::new(88.0, 55.0));

        let config = config.with_angle(330.0).unwrap();
        let p = compute_tooltip_position(&anchor(), &tooltip(), &config);
        assert_eq!(p, Point::new(52.0, 55.0));
    }

    #[test]
    fn test_radial_left_sector() {
        let config = config(260.0).with_tracking(Tracking::Radial);
        // opposite(40, 10) = 7, opposite(30, 10) = 5
        let p = compute_tooltip_position(&anchor(), &tooltip(), &config);
        assert_eq!(p, Point::new(-5.0, 102.0));
    }

    #[test]
    fn test_offset_applies_tangentially() {
        let nudged = OrbitConfig::new(180.0, 5.0, -10.0).unwrap();
        let p = compute_tooltip_position(&anchor(), &tooltip(), &nudged);
        assert_eq!(p, Point::new(60.0, 125.0));

        let nudged = OrbitConfig::new(90.0, 5.0, 7.0).unwrap();
        let p = compute_tooltip_position(&anchor(), &tooltip(), &nudged);
        assert_eq!(p, Point::new(145.0, 97.0));
    }

    #[test]
    fn test_degenerate_anchor_uses_cardinal() {
        let flat = Rect::new(0.0, 100.0, 200.0, 0.0);
        let leaning = OrbitConfig::new(30.0, 5.0, 0.0).unwrap();
        let straight = OrbitConfig::new(0.0, 5.0, 0.0).unwrap();

        let placement = plan_placement(&flat, &tooltip(), &leaning);
        assert_eq!(placement.bearing, Bearing::Cardinal(Side::Top));
        assert_eq!(
            placement.position,
            compute_tooltip_position(&flat, &tooltip(), &straight)
        );
        assert!(placement.position.x.is_finite() && placement.position.y.is_finite());
    }

    #[test]
    fn test_point_anchor_stays_finite() {
        let point = Rect::new(50.0, 50.0, 0.0, 0.0);
        let p = compute_tooltip_position(&point, &tooltip(), &config(123.0));
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn test_plan_reports_centers() {
        let placement = plan_placement(&anchor(), &tooltip(), &config(45.0));
        assert_eq!(placement.anchor_center, Point::new(100.0, 100.0));
        assert_eq!(placement.tooltip_center, Point::new(30.0, 10.0));
        assert_eq!(placement.bounds.top_right, 63.0);
    }
}
