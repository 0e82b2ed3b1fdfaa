//! Right-triangle helpers.
//!
//! Angles are in degrees. The side calculators snap their result to whole
//! pixels. None of these guard against divergence: `tan` near 90°, `cot` near
//! 0° and a zero adjacent side yield very large, infinite or NaN values, and
//! callers are expected to stay clear of those inputs.

/// Cotangent of an angle in radians
pub fn cot(radians: f64) -> f64 {
    1.0 / radians.tan()
}

/// Length of the side opposite `degrees`, given the adjacent side
pub fn opposite_side(adjacent: f64, degrees: f64) -> f64 {
    (degrees.to_radians().tan() * adjacent).round()
}

/// Length of the side adjacent to `degrees`, given the opposite side
pub fn adjacent_side(opposite: f64, degrees: f64) -> f64 {
    (cot(degrees.to_radians()) * opposite).round()
}

/// Angle between the adjacent side and the hypotenuse
pub fn degrees_from_sides(adjacent: f64, opposite: f64) -> f64 {
    (opposite / adjacent).atan().to_degrees()
}

/// `tan(degrees) / tan(span)`: how far along a sector an angle lies, on the
/// tangent scale. 0 at the start of the sector, 1 at `span`.
pub fn tangent_ratio(degrees: f64, span: f64) -> f64 {
    degrees.to_radians().tan() / span.to_radians().tan()
}
