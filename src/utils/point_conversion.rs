use crate::math::{IntPoint, Point, Real};
use na::ComplexField;

/// Converts a mesh-resident integer point to floating-point coordinates.
#[inline]
pub fn to_real_point(p: &IntPoint) -> Point<Real> {
    p.map(|c| c as Real)
}

/// Converts a floating-point point to mesh coordinates, rounding each component to the nearest
/// integer.
#[inline]
pub fn to_int_point(p: &Point<Real>) -> IntPoint {
    p.map(|c| ComplexField::round(c) as i32)
}
