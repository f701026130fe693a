use crate::math::{Real, Vector};

/// The sign of `x`: `-1`, `0` or `1`.
///
/// Only an exact zero (positive or negative) is classified as `0`.
#[inline]
pub fn sign(x: Real) -> i8 {
    (0.0 < x) as i8 - (x < 0.0) as i8
}

/// Divides `a` by `b`, assuming both vectors are colinear.
///
/// The division is performed on the component for which `b` has the largest magnitude so that
/// the result stays well-conditioned when `b` is almost orthogonal to one of the axes.
#[inline]
pub fn largest_axis_divide(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    let xx = b.x * b.x;
    let yy = b.y * b.y;
    let zz = b.z * b.z;

    if xx >= yy && xx >= zz {
        a.x / b.x
    } else if yy >= zz {
        a.y / b.y
    } else {
        a.z / b.z
    }
}
