//! Definition of the plane supporting a triangle.

use crate::math::{Point, Real, Vector};
use crate::utils;

/// An oriented plane, described by a unit normal and an offset.
///
/// A point `p` lies on the plane iff. `normal.dot(p) + offset == 0`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Plane {
    /// The unit normal of the plane.
    pub normal: Vector<Real>,
    /// The plane offset, i.e., the opposite of the dot product of the normal with any point of
    /// the plane.
    pub offset: Real,
}

impl Plane {
    /// The plane passing through `a`, `b`, and `c`.
    ///
    /// The normal follows the counter-clockwise orientation of the three points. The points
    /// must not be colinear.
    pub fn from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Self {
        let normal = (b - a).cross(&(c - a)).normalize();
        let offset = -normal.dot(&a.coords);
        Plane { normal, offset }
    }

    /// The signed distance from `pt` to this plane.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.offset
    }

    /// On which side of this plane `pt` is: `1` above, `-1` below, `0` exactly on it.
    #[inline]
    pub fn side(&self, pt: &Point<Real>) -> i8 {
        utils::sign(self.signed_distance(pt))
    }

    /// Whether the normals of `self` and `other` are exactly equal or exactly opposite.
    pub fn is_parallel_to(&self, other: &Plane) -> bool {
        self.normal == other.normal || self.normal == -other.normal
    }

    /// A point lying on both `self` and `other`.
    ///
    /// The result is meaningless if the two planes are parallel.
    // See "Intersection of 2 Planes" on geomalgorithms.com.
    pub fn intersection_line_point(&self, other: &Plane) -> Point<Real> {
        let dir = self.normal.cross(&other.normal);
        let p = (self.normal * other.offset - other.normal * self.offset).cross(&dir)
            / dir.norm_squared();
        Point::from(p)
    }
}
