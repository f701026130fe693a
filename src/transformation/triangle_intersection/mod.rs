//! Triangle-triangle intersection with vertex melding.
//!
//! See Tomas Möller, "A Fast Triangle-Triangle Intersection Test" for the general approach:
//! each triangle is clipped by the plane of the other, both clipped segments are mapped onto
//! the line shared by the two planes, and the overlap of the two resulting intervals is the
//! intersection.

pub use self::intersection_point::{IntersectionPoint, IntersectionPointType};
pub use self::intersection_result::{IntersectionType, TriangleIntersection};
pub use self::intersection_tolerances::{IntersectionTolerances, MELD_DISTANCE};
pub use self::self_test::{self_test, SelfTestError};
pub use self::triangle_plane_intersection::{CrossingPoint, TrianglePlaneIntersection};
pub use self::triangle_triangle_intersection::{intersect, intersect_with_tolerances};

mod intersection_point;
mod intersection_result;
mod intersection_tolerances;
mod triangle_plane_intersection;
mod triangle_triangle_intersection;
