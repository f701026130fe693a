//! Intersection of triangles embedded in a half-edge mesh.

pub use self::triangle_intersection::{
    intersect, intersect_with_tolerances, self_test, IntersectionPoint, IntersectionPointType,
    IntersectionTolerances, IntersectionType, SelfTestError, TriangleIntersection,
    MELD_DISTANCE,
};

pub mod triangle_intersection;
