use super::{
    CrossingPoint, IntersectionPoint, IntersectionTolerances, IntersectionType,
    TriangleIntersection, TrianglePlaneIntersection,
};
use crate::math::{Point, Real, Vector};
use crate::shape::{FaceHandle, Plane, VertexHandle};
use crate::utils::{self, IntVectorOps};
use core::ptr;

/// Computes the intersection of two triangles of a half-edge mesh.
///
/// If `hint` is provided, it must be a point lying on the intersection line of the planes of
/// both triangles. It is then used as the origin of that line instead of a computed one.
///
/// Endpoints closer than [`MELD_DISTANCE`](super::MELD_DISTANCE) to a vertex of either
/// triangle are replaced by that vertex.
pub fn intersect<'a>(
    face1: FaceHandle<'a>,
    face2: FaceHandle<'a>,
    hint: Option<Point<Real>>,
) -> TriangleIntersection<'a> {
    intersect_with_tolerances(face1, face2, hint, IntersectionTolerances::default())
}

/// Computes the intersection of two triangles of a half-edge mesh, with custom tolerances.
///
/// See [`intersect`] for details.
pub fn intersect_with_tolerances<'a>(
    face1: FaceHandle<'a>,
    face2: FaceHandle<'a>,
    hint: Option<Point<Real>>,
    tolerances: IntersectionTolerances,
) -> TriangleIntersection<'a> {
    if ptr::eq(face1.mesh(), face2.mesh()) {
        log::trace!("Intersecting two triangles of the same mesh.");
    }

    let points1 = face1.points();
    let points2 = face2.points();
    let plane1 = Plane::from_points(&points1[0], &points1[1], &points1[2]);
    let plane2 = Plane::from_points(&points2[0], &points2[1], &points2[2]);

    // Side of each vertex relative to the plane of the other triangle.
    let signs1 = points1.map(|p| plane2.side(&p));
    let signs2 = points2.map(|p| plane1.side(&p));
    log::trace!(
        "Intersecting {:?} and {:?}, signs: {:?} {:?}.",
        face1,
        face2,
        signs1,
        signs2
    );

    if plane1.is_parallel_to(&plane2) {
        let intersection_type = if signs1[0] == 0 {
            IntersectionType::Coplanar
        } else {
            IntersectionType::Parallel
        };
        log::debug!("Parallel planes: {}.", intersection_type);
        return TriangleIntersection::degenerate(intersection_type);
    }

    if all_equal(signs1) || all_equal(signs2) {
        log::debug!("One triangle lies entirely on one side of the other plane.");
        return TriangleIntersection::degenerate(IntersectionType::NonTouchingPlanes);
    }

    let crossing1 = TrianglePlaneIntersection::classify(&points1, signs1, face1);
    let Some(segment1) = crossing1.crossing_points() else {
        log::debug!("First triangle: {}.", crossing1.intersection_type);
        return TriangleIntersection::degenerate(crossing1.intersection_type);
    };

    let crossing2 = TrianglePlaneIntersection::classify(&points2, signs2, face2);
    let Some(segment2) = crossing2.crossing_points() else {
        log::debug!("Second triangle: {}.", crossing2.intersection_type);
        return TriangleIntersection::degenerate(crossing2.intersection_type);
    };

    let origin = hint
        .or(crossing1.anchor_point)
        .or(crossing2.anchor_point)
        .unwrap_or_else(|| plane1.intersection_line_point(&plane2));
    let line = IntersectionLine::new(origin, plane1.normal.cross(&plane2.normal).normalize());
    log::trace!("Intersection line: {:?} + x * {:?}.", line.origin, line.dir);

    let interval1 = LineInterval::new(&line, segment1, &plane2, crossing1.is_inner_direction);
    let interval2 = LineInterval::new(&line, segment2, &plane1, crossing2.is_inner_direction);
    log::trace!(
        "Line parameters: [{}, {}] and [{}, {}].",
        interval1.lo.0,
        interval1.hi.0,
        interval2.lo.0,
        interval2.hi.0
    );

    if interval1.hi.0 < interval2.lo.0 || interval2.hi.0 < interval1.lo.0 {
        log::debug!("The crossings of both triangles don’t overlap.");
        return TriangleIntersection::degenerate(IntersectionType::NonTouching);
    }

    let from = if interval1.lo.0 > interval2.lo.0 {
        interval1.lo.1
    } else {
        interval2.lo.1
    };
    let to = if interval1.hi.0 < interval2.hi.0 {
        interval1.hi.1
    } else {
        interval2.hi.1
    };

    if (from.location() - to.location()).test_length(tolerances.meld_distance) {
        match (from, to) {
            (IntersectionPoint::Vertex(v1), IntersectionPoint::Vertex(v2)) if v1 == v2 => {
                log::debug!("The triangles only share the vertex {:?}.", v1);
                return TriangleIntersection::degenerate(IntersectionType::TouchingPoint);
            }
            (IntersectionPoint::New { .. }, IntersectionPoint::New { .. }) => {
                log::warn!(
                    "Intersection of {:?} and {:?} is shorter than the meld distance: {:?} -> {:?}.",
                    face1,
                    face2,
                    from.location(),
                    to.location()
                );
            }
            _ => {}
        }
    }

    let candidates = face1.vertices().into_iter().chain(face2.vertices());
    let from = meld(from, candidates.clone(), tolerances.meld_distance);
    let to = meld(to, candidates, tolerances.meld_distance);

    TriangleIntersection {
        intersection_type: IntersectionType::LineSegment,
        from: Some(from),
        to: Some(to),
        inner_direction_1: interval1.inner_direction,
        inner_direction_2: interval2.inner_direction,
        touches_edge_1: crossing1.touches_edge,
        touches_edge_2: crossing2.touches_edge,
    }
}

fn all_equal(signs: [i8; 3]) -> bool {
    signs[0] == signs[1] && signs[1] == signs[2]
}

// Replaces `point` by the first candidate vertex closer than `meld_distance`.
fn meld<'a>(
    point: IntersectionPoint<'a>,
    mut candidates: impl Iterator<Item = VertexHandle<'a>>,
    meld_distance: i32,
) -> IntersectionPoint<'a> {
    if let IntersectionPoint::New { location, .. } = point {
        if let Some(vertex) =
            candidates.find(|v| (location - v.position()).test_length(meld_distance))
        {
            log::trace!("Melding {:?} onto {:?}.", location, vertex);
            return IntersectionPoint::Vertex(vertex);
        }
    }

    point
}

/// The intersection line of two planes, parametrized as `origin + x * dir`.
#[derive(Copy, Clone, Debug)]
struct IntersectionLine {
    origin: Point<Real>,
    /// Unit direction of the line.
    dir: Vector<Real>,
}

impl IntersectionLine {
    fn new(origin: Point<Real>, dir: Vector<Real>) -> Self {
        Self { origin, dir }
    }

    fn point_at(&self, x: Real) -> Point<Real> {
        self.origin + self.dir * x
    }

    /// The parameter of the point where the segment `[a, b]` crosses `plane`.
    ///
    /// `a` and `b` must lie strictly on opposite sides of `plane`.
    fn crossing_parameter(&self, a: &Point<Real>, b: &Point<Real>, plane: &Plane) -> Real {
        let xa = self.dir.dot(&(a - self.origin));
        let xb = self.dir.dot(&(b - self.origin));
        let da = plane.signed_distance(a);
        let db = plane.signed_distance(b);
        xa + (xb - xa) * da / (da - db)
    }

    /// Computes the line parameter of a crossing point, and its final location.
    fn resolve<'a>(
        &self,
        crossing: CrossingPoint<'a>,
        far_plane: &Plane,
    ) -> (Real, IntersectionPoint<'a>) {
        match crossing {
            CrossingPoint::Vertex(vertex) => {
                let x = utils::largest_axis_divide(&(vertex.point() - self.origin), &self.dir);
                (x, IntersectionPoint::Vertex(vertex))
            }
            CrossingPoint::Edge { edge, from, to } => {
                let x = self.crossing_parameter(&from, &to, far_plane);
                // Use the line equation so that every computed point lies on the same line.
                let location = utils::to_int_point(&self.point_at(x));
                (x, IntersectionPoint::New { location, edge })
            }
        }
    }
}

/// The part of the intersection line covered by one triangle, with `lo.0 <= hi.0`.
struct LineInterval<'a> {
    lo: (Real, IntersectionPoint<'a>),
    hi: (Real, IntersectionPoint<'a>),
    inner_direction: bool,
}

impl<'a> LineInterval<'a> {
    fn new(
        line: &IntersectionLine,
        (crossing1, crossing2): (CrossingPoint<'a>, CrossingPoint<'a>),
        far_plane: &Plane,
        inner_direction: bool,
    ) -> Self {
        let lo = line.resolve(crossing1, far_plane);
        let hi = line.resolve(crossing2, far_plane);

        if lo.0 > hi.0 {
            // The inner direction is relative to the segment orientation.
            Self {
                lo: hi,
                hi: lo,
                inner_direction: !inner_direction,
            }
        } else {
            Self {
                lo,
                hi,
                inner_direction,
            }
        }
    }
}
