use super::IntersectionType;
use crate::math::{Point, Real};
use crate::shape::{EdgeHandle, FaceHandle, VertexHandle};

/// A point where a triangle crosses the plane of another triangle, before it is mapped onto the
/// intersection line of both planes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CrossingPoint<'a> {
    /// The plane passes exactly through this vertex of the triangle.
    Vertex(VertexHandle<'a>),
    /// The plane crosses `edge` strictly between its endpoints.
    ///
    /// `from` and `to` are the endpoints of the edge, in the order they must be interpolated.
    /// The actual location of the crossing is only known once the intersection line is set.
    Edge {
        /// The crossed half-edge.
        edge: EdgeHandle<'a>,
        /// The first endpoint of the crossed segment.
        from: Point<Real>,
        /// The second endpoint of the crossed segment.
        to: Point<Real>,
    },
}

/// How a single triangle crosses the plane of another triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrianglePlaneIntersection<'a> {
    /// The first crossing point.
    pub line1: Option<CrossingPoint<'a>>,
    /// The second crossing point.
    pub line2: Option<CrossingPoint<'a>>,
    /// A vertex of the triangle lying exactly on the plane, if any.
    ///
    /// Such a point lies on the intersection line of both planes and is a better numerical
    /// origin for that line than an analytically computed one.
    pub anchor_point: Option<Point<Real>>,
    /// Whether the part of the triangle away from the cut is on the positive side of the
    /// segment `line1 → line2`.
    pub is_inner_direction: bool,
    /// The edge of the triangle lying entirely on the plane, if any.
    pub touches_edge: Option<EdgeHandle<'a>>,
    /// Whether both crossing points were found.
    pub is_correct: bool,
    /// The intersection type to report when `is_correct` is `false`.
    pub intersection_type: IntersectionType,
}

impl<'a> TrianglePlaneIntersection<'a> {
    fn empty() -> Self {
        Self {
            line1: None,
            line2: None,
            anchor_point: None,
            is_inner_direction: false,
            touches_edge: None,
            is_correct: false,
            intersection_type: IntersectionType::LineSegment,
        }
    }

    /// Finds the two points where the triangle `face` crosses a plane.
    ///
    /// The `points` are the positions of the three vertices of `face` and `signs` indicates on
    /// which side of the plane each of them lies (`-1`, `0` or `1`).
    pub fn classify(points: &[Point<Real>; 3], signs: [i8; 3], face: FaceHandle<'a>) -> Self {
        let mut result = Self::empty();
        let [a, b, c] = points;
        let [sa, sb, sc] = signs;

        if sa == sb && sb == sc {
            result.intersection_type = if sa == 0 {
                IntersectionType::Coplanar
            } else {
                IntersectionType::NonTouchingPlanes
            };
            log::trace!("Triangle {:?} does not cross the plane: {:?}.", face, signs);
            return result;
        }

        if sa == sb {
            result.set_same_side_crossing(sa, sc, face.edge(0), c, b, a);
        } else if sb == sc {
            result.set_same_side_crossing(sb, sa, face.edge(1), a, c, b);
        } else if sc == sa {
            result.set_same_side_crossing(sc, sb, face.edge(2), b, a, c);
        } else if sa == 0 {
            // All the signs are distinct so exactly one of them is zero.
            result.set_on_plane_crossing(face.vertex(0), b, c, sb, face.edge(1));
        } else if sb == 0 {
            result.set_on_plane_crossing(face.vertex(1), c, a, sc, face.edge(2));
        } else {
            result.set_on_plane_crossing(face.vertex(2), a, b, sa, face.edge(0));
        }

        result.is_correct = result.line1.is_some() && result.line2.is_some();
        result
    }

    /// Both crossing points, if the plane is actually crossed.
    pub fn crossing_points(&self) -> Option<(CrossingPoint<'a>, CrossingPoint<'a>)> {
        if self.is_correct {
            self.line1.zip(self.line2)
        } else {
            None
        }
    }

    // Two vertices lie on the same side of the plane (or both on it) and `lone` is the third
    // one. `prev` and `next` are the vertices before and after `lone`.
    fn set_same_side_crossing(
        &mut self,
        same_sign: i8,
        lone_sign: i8,
        same_side_edge: EdgeHandle<'a>,
        lone: &Point<Real>,
        prev: &Point<Real>,
        next: &Point<Real>,
    ) {
        if same_sign == 0 {
            let from = same_side_edge.from_vertex();
            let to = same_side_edge.to_vertex();
            self.line1 = Some(CrossingPoint::Vertex(from));
            self.line2 = Some(CrossingPoint::Vertex(to));
            self.anchor_point = Some(to.point());
            self.is_inner_direction = lone_sign < 0;
            self.touches_edge = Some(same_side_edge);
            log::trace!("Edge {:?} lies on the plane.", same_side_edge);
        } else if lone_sign == 0 {
            self.intersection_type = IntersectionType::TouchingPoint;
            log::trace!("Only one vertex of {:?} touches the plane.", same_side_edge.face());
        } else {
            let edge1 = same_side_edge.next();
            let edge2 = edge1.next();
            self.line1 = Some(CrossingPoint::Edge {
                edge: edge1,
                from: *prev,
                to: *lone,
            });
            self.line2 = Some(CrossingPoint::Edge {
                edge: edge2,
                from: *lone,
                to: *next,
            });
            self.is_inner_direction = same_sign > 0;
        }
    }

    // `middle` lies on the plane while `next` and `prev` are on opposite sides of it.
    fn set_on_plane_crossing(
        &mut self,
        middle: VertexHandle<'a>,
        next: &Point<Real>,
        prev: &Point<Real>,
        next_sign: i8,
        opposite_edge: EdgeHandle<'a>,
    ) {
        self.line1 = Some(CrossingPoint::Vertex(middle));
        self.line2 = Some(CrossingPoint::Edge {
            edge: opposite_edge,
            from: *next,
            to: *prev,
        });
        self.anchor_point = Some(middle.point());
        self.is_inner_direction = next_sign > 0;
        log::trace!("Vertex {:?} lies on the plane.", middle);
    }
}
