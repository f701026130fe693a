use super::IntersectionPoint;
use crate::shape::EdgeHandle;
use core::fmt;

/// The outcome of a triangle-triangle intersection.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionType {
    /// Both triangles lie on the same plane. Coplanar overlaps are not computed.
    Coplanar,
    /// The triangle planes are parallel and distinct.
    Parallel,
    /// One triangle lies strictly on one side of the plane of the other.
    NonTouchingPlanes,
    /// Each triangle crosses the plane of the other, but the crossings don’t overlap.
    NonTouching,
    /// The triangles only share a single point.
    TouchingPoint,
    /// The triangles cross along a line segment.
    LineSegment,
}

impl fmt::Display for IntersectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntersectionType::Coplanar => "coplanar",
            IntersectionType::Parallel => "parallel",
            IntersectionType::NonTouchingPlanes => "non-touching planes",
            IntersectionType::NonTouching => "non-touching",
            IntersectionType::TouchingPoint => "touching point",
            IntersectionType::LineSegment => "line segment",
        };
        f.write_str(name)
    }
}

/// The intersection of two triangles of a half-edge mesh.
///
/// The endpoints are only set if the intersection is a [`IntersectionType::LineSegment`]. The
/// mesh elements referenced by this value are borrowed, so it cannot outlive the mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriangleIntersection<'a> {
    pub(super) intersection_type: IntersectionType,
    pub(super) from: Option<IntersectionPoint<'a>>,
    pub(super) to: Option<IntersectionPoint<'a>>,
    pub(super) inner_direction_1: bool,
    pub(super) inner_direction_2: bool,
    pub(super) touches_edge_1: Option<EdgeHandle<'a>>,
    pub(super) touches_edge_2: Option<EdgeHandle<'a>>,
}

impl<'a> TriangleIntersection<'a> {
    /// An intersection without any segment data.
    pub(super) fn degenerate(intersection_type: IntersectionType) -> Self {
        Self {
            intersection_type,
            from: None,
            to: None,
            inner_direction_1: false,
            inner_direction_2: false,
            touches_edge_1: None,
            touches_edge_2: None,
        }
    }

    /// The kind of this intersection.
    #[inline]
    pub fn intersection_type(&self) -> IntersectionType {
        self.intersection_type
    }

    /// Is this intersection a line segment?
    #[inline]
    pub fn is_line_segment(&self) -> bool {
        self.intersection_type == IntersectionType::LineSegment
    }

    /// The first endpoint of the intersection segment.
    #[inline]
    pub fn from(&self) -> Option<IntersectionPoint<'a>> {
        self.from
    }

    /// The second endpoint of the intersection segment.
    #[inline]
    pub fn to(&self) -> Option<IntersectionPoint<'a>> {
        self.to
    }

    /// Both endpoints of the intersection segment, if this is a line segment.
    pub fn segment(&self) -> Option<(IntersectionPoint<'a>, IntersectionPoint<'a>)> {
        self.from.zip(self.to)
    }

    /// Whether the part of the first triangle containing its vertex away from the cut lies on
    /// the positive side of the ordered segment `from → to`.
    #[inline]
    pub fn inner_direction_1(&self) -> bool {
        self.inner_direction_1
    }

    /// Whether the part of the second triangle containing its vertex away from the cut lies on
    /// the positive side of the ordered segment `from → to`.
    #[inline]
    pub fn inner_direction_2(&self) -> bool {
        self.inner_direction_2
    }

    /// The edge of the first triangle lying exactly on the plane of the second triangle, if any.
    #[inline]
    pub fn touches_edge_1(&self) -> Option<EdgeHandle<'a>> {
        self.touches_edge_1
    }

    /// The edge of the second triangle lying exactly on the plane of the first triangle, if any.
    #[inline]
    pub fn touches_edge_2(&self) -> Option<EdgeHandle<'a>> {
        self.touches_edge_2
    }
}
