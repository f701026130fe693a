use crate::math::IntPoint;
use crate::shape::{EdgeHandle, VertexHandle};

/// The kind of an [`IntersectionPoint`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionPointType {
    /// The point coincides with an existing mesh vertex.
    Vertex,
    /// The point was computed and lies strictly inside a mesh edge.
    New,
}

/// An endpoint of the segment where two triangles intersect.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntersectionPoint<'a> {
    /// The endpoint is an existing vertex of the mesh.
    Vertex(VertexHandle<'a>),
    /// The endpoint is a new point lying on `edge`.
    ///
    /// The edge must be split at `location` before the point can be used as a mesh vertex.
    New {
        /// Where the point lies, in mesh coordinates.
        location: IntPoint,
        /// The half-edge the point lies on.
        edge: EdgeHandle<'a>,
    },
}

impl<'a> IntersectionPoint<'a> {
    /// The kind of this point.
    pub fn point_type(&self) -> IntersectionPointType {
        match self {
            IntersectionPoint::Vertex(_) => IntersectionPointType::Vertex,
            IntersectionPoint::New { .. } => IntersectionPointType::New,
        }
    }

    /// The position of this point, in mesh coordinates.
    pub fn location(&self) -> IntPoint {
        match self {
            IntersectionPoint::Vertex(vertex) => vertex.position(),
            IntersectionPoint::New { location, .. } => *location,
        }
    }

    /// The existing vertex this point coincides with, if any.
    pub fn vertex(&self) -> Option<VertexHandle<'a>> {
        match self {
            IntersectionPoint::Vertex(vertex) => Some(*vertex),
            IntersectionPoint::New { .. } => None,
        }
    }

    /// The edge this point lies on, if it is a new point.
    pub fn edge(&self) -> Option<EdgeHandle<'a>> {
        match self {
            IntersectionPoint::Vertex(_) => None,
            IntersectionPoint::New { edge, .. } => Some(*edge),
        }
    }
}
