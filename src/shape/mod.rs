//! Geometric primitives and the half-edge mesh the intersections are computed on.

pub use self::half_edge_mesh::{
    HalfEdgeMesh, MeshBuilderError, MeshFace, MeshHalfEdge, MeshVertex, TopologyError,
};
pub use self::mesh_handles::{EdgeHandle, FaceHandle, VertexHandle};
pub use self::plane::Plane;

mod half_edge_mesh;
mod mesh_handles;
mod plane;
