use crate::math::IntPoint;
use crate::shape::{EdgeHandle, FaceHandle, VertexHandle};
use crate::utils::hashmap::HashMap;
use alloc::vec::Vec;

/// Indicated an inconsistency in the topology of a half-edge mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// Found a triangle with two or three identical vertices.
    #[error("the triangle {0} has at least two identical vertices.")]
    BadTriangle(u32),
    /// A triangle references a vertex that was never added to the mesh.
    #[error("the triangle {triangle} references the unknown vertex {vertex}.")]
    UnknownVertex {
        /// The triangle being created.
        triangle: u32,
        /// The vertex index out of the mesh bounds.
        vertex: u32,
    },
    /// At least two adjacent triangles have opposite orientations.
    #[error("the triangles {triangle1} and {triangle2} sharing the edge {edge:?} have opposite orientations.")]
    BadAdjacentFacesOrientation {
        /// The triangle already owning the directed edge.
        triangle1: u32,
        /// The triangle that attempted to own the same directed edge.
        triangle2: u32,
        /// The edge shared between the two triangles.
        edge: (u32, u32),
    },
}

/// Indicated an inconsistency while building a half-edge mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuilderError {
    /// A mesh built from buffers must contain at least one triangle.
    #[error("A half-edge mesh must contain at least one triangle.")]
    EmptyIndices,
    /// Indicated an inconsistency in the topology of the mesh.
    #[error("Topology Error: {0}")]
    TopologyError(TopologyError),
}

impl From<TopologyError> for MeshBuilderError {
    fn from(value: TopologyError) -> Self {
        MeshBuilderError::TopologyError(value)
    }
}

/// A vertex of a half-edge mesh.
#[derive(Clone, Copy, Debug)]
pub struct MeshVertex {
    /// The position of this vertex, in microns.
    pub position: IntPoint,
    /// One of the half-edges starting at this vertex.
    ///
    /// This is `u32::MAX` if the vertex isn’t part of any face.
    pub half_edge: u32,
}

/// A face of a half-edge mesh.
#[derive(Clone, Copy, Debug)]
pub struct MeshFace {
    /// The half-edge adjacent to this face, with a starting point equal
    /// to the first point of this face.
    pub half_edge: u32,
}

/// A half-edge of a half-edge mesh.
#[derive(Clone, Copy, Debug)]
pub struct MeshHalfEdge {
    /// The next half-edge around the same face.
    pub next: u32,
    /// This half-edge twin on the adjacent triangle.
    ///
    /// This is `u32::MAX` if there is no twin.
    pub twin: u32,
    /// The first vertex of this edge.
    pub vertex: u32,
    /// The face associated to this half-edge.
    pub face: u32,
}

/// A triangle mesh with integer vertex coordinates and half-edge adjacency.
///
/// Vertices, faces and half-edges are never removed, so their indices are stable and can be
/// held by intersection results for as long as the mesh is borrowed.
#[derive(Clone, Debug, Default)]
pub struct HalfEdgeMesh {
    vertices: Vec<MeshVertex>,
    faces: Vec<MeshFace>,
    half_edges: Vec<MeshHalfEdge>,
    // Maps a directed edge (first vertex, second vertex) to its half-edge.
    half_edge_map: HashMap<(u32, u32), u32>,
}

impl HalfEdgeMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from a vertex buffer and an index buffer.
    ///
    /// Each triangle is added with [`HalfEdgeMesh::add_face`], so its vertices must be given in
    /// an order consistent with the orientation of its neighbors.
    pub fn from_buffers(
        vertices: Vec<IntPoint>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, MeshBuilderError> {
        if indices.is_empty() {
            return Err(MeshBuilderError::EmptyIndices);
        }

        let mut mesh = Self::new();
        mesh.vertices.reserve(vertices.len());
        mesh.faces.reserve(indices.len());
        mesh.half_edges.reserve(indices.len() * 3);

        for pt in vertices {
            let _ = mesh.add_vertex(pt);
        }

        for idx in indices {
            let _ = mesh.add_face(idx)?;
        }

        Ok(mesh)
    }

    /// Adds an isolated vertex to this mesh and returns its index.
    pub fn add_vertex(&mut self, position: IntPoint) -> u32 {
        self.vertices.push(MeshVertex {
            position,
            half_edge: u32::MAX,
        });
        self.vertices.len() as u32 - 1
    }

    /// Adds the triangle `idx[0] → idx[1] → idx[2]` to this mesh and returns its index.
    ///
    /// The three half-edges of the face are linked to the twins already present in the mesh.
    /// The mesh is left untouched if an error is returned.
    pub fn add_face(&mut self, idx: [u32; 3]) -> Result<u32, TopologyError> {
        let fid = self.faces.len() as u32;

        for vid in idx {
            if vid as usize >= self.vertices.len() {
                return Err(TopologyError::UnknownVertex {
                    triangle: fid,
                    vertex: vid,
                });
            }
        }

        if idx[0] == idx[1] || idx[0] == idx[2] || idx[1] == idx[2] {
            return Err(TopologyError::BadTriangle(fid));
        }

        for k in 0..3 {
            let edge_key = (idx[k], idx[(k + 1) % 3]);
            if let Some(existing) = self.half_edge_map.get(&edge_key) {
                // If the same edge already exists (with the same vertex order) then
                // we have two triangles sharing the same edge with incompatible orientations.
                return Err(TopologyError::BadAdjacentFacesOrientation {
                    triangle1: self.half_edges[*existing as usize].face,
                    triangle2: fid,
                    edge: edge_key,
                });
            }
        }

        let half_edge_base_id = self.half_edges.len() as u32;

        for k in 0u32..3 {
            let vid = idx[k as usize];
            let edge_key = (vid, idx[(k as usize + 1) % 3]);
            let id = half_edge_base_id + k;
            let twin = self
                .half_edge_map
                .get(&(edge_key.1, edge_key.0))
                .copied()
                .unwrap_or(u32::MAX);

            if twin != u32::MAX {
                self.half_edges[twin as usize].twin = id;
            }

            self.half_edges.push(MeshHalfEdge {
                next: half_edge_base_id + (k + 1) % 3,
                twin,
                vertex: vid,
                face: fid,
            });
            let _ = self.half_edge_map.insert(edge_key, id);
            self.vertices[vid as usize].half_edge = id;
        }

        self.faces.push(MeshFace {
            half_edge: half_edge_base_id,
        });

        Ok(fid)
    }

    /// The vertices of this mesh.
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// The faces of this mesh.
    pub fn faces(&self) -> &[MeshFace] {
        &self.faces
    }

    /// The half-edges of this mesh.
    pub fn half_edges(&self) -> &[MeshHalfEdge] {
        &self.half_edges
    }

    /// The number of faces of this mesh.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// A handle to the `i`-th vertex of this mesh.
    ///
    /// Panics if `i` is out of bounds.
    pub fn vertex(&self, i: u32) -> VertexHandle<'_> {
        assert!((i as usize) < self.vertices.len(), "vertex index out of bounds");
        VertexHandle::new(self, i)
    }

    /// A handle to the `i`-th half-edge of this mesh.
    ///
    /// Panics if `i` is out of bounds.
    pub fn edge(&self, i: u32) -> EdgeHandle<'_> {
        assert!((i as usize) < self.half_edges.len(), "half-edge index out of bounds");
        EdgeHandle::new(self, i)
    }

    /// A handle to the `i`-th face of this mesh.
    ///
    /// Panics if `i` is out of bounds.
    pub fn face(&self, i: u32) -> FaceHandle<'_> {
        assert!((i as usize) < self.faces.len(), "face index out of bounds");
        FaceHandle::new(self, i)
    }

    /// Iterates through handles to all the faces of this mesh.
    pub fn face_handles(&self) -> impl ExactSizeIterator<Item = FaceHandle<'_>> + '_ {
        (0..self.faces.len() as u32).map(move |i| FaceHandle::new(self, i))
    }
}
