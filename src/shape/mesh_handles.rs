//! Lightweight, copyable views on the elements of a [`HalfEdgeMesh`].
//!
//! A handle is a reference to the mesh plus an index. Two handles are equal iff. they
//! designate the same element of the same mesh: positions are never compared.

use crate::math::{IntPoint, Point, Real};
use crate::shape::HalfEdgeMesh;
use crate::utils;
use core::fmt;
use core::ptr;

macro_rules! impl_handle_identity(
    ($Handle: ident) => {
        impl<'a> $Handle<'a> {
            pub(crate) fn new(mesh: &'a HalfEdgeMesh, id: u32) -> Self {
                Self { mesh, id }
            }

            /// The mesh this handle points into.
            #[inline]
            pub fn mesh(&self) -> &'a HalfEdgeMesh {
                self.mesh
            }

            /// The index of the designated element in its mesh.
            #[inline]
            pub fn id(&self) -> u32 {
                self.id
            }
        }

        impl PartialEq for $Handle<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id && ptr::eq(self.mesh, other.mesh)
            }
        }

        impl Eq for $Handle<'_> {}
    }
);

/// A handle to a vertex of a [`HalfEdgeMesh`].
#[derive(Copy, Clone)]
pub struct VertexHandle<'a> {
    mesh: &'a HalfEdgeMesh,
    id: u32,
}

/// A handle to a half-edge of a [`HalfEdgeMesh`].
#[derive(Copy, Clone)]
pub struct EdgeHandle<'a> {
    mesh: &'a HalfEdgeMesh,
    id: u32,
}

/// A handle to a triangular face of a [`HalfEdgeMesh`].
#[derive(Copy, Clone)]
pub struct FaceHandle<'a> {
    mesh: &'a HalfEdgeMesh,
    id: u32,
}

impl_handle_identity!(VertexHandle);
impl_handle_identity!(EdgeHandle);
impl_handle_identity!(FaceHandle);

impl<'a> VertexHandle<'a> {
    /// The position of this vertex, in mesh coordinates.
    #[inline]
    pub fn position(&self) -> IntPoint {
        self.mesh.vertices()[self.id as usize].position
    }

    /// The position of this vertex, converted to floating-point coordinates.
    #[inline]
    pub fn point(&self) -> Point<Real> {
        utils::to_real_point(&self.position())
    }

    /// One of the half-edges starting at this vertex, if it belongs to a face.
    pub fn half_edge(&self) -> Option<EdgeHandle<'a>> {
        let eid = self.mesh.vertices()[self.id as usize].half_edge;
        (eid != u32::MAX).then(|| EdgeHandle::new(self.mesh, eid))
    }
}

impl<'a> EdgeHandle<'a> {
    /// The half-edge following this one around its face.
    #[inline]
    pub fn next(&self) -> EdgeHandle<'a> {
        EdgeHandle::new(self.mesh, self.mesh.half_edges()[self.id as usize].next)
    }

    /// The half-edge going in the opposite direction on the adjacent face, if any.
    pub fn twin(&self) -> Option<EdgeHandle<'a>> {
        let twin = self.mesh.half_edges()[self.id as usize].twin;
        (twin != u32::MAX).then(|| EdgeHandle::new(self.mesh, twin))
    }

    /// The vertex this half-edge starts at.
    #[inline]
    pub fn from_vertex(&self) -> VertexHandle<'a> {
        VertexHandle::new(self.mesh, self.mesh.half_edges()[self.id as usize].vertex)
    }

    /// The vertex this half-edge ends at.
    #[inline]
    pub fn to_vertex(&self) -> VertexHandle<'a> {
        self.next().from_vertex()
    }

    /// The face this half-edge belongs to.
    #[inline]
    pub fn face(&self) -> FaceHandle<'a> {
        FaceHandle::new(self.mesh, self.mesh.half_edges()[self.id as usize].face)
    }
}

impl<'a> FaceHandle<'a> {
    /// The `i`-th half-edge of this face, going from `self.vertex(i)` to `self.vertex(i + 1)`.
    ///
    /// Panics if `i >= 3`.
    pub fn edge(&self, i: usize) -> EdgeHandle<'a> {
        assert!(i < 3, "a triangle only has three edges");
        let mut edge = EdgeHandle::new(self.mesh, self.mesh.faces()[self.id as usize].half_edge);
        for _ in 0..i {
            edge = edge.next();
        }
        edge
    }

    /// The `i`-th vertex of this face.
    ///
    /// Panics if `i >= 3`.
    #[inline]
    pub fn vertex(&self, i: usize) -> VertexHandle<'a> {
        self.edge(i).from_vertex()
    }

    /// The position of the `i`-th vertex of this face, in mesh coordinates.
    #[inline]
    pub fn p(&self, i: usize) -> IntPoint {
        self.vertex(i).position()
    }

    /// The three vertices of this face.
    pub fn vertices(&self) -> [VertexHandle<'a>; 3] {
        [self.vertex(0), self.vertex(1), self.vertex(2)]
    }

    /// The three half-edges of this face.
    pub fn edges(&self) -> [EdgeHandle<'a>; 3] {
        let e0 = self.edge(0);
        let e1 = e0.next();
        [e0, e1, e1.next()]
    }

    /// The positions of the three vertices of this face, in floating-point coordinates.
    pub fn points(&self) -> [Point<Real>; 3] {
        self.vertices().map(|v| v.point())
    }
}

impl fmt::Debug for VertexHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.position();
        write!(f, "VertexHandle({}: ({}, {}, {}))", self.id, p.x, p.y, p.z)
    }
}

impl fmt::Debug for EdgeHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EdgeHandle({}: {} -> {})",
            self.id,
            self.from_vertex().id,
            self.to_vertex().id
        )
    }
}

impl fmt::Debug for FaceHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.vertices();
        write!(f, "FaceHandle({}: [{}, {}, {}])", self.id, a.id, b.id, c.id)
    }
}
