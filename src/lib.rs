/*!
trimeld
========

**trimeld** computes the intersection of two triangles of a half-edge mesh,
classifies the outcome, and snaps the resulting segment onto existing mesh
vertices so that a mesh-boolean pass can re-triangulate the surfaces without
creating near-duplicate geometry.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

extern crate alloc;

pub extern crate nalgebra as na;

pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The point type used for mesh-resident coordinates, in microns.
    pub type IntPoint = Point3<i32>;

    /// The difference between two [`IntPoint`]s.
    pub type IntVector = Vector3<i32>;
}
