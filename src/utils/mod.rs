//! Various unsorted geometrical and numerical operators.

pub use self::int_ops::IntVectorOps;
pub use self::point_conversion::{to_int_point, to_real_point};
pub use self::scalar_ops::{largest_axis_divide, sign};

pub mod hashmap;
mod int_ops;
mod point_conversion;
mod scalar_ops;
