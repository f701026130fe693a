use crate::math::IntVector;

/// Length queries on integer vectors that cannot overflow for coordinates fitting in an `i32`.
pub trait IntVectorOps {
    /// The squared length of this vector, computed with 64-bit integers.
    fn squared_length(&self) -> i64;

    /// Returns `true` if the length of this vector is smaller than or equal to `len`.
    ///
    /// Components larger than `len` reject the vector before any multiplication is done.
    fn test_length(&self, len: i32) -> bool;
}

impl IntVectorOps for IntVector {
    fn squared_length(&self) -> i64 {
        self.iter().map(|c| i64::from(*c) * i64::from(*c)).sum()
    }

    fn test_length(&self, len: i32) -> bool {
        if self.iter().any(|c| *c > len || *c < -len) {
            return false;
        }

        self.squared_length() <= i64::from(len) * i64::from(len)
    }
}
