/// The default radius, in microns, under which an intersection point is snapped onto an
/// existing vertex.
pub const MELD_DISTANCE: i32 = 30;

/// Tolerances used by [`intersect_with_tolerances`](super::intersect_with_tolerances).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntersectionTolerances {
    /// Maximum distance, in mesh units, between a computed point and an existing vertex for the
    /// point to be replaced by that vertex.
    ///
    /// Two segment endpoints closer than this distance are also considered coincident.
    pub meld_distance: i32,
}

impl Default for IntersectionTolerances {
    fn default() -> Self {
        Self {
            meld_distance: MELD_DISTANCE,
        }
    }
}
