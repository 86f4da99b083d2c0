use crate::geometry::{Quat, Vec3};

/// Spatial query against pre-populated blocking geometry.
///
/// Queries are read-only and side-effect free. An oracle configured with no
/// blocking layers must always answer `false`.
pub trait OverlapOracle: Send + Sync {
    /// Returns true if the oriented box intersects any blocking geometry.
    fn has_overlap(&self, center: Vec3, half_extents: Vec3, rotation: Quat) -> bool;
}

/// Oracle that never reports an overlap.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOverlap;

impl OverlapOracle for NoOverlap {
    fn has_overlap(&self, _center: Vec3, _half_extents: Vec3, _rotation: Quat) -> bool {
        false
    }
}
