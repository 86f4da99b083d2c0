//! Placement geometry: vector math, poses, and world-box resolution.
mod bounds;
mod math;

pub use bounds::{
    BoundsError, GeometryResolver, LocalBounds, MIN_BOUNDS_SIZE_SQ, ResolvedGeometry, WorldBox,
    local_bounds, local_rotation,
};
pub use math::{Pose, Quat, Vec3};
