//! Placement pose and world-box resolution for a catalog item at a socket.

use super::math::{Pose, Quat, Vec3};
use crate::catalog::{AssetRef, ItemDefinition};

/// Squared-magnitude threshold below which an authored size is degenerate.
pub const MIN_BOUNDS_SIZE_SQ: f32 = 1e-4;

/// Authored local-space box: center offset and full size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalBounds {
    pub center: Vec3,
    pub size: Vec3,
}

impl LocalBounds {
    pub const fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    fn is_degenerate(&self) -> bool {
        !self.size.is_finite() || self.size.length_squared() <= MIN_BOUNDS_SIZE_SQ
    }
}

impl Default for LocalBounds {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ONE)
    }
}

/// Oriented box in world space, as handed to the overlap oracle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBox {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub rotation: Quat,
}

/// Fully resolved geometry for one placement attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedGeometry {
    /// Pose the instance is spawned at.
    pub pose: Pose,
    /// Box used for overlap queries.
    pub world_box: WorldBox,
}

/// Reasons geometry resolution can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    #[error("asset carries neither placement bounds nor a collider")]
    Missing,

    #[error("authored bounds size is degenerate")]
    Degenerate,
}

/// Computes the item-local yaw for a rotation index.
///
/// The index is clamped into `[0, rotation_count - 1]`; it is never wrapped.
pub fn local_rotation(item: &ItemDefinition, rotation_index: i32, rotation_count: i32) -> Quat {
    if !item.allow_rotate_y || rotation_count <= 1 {
        return Quat::IDENTITY;
    }
    let index = rotation_index.clamp(0, rotation_count - 1);
    let step = 360.0 / rotation_count as f32;
    Quat::from_yaw_degrees(index as f32 * step)
}

/// Picks the authored bounds for an asset: the placement-bounds annotation
/// wins over the collider.
pub fn local_bounds(asset: &AssetRef) -> Result<LocalBounds, BoundsError> {
    let bounds = asset
        .placement_bounds
        .or(asset.collider)
        .ok_or(BoundsError::Missing)?;
    if bounds.is_degenerate() {
        return Err(BoundsError::Degenerate);
    }
    Ok(bounds)
}

/// Resolves spawn pose and overlap box for `item` at `socket_pose`.
#[derive(Clone, Copy, Debug)]
pub struct GeometryResolver {
    shrink: f32,
}

impl GeometryResolver {
    pub const fn new(shrink: f32) -> Self {
        Self { shrink }
    }

    pub fn resolve(
        &self,
        item: &ItemDefinition,
        asset: &AssetRef,
        rotation_index: i32,
        rotation_count: i32,
        socket_pose: &Pose,
    ) -> Result<ResolvedGeometry, BoundsError> {
        let local = local_rotation(item, rotation_index, rotation_count);
        let rotation = socket_pose.rotation * local;
        let position = socket_pose.position;

        let bounds = local_bounds(asset)?;
        let scale = asset.scale;
        let center = position + rotation.rotate(bounds.center.scale(scale));
        let half_extents = (bounds.size * 0.5).scale(scale).abs() * self.shrink;

        Ok(ResolvedGeometry {
            pose: Pose::new(position, rotation),
            world_box: WorldBox {
                center,
                half_extents,
                rotation,
            },
        })
    }
}
