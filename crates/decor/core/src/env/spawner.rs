use crate::catalog::AssetRef;
use crate::geometry::{Quat, Vec3};
use crate::state::InstanceHandle;

/// Creates and destroys placed instances.
///
/// Ownership of every spawned instance passes to the caller through the
/// returned [`InstanceHandle`].
pub trait Spawner {
    fn spawn(&mut self, asset: &AssetRef, position: Vec3, rotation: Quat) -> InstanceHandle;

    /// Destroys every instance this spawner has created.
    fn clear_all(&mut self);
}
