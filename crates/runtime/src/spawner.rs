//! In-memory [`Spawner`] that tracks live instances and their bounds.

use decor_core::geometry::local_bounds;
use decor_core::{AssetRef, InstanceHandle, InstanceId, Quat, Spawner, Vec3};

use crate::oracle::{InstanceRegistry, OrientedBox};

/// A live instance created by [`InstanceSpawner`].
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnedInstance {
    pub id: InstanceId,
    pub asset_key: String,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Spawner that hands out sequential instance ids.
///
/// Ids keep increasing across resets so a stale id never aliases a new
/// instance. When a registry is attached, each instance's world box is
/// recorded there for later overlap queries.
#[derive(Debug, Default)]
pub struct InstanceSpawner {
    next_id: u64,
    live: Vec<SpawnedInstance>,
    registry: Option<InstanceRegistry>,
}

impl InstanceSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_registry(mut self, registry: InstanceRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn live(&self) -> &[SpawnedInstance] {
        &self.live
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn world_box(asset: &AssetRef, position: Vec3, rotation: Quat) -> Option<OrientedBox> {
        let bounds = local_bounds(asset).ok()?;
        let center = position + rotation.rotate(bounds.center.scale(asset.scale));
        let half_extents = (bounds.size * 0.5).scale(asset.scale).abs();
        Some(OrientedBox::new(center, half_extents, rotation))
    }
}

impl Spawner for InstanceSpawner {
    fn spawn(&mut self, asset: &AssetRef, position: Vec3, rotation: Quat) -> InstanceHandle {
        self.next_id += 1;
        let id = InstanceId(self.next_id);

        if let (Some(registry), Some(bounds)) =
            (&self.registry, Self::world_box(asset, position, rotation))
        {
            registry.record(id, bounds);
        }
        self.live.push(SpawnedInstance {
            id,
            asset_key: asset.key.clone(),
            position,
            rotation,
        });

        InstanceHandle::new(id)
    }

    fn clear_all(&mut self) {
        self.live.clear();
        if let Some(registry) = &self.registry {
            registry.clear();
        }
    }
}
