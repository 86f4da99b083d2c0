//! Shared record of placed instance bounds.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use decor_core::InstanceId;

use super::obb::OrientedBox;

/// Cloneable handle to the instance boxes written by the spawner and read by
/// the overlap index.
#[derive(Clone, Debug, Default)]
pub struct InstanceRegistry {
    inner: Arc<RwLock<Vec<(InstanceId, OrientedBox)>>>,
}

impl InstanceRegistry {
    fn read(&self) -> RwLockReadGuard<'_, Vec<(InstanceId, OrientedBox)>> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<(InstanceId, OrientedBox)>> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(&self, id: InstanceId, bounds: OrientedBox) {
        self.write().push((id, bounds));
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn bounds_of(&self, id: InstanceId) -> Option<OrientedBox> {
        self.read()
            .iter()
            .find(|(recorded, _)| *recorded == id)
            .map(|(_, bounds)| *bounds)
    }

    pub(crate) fn any_overlap(&self, query: &OrientedBox) -> bool {
        self.read().iter().any(|(_, bounds)| bounds.overlaps(query))
    }
}
