//! In-memory [`decor_core::OverlapOracle`] over static and placed geometry.

use bitflags::bitflags;
use decor_content::RoomLayout;
use decor_core::{OverlapOracle, Quat, Vec3};

use super::instances::InstanceRegistry;
use super::obb::OrientedBox;

bitflags! {
    /// Set of collision layers, one bit per layer index `0..32`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct LayerMask: u32 {
        /// Layer placed decoration instances live on.
        const DECOR = 1 << 0;
        const _ = !0;
    }
}

impl LayerMask {
    /// Mask with only `layer` set; layers outside `0..32` yield the empty mask.
    pub fn layer(layer: u8) -> Self {
        Self::from_bits_retain(decor_content::room::layer_bit(layer))
    }

    pub fn includes(self, layer: u8) -> bool {
        self.intersects(Self::layer(layer))
    }
}

#[derive(Clone, Copy, Debug)]
struct Blocker {
    bounds: OrientedBox,
    layer: u8,
}

/// Overlap index over a room's blocking boxes plus the instances placed so far.
///
/// Only boxes on layers included in the blocking mask are considered; with an
/// empty mask every query answers `false`.
#[derive(Debug)]
pub struct BoxOverlapIndex {
    mask: LayerMask,
    blockers: Vec<Blocker>,
    instances: Option<(InstanceRegistry, u8)>,
}

impl BoxOverlapIndex {
    pub fn new(mask: LayerMask) -> Self {
        Self {
            mask,
            blockers: Vec::new(),
            instances: None,
        }
    }

    /// Builds the index from a loaded room layout.
    pub fn from_layout(layout: &RoomLayout) -> Self {
        let mut index = Self::new(LayerMask::from_bits_retain(layout.blocking_layers));
        for blocker in &layout.blockers {
            index.add_blocker(
                OrientedBox::new(blocker.center, blocker.half_extents, blocker.rotation),
                blocker.layer,
            );
        }
        index
    }

    pub fn add_blocker(&mut self, bounds: OrientedBox, layer: u8) {
        self.blockers.push(Blocker { bounds, layer });
    }

    #[must_use]
    pub fn with_blocker(mut self, bounds: OrientedBox, layer: u8) -> Self {
        self.add_blocker(bounds, layer);
        self
    }

    /// Makes instances recorded in `registry` block on `layer`.
    #[must_use]
    pub fn with_instances(mut self, registry: InstanceRegistry, layer: u8) -> Self {
        self.instances = Some((registry, layer));
        self
    }

    pub fn mask(&self) -> LayerMask {
        self.mask
    }

    pub fn blocker_count(&self) -> usize {
        self.blockers.len()
    }

    fn hits_blocker(&self, query: &OrientedBox) -> bool {
        self.blockers
            .iter()
            .filter(|blocker| self.mask.includes(blocker.layer))
            .any(|blocker| blocker.bounds.overlaps(query))
    }

    fn hits_instance(&self, query: &OrientedBox) -> bool {
        match &self.instances {
            Some((registry, layer)) if self.mask.includes(*layer) => {
                registry.any_overlap(query)
            }
            _ => false,
        }
    }
}

impl OverlapOracle for BoxOverlapIndex {
    fn has_overlap(&self, center: Vec3, half_extents: Vec3, rotation: Quat) -> bool {
        if self.mask.is_empty() {
            return false;
        }
        let query = OrientedBox::new(center, half_extents, rotation);
        self.hits_blocker(&query) || self.hits_instance(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decor_core::InstanceId;

    fn wall() -> OrientedBox {
        OrientedBox::new(Vec3::new(0.0, 1.0, 3.0), Vec3::new(3.0, 1.0, 0.1), Quat::IDENTITY)
    }

    #[test]
    fn empty_mask_never_overlaps() {
        let index = BoxOverlapIndex::new(LayerMask::empty()).with_blocker(wall(), 0);
        assert!(!index.has_overlap(Vec3::new(0.0, 1.0, 3.0), Vec3::ONE, Quat::IDENTITY));
    }

    #[test]
    fn only_masked_layers_block() {
        let index = BoxOverlapIndex::new(LayerMask::layer(1))
            .with_blocker(wall(), 1)
            .with_blocker(OrientedBox::new(Vec3::ZERO, Vec3::ONE, Quat::IDENTITY), 2);

        assert!(index.has_overlap(Vec3::new(0.0, 1.0, 2.5), Vec3::new(0.5, 0.5, 0.5), Quat::IDENTITY));
        assert!(!index.has_overlap(Vec3::ZERO, Vec3::new(0.5, 0.5, 0.5), Quat::IDENTITY));
    }

    #[test]
    fn recorded_instances_block_on_their_layer() {
        let registry = InstanceRegistry::default();
        registry.record(
            InstanceId(1),
            OrientedBox::new(Vec3::ZERO, Vec3::new(0.5, 0.5, 0.5), Quat::IDENTITY),
        );
        let probe = (Vec3::new(0.4, 0.0, 0.0), Vec3::new(0.5, 0.5, 0.5), Quat::IDENTITY);

        let blocking = BoxOverlapIndex::new(LayerMask::DECOR).with_instances(registry.clone(), 0);
        assert!(blocking.has_overlap(probe.0, probe.1, probe.2));

        let ignoring = BoxOverlapIndex::new(LayerMask::layer(3)).with_instances(registry.clone(), 0);
        assert!(!ignoring.has_overlap(probe.0, probe.1, probe.2));

        registry.clear();
        assert!(!blocking.has_overlap(probe.0, probe.1, probe.2));
    }
}
