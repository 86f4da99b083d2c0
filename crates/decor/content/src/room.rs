//! Loaded room layout.

use decor_core::{Quat, Socket, Vec3};

/// Static box of room geometry that blocks placements (walls, doors, fixtures).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockingBox {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub rotation: Quat,
    /// Layer index in `0..32`.
    pub layer: u8,
}

/// Everything a room contributes to an episode.
#[derive(Debug, Default)]
pub struct RoomLayout {
    /// Sockets in stable name order.
    pub sockets: Vec<Socket>,
    /// Point socket distances are measured from, usually the door.
    pub reference: Option<Vec3>,
    pub blockers: Vec<BlockingBox>,
    /// Bit `n` set means boxes on layer `n` block placements.
    pub blocking_layers: u32,
}

impl RoomLayout {
    pub fn socket_count(&self) -> usize {
        self.sockets.len()
    }

    /// Returns the blockers whose layer is part of the blocking mask.
    pub fn active_blockers(&self) -> impl Iterator<Item = &BlockingBox> {
        self.blockers
            .iter()
            .filter(|blocker| layer_bit(blocker.layer) & self.blocking_layers != 0)
    }
}

/// Mask bit for `layer`; layers outside `0..32` map to no bit.
pub fn layer_bit(layer: u8) -> u32 {
    1u32.checked_shl(u32::from(layer)).unwrap_or(0)
}
