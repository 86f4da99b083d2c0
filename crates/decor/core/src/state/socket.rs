//! Placement sockets and the spawned instances they own.

use bitflags::bitflags;

use crate::geometry::Pose;

/// Surface a socket sits on.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SocketType {
    #[default]
    Floor,
    Wall,
    Corner,
    Ceiling,
}

bitflags! {
    /// Set of socket types an item may be placed on. The empty set accepts any socket.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SocketTypeSet: u8 {
        const FLOOR   = 1 << 0;
        const WALL    = 1 << 1;
        const CORNER  = 1 << 2;
        const CEILING = 1 << 3;
    }
}

impl SocketTypeSet {
    /// Returns true if an item restricted to this set may use `socket_type`.
    pub fn accepts(self, socket_type: SocketType) -> bool {
        self.is_empty() || self.contains(Self::from(socket_type))
    }
}

impl From<SocketType> for SocketTypeSet {
    fn from(socket_type: SocketType) -> Self {
        match socket_type {
            SocketType::Floor => Self::FLOOR,
            SocketType::Wall => Self::WALL,
            SocketType::Corner => Self::CORNER,
            SocketType::Ceiling => Self::CEILING,
        }
    }
}

impl FromIterator<SocketType> for SocketTypeSet {
    fn from_iter<I: IntoIterator<Item = SocketType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, ty| acc | Self::from(ty))
    }
}

/// Stable socket name (sockets are ordered by name at setup).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SocketId(pub String);

impl core::fmt::Display for SocketId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a spawned instance. Copyable; ownership lives in [`InstanceHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(pub u64);

/// Exclusive ownership token for one spawned instance.
///
/// Not `Clone`: exactly one socket holds a given handle, and dropping it
/// releases the instance.
#[derive(Debug, PartialEq, Eq)]
pub struct InstanceHandle {
    id: InstanceId,
}

impl InstanceHandle {
    pub fn new(id: InstanceId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }
}

/// Fixed placement slot in the room.
#[derive(Debug)]
pub struct Socket {
    id: SocketId,
    socket_type: SocketType,
    pose: Pose,
    corridor_critical: bool,
    instance: Option<InstanceHandle>,
}

impl Socket {
    pub fn new(id: impl Into<String>, socket_type: SocketType, pose: Pose) -> Self {
        Self {
            id: SocketId(id.into()),
            socket_type,
            pose,
            corridor_critical: false,
            instance: None,
        }
    }

    /// Marks the socket as blocking a corridor or doorway (builder pattern).
    #[must_use]
    pub fn with_corridor_critical(mut self, corridor_critical: bool) -> Self {
        self.corridor_critical = corridor_critical;
        self
    }

    pub fn id(&self) -> &SocketId {
        &self.id
    }

    pub fn socket_type(&self) -> SocketType {
        self.socket_type
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn is_corridor_critical(&self) -> bool {
        self.corridor_critical
    }

    pub fn is_occupied(&self) -> bool {
        self.instance.is_some()
    }

    pub fn instance_id(&self) -> Option<InstanceId> {
        self.instance.as_ref().map(InstanceHandle::id)
    }

    /// Takes ownership of `instance`, returning any handle previously held.
    pub(crate) fn occupy(&mut self, instance: InstanceHandle) -> Option<InstanceHandle> {
        self.instance.replace(instance)
    }

    /// Releases the owned instance and clears occupancy.
    pub fn clear(&mut self) -> Option<InstanceHandle> {
        self.instance.take()
    }
}
