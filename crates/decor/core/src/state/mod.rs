//! Authoritative room state.
//!
//! Sockets are built once at setup and moved into [`RoomState`]. Runtime
//! layers read the state freely but mutate it only through the placement
//! service, the episode engine and the reset service.
mod room;
mod socket;

pub use room::{EpisodePhase, RoomSnapshot, RoomState};
pub use socket::{InstanceHandle, InstanceId, Socket, SocketId, SocketType, SocketTypeSet};
