//! Data-driven content definitions and loaders.
//!
//! This crate reads the static inputs of a decoration episode from data files:
//! - Item catalogs (RON)
//! - Room layouts: sockets, door reference point and blocking geometry (RON)
//! - Engine settings (TOML)
//!
//! Content is consumed by the runtime when it builds a room and never appears
//! in room state.

pub mod room;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use room::{BlockingBox, RoomLayout};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ContentFactory, LoadResult, RoomLoader, SettingsLoader};
