//! Content factory for loading a decoration setup from a data directory.

use std::path::{Path, PathBuf};

use decor_core::{Catalog, DecorSettings};

use crate::loaders::{CatalogLoader, LoadResult, RoomLoader, SettingsLoader};
use crate::room::RoomLayout;

/// Content factory that loads all decoration content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── settings.toml
/// ├── catalog.ron
/// └── rooms/
///     ├── living_room.ron
///     └── studio.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load settings from `settings.toml`.
    pub fn load_settings(&self) -> LoadResult<DecorSettings> {
        SettingsLoader::load(&self.data_dir.join("settings.toml"))
    }

    /// Load the item catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        CatalogLoader::load(&self.data_dir.join("catalog.ron"))
    }

    /// Load a room from `rooms/{room_name}.ron`.
    pub fn load_room(&self, room_name: &str) -> LoadResult<RoomLayout> {
        let path = self.data_dir.join("rooms").join(format!("{}.ron", room_name));
        RoomLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Data directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }
}
