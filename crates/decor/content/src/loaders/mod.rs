//! Content loaders for reading decoration data from files.
//!
//! Catalogs and room layouts are RON; settings are TOML.

pub mod catalog;
pub mod factory;
pub mod room;
pub mod settings;

pub use catalog::CatalogLoader;
pub use factory::ContentFactory;
pub use room::RoomLoader;
pub use settings::SettingsLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
