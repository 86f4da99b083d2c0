//! Content selection shared by every command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use decor_content::{CatalogLoader, ContentFactory, RoomLayout, RoomLoader, SettingsLoader};
use decor_core::{Catalog, DecorSettings};
use decor_runtime::DecorRuntime;

/// Where to read settings, catalog and room from.
#[derive(Args, Debug, Clone)]
pub struct ContentArgs {
    /// Data directory (defaults to the bundled content)
    #[arg(long, env = "DECOR_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Catalog RON file (defaults to `<data-dir>/catalog.ron`)
    #[arg(long, env = "DECOR_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Settings TOML file (defaults to `<data-dir>/settings.toml`)
    #[arg(long, env = "DECOR_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Room name under `<data-dir>/rooms/`, or a path to a room RON file
    #[arg(long, env = "DECOR_ROOM", default_value = "living_room")]
    pub room: String,
}

/// Loaded inputs for one room.
pub struct Content {
    pub settings: DecorSettings,
    pub catalog: Catalog,
    pub layout: RoomLayout,
}

impl ContentArgs {
    fn factory(&self) -> ContentFactory {
        self.data_dir
            .as_ref()
            .map_or_else(ContentFactory::bundled, ContentFactory::new)
    }

    pub fn load(&self) -> Result<Content> {
        let factory = self.factory();

        let settings = match &self.settings {
            Some(path) => SettingsLoader::load(path),
            None => factory.load_settings(),
        }
        .context("Failed to load settings")?;

        let catalog = match &self.catalog {
            Some(path) => CatalogLoader::load(path),
            None => factory.load_catalog(),
        }
        .context("Failed to load catalog")?;

        let room_path = Path::new(&self.room);
        let layout = if room_path.is_file() {
            RoomLoader::load(room_path)
        } else {
            factory.load_room(&self.room)
        }
        .with_context(|| format!("Failed to load room '{}'", self.room))?;

        tracing::debug!(
            data_dir = %factory.data_dir().display(),
            room = %self.room,
            "content loaded"
        );
        Ok(Content {
            settings,
            catalog,
            layout,
        })
    }
}

impl Content {
    pub fn into_runtime(self) -> Result<DecorRuntime> {
        DecorRuntime::builder()
            .settings(self.settings)
            .catalog(self.catalog)
            .layout(self.layout)
            .build()
            .context("Failed to build room runtime")
    }
}
