//! Read-only dependencies of the placement pipeline.
//!
//! [`DecorEnv`] bundles settings, the item catalog and the overlap oracle so
//! the placement service and episode engine can reach them without owning
//! them. Every entry is optional; absence surfaces as a typed failure on the
//! step that needed it.
mod error;
mod overlap;
mod spawner;

pub use error::EnvError;
pub use overlap::{NoOverlap, OverlapOracle};
pub use spawner::Spawner;

use crate::catalog::Catalog;
use crate::config::DecorSettings;

#[derive(Clone, Copy)]
pub struct DecorEnv<'a> {
    settings: Option<&'a DecorSettings>,
    catalog: Option<&'a Catalog>,
    overlap: Option<&'a dyn OverlapOracle>,
}

impl<'a> DecorEnv<'a> {
    pub fn new(
        settings: Option<&'a DecorSettings>,
        catalog: Option<&'a Catalog>,
        overlap: Option<&'a dyn OverlapOracle>,
    ) -> Self {
        Self {
            settings,
            catalog,
            overlap,
        }
    }

    pub fn with_all(
        settings: &'a DecorSettings,
        catalog: &'a Catalog,
        overlap: &'a dyn OverlapOracle,
    ) -> Self {
        Self::new(Some(settings), Some(catalog), Some(overlap))
    }

    pub fn empty() -> Self {
        Self {
            settings: None,
            catalog: None,
            overlap: None,
        }
    }

    /// Returns the settings, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::SettingsNotAvailable` if no settings were provided.
    pub fn settings(&self) -> Result<&'a DecorSettings, EnvError> {
        self.settings.ok_or(EnvError::SettingsNotAvailable)
    }

    /// Returns the catalog, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::CatalogNotAvailable` if no catalog was provided.
    pub fn catalog(&self) -> Result<&'a Catalog, EnvError> {
        self.catalog.ok_or(EnvError::CatalogNotAvailable)
    }

    /// Returns the overlap oracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::OverlapNotAvailable` if no oracle was provided.
    pub fn overlap(&self) -> Result<&'a dyn OverlapOracle, EnvError> {
        self.overlap.ok_or(EnvError::OverlapNotAvailable)
    }

    #[must_use]
    pub fn with_settings(mut self, settings: &'a DecorSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn with_overlap(mut self, overlap: &'a dyn OverlapOracle) -> Self {
        self.overlap = Some(overlap);
        self
    }
}

impl core::fmt::Debug for DecorEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DecorEnv")
            .field("settings", &self.settings.is_some())
            .field("catalog", &self.catalog.map(Catalog::len))
            .field("overlap", &self.overlap.is_some())
            .finish()
    }
}
