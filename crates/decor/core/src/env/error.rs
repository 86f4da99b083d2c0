//! Environment access errors.

/// Errors raised when a required read-only dependency is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnvError {
    #[error("DecorSettings not available")]
    SettingsNotAvailable,

    #[error("Catalog not available")]
    CatalogNotAvailable,

    #[error("OverlapOracle not available")]
    OverlapNotAvailable,
}
