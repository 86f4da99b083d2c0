//! Error types surfaced by the runtime API.
//!
//! Setup problems are reported once, when a room is built. Step-level
//! failures never appear here; they are values on the step result.
use decor_core::{SettingsError, ValidatorError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("room requires settings to be configured before building")]
    MissingSettings,

    #[error("invalid settings")]
    InvalidSettings(#[source] SettingsError),

    #[error("failed to register placement rule")]
    Validator(#[source] ValidatorError),
}
