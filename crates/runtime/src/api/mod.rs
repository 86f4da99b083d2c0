//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the builder and runner can stay focused on wiring.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{ActionProvider, ActionSpace, RandomHeuristicProvider, SkipProvider};
