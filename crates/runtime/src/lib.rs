//! Runtime wiring for the room-decoration engine.
//!
//! This crate supplies the concrete adapters `decor-core` leaves abstract and
//! assembles them into a runtime an agent can drive:
//! - [`oracle`] hosts the box overlap index over blocking geometry
//! - [`spawner`] is the in-memory instance spawner
//! - [`runtime`] hosts [`DecorRuntime`] and its [`RoomBuilder`]
//! - [`api`] exposes errors and action providers
//! - [`runner`] plays whole episodes and summarizes them
pub mod api;
pub mod oracle;
pub mod runner;
pub mod runtime;
pub mod spawner;

pub use api::{
    ActionProvider, ActionSpace, RandomHeuristicProvider, Result, RuntimeError, SkipProvider,
};
pub use oracle::{BoxOverlapIndex, InstanceRegistry, LayerMask, OrientedBox};
pub use runner::{EpisodeRunner, EpisodeSummary};
pub use runtime::{DecorRuntime, EpisodeProgress, RoomBuilder};
pub use spawner::{InstanceSpawner, SpawnedInstance};
