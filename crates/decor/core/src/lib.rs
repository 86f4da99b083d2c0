//! Deterministic room-decoration placement and scoring engine.
//!
//! `decor-core` defines the canonical placement rules, the transactional
//! placement service, reward shaping and the episode state machine. It is
//! pure: no I/O, no logging, no global state. Runtime crates supply the
//! spawner and overlap oracle through the traits in [`env`] and drive
//! episodes through [`engine::DecorEngine`].
pub mod action;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod observation;
pub mod placement;
pub mod rules;
pub mod scoring;
pub mod state;

pub use action::{ActionParser, PlaceAction, PlaceOp};
pub use catalog::{AssetRef, Catalog, DecorCategory, ItemDefinition};
pub use config::DecorSettings;
pub use engine::{DecorEngine, StepResult, Termination, reset_episode};
pub use env::{DecorEnv, EnvError, NoOverlap, OverlapOracle, Spawner};
pub use error::{FailureClass, PlacementFailure, SettingsError};
pub use geometry::{GeometryResolver, LocalBounds, Pose, Quat, Vec3, WorldBox};
pub use observation::ObservationEncoder;
pub use placement::{PlacementAttempt, PlacementService};
pub use rules::{
    CompositeValidator, OccupancyRule, OverlapRule, PlacementRule, RuleContext, RuleResult,
    SocketTypeRule, ValidatorError,
};
pub use scoring::{ScoringPolicy, SimpleScoringPolicy};
pub use state::{
    EpisodePhase, InstanceHandle, InstanceId, RoomSnapshot, RoomState, Socket, SocketId,
    SocketType, SocketTypeSet,
};
