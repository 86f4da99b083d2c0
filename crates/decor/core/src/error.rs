//! Failure taxonomy for placement steps and setup-time errors.
//!
//! Step-level failures are ordinary values: they travel inside
//! [`crate::placement::PlacementAttempt`] and [`crate::engine::StepResult`]
//! and never abort a step. Each carries a stable reason code used by logs
//! and reward bookkeeping.

/// Coarse grouping of placement failures for step logs and episode summaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureClass {
    /// Session is missing settings, sockets or items.
    ///
    /// Non-fatal; carries no rule penalty.
    ConfigurationMissing,

    /// Item asset or bounds are absent.
    ReferenceMissing,

    /// A placement rule rejected the attempt.
    ///
    /// Examples: socket occupied, wrong socket type, blocking overlap
    RuleViolation,

    /// The placement budget is spent. Expected near episode end.
    BudgetExhausted,
}

impl FailureClass {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigurationMissing => "configuration_missing",
            Self::ReferenceMissing => "reference_missing",
            Self::RuleViolation => "rule_violation",
            Self::BudgetExhausted => "budget_exhausted",
        }
    }
}

/// Why a placement attempt (or step) did not succeed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlacementFailure {
    #[error("placement settings are not configured")]
    MissingDependencies,

    #[error("placement budget exhausted")]
    NoBudget,

    #[error("room has no sockets")]
    NoSockets,

    #[error("catalog has no items")]
    NoItems,

    #[error("socket, item or item asset is missing")]
    NullRef,

    #[error("item asset has no usable bounds")]
    MissingBounds,

    #[error("socket is missing")]
    SocketNull,

    #[error("socket is already occupied")]
    SocketOccupied,

    #[error("item is not allowed on this socket type")]
    SocketTypeNotAllowed,

    #[error("placement overlaps blocking geometry")]
    OverlapBlocking,

    #[error("episode already ended")]
    EpisodeEnded,
}

impl PlacementFailure {
    /// Stable reason code.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MissingDependencies => "missing_dependencies",
            Self::NoBudget => "no_budget",
            Self::NoSockets => "no_sockets",
            Self::NoItems => "no_items",
            Self::NullRef => "null_ref",
            Self::MissingBounds => "missing_bounds",
            Self::SocketNull => "socket_null",
            Self::SocketOccupied => "socket_occupied",
            Self::SocketTypeNotAllowed => "socket_type_not_allowed",
            Self::OverlapBlocking => "overlap_blocking",
            Self::EpisodeEnded => "episode_ended",
        }
    }

    pub const fn class(&self) -> FailureClass {
        match self {
            Self::MissingDependencies | Self::NoSockets | Self::NoItems | Self::EpisodeEnded => {
                FailureClass::ConfigurationMissing
            }
            Self::NoBudget => FailureClass::BudgetExhausted,
            Self::NullRef | Self::MissingBounds | Self::SocketNull => {
                FailureClass::ReferenceMissing
            }
            Self::SocketOccupied | Self::SocketTypeNotAllowed | Self::OverlapBlocking => {
                FailureClass::RuleViolation
            }
        }
    }
}

/// Setup-time settings problems. Reported once, before any episode runs.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("rotation_count must be at least 1 (got {0})")]
    RotationCount(i32),

    #[error("op_count must cover Place/Skip/End (got {0})")]
    OpCount(i32),

    #[error("max_sockets_for_obs must be at least 1")]
    ZeroObservationSockets,

    #[error("fail_streak_limit must be at least 1")]
    ZeroFailStreakLimit,

    #[error("overlap_shrink must be in (0, 1] (got {0})")]
    OverlapShrink(f32),

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}
