//! Placement rules and their short-circuiting composition.
//!
//! Each rule is an independent, side-effect free predicate over one
//! placement candidate. [`CompositeValidator`] runs them in declared order
//! and reports the first failure.
mod occupancy;
mod overlap;
mod socket_type;
mod validator;

pub use occupancy::OccupancyRule;
pub use overlap::OverlapRule;
pub use socket_type::SocketTypeRule;
pub use validator::{CompositeValidator, ValidatorError};

use crate::action::PlaceAction;
use crate::catalog::ItemDefinition;
use crate::env::DecorEnv;
use crate::error::PlacementFailure;
use crate::geometry::WorldBox;
use crate::state::Socket;

/// Outcome of one rule evaluation. Never retained past the step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuleResult {
    pub ok: bool,
    pub penalty: f32,
    pub failure: Option<PlacementFailure>,
}

impl RuleResult {
    pub const fn ok() -> Self {
        Self {
            ok: true,
            penalty: 0.0,
            failure: None,
        }
    }

    pub const fn fail(failure: PlacementFailure, penalty: f32) -> Self {
        Self {
            ok: false,
            penalty,
            failure: Some(failure),
        }
    }

    /// Reason code, empty for a pass.
    pub fn reason(&self) -> &'static str {
        self.failure.map_or("", |failure| failure.reason())
    }
}

/// Candidate handed to every rule.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub action: &'a PlaceAction,
    pub socket: Option<&'a Socket>,
    pub item: Option<&'a ItemDefinition>,
    pub world_box: &'a WorldBox,
}

/// Single placement predicate.
pub trait PlacementRule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &RuleContext<'_>, env: &DecorEnv<'_>) -> RuleResult;
}
