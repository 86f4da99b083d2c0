use super::{PlacementRule, RuleContext, RuleResult};
use crate::env::DecorEnv;
use crate::error::PlacementFailure;

/// Rejects sockets that already hold an instance.
#[derive(Clone, Copy, Debug)]
pub struct OccupancyRule {
    penalty: f32,
}

impl OccupancyRule {
    pub const fn new(penalty: f32) -> Self {
        Self { penalty }
    }
}

impl PlacementRule for OccupancyRule {
    fn name(&self) -> &'static str {
        "occupancy"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, _env: &DecorEnv<'_>) -> RuleResult {
        match ctx.socket {
            None => RuleResult::fail(PlacementFailure::SocketNull, self.penalty),
            Some(socket) if socket.is_occupied() => {
                RuleResult::fail(PlacementFailure::SocketOccupied, self.penalty)
            }
            Some(_) => RuleResult::ok(),
        }
    }
}
