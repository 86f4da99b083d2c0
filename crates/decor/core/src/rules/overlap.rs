use super::{PlacementRule, RuleContext, RuleResult};
use crate::env::DecorEnv;
use crate::error::PlacementFailure;

/// Rejects boxes that intersect blocking geometry. Passes when no oracle is
/// configured.
#[derive(Clone, Copy, Debug)]
pub struct OverlapRule {
    penalty: f32,
}

impl OverlapRule {
    pub const fn new(penalty: f32) -> Self {
        Self { penalty }
    }
}

impl PlacementRule for OverlapRule {
    fn name(&self) -> &'static str {
        "overlap"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, env: &DecorEnv<'_>) -> RuleResult {
        let Ok(oracle) = env.overlap() else {
            return RuleResult::ok();
        };
        let world_box = ctx.world_box;
        if oracle.has_overlap(world_box.center, world_box.half_extents, world_box.rotation) {
            RuleResult::fail(PlacementFailure::OverlapBlocking, self.penalty)
        } else {
            RuleResult::ok()
        }
    }
}
