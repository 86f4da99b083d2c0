use super::{PlacementRule, RuleContext, RuleResult};
use crate::env::DecorEnv;
use crate::error::PlacementFailure;

/// Requires the socket type to be in the item's allowed set (empty = any).
#[derive(Clone, Copy, Debug)]
pub struct SocketTypeRule {
    penalty: f32,
}

impl SocketTypeRule {
    pub const fn new(penalty: f32) -> Self {
        Self { penalty }
    }
}

impl PlacementRule for SocketTypeRule {
    fn name(&self) -> &'static str {
        "socket_type"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>, _env: &DecorEnv<'_>) -> RuleResult {
        let (Some(socket), Some(item)) = (ctx.socket, ctx.item) else {
            return RuleResult::fail(PlacementFailure::NullRef, self.penalty);
        };
        if item.allowed_socket_types.accepts(socket.socket_type()) {
            RuleResult::ok()
        } else {
            RuleResult::fail(PlacementFailure::SocketTypeNotAllowed, self.penalty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::*;
    use crate::state::SocketTypeSet;

    #[test]
    fn matching_or_wildcard_types_pass() {
        let socket = floor_socket();
        let item = floor_item();
        let ctx = RuleContext {
            action: &ACTION,
            socket: Some(&socket),
            item: Some(&item),
            world_box: &BOX,
        };
        let rule = SocketTypeRule::new(0.2);
        assert!(rule.evaluate(&ctx, &DecorEnv::empty()).ok);

        let wall = wall_socket();
        let mut anywhere = floor_item();
        anywhere.allowed_socket_types = SocketTypeSet::empty();
        let ctx = RuleContext {
            socket: Some(&wall),
            item: Some(&anywhere),
            ..ctx
        };
        assert!(rule.evaluate(&ctx, &DecorEnv::empty()).ok);
    }

    #[test]
    fn wrong_type_or_missing_refs_fail() {
        let wall = wall_socket();
        let item = floor_item();
        let ctx = RuleContext {
            action: &ACTION,
            socket: Some(&wall),
            item: Some(&item),
            world_box: &BOX,
        };
        let rule = SocketTypeRule::new(0.2);
        assert_eq!(
            rule.evaluate(&ctx, &DecorEnv::empty()).reason(),
            "socket_type_not_allowed"
        );

        let no_item = RuleContext { item: None, ..ctx };
        assert_eq!(rule.evaluate(&no_item, &DecorEnv::empty()).reason(), "null_ref");
    }
}
