//! Transactional placement: resolve geometry, validate, then commit.
//!
//! State is mutated if and only if the returned attempt reports success.
//! Every failure path returns before the first write.

use crate::action::PlaceAction;
use crate::catalog::clamp_index;
use crate::env::{DecorEnv, Spawner};
use crate::error::PlacementFailure;
use crate::geometry::GeometryResolver;
use crate::rules::{CompositeValidator, RuleContext};
use crate::state::{InstanceId, RoomState};

/// Result of one placement try. Transient; consumed by the episode engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementAttempt {
    pub success: bool,
    pub failure: Option<PlacementFailure>,
    /// Rule penalty attached to the failure (zero on success).
    pub penalty: f32,
    /// Instance now owned by the socket (success only).
    pub spawned: Option<InstanceId>,
    /// Resolved catalog index, when an item was resolved.
    pub item_index: Option<usize>,
    /// Resolved socket index, when a socket was resolved.
    pub socket_index: Option<usize>,
}

impl PlacementAttempt {
    fn failed(failure: PlacementFailure, penalty: f32) -> Self {
        Self {
            success: false,
            failure: Some(failure),
            penalty,
            spawned: None,
            item_index: None,
            socket_index: None,
        }
    }

    fn at(mut self, socket_index: usize, item_index: usize) -> Self {
        self.socket_index = Some(socket_index);
        self.item_index = Some(item_index);
        self
    }

    /// Reason code, empty on success.
    pub fn reason(&self) -> &'static str {
        self.failure.map_or("", |failure| failure.reason())
    }
}

/// Orchestrates bounds resolution, validation and the commit of one placement.
pub struct PlacementService<'v> {
    validator: &'v CompositeValidator,
}

impl<'v> PlacementService<'v> {
    pub fn new(validator: &'v CompositeValidator) -> Self {
        Self { validator }
    }

    pub fn try_place(
        &self,
        state: &mut RoomState,
        spawner: &mut dyn Spawner,
        env: &DecorEnv<'_>,
        action: &PlaceAction,
    ) -> PlacementAttempt {
        let Ok(settings) = env.settings() else {
            return PlacementAttempt::failed(PlacementFailure::MissingDependencies, 0.0);
        };
        if state.remaining() == 0 {
            return PlacementAttempt::failed(PlacementFailure::NoBudget, 0.0);
        }
        let Some(socket_index) = clamp_index(action.socket_index, state.socket_count()) else {
            return PlacementAttempt::failed(PlacementFailure::NoSockets, 0.0);
        };
        let Some((item_index, item)) = env.catalog().ok().and_then(|catalog| {
            let index = catalog.clamp_index(action.item_index)?;
            Some((index, &catalog.items()[index]))
        }) else {
            return PlacementAttempt::failed(PlacementFailure::NoItems, 0.0);
        };

        let penalty = settings.rule_penalty;
        let (Some(socket), Some(asset)) = (state.socket(socket_index), item.asset.as_ref()) else {
            return PlacementAttempt::failed(PlacementFailure::NullRef, penalty)
                .at(socket_index, item_index);
        };

        let resolver = GeometryResolver::new(settings.overlap_shrink);
        let Ok(geometry) = resolver.resolve(
            item,
            asset,
            action.rotation_index,
            settings.rotation_count,
            socket.pose(),
        ) else {
            return PlacementAttempt::failed(PlacementFailure::MissingBounds, penalty)
                .at(socket_index, item_index);
        };

        let ctx = RuleContext {
            action,
            socket: Some(socket),
            item: Some(item),
            world_box: &geometry.world_box,
        };
        let verdict = self.validator.validate(&ctx, env);
        if let Some(failure) = verdict.failure {
            return PlacementAttempt::failed(failure, verdict.penalty).at(socket_index, item_index);
        }

        // Commit: everything below runs only for a validated candidate.
        let handle = spawner.spawn(asset, geometry.pose.position, geometry.pose.rotation);
        let spawned = handle.id();
        state.occupy_socket(socket_index, handle);
        state.consume_placement();
        state.register_placement(item);

        PlacementAttempt {
            success: true,
            failure: None,
            penalty: 0.0,
            spawned: Some(spawned),
            item_index: Some(item_index),
            socket_index: Some(socket_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AssetRef, Catalog, DecorCategory, ItemDefinition};
    use crate::config::DecorSettings;
    use crate::geometry::{LocalBounds, Pose, Quat, Vec3};
    use crate::state::{InstanceHandle, Socket, SocketType, SocketTypeSet};

    #[derive(Default)]
    struct CountingSpawner {
        next: u64,
        spawned: Vec<(String, Vec3, Quat)>,
    }

    impl Spawner for CountingSpawner {
        fn spawn(&mut self, asset: &AssetRef, position: Vec3, rotation: Quat) -> InstanceHandle {
            self.next += 1;
            self.spawned.push((asset.key.clone(), position, rotation));
            InstanceHandle::new(InstanceId(self.next))
        }

        fn clear_all(&mut self) {
            self.spawned.clear();
        }
    }

    fn asset(key: &str) -> AssetRef {
        AssetRef::new(key).with_placement_bounds(LocalBounds::new(Vec3::ZERO, Vec3::ONE))
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ItemDefinition::new("chair", DecorCategory::Furniture, SocketTypeSet::FLOOR)
                .with_asset(asset("chair")),
            ItemDefinition::new("ghost", DecorCategory::Prop, SocketTypeSet::empty()),
            ItemDefinition::new("flat", DecorCategory::Prop, SocketTypeSet::empty()).with_asset(
                AssetRef::new("flat")
                    .with_collider(LocalBounds::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0))),
            ),
        ])
    }

    fn room(budget: u32) -> RoomState {
        RoomState::new(
            vec![
                Socket::new("a", SocketType::Floor, Pose::from_yaw(Vec3::new(1.0, 0.0, 2.0), 90.0)),
                Socket::new("b", SocketType::Wall, Pose::default()),
            ],
            budget,
        )
    }

    #[test]
    fn success_spawns_at_socket_pose_and_commits() {
        let settings = DecorSettings::default();
        let catalog = catalog();
        let validator = CompositeValidator::standard(&settings);
        let env = DecorEnv::empty()
            .with_settings(&settings)
            .with_catalog(&catalog);
        let mut state = room(3);
        let mut spawner = CountingSpawner::default();

        let attempt = PlacementService::new(&validator).try_place(
            &mut state,
            &mut spawner,
            &env,
            &PlaceAction::place(0, 0, 0),
        );

        assert!(attempt.success, "{attempt:?}");
        assert_eq!(attempt.penalty, 0.0);
        assert_eq!(attempt.spawned, Some(InstanceId(1)));
        assert_eq!(state.socket(0).and_then(Socket::instance_id), Some(InstanceId(1)));
        assert_eq!(state.remaining(), 2);
        assert_eq!(state.item_count("chair"), 1);
        assert_eq!(state.category_count(DecorCategory::Furniture), 1);

        let (key, position, rotation) = &spawner.spawned[0];
        assert_eq!(key, "chair");
        assert_eq!(*position, Vec3::new(1.0, 0.0, 2.0));
        assert!(rotation.approx_eq(Quat::from_yaw_degrees(90.0), 1e-5));
    }

    #[test]
    fn failures_leave_state_untouched() {
        let settings = DecorSettings::default();
        let catalog = catalog();
        let validator = CompositeValidator::standard(&settings);
        let env = DecorEnv::empty()
            .with_settings(&settings)
            .with_catalog(&catalog);
        let service = PlacementService::new(&validator);
        let mut state = room(3);
        let mut spawner = CountingSpawner::default();

        let cases = [
            (PlaceAction::place(1, 0, 0), "socket_type_not_allowed"),
            (PlaceAction::place(0, 1, 0), "null_ref"),
            (PlaceAction::place(0, 2, 0), "missing_bounds"),
        ];
        for (action, reason) in cases {
            let before = state.snapshot();
            let attempt = service.try_place(&mut state, &mut spawner, &env, &action);
            assert!(!attempt.success);
            assert_eq!(attempt.reason(), reason);
            assert_eq!(attempt.penalty, settings.rule_penalty);
            assert_eq!(state.snapshot(), before);
        }
        assert!(spawner.spawned.is_empty());
    }

    #[test]
    fn preconditions_fail_in_order_without_penalty() {
        let settings = DecorSettings::default();
        let catalog = catalog();
        let empty_catalog = Catalog::default();
        let validator = CompositeValidator::standard(&settings);
        let service = PlacementService::new(&validator);
        let mut spawner = CountingSpawner::default();
        let action = PlaceAction::place(0, 0, 0);

        let mut state = room(3);
        let attempt = service.try_place(&mut state, &mut spawner, &DecorEnv::empty(), &action);
        assert_eq!(attempt.reason(), "missing_dependencies");

        let mut spent = room(0);
        let env = DecorEnv::empty()
            .with_settings(&settings)
            .with_catalog(&catalog);
        assert_eq!(
            service.try_place(&mut spent, &mut spawner, &env, &action).reason(),
            "no_budget"
        );

        let mut bare = RoomState::new(Vec::new(), 3);
        assert_eq!(
            service.try_place(&mut bare, &mut spawner, &env, &action).reason(),
            "no_sockets"
        );

        let env = DecorEnv::empty()
            .with_settings(&settings)
            .with_catalog(&empty_catalog);
        let attempt = service.try_place(&mut state, &mut spawner, &env, &action);
        assert_eq!(attempt.reason(), "no_items");
        assert_eq!(attempt.penalty, 0.0);
    }

    #[test]
    fn out_of_range_indices_are_clamped() {
        let settings = DecorSettings::default();
        let catalog = catalog();
        let validator = CompositeValidator::standard(&settings);
        let env = DecorEnv::empty()
            .with_settings(&settings)
            .with_catalog(&catalog);
        let mut state = room(3);
        let mut spawner = CountingSpawner::default();

        let attempt = PlacementService::new(&validator).try_place(
            &mut state,
            &mut spawner,
            &env,
            &PlaceAction::place(-40, i32::MIN, i32::MAX),
        );
        assert!(attempt.success);
        assert_eq!(attempt.socket_index, Some(0));
        assert_eq!(attempt.item_index, Some(0));
    }
}
