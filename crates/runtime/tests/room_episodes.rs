use decor_content::ContentFactory;
use decor_core::{
    AssetRef, Catalog, DecorCategory, DecorSettings, ItemDefinition, LocalBounds, PlaceOp, Pose,
    Socket, SocketType, SocketTypeSet, Termination, Vec3,
};
use decor_runtime::{
    ActionProvider, ActionSpace, BoxOverlapIndex, DecorRuntime, EpisodeRunner, LayerMask,
    RandomHeuristicProvider, SkipProvider,
};

const PLACE: i32 = PlaceOp::Place as i32;
const END: i32 = PlaceOp::End as i32;

struct FirstSlotProvider;

impl ActionProvider for FirstSlotProvider {
    fn provide_action(&mut self, _space: &ActionSpace) -> [i32; 4] {
        [0, 0, 0, PLACE]
    }
}

fn living_room() -> DecorRuntime {
    let factory = ContentFactory::bundled();
    DecorRuntime::builder()
        .settings(factory.load_settings().unwrap())
        .catalog(factory.load_catalog().unwrap())
        .layout(factory.load_room("living_room").unwrap())
        .build()
        .unwrap()
}

fn crate_item() -> ItemDefinition {
    ItemDefinition::new("crate", DecorCategory::Prop, SocketTypeSet::FLOOR).with_asset(
        AssetRef::new("props/crate")
            .with_placement_bounds(LocalBounds::new(Vec3::new(0.0, 0.5, 0.0), Vec3::ONE)),
    )
}

fn tight_room(mask: LayerMask) -> DecorRuntime {
    let sockets = vec![
        Socket::new("a", SocketType::Floor, Pose::default()),
        Socket::new("b", SocketType::Floor, Pose::from_yaw(Vec3::new(0.5, 0.0, 0.0), 0.0)),
        Socket::new("c", SocketType::Floor, Pose::from_yaw(Vec3::new(4.0, 0.0, 0.0), 0.0)),
    ];
    DecorRuntime::builder()
        .settings(DecorSettings::default())
        .catalog(Catalog::new(vec![crate_item()]))
        .sockets(sockets)
        .overlap(BoxOverlapIndex::new(mask))
        .build()
        .unwrap()
}

#[test]
fn door_clearance_blocks_entry_socket() {
    let mut runtime = living_room();
    runtime.begin_episode();

    // floor_entry (4) sits inside the door swing; armchair is item 3.
    let blocked = runtime.act(&[4, 3, 0, PLACE]);
    assert_eq!(blocked.reason(), "overlap_blocking");
    assert!(!runtime.state().socket(4).unwrap().is_occupied());

    // floor_window (5) is clear of the radiator.
    let placed = runtime.act(&[5, 3, 0, PLACE]);
    assert!(placed.success, "{:?}", placed.failure);
    assert_eq!(runtime.spawner().live_count(), 1);
}

#[test]
fn placed_instances_block_neighbours_until_reset() {
    let mut runtime = tight_room(LayerMask::DECOR);
    runtime.begin_episode();

    assert!(runtime.act(&[0, 0, 0, PLACE]).success);
    assert_eq!(runtime.act(&[1, 0, 0, PLACE]).reason(), "overlap_blocking");
    assert!(runtime.act(&[2, 0, 0, PLACE]).success);

    runtime.begin_episode();
    assert!(runtime.act(&[1, 0, 0, PLACE]).success);
}

#[test]
fn empty_blocking_mask_disables_overlap() {
    let mut runtime = tight_room(LayerMask::empty());
    runtime.begin_episode();

    assert!(runtime.act(&[0, 0, 0, PLACE]).success);
    assert!(runtime.act(&[1, 0, 0, PLACE]).success);
}

#[test]
fn runtime_without_catalog_reports_no_items() {
    let settings = DecorSettings::default();
    let mut runtime = DecorRuntime::builder()
        .settings(settings.clone())
        .sockets(vec![Socket::new("a", SocketType::Floor, Pose::default())])
        .build()
        .unwrap();
    runtime.begin_episode();

    let result = runtime.act(&[0, 0, 0, PLACE]);
    assert_eq!(result.reason(), "no_items");
    assert!((result.reward_delta - (settings.step_penalty + settings.fail_penalty)).abs() < 1e-6);
    assert_eq!(runtime.state().fail_streak(), 1);
}

#[test]
fn summary_groups_failures_by_class() {
    let settings = DecorSettings::default();
    let limit = settings.fail_streak_limit;
    let mut runtime = DecorRuntime::builder()
        .settings(settings)
        .sockets(vec![Socket::new("a", SocketType::Floor, Pose::default())])
        .build()
        .unwrap();

    let summary = EpisodeRunner::default().run(&mut runtime, &mut FirstSlotProvider);

    assert_eq!(summary.termination, Some(Termination::FailStreak));
    assert_eq!(summary.failures.get("no_items"), Some(&limit));
    assert_eq!(summary.failure_classes.get("configuration_missing"), Some(&limit));
    assert_eq!(summary.failure_classes.len(), 1);
}

#[test]
fn steps_after_episode_end_are_not_counted() {
    let mut runtime = living_room();
    runtime.begin_episode();
    assert!(runtime.act(&[3, 7, 0, PLACE]).success);
    assert!(runtime.act(&[0, 0, 0, END]).end_episode);
    let ended = runtime.progress();
    assert_eq!(ended.steps, 2);

    let late = runtime.act(&[4, 0, 0, PLACE]);
    assert_eq!(late.reason(), "episode_ended");
    assert_eq!(runtime.progress(), ended);
}

#[test]
fn short_action_vectors_default_to_skip() {
    let mut runtime = living_room();
    runtime.begin_episode();
    let before = runtime.state().snapshot();

    let result = runtime.act(&[3]);
    assert!(result.success);
    assert_eq!(result.reward_delta, runtime.settings().step_penalty);
    assert_eq!(runtime.state().snapshot(), before);
}

#[test]
fn observation_reflects_placements() {
    let mut runtime = living_room();
    runtime.begin_episode();
    let size = runtime.observation_size();

    let initial = runtime.observe();
    assert_eq!(initial.len(), size);
    assert_eq!(initial[0], 1.0);

    // vase (7) on floor_center (3).
    assert!(runtime.act(&[3, 7, 0, PLACE]).success);
    let after = runtime.observe();
    assert_eq!(after.len(), size);
    assert!((after[0] - 0.9).abs() < 1e-6);
    assert_eq!(after[6 + 3 * 7], 1.0);
}

#[test]
fn seeded_episodes_are_reproducible() {
    let runner = EpisodeRunner::default();
    let mut first = living_room();
    let mut second = living_room();

    let a = runner.run_many(&mut first, &mut RandomHeuristicProvider::seeded(9), 3);
    let b = runner.run_many(&mut second, &mut RandomHeuristicProvider::seeded(9), 3);

    assert_eq!(a, b);
    assert_eq!(a.iter().map(|s| s.episode).collect::<Vec<_>>(), vec![1, 2, 3]);
    for summary in &a {
        assert!(!summary.truncated);
        assert!(matches!(
            summary.termination,
            Some(Termination::BudgetExhausted | Termination::FailStreak)
        ));
    }
}

#[test]
fn skip_only_episodes_hit_step_limit() {
    let mut runtime = living_room();
    let summary = EpisodeRunner::new(50).run(&mut runtime, &mut SkipProvider);

    assert!(summary.truncated);
    assert_eq!(summary.termination, None);
    assert_eq!(summary.steps, 50);
    assert_eq!(summary.placements, 0);
    assert!(summary.failures.is_empty());
    assert!((summary.total_reward - 50.0 * runtime.settings().step_penalty).abs() < 1e-5);
}

#[test]
fn summary_serializes_to_json() {
    let mut runtime = living_room();
    let summary = EpisodeRunner::default().run(&mut runtime, &mut RandomHeuristicProvider::seeded(3));
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["episode"], 1);
    assert!(json["failures"].is_object());
    assert!(json["failure_classes"].is_object());
    assert!(json["termination"].is_string());
}
