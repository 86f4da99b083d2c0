//! Room wiring and the agent-facing runtime.
//!
//! [`RoomBuilder`] assembles settings, catalog, sockets and blocking geometry
//! into a [`DecorRuntime`]. The runtime owns the room state and spawner and
//! exposes the begin/observe/act cycle an RL agent drives.

use decor_content::RoomLayout;
use decor_core::{
    ActionParser, Catalog, CompositeValidator, DecorEngine, DecorEnv, DecorSettings,
    ObservationEncoder, OverlapOracle, PlacementFailure, PlacementRule, RoomState, ScoringPolicy,
    SimpleScoringPolicy, Socket, StepResult, Termination, Vec3, reset_episode,
};

use crate::api::{ActionProvider, ActionSpace, Result, RuntimeError};
use crate::oracle::{BoxOverlapIndex, InstanceRegistry, LayerMask};
use crate::spawner::InstanceSpawner;

/// Running totals for the current episode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EpisodeProgress {
    pub episode: u64,
    pub steps: u64,
    pub reward: f32,
}

/// Owns one room and drives its episodes step by step.
pub struct DecorRuntime {
    settings: DecorSettings,
    catalog: Option<Catalog>,
    state: RoomState,
    spawner: InstanceSpawner,
    overlap: Option<BoxOverlapIndex>,
    validator: CompositeValidator,
    scoring: Box<dyn ScoringPolicy>,
    reference: Option<Vec3>,
    progress: EpisodeProgress,
}

impl DecorRuntime {
    /// Create a new room builder
    pub fn builder() -> RoomBuilder {
        RoomBuilder::new()
    }

    /// Clears placed instances and starts a fresh episode.
    pub fn begin_episode(&mut self) {
        reset_episode(&mut self.state, &mut self.spawner);
        self.progress = EpisodeProgress {
            episode: self.progress.episode + 1,
            ..EpisodeProgress::default()
        };
        tracing::info!(
            episode = self.progress.episode,
            sockets = self.state.socket_count(),
            budget = self.state.max_placements(),
            "episode begin"
        );
    }

    /// Encodes the current room state.
    pub fn observe(&self) -> Vec<f32> {
        ObservationEncoder::new(&self.settings, self.catalog.as_ref())
            .with_reference(self.reference)
            .encode(&self.state)
    }

    /// Parses a raw discrete action and applies it.
    ///
    /// Actions rejected because the episode already ended do not count
    /// toward [`EpisodeProgress`].
    pub fn act(&mut self, discrete: &[i32]) -> StepResult {
        let item_count = self.catalog.as_ref().map_or(0, Catalog::len);
        let action = ActionParser::parse(
            discrete,
            self.state.socket_count(),
            item_count,
            self.settings.rotation_count,
        );

        let mut env = DecorEnv::empty().with_settings(&self.settings);
        if let Some(catalog) = &self.catalog {
            env = env.with_catalog(catalog);
        }
        if let Some(overlap) = &self.overlap {
            env = env.with_overlap(overlap as &dyn OverlapOracle);
        }

        let result = DecorEngine::new(
            &mut self.state,
            &mut self.spawner,
            &self.validator,
            self.scoring.as_ref(),
        )
        .step(&env, &action);

        if result.failure == Some(PlacementFailure::EpisodeEnded) {
            tracing::debug!(episode = self.progress.episode, "step after episode end ignored");
            return result;
        }

        self.progress.steps += 1;
        self.progress.reward += result.reward_delta;
        tracing::debug!(
            episode = self.progress.episode,
            step = self.progress.steps,
            socket = action.socket_index,
            item = action.item_index,
            rotation = action.rotation_index,
            op = %action.op,
            success = result.success,
            reason = result.reason(),
            class = result.failure.map_or("", |failure| failure.class().as_str()),
            reward = result.reward_delta,
            "step"
        );

        if let Some(termination) = result.termination {
            self.log_episode_end(termination);
        }
        result
    }

    fn log_episode_end(&self, termination: Termination) {
        if termination == Termination::FailStreak {
            tracing::warn!(
                episode = self.progress.episode,
                fail_streak = self.state.fail_streak(),
                "episode ended on fail streak"
            );
        }
        tracing::info!(
            episode = self.progress.episode,
            steps = self.progress.steps,
            reward = self.progress.reward,
            placed = self.state.total_placed(),
            distinct = self.state.distinct_items(),
            termination = %termination,
            "episode end"
        );
    }

    /// Asks `provider` for the next raw action in this room's action space.
    pub fn heuristic(&self, provider: &mut dyn ActionProvider) -> [i32; 4] {
        provider.provide_action(&self.action_space())
    }

    pub fn action_space(&self) -> ActionSpace {
        ActionSpace {
            socket_count: self.state.socket_count(),
            item_count: self.catalog.as_ref().map_or(0, Catalog::len),
            rotation_count: self.settings.rotation_count,
            heuristic_random: self.settings.heuristic_random,
            place_probability: self.settings.heuristic_place_probability,
        }
    }

    /// Discrete branch sizes `[sockets, items, rotations, 3]` for the learner.
    pub fn recommended_branches(&self) -> [i32; 4] {
        self.action_space().branches()
    }

    pub fn observation_size(&self) -> usize {
        self.settings.observation_size()
    }

    pub fn state(&self) -> &RoomState {
        &self.state
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn settings(&self) -> &DecorSettings {
        &self.settings
    }

    pub fn spawner(&self) -> &InstanceSpawner {
        &self.spawner
    }

    pub fn progress(&self) -> EpisodeProgress {
        self.progress
    }

    pub fn is_episode_over(&self) -> bool {
        self.state.is_ended()
    }
}

/// Builder for [`DecorRuntime`].
///
/// Settings are required. Catalog, sockets and blocking geometry are
/// optional; a runtime without a catalog still steps and reports `no_items`.
pub struct RoomBuilder {
    settings: Option<DecorSettings>,
    catalog: Option<Catalog>,
    sockets: Vec<Socket>,
    reference: Option<Vec3>,
    overlap: Option<BoxOverlapIndex>,
    decor_layer: u8,
    scoring: Option<Box<dyn ScoringPolicy>>,
    extra_rules: Vec<Box<dyn PlacementRule>>,
}

impl RoomBuilder {
    fn new() -> Self {
        Self {
            settings: None,
            catalog: None,
            sockets: Vec::new(),
            reference: None,
            overlap: None,
            decor_layer: 0,
            scoring: None,
            extra_rules: Vec::new(),
        }
    }

    /// Set required settings
    pub fn settings(mut self, settings: DecorSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sockets in their final index order.
    pub fn sockets(mut self, sockets: Vec<Socket>) -> Self {
        self.sockets = sockets;
        self
    }

    /// Point socket distances are observed from, usually the door.
    pub fn reference(mut self, reference: Vec3) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Takes sockets, reference point and blocking geometry from a loaded room.
    pub fn layout(mut self, layout: RoomLayout) -> Self {
        self.overlap = Some(BoxOverlapIndex::from_layout(&layout));
        self.reference = layout.reference;
        self.sockets = layout.sockets;
        self
    }

    /// Overrides the overlap index.
    pub fn overlap(mut self, overlap: BoxOverlapIndex) -> Self {
        self.overlap = Some(overlap);
        self
    }

    /// Layer placed instances occupy in the overlap index (default 0).
    pub fn decor_layer(mut self, layer: u8) -> Self {
        self.decor_layer = layer;
        self
    }

    /// Replaces the default [`SimpleScoringPolicy`].
    pub fn scoring(mut self, scoring: impl ScoringPolicy + 'static) -> Self {
        self.scoring = Some(Box::new(scoring));
        self
    }

    /// Appends a rule after the standard occupancy, socket-type and overlap rules.
    pub fn rule(mut self, rule: impl PlacementRule + 'static) -> Self {
        self.extra_rules.push(Box::new(rule));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<DecorRuntime> {
        let Some(settings) = self.settings else {
            tracing::error!("room settings are missing; create a settings file and pass it in");
            return Err(RuntimeError::MissingSettings);
        };
        settings.validate().map_err(|err| {
            tracing::error!(error = %err, "room settings are invalid");
            RuntimeError::InvalidSettings(err)
        })?;

        let mut validator = CompositeValidator::standard(&settings);
        for rule in self.extra_rules {
            validator.push_boxed(rule).map_err(RuntimeError::Validator)?;
        }

        let registry = InstanceRegistry::default();
        let overlap = self
            .overlap
            .map(|index| index.with_instances(registry.clone(), self.decor_layer));
        let spawner = InstanceSpawner::new().with_registry(registry);

        let scoring = self
            .scoring
            .unwrap_or_else(|| Box::new(SimpleScoringPolicy::new(settings.clone())));
        let state = RoomState::new(self.sockets, settings.max_placements);

        let runtime = DecorRuntime {
            settings,
            catalog: self.catalog,
            state,
            spawner,
            overlap,
            validator,
            scoring,
            reference: self.reference,
            progress: EpisodeProgress::default(),
        };

        tracing::info!(
            sockets = runtime.state.socket_count(),
            items = runtime.catalog.as_ref().map_or(0, Catalog::len),
            observation_size = runtime.observation_size(),
            branches = ?runtime.recommended_branches(),
            rules = ?runtime.validator.rule_names().collect::<Vec<_>>(),
            blocking_layers = runtime.overlap.as_ref().map_or(LayerMask::empty(), BoxOverlapIndex::mask).bits(),
            "room built"
        );
        Ok(runtime)
    }
}
