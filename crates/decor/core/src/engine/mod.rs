//! Episode state machine driving one RL step at a time.
//!
//! [`DecorEngine`] borrows the room state and spawner for the duration of a
//! step call chain. Every call to [`DecorEngine::step`] yields exactly one
//! [`StepResult`]; rewards from all applicable components are summed.

mod reset;

pub use reset::reset_episode;

use crate::action::{PlaceAction, PlaceOp};
use crate::env::{DecorEnv, Spawner};
use crate::error::PlacementFailure;
use crate::placement::PlacementService;
use crate::rules::CompositeValidator;
use crate::scoring::ScoringPolicy;
use crate::state::{InstanceId, RoomState};

/// Why an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Termination {
    /// The policy issued an End op.
    Explicit,
    /// The last placement used up the budget.
    BudgetExhausted,
    /// Too many consecutive failed placements.
    FailStreak,
}

/// Outcome of one step, returned to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepResult {
    pub success: bool,
    pub reward_delta: f32,
    pub end_episode: bool,
    pub failure: Option<PlacementFailure>,
    pub termination: Option<Termination>,
    /// Instance spawned by this step, if any.
    pub spawned: Option<InstanceId>,
}

impl StepResult {
    fn running(success: bool, reward_delta: f32, failure: Option<PlacementFailure>) -> Self {
        Self {
            success,
            reward_delta,
            end_episode: false,
            failure,
            termination: None,
            spawned: None,
        }
    }

    fn rejected() -> Self {
        Self {
            success: false,
            reward_delta: 0.0,
            end_episode: true,
            failure: Some(PlacementFailure::EpisodeEnded),
            termination: None,
            spawned: None,
        }
    }

    fn ended(mut self, termination: Termination) -> Self {
        self.end_episode = true;
        self.termination = Some(termination);
        self
    }

    /// Reason code, empty on success.
    pub fn reason(&self) -> &'static str {
        self.failure.map_or("", |failure| failure.reason())
    }
}

/// Step use-case over borrowed room state and spawner.
pub struct DecorEngine<'a> {
    state: &'a mut RoomState,
    spawner: &'a mut dyn Spawner,
    validator: &'a CompositeValidator,
    scoring: &'a dyn ScoringPolicy,
}

impl<'a> DecorEngine<'a> {
    pub fn new(
        state: &'a mut RoomState,
        spawner: &'a mut dyn Spawner,
        validator: &'a CompositeValidator,
        scoring: &'a dyn ScoringPolicy,
    ) -> Self {
        Self {
            state,
            spawner,
            validator,
            scoring,
        }
    }

    /// Applies one action.
    ///
    /// Transitions:
    /// - End: diversity bonus, episode ends
    /// - Skip: step cost only
    /// - Place: step cost plus the placement outcome; ends on budget
    ///   exhaustion (with diversity bonus) or on reaching the fail-streak limit
    ///
    /// Actions submitted after the episode ended are rejected without
    /// touching state.
    pub fn step(&mut self, env: &DecorEnv<'_>, action: &PlaceAction) -> StepResult {
        if self.state.is_ended() {
            return StepResult::rejected();
        }

        match action.op {
            PlaceOp::End => self.end_episode(),
            PlaceOp::Skip => StepResult::running(true, self.scoring.on_step(self.state), None),
            PlaceOp::Place => self.place(env, action),
        }
    }

    /// Ends the episode explicitly and returns the terminal bonus.
    ///
    /// The bonus is paid once; later calls are rejected with
    /// [`PlacementFailure::EpisodeEnded`].
    pub fn end_episode(&mut self) -> StepResult {
        if self.state.is_ended() {
            return StepResult::rejected();
        }
        let bonus = self.scoring.on_episode_end(self.state);
        self.state.end_episode();
        StepResult::running(true, bonus, None).ended(Termination::Explicit)
    }

    fn place(&mut self, env: &DecorEnv<'_>, action: &PlaceAction) -> StepResult {
        let mut reward = self.scoring.on_step(self.state);
        let attempt = PlacementService::new(self.validator).try_place(
            self.state,
            self.spawner,
            env,
            action,
        );

        if !attempt.success {
            let streak = self.state.record_failure();
            reward += self.scoring.on_failed(&attempt, self.state);
            let result = StepResult::running(false, reward, attempt.failure);

            let limit = env.settings().map(|settings| settings.fail_streak_limit);
            return match limit {
                Ok(limit) if streak >= limit => {
                    self.state.end_episode();
                    result.ended(Termination::FailStreak)
                }
                _ => result,
            };
        }

        self.state.reset_fail_streak();
        let placed = attempt
            .item_index
            .zip(env.catalog().ok())
            .and_then(|(index, catalog)| catalog.items().get(index));
        if let Some(item) = placed {
            reward += self.scoring.on_placed(item, self.state);
        }

        let mut result = StepResult::running(true, reward, None);
        result.spawned = attempt.spawned;

        if self.state.remaining() == 0 {
            result.reward_delta += self.scoring.on_episode_end(self.state);
            self.state.end_episode();
            return result.ended(Termination::BudgetExhausted);
        }
        result
    }
}
