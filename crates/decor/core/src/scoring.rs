//! Reward shaping for the placement episode.

use crate::catalog::ItemDefinition;
use crate::config::DecorSettings;
use crate::placement::PlacementAttempt;
use crate::state::RoomState;

/// Converts state transitions into scalar reward deltas.
pub trait ScoringPolicy: Send + Sync {
    /// Cost charged on every non-End step, including skips.
    fn on_step(&self, state: &RoomState) -> f32;

    /// Reward for a committed placement. Called after the state registered it.
    fn on_placed(&self, item: &ItemDefinition, state: &RoomState) -> f32;

    /// Penalty for a failed placement attempt.
    fn on_failed(&self, attempt: &PlacementAttempt, state: &RoomState) -> f32;

    /// Terminal bonus, applied once when the episode ends naturally.
    fn on_episode_end(&self, state: &RoomState) -> f32;
}

/// Constant-coefficient scoring driven by [`DecorSettings`].
#[derive(Clone, Debug)]
pub struct SimpleScoringPolicy {
    settings: DecorSettings,
}

impl SimpleScoringPolicy {
    pub fn new(settings: DecorSettings) -> Self {
        Self { settings }
    }

    /// Repeat penalty for an item that was already placed `prior_count` times.
    pub fn repeat_penalty(&self, prior_count: u32) -> f32 {
        self.settings.repeat_item_penalty_base * prior_count as f32
    }

    /// Diversity bonus for `distinct` different item ids.
    pub fn diversity_bonus(&self, distinct: usize) -> f32 {
        let target = self.settings.diversity_target.max(1.0);
        let ratio = (distinct as f32 / target).clamp(0.0, 1.0);
        ratio * self.settings.final_diversity_bonus_max
    }
}

impl ScoringPolicy for SimpleScoringPolicy {
    fn on_step(&self, _state: &RoomState) -> f32 {
        self.settings.step_penalty
    }

    fn on_placed(&self, item: &ItemDefinition, state: &RoomState) -> f32 {
        let prior = state.item_count(&item.item_id).saturating_sub(1);
        self.settings.success_reward + self.repeat_penalty(prior)
    }

    fn on_failed(&self, attempt: &PlacementAttempt, _state: &RoomState) -> f32 {
        self.settings.fail_penalty - self.settings.rule_penalty_multiplier * attempt.penalty
    }

    fn on_episode_end(&self, state: &RoomState) -> f32 {
        self.diversity_bonus(state.distinct_items())
    }
}
