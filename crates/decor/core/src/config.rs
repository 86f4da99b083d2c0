//! Episode, action-space, observation and reward-shaping settings.

use crate::error::SettingsError;

/// Tunable parameters for one decoration session.
///
/// Read-only while an episode runs. Every field has a default so partial
/// content files load.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecorSettings {
    // ===== episode =====
    /// Placement budget per episode.
    pub max_placements: u32,
    /// Consecutive failed placements that end the episode.
    pub fail_streak_limit: u32,

    // ===== actions =====
    /// Discrete yaw steps (4 = 0/90/180/270).
    pub rotation_count: i32,
    /// Size of the op branch (Place/Skip/End).
    pub op_count: i32,

    // ===== observations =====
    pub max_sockets_for_obs: usize,
    /// Distance that normalizes the socket-to-reference feature to 1.
    pub max_reference_distance: f32,
    /// Catalog size that normalizes the catalog feature to 1.
    pub catalog_size_norm: f32,

    // ===== rewards =====
    pub step_penalty: f32,
    pub success_reward: f32,
    pub fail_penalty: f32,
    pub rule_penalty_multiplier: f32,
    pub repeat_item_penalty_base: f32,
    pub final_diversity_bonus_max: f32,
    /// Distinct-item count that earns the full diversity bonus.
    pub diversity_target: f32,

    // ===== geometry / rules =====
    /// Half-extent shrink so touching geometry does not count as overlap.
    pub overlap_shrink: f32,
    /// Penalty attached to each rule and reference failure.
    pub rule_penalty: f32,

    // ===== heuristic demo =====
    pub heuristic_random: bool,
    pub heuristic_place_probability: f32,
}

impl DecorSettings {
    /// Number of per-socket observation features.
    pub const SOCKET_FEATURES: usize = 7;
    /// Number of scalar observation features preceding the socket block.
    pub const SCALAR_FEATURES: usize = 6;
    /// Ops understood by the engine.
    pub const OP_COUNT: i32 = 3;

    pub const DEFAULT_MAX_PLACEMENTS: u32 = 10;
    pub const DEFAULT_FAIL_STREAK_LIMIT: u32 = 20;
    pub const DEFAULT_ROTATION_COUNT: i32 = 4;
    pub const DEFAULT_MAX_SOCKETS_FOR_OBS: usize = 32;
    pub const DEFAULT_OVERLAP_SHRINK: f32 = 0.98;
    pub const DEFAULT_RULE_PENALTY: f32 = 0.2;

    pub fn new() -> Self {
        Self {
            max_placements: Self::DEFAULT_MAX_PLACEMENTS,
            fail_streak_limit: Self::DEFAULT_FAIL_STREAK_LIMIT,
            rotation_count: Self::DEFAULT_ROTATION_COUNT,
            op_count: Self::OP_COUNT,
            max_sockets_for_obs: Self::DEFAULT_MAX_SOCKETS_FOR_OBS,
            max_reference_distance: 12.0,
            catalog_size_norm: 50.0,
            step_penalty: -0.001,
            success_reward: 0.10,
            fail_penalty: -0.20,
            rule_penalty_multiplier: 1.0,
            repeat_item_penalty_base: -0.02,
            final_diversity_bonus_max: 0.50,
            diversity_target: 10.0,
            overlap_shrink: Self::DEFAULT_OVERLAP_SHRINK,
            rule_penalty: Self::DEFAULT_RULE_PENALTY,
            heuristic_random: true,
            heuristic_place_probability: 0.7,
        }
    }

    /// Length of the encoded observation vector.
    pub fn observation_size(&self) -> usize {
        Self::SCALAR_FEATURES + self.max_sockets_for_obs.max(1) * Self::SOCKET_FEATURES
    }

    /// Checks the settings for values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`SettingsError`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.rotation_count < 1 {
            return Err(SettingsError::RotationCount(self.rotation_count));
        }
        if self.op_count < Self::OP_COUNT {
            return Err(SettingsError::OpCount(self.op_count));
        }
        if self.max_sockets_for_obs == 0 {
            return Err(SettingsError::ZeroObservationSockets);
        }
        if self.fail_streak_limit == 0 {
            return Err(SettingsError::ZeroFailStreakLimit);
        }
        if !(self.overlap_shrink > 0.0 && self.overlap_shrink <= 1.0) {
            return Err(SettingsError::OverlapShrink(self.overlap_shrink));
        }

        let constants = [
            ("max_reference_distance", self.max_reference_distance),
            ("catalog_size_norm", self.catalog_size_norm),
            ("step_penalty", self.step_penalty),
            ("success_reward", self.success_reward),
            ("fail_penalty", self.fail_penalty),
            ("rule_penalty_multiplier", self.rule_penalty_multiplier),
            ("repeat_item_penalty_base", self.repeat_item_penalty_base),
            ("final_diversity_bonus_max", self.final_diversity_bonus_max),
            ("diversity_target", self.diversity_target),
            ("rule_penalty", self.rule_penalty),
            ("heuristic_place_probability", self.heuristic_place_probability),
        ];
        if let Some((field, _)) = constants.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SettingsError::NonFinite { field: *field });
        }

        Ok(())
    }
}

impl Default for DecorSettings {
    fn default() -> Self {
        Self::new()
    }
}
