//! Abstraction for sourcing placement actions outside the learner.
//!
//! Runtime users plug in [`ActionProvider`] implementations to drive episodes
//! with scripted fixtures, random exploration or a trained policy.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use decor_core::PlaceOp;

/// Discrete action space of one room, as seen by a provider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionSpace {
    pub socket_count: usize,
    pub item_count: usize,
    pub rotation_count: i32,
    /// When false, heuristic providers only skip.
    pub heuristic_random: bool,
    pub place_probability: f32,
}

impl ActionSpace {
    /// Branch sizes `[sockets, items, rotations, ops]`, each at least 1.
    pub fn branches(&self) -> [i32; 4] {
        [
            to_branch(self.socket_count),
            to_branch(self.item_count),
            self.rotation_count.max(1),
            decor_core::DecorSettings::OP_COUNT,
        ]
    }
}

fn to_branch(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX).max(1)
}

/// Trait for providing raw action vectors `[socket, item, rotation, op]`.
pub trait ActionProvider: Send {
    fn provide_action(&mut self, space: &ActionSpace) -> [i32; 4];
}

/// A provider that always skips.
/// Useful for testing or as a fallback.
pub struct SkipProvider;

impl ActionProvider for SkipProvider {
    fn provide_action(&mut self, _space: &ActionSpace) -> [i32; 4] {
        [0, 0, 0, PlaceOp::Skip as i32]
    }
}

/// Uniform random indices; places with the configured probability.
pub struct RandomHeuristicProvider {
    rng: StdRng,
}

impl RandomHeuristicProvider {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl ActionProvider for RandomHeuristicProvider {
    fn provide_action(&mut self, space: &ActionSpace) -> [i32; 4] {
        let [sockets, items, rotations, _] = space.branches();
        let socket = self.rng.gen_range(0..sockets);
        let item = self.rng.gen_range(0..items);
        let rotation = self.rng.gen_range(0..rotations);

        let op = if space.heuristic_random && self.rng.r#gen::<f32>() < space.place_probability {
            PlaceOp::Place
        } else {
            PlaceOp::Skip
        };

        [socket, item, rotation, op as i32]
    }
}
