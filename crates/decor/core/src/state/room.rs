use std::collections::BTreeMap;

use super::socket::{InstanceHandle, InstanceId, Socket};
use crate::catalog::{DecorCategory, ItemDefinition};

/// Lifecycle of one episode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EpisodePhase {
    #[default]
    Running,
    Ended,
}

/// Mutable per-episode room state.
///
/// The socket list is fixed at setup; only occupancy changes during an
/// episode. `remaining` never underflows and only shrinks when the
/// placement service commits a placement. Counters cannot be edited from
/// outside the crate:
///
/// ```compile_fail
/// use decor_core::RoomState;
///
/// let mut state = RoomState::new(Vec::new(), 3);
/// state.consume_placement();
/// ```
#[derive(Debug)]
pub struct RoomState {
    sockets: Vec<Socket>,
    item_counts: BTreeMap<String, u32>,
    category_counts: BTreeMap<DecorCategory, u32>,
    max_placements: u32,
    remaining: u32,
    fail_streak: u32,
    phase: EpisodePhase,
}

impl RoomState {
    pub fn new(sockets: Vec<Socket>, max_placements: u32) -> Self {
        Self {
            sockets,
            item_counts: BTreeMap::new(),
            category_counts: BTreeMap::new(),
            max_placements,
            remaining: max_placements,
            fail_streak: 0,
            phase: EpisodePhase::Running,
        }
    }

    /// Resets budget, fail streak, counters and phase. Socket occupancy is
    /// handled by the reset service, which owns instance release.
    pub fn reset_episode(&mut self) {
        self.remaining = self.max_placements;
        self.fail_streak = 0;
        self.item_counts.clear();
        self.category_counts.clear();
        self.phase = EpisodePhase::Running;
    }

    pub fn sockets(&self) -> &[Socket] {
        &self.sockets
    }

    pub(crate) fn sockets_mut(&mut self) -> &mut [Socket] {
        &mut self.sockets
    }

    pub fn socket(&self, index: usize) -> Option<&Socket> {
        self.sockets.get(index)
    }

    pub fn socket_count(&self) -> usize {
        self.sockets.len()
    }

    pub fn max_placements(&self) -> u32 {
        self.max_placements
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn fail_streak(&self) -> u32 {
        self.fail_streak
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn is_ended(&self) -> bool {
        self.phase == EpisodePhase::Ended
    }

    pub(crate) fn end_episode(&mut self) {
        self.phase = EpisodePhase::Ended;
    }

    pub(crate) fn record_failure(&mut self) -> u32 {
        self.fail_streak = self.fail_streak.saturating_add(1);
        self.fail_streak
    }

    pub(crate) fn reset_fail_streak(&mut self) {
        self.fail_streak = 0;
    }

    pub(crate) fn consume_placement(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Bumps the per-item and per-category counters for a successful placement.
    pub(crate) fn register_placement(&mut self, item: &ItemDefinition) {
        *self.item_counts.entry(item.item_id.clone()).or_insert(0) += 1;
        *self.category_counts.entry(item.category).or_insert(0) += 1;
    }

    /// Hands `instance` to the socket at `index`.
    pub(crate) fn occupy_socket(&mut self, index: usize, instance: InstanceHandle) {
        if let Some(socket) = self.sockets.get_mut(index) {
            socket.occupy(instance);
        }
    }

    pub fn item_count(&self, item_id: &str) -> u32 {
        self.item_counts.get(item_id).copied().unwrap_or(0)
    }

    pub fn category_count(&self, category: DecorCategory) -> u32 {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }

    /// Number of distinct item ids placed this episode.
    pub fn distinct_items(&self) -> usize {
        self.item_counts.len()
    }

    pub fn total_placed(&self) -> u32 {
        self.item_counts.values().sum()
    }

    /// Comparable copy of everything a step can change.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            occupancy: self.sockets.iter().map(Socket::instance_id).collect(),
            item_counts: self.item_counts.clone(),
            category_counts: self.category_counts.clone(),
            remaining: self.remaining,
            fail_streak: self.fail_streak,
            phase: self.phase,
        }
    }
}

/// Value snapshot of [`RoomState`] used for comparisons and reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSnapshot {
    pub occupancy: Vec<Option<InstanceId>>,
    pub item_counts: BTreeMap<String, u32>,
    pub category_counts: BTreeMap<DecorCategory, u32>,
    pub remaining: u32,
    pub fail_streak: u32,
    pub phase: EpisodePhase,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Pose;
    use crate::state::{SocketType, SocketTypeSet};

    fn room(budget: u32) -> RoomState {
        RoomState::new(
            vec![Socket::new("a", SocketType::Floor, Pose::default())],
            budget,
        )
    }

    #[test]
    fn budget_never_underflows() {
        let mut state = room(1);
        state.consume_placement();
        state.consume_placement();
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn register_counts_items_and_categories() {
        let mut state = room(5);
        let plant = ItemDefinition::new("fern", DecorCategory::Plant, SocketTypeSet::FLOOR);
        state.register_placement(&plant);
        state.register_placement(&plant);

        assert_eq!(state.item_count("fern"), 2);
        assert_eq!(state.item_count("lamp"), 0);
        assert_eq!(state.category_count(DecorCategory::Plant), 2);
        assert_eq!(state.distinct_items(), 1);
    }

    #[test]
    fn reset_restores_initial_counters() {
        let mut state = room(3);
        let initial = state.snapshot();
        let plant = ItemDefinition::new("fern", DecorCategory::Plant, SocketTypeSet::FLOOR);
        state.register_placement(&plant);
        state.consume_placement();
        state.record_failure();
        state.end_episode();

        state.reset_episode();
        assert_eq!(state.snapshot(), initial);
    }
}
