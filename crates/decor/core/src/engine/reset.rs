use crate::env::Spawner;
use crate::state::RoomState;

/// Starts a fresh episode.
///
/// Destroys every spawned instance, releases each socket's handle and
/// restores budget, fail streak, counters and phase. Idempotent.
pub fn reset_episode(state: &mut RoomState, spawner: &mut dyn Spawner) {
    spawner.clear_all();
    for socket in state.sockets_mut() {
        drop(socket.clear());
    }
    state.reset_episode();
}
