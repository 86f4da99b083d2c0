//! Fixed-length observation vector for the external learner.
//!
//! Layout: six scalars (remaining-budget ratio, catalog-size ratio, four
//! category ratios), then `max(1, max_sockets_for_obs)` blocks of seven
//! per-socket features (occupied, four socket-type one-hots, normalized
//! distance to the reference point, corridor-critical). Unused socket slots
//! are zero.

use strum::IntoEnumIterator;

use crate::catalog::{Catalog, DecorCategory};
use crate::config::DecorSettings;
use crate::geometry::Vec3;
use crate::state::{RoomState, Socket, SocketType};

/// Encodes room state into the observation layout.
#[derive(Clone, Copy, Debug)]
pub struct ObservationEncoder<'a> {
    settings: &'a DecorSettings,
    catalog: Option<&'a Catalog>,
    reference: Option<Vec3>,
}

impl<'a> ObservationEncoder<'a> {
    pub fn new(settings: &'a DecorSettings, catalog: Option<&'a Catalog>) -> Self {
        Self {
            settings,
            catalog,
            reference: None,
        }
    }

    /// Point socket distances are measured from (typically the door).
    #[must_use]
    pub fn with_reference(mut self, reference: Option<Vec3>) -> Self {
        self.reference = reference;
        self
    }

    pub fn size(&self) -> usize {
        self.settings.observation_size()
    }

    pub fn encode(&self, state: &RoomState) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.size());
        self.encode_into(state, &mut out);
        out
    }

    /// Appends the observation to `out`.
    pub fn encode_into(&self, state: &RoomState, out: &mut Vec<f32>) {
        let max_placements = state.max_placements().max(1) as f32;
        out.push(state.remaining() as f32 / max_placements);

        let catalog_len = self.catalog.map_or(0, Catalog::len) as f32;
        out.push(clamp01(catalog_len / self.settings.catalog_size_norm.max(1.0)));

        for category in DecorCategory::iter() {
            out.push(clamp01(state.category_count(category) as f32 / max_placements));
        }

        let slots = self.settings.max_sockets_for_obs.max(1);
        for slot in 0..slots {
            match state.socket(slot) {
                Some(socket) => self.push_socket(socket, out),
                None => out.extend_from_slice(&[0.0; DecorSettings::SOCKET_FEATURES]),
            }
        }
    }

    fn push_socket(&self, socket: &Socket, out: &mut Vec<f32>) {
        out.push(flag(socket.is_occupied()));
        for socket_type in SocketType::iter() {
            out.push(flag(socket.socket_type() == socket_type));
        }
        out.push(self.reference_distance(socket));
        out.push(flag(socket.is_corridor_critical()));
    }

    fn reference_distance(&self, socket: &Socket) -> f32 {
        let max = self.settings.max_reference_distance;
        match self.reference {
            Some(reference) if max > 0.001 => {
                clamp01(socket.pose().position.distance(reference) / max)
            }
            _ => 0.0,
        }
    }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
