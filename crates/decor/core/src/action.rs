//! Discrete actions and the parser that turns raw policy output into them.

/// Operation requested by one step.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PlaceOp {
    Place = 0,
    #[default]
    Skip = 1,
    End = 2,
}

impl PlaceOp {
    /// Maps a raw op value, clamped into `[0, 2]`.
    pub fn from_clamped(raw: i32) -> Self {
        match raw.clamp(0, 2) {
            0 => Self::Place,
            1 => Self::Skip,
            _ => Self::End,
        }
    }
}

/// One fully determined step request.
///
/// Indices are kept signed: they may come straight from a policy and are
/// clamped again wherever they index into sockets, items or rotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceAction {
    pub socket_index: i32,
    pub item_index: i32,
    pub rotation_index: i32,
    pub op: PlaceOp,
}

impl PlaceAction {
    pub const fn new(socket_index: i32, item_index: i32, rotation_index: i32, op: PlaceOp) -> Self {
        Self {
            socket_index,
            item_index,
            rotation_index,
            op,
        }
    }

    pub const fn place(socket_index: i32, item_index: i32, rotation_index: i32) -> Self {
        Self::new(socket_index, item_index, rotation_index, PlaceOp::Place)
    }

    pub const fn skip() -> Self {
        Self::new(0, 0, 0, PlaceOp::Skip)
    }

    pub const fn end() -> Self {
        Self::new(0, 0, 0, PlaceOp::End)
    }

    /// Encodes back into the `[socket, item, rotation, op]` layout.
    pub fn to_discrete(&self) -> [i32; 4] {
        [
            self.socket_index,
            self.item_index,
            self.rotation_index,
            self.op as i32,
        ]
    }
}

/// Parses `[socket, item, rotation, op]` discrete branch values.
pub struct ActionParser;

impl ActionParser {
    /// Parses and clamps a discrete action vector.
    ///
    /// Missing trailing components default to socket/item/rotation 0 and op
    /// Skip. Each component is clamped to its own domain; an empty domain
    /// clamps to 0.
    pub fn parse(
        discrete: &[i32],
        socket_count: usize,
        item_count: usize,
        rotation_count: i32,
    ) -> PlaceAction {
        let component = |index: usize, default: i32| discrete.get(index).copied().unwrap_or(default);

        PlaceAction {
            socket_index: clamp_to_len(component(0, 0), socket_count),
            item_index: clamp_to_len(component(1, 0), item_count),
            rotation_index: clamp_upper(component(2, 0), rotation_count.saturating_sub(1)),
            op: PlaceOp::from_clamped(component(3, PlaceOp::Skip as i32)),
        }
    }
}

fn clamp_to_len(value: i32, len: usize) -> i32 {
    let max = i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX);
    clamp_upper(value, max)
}

fn clamp_upper(value: i32, max: i32) -> i32 {
    if max < 0 { 0 } else { value.clamp(0, max) }
}
