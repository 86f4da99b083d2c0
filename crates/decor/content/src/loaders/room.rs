//! Room layout loader.
//!
//! Sockets are sorted by name so that action indices stay stable no matter
//! how the file lists them.

use std::path::Path;

use decor_core::{Pose, Quat, Socket, SocketType, Vec3};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::room::{BlockingBox, RoomLayout, layer_bit};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SocketRon {
    name: String,
    #[serde(default)]
    socket_type: SocketType,
    position: (f32, f32, f32),
    #[serde(default)]
    yaw: f32,
    #[serde(default)]
    corridor_critical: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BlockerRon {
    center: (f32, f32, f32),
    half_extents: (f32, f32, f32),
    #[serde(default)]
    yaw: f32,
    #[serde(default)]
    layer: u8,
}

/// Room layout structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoomRon {
    sockets: Vec<SocketRon>,
    #[serde(default)]
    reference: Option<(f32, f32, f32)>,
    #[serde(default)]
    blockers: Vec<BlockerRon>,
    /// Layer indices that block placements.
    #[serde(default)]
    blocking_layers: Vec<u8>,
}

/// Loader for room layouts from RON files.
pub struct RoomLoader;

impl RoomLoader {
    /// Load a room layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<RoomLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a room layout from RON text.
    pub fn parse(content: &str) -> LoadResult<RoomLayout> {
        let data: RoomRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse room RON: {}", e))?;

        let mut entries = data.sockets;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].name == pair[1].name) {
            anyhow::bail!("Duplicate socket name in room: {}", pair[0].name);
        }

        let sockets = entries
            .into_iter()
            .map(|entry| {
                let pose = Pose::from_yaw(vec3(entry.position), entry.yaw);
                Socket::new(entry.name, entry.socket_type, pose)
                    .with_corridor_critical(entry.corridor_critical)
            })
            .collect();

        let mut blocking_layers = 0u32;
        for &layer in &data.blocking_layers {
            let bit = layer_bit(layer);
            if bit == 0 {
                anyhow::bail!("Blocking layer out of range (0..32): {}", layer);
            }
            blocking_layers |= bit;
        }

        let blockers = data
            .blockers
            .into_iter()
            .map(|b| BlockingBox {
                center: vec3(b.center),
                half_extents: vec3(b.half_extents).abs(),
                rotation: Quat::from_yaw_degrees(b.yaw),
                layer: b.layer,
            })
            .collect();

        Ok(RoomLayout {
            sockets,
            reference: data.reference.map(vec3),
            blockers,
            blocking_layers,
        })
    }
}

fn vec3((x, y, z): (f32, f32, f32)) -> Vec3 {
    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = r#"(
        sockets: [
            (name: "wall_b", socket_type: Wall, position: (2.0, 1.2, 0.0), yaw: 90.0),
            (name: "floor_a", position: (0.0, 0.0, 1.0), corridor_critical: true),
        ],
        reference: Some((0.0, 0.0, 0.0)),
        blockers: [
            (center: (0.0, 1.0, -3.0), half_extents: (2.0, -1.0, 0.1), layer: 2),
        ],
        blocking_layers: [2, 5],
    )"#;

    #[test]
    fn sockets_are_sorted_by_name() {
        let layout = RoomLoader::parse(ROOM).unwrap();
        let names: Vec<&str> = layout.sockets.iter().map(|s| s.id().0.as_str()).collect();
        assert_eq!(names, vec!["floor_a", "wall_b"]);
        assert_eq!(layout.sockets[0].socket_type(), SocketType::Floor);
        assert!(layout.sockets[0].is_corridor_critical());
        assert_eq!(layout.sockets[1].socket_type(), SocketType::Wall);
    }

    #[test]
    fn blockers_and_mask_are_resolved() {
        let layout = RoomLoader::parse(ROOM).unwrap();
        assert_eq!(layout.reference, Some(Vec3::ZERO));
        assert_eq!(layout.blocking_layers, (1 << 2) | (1 << 5));
        assert_eq!(layout.blockers[0].half_extents, Vec3::new(2.0, 1.0, 0.1));
        assert_eq!(layout.active_blockers().count(), 1);
    }

    #[test]
    fn rejects_duplicate_socket_names() {
        let err = RoomLoader::parse(
            r#"(sockets: [(name: "a", position: (0.0, 0.0, 0.0)), (name: "a", position: (1.0, 0.0, 0.0))])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate socket name"));
    }

    #[test]
    fn rejects_out_of_range_layer() {
        let err = RoomLoader::parse(r#"(sockets: [], blocking_layers: [32])"#).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
