//! Oriented bounding boxes and the separating-axis overlap test.

use decor_core::{Quat, Vec3, WorldBox};

/// Cross products shorter than this are treated as parallel edges.
const PARALLEL_EPSILON_SQ: f32 = 1e-10;

/// Box with a center, positive half extents and orthonormal local axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox {
    pub center: Vec3,
    pub half_extents: Vec3,
    axes: [Vec3; 3],
}

impl OrientedBox {
    pub fn new(center: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
            axes: rotation.axes(),
        }
    }

    pub fn axes(&self) -> &[Vec3; 3] {
        &self.axes
    }

    fn half(&self, i: usize) -> f32 {
        match i {
            0 => self.half_extents.x,
            1 => self.half_extents.y,
            _ => self.half_extents.z,
        }
    }

    /// Half-length of the box projected onto `axis` (scaled by `|axis|`).
    fn project_radius(&self, axis: Vec3) -> f32 {
        (0..3)
            .map(|i| self.half(i) * self.axes[i].dot(axis).abs())
            .sum()
    }

    /// True if the interiors overlap. Touching faces, edges or corners do not count.
    pub fn overlaps(&self, other: &Self) -> bool {
        let offset = other.center - self.center;

        let face_axes = self.axes.iter().chain(other.axes.iter()).copied();
        let edge_axes = self
            .axes
            .iter()
            .flat_map(|&a| other.axes.iter().map(move |&b| a.cross(b)))
            .filter(|axis| axis.length_squared() > PARALLEL_EPSILON_SQ);

        // 15 candidate axes: 3 + 3 face normals, up to 9 edge cross products.
        face_axes.chain(edge_axes).all(|axis| {
            let distance = offset.dot(axis).abs();
            distance < self.project_radius(axis) + other.project_radius(axis)
        })
    }
}

impl From<WorldBox> for OrientedBox {
    fn from(world_box: WorldBox) -> Self {
        Self::new(world_box.center, world_box.half_extents, world_box.rotation)
    }
}
