//! Read-only catalog of placeable decoration items.

use crate::geometry::{LocalBounds, Vec3};
use crate::state::SocketTypeSet;

/// Broad decoration family, used for occupancy features.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DecorCategory {
    #[default]
    Prop,
    Plant,
    Light,
    Furniture,
}

/// Visual asset reference with the authored data placement needs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetRef {
    /// Key the spawner resolves into a concrete asset.
    pub key: String,
    /// Authored world (lossy) scale of the asset root.
    #[cfg_attr(feature = "serde", serde(default = "unit_scale"))]
    pub scale: Vec3,
    /// Explicit placement-bounds annotation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub placement_bounds: Option<LocalBounds>,
    /// Box collider bounds, used when no annotation exists.
    #[cfg_attr(feature = "serde", serde(default))]
    pub collider: Option<LocalBounds>,
}

#[cfg(feature = "serde")]
fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl AssetRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            scale: Vec3::ONE,
            placement_bounds: None,
            collider: None,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_placement_bounds(mut self, bounds: LocalBounds) -> Self {
        self.placement_bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn with_collider(mut self, bounds: LocalBounds) -> Self {
        self.collider = Some(bounds);
        self
    }
}

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub item_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: DecorCategory,
    /// Empty set means any socket type.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed_socket_types: SocketTypeSet,
    #[cfg_attr(feature = "serde", serde(default = "default_allow_rotate_y"))]
    pub allow_rotate_y: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub asset: Option<AssetRef>,
}

#[cfg(feature = "serde")]
fn default_allow_rotate_y() -> bool {
    true
}

impl ItemDefinition {
    pub fn new(
        item_id: impl Into<String>,
        category: DecorCategory,
        allowed_socket_types: SocketTypeSet,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            category,
            allowed_socket_types,
            allow_rotate_y: true,
            asset: None,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, allow_rotate_y: bool) -> Self {
        self.allow_rotate_y = allow_rotate_y;
        self
    }

    #[must_use]
    pub fn with_asset(mut self, asset: AssetRef) -> Self {
        self.asset = Some(asset);
        self
    }
}

/// Ordered, index-addressable item list shared across episodes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    items: Vec<ItemDefinition>,
}

impl Catalog {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    /// Clamps `index` into range; `None` only when the catalog is empty.
    pub fn clamp_index(&self, index: i32) -> Option<usize> {
        clamp_index(index, self.items.len())
    }

    /// Returns the item at the clamped `index`.
    pub fn get(&self, index: i32) -> Option<&ItemDefinition> {
        self.clamp_index(index).map(|idx| &self.items[idx])
    }
}

impl FromIterator<ItemDefinition> for Catalog {
    fn from_iter<I: IntoIterator<Item = ItemDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Clamps a raw, possibly negative index into `[0, len - 1]`.
pub(crate) fn clamp_index(index: i32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let max = len - 1;
    Some(usize::try_from(index).map_or(0, |idx| idx.min(max)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        ["a", "b", "c"]
            .into_iter()
            .map(|id| ItemDefinition::new(id, DecorCategory::Prop, SocketTypeSet::empty()))
            .collect()
    }

    #[test]
    fn get_clamps_out_of_range_indices() {
        let catalog = catalog();
        assert_eq!(catalog.get(-5).map(|i| i.item_id.as_str()), Some("a"));
        assert_eq!(catalog.get(1).map(|i| i.item_id.as_str()), Some("b"));
        assert_eq!(catalog.get(i32::MAX).map(|i| i.item_id.as_str()), Some("c"));
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        assert!(Catalog::default().get(0).is_none());
        assert_eq!(clamp_index(3, 0), None);
    }
}
