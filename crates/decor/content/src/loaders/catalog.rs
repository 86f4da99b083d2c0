//! Item catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use decor_core::Catalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for item catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an item catalog from a RON file.
    ///
    /// Item order in the file is the catalog index order used by actions.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a catalog from RON text and reject duplicate item ids.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: Catalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for item in catalog.items() {
            if !seen.insert(item.item_id.as_str()) {
                anyhow::bail!("Duplicate item id in catalog: {}", item.item_id);
            }
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decor_core::{DecorCategory, SocketType, SocketTypeSet};

    #[test]
    fn parses_flags_and_defaults() {
        let catalog = CatalogLoader::parse(
            r#"(items: [
                (
                    item_id: "fern",
                    category: Plant,
                    allowed_socket_types: "FLOOR | CORNER",
                    asset: Some((
                        key: "plants/fern",
                        placement_bounds: Some((
                            center: (x: 0.0, y: 0.5, z: 0.0),
                            size: (x: 0.6, y: 1.0, z: 0.6),
                        )),
                    )),
                ),
                (item_id: "anything"),
            ])"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let fern = &catalog.items()[0];
        assert_eq!(fern.category, DecorCategory::Plant);
        assert!(fern.allowed_socket_types.accepts(SocketType::Corner));
        assert!(!fern.allowed_socket_types.accepts(SocketType::Wall));
        assert!(fern.allow_rotate_y);
        let asset = fern.asset.as_ref().unwrap();
        assert_eq!(asset.scale, decor_core::Vec3::ONE);
        assert!(asset.collider.is_none());

        let anything = &catalog.items()[1];
        assert_eq!(anything.allowed_socket_types, SocketTypeSet::empty());
        assert!(anything.asset.is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = CatalogLoader::parse(r#"(items: [(item_id: "a"), (item_id: "a")])"#)
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate item id"));
    }
}
