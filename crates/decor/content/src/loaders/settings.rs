//! Engine settings loader.

use std::path::Path;

use decor_core::DecorSettings;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`DecorSettings`] from TOML files.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a TOML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> LoadResult<DecorSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse settings from TOML text and validate them.
    pub fn parse(content: &str) -> LoadResult<DecorSettings> {
        let settings: DecorSettings = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;
        settings
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = SettingsLoader::parse("max_placements = 4\nrule_penalty = 0.5\n").unwrap();
        assert_eq!(settings.max_placements, 4);
        assert_eq!(settings.rule_penalty, 0.5);
        assert_eq!(settings.rotation_count, DecorSettings::default().rotation_count);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(SettingsLoader::parse("").unwrap(), DecorSettings::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = SettingsLoader::parse("rotation_count = 0").unwrap_err();
        assert!(err.to_string().starts_with("Invalid settings"));
    }
}
