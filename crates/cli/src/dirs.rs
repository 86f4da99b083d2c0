//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/decor/logs`
/// - Linux: `~/.cache/decor/logs` (or `$XDG_CACHE_HOME/decor/logs`)
/// - Windows: `%LOCALAPPDATA%\decor\logs`
/// - Fallback: `/tmp/decor/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "decor")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/decor"))
        .join("logs")
}
