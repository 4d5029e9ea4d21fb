//! Path utilities for the Zellij sandbox environment.
//!
//! Inside a Zellij plugin the host filesystem is mounted under `/host`. These
//! helpers locate the plugin's data directory and translate user-supplied
//! paths into their sandbox equivalents.

use std::path::PathBuf;

/// Returns the data directory for hnsearch storage and traces.
///
/// Resolves to `/host/.local/share/zellij/hnsearch` in the sandbox. `/host`
/// points to the cwd of the last focused terminal (normally the home
/// directory), making the real location `~/.local/share/zellij/hnsearch`.
///
/// # Examples
///
/// ```
/// use hnsearch::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/hnsearch"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("hnsearch")
}

/// Expands a leading `~` to the sandbox `/host` mount.
///
/// # Examples
///
/// ```
/// use hnsearch::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
