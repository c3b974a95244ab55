//! Path handling for the Zellij plugin sandbox.
//!
//! In the sandbox the host filesystem is mounted under `/host`, which points
//! to the cwd of the last focused terminal (usually the home directory).

use std::path::PathBuf;

/// Returns the zjobs data directory, `/host/.local/share/zellij/zjobs`.
///
/// The log file and the span export live here.
///
/// # Examples
///
/// ```
/// use zjobs::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zjobs"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zjobs")
}

/// Maps a `~` prefixed path (e.g. a `theme_file` option) into the sandbox.
///
/// # Examples
///
/// ```
/// use zjobs::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/zjobs.toml"), "/etc/zjobs.toml");
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
