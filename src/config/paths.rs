use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the user's config base.
const APP_DIR: &str = "sysdialogs";
/// Settings file name.
const SETTINGS_FILE: &str = "dialogs.conf";

/// Determine the settings file path, searching `$HOME/.config` before `$XDG_CONFIG_HOME`.
pub(crate) fn resolve_settings_path() -> Option<PathBuf> {
    settings_candidates(
        env::var("HOME").ok().as_deref(),
        env::var("XDG_CONFIG_HOME").ok().as_deref(),
    )
    .into_iter()
    .find(|p| p.is_file())
}

/// What: Candidate settings paths in priority order.
///
/// Inputs:
/// - `home`: Value of `HOME`, if set.
/// - `xdg_config`: Value of `XDG_CONFIG_HOME`, if set.
///
/// Output:
/// - Paths to probe; nothing is created.
pub(crate) fn settings_candidates(home: Option<&str>, xdg_config: Option<&str>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(h) = home.filter(|h| !h.trim().is_empty()) {
        candidates.push(
            Path::new(h)
                .join(".config")
                .join(APP_DIR)
                .join(SETTINGS_FILE),
        );
    }
    if let Some(x) = xdg_config.filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(x).join(APP_DIR).join(SETTINGS_FILE));
    }
    candidates
}

/// What: Config directory used by the binary for its log file.
///
/// Inputs:
/// - None (reads `XDG_CONFIG_HOME` and `HOME`).
///
/// Output:
/// - `$XDG_CONFIG_HOME/sysdialogs`, else `$HOME/.config/sysdialogs`, else `./sysdialogs`.
///
/// Details:
/// - The library never creates this directory; only the binary does, for logs.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(p) = env::var("XDG_CONFIG_HOME")
        && !p.trim().is_empty()
    {
        return PathBuf::from(p).join(APP_DIR);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".config").join(APP_DIR)
}

/// Logs directory under the config dir.
#[must_use]
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}
