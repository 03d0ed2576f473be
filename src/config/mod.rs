//! Settings: defaults, `dialogs.conf`, and environment overrides.

mod parse;
mod paths;

use std::time::Duration;

use crate::backend::BackendKind;

pub use parse::{parse_key_value, parse_settings, skip_comment_or_empty};
pub use paths::{config_dir, logs_dir};

/// Environment variable forcing a backend.
pub const ENV_BACKEND: &str = "SYSDIALOGS_BACKEND";
/// Environment variable with a timeout in seconds.
pub const ENV_TIMEOUT: &str = "SYSDIALOGS_TIMEOUT";
/// Environment variable selecting the input policy.
pub const ENV_INPUT_POLICY: &str = "SYSDIALOGS_INPUT_POLICY";

/// What happens to caller strings that contain a quote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Replace the field with a placeholder and show the dialog anyway.
    #[default]
    Substitute,
    /// Refuse the call with `DialogError::QuotedInput`.
    Reject,
}

impl InputPolicy {
    /// Parse `substitute` / `reject` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "substitute" | "replace" => Some(Self::Substitute),
            "reject" | "error" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Library settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Restrict selection to one backend; `None` picks by priority.
    pub backend: Option<BackendKind>,
    /// Kill the dialog after this long; `None` waits forever.
    pub timeout: Option<Duration>,
    /// Handling of quotes in caller strings.
    pub input_policy: InputPolicy,
    /// Attach dialogs to the active window through `xprop` when supported.
    pub attach_window: bool,
    /// Python interpreter for the tkinter backend; probed when `None`.
    pub python: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: None,
            timeout: None,
            input_policy: InputPolicy::Substitute,
            attach_window: true,
            python: None,
        }
    }
}

impl Settings {
    /// What: Load settings the way the library does by default.
    ///
    /// Inputs:
    /// - None (reads `dialogs.conf` and the process environment).
    ///
    /// Output:
    /// - Defaults, overlaid with the config file, overlaid with `SYSDIALOGS_*` variables.
    ///
    /// Details:
    /// - A missing or unreadable file is not an error; nothing is ever written.
    #[must_use]
    pub fn load() -> Self {
        let mut settings = Self::default();
        if let Some(path) = paths::resolve_settings_path() {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    parse_settings(&content, &mut settings);
                    tracing::debug!(path = %path.display(), "loaded dialog settings");
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to read dialog settings");
                }
            }
        }
        settings.apply_env(|name| std::env::var(name).ok());
        settings
    }

    /// What: Overlay `SYSDIALOGS_*` overrides.
    ///
    /// Inputs:
    /// - `lookup`: Environment accessor (injected for tests).
    ///
    /// Output:
    /// - None (modifies `self`).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for (var, key) in [
            (ENV_BACKEND, "backend"),
            (ENV_TIMEOUT, "timeout_secs"),
            (ENV_INPUT_POLICY, "input_policy"),
        ] {
            if let Some(val) = lookup(var)
                && !parse::apply_setting(self, key, val.trim())
            {
                tracing::warn!(var, value = %val, "ignoring invalid environment override");
            }
        }
    }
}
