//! `dialogs.conf` parsing.

use std::time::Duration;

use super::{InputPolicy, Settings};
use crate::backend::BackendKind;

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character.
/// - Keys are lower-cased with `.`, `-` and spaces folded to `_`.
/// - A ` #` starts a trailing comment in the value.
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    let val = raw_val.find(" #").map_or(raw_val, |i| &raw_val[..i]);
    Some((key, val.trim().to_string()))
}

/// Interpret the usual spellings of a boolean.
pub(crate) fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Apply one setting to `settings`.
///
/// Inputs:
/// - `settings`: Target.
/// - `key`: Normalised key.
/// - `val`: Raw value.
///
/// Output:
/// - `true` when the key was recognised and the value accepted.
///
/// Details:
/// - `backend = auto` (or empty) clears a previous override.
/// - `timeout_secs = 0` disables the timeout.
pub(crate) fn apply_setting(settings: &mut Settings, key: &str, val: &str) -> bool {
    match key {
        "backend" | "dialog_backend" => {
            if val.is_empty() || val.eq_ignore_ascii_case("auto") {
                settings.backend = None;
                true
            } else if let Some(kind) = BackendKind::from_name(val) {
                settings.backend = Some(kind);
                true
            } else {
                false
            }
        }
        "timeout_secs" | "timeout" => match val.parse::<u64>() {
            Ok(0) => {
                settings.timeout = None;
                true
            }
            Ok(secs) => {
                settings.timeout = Some(Duration::from_secs(secs));
                true
            }
            Err(_) => false,
        },
        "input_policy" | "quotes" => match InputPolicy::from_name(val) {
            Some(p) => {
                settings.input_policy = p;
                true
            }
            None => false,
        },
        "attach_window" | "attach" => match parse_bool(val) {
            Some(b) => {
                settings.attach_window = b;
                true
            }
            None => false,
        },
        "python" | "python_interpreter" => {
            settings.python = (!val.is_empty()).then(|| val.to_string());
            true
        }
        _ => false,
    }
}

/// What: Parse settings from `dialogs.conf` content.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Settings to update in place.
///
/// Output:
/// - None (modifies `settings`).
///
/// Details:
/// - Unknown keys and unparsable values are logged and skipped.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        if !apply_setting(settings, &key, &val) {
            tracing::warn!(key = %key, value = %val, "ignoring unrecognised dialogs.conf entry");
        }
    }
}
