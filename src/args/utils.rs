//! Shared utilities for argument processing.

use std::time::Duration;

use sysdialogs::{BackendKind, InputPolicy, Settings};

use super::Args;

/// Error type of the binary.
pub type BinResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides log_level argument.
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Overlay command-line flags on loaded settings.
///
/// Inputs:
/// - `settings`: Settings from `dialogs.conf` and the environment.
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Updated settings, or an error for an unknown backend name.
///
/// Details:
/// - `--timeout 0` clears any configured timeout.
pub fn apply_cli_overrides(mut settings: Settings, args: &Args) -> BinResult<Settings> {
    if let Some(name) = &args.backend {
        let kind =
            BackendKind::from_name(name).ok_or_else(|| format!("unknown backend '{name}'"))?;
        settings.backend = Some(kind);
    }
    if let Some(secs) = args.timeout {
        settings.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
    if args.reject_quotes {
        settings.input_policy = InputPolicy::Reject;
    }
    Ok(settings)
}
