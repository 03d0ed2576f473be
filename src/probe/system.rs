use std::process::{Command, Stdio};

use super::Probe;

/// [`Probe`] backed by the real `PATH`, shell and environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProbe;

impl Probe for SystemProbe {
    fn on_path(&self, program: &str) -> bool {
        let found = command_on_path(program);
        tracing::debug!(program, found, "probed executable");
        found
    }

    fn capture(&self, shell_command: &str) -> Option<String> {
        let output = Command::new("sh")
            .args(["-c", shell_command])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn is_darwin(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

/// What: Return `true` if an executable named `cmd` can be found in the current `PATH`.
///
/// Inputs:
/// - `cmd`: Program name or path.
///
/// Output:
/// - `true` when `which` resolves it to an executable file.
pub fn command_on_path(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}
