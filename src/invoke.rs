//! Running synthesized dialog commands.
//!
//! Dialogs block until the user answers. [`ShellRunner`] runs the command
//! through `sh -c`, drains stdout on a helper thread and polls the child so a
//! timeout or a [`CancelToken`] can kill it.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{DialogError, Result};

/// Poll interval while waiting for a dialog to close.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Shared flag that aborts a running dialog from another thread.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create an unfired token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the running dialog to close.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Return `true` once [`CancelToken::cancel`] has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Executes a shell command and returns its stdout.
///
/// Swapped out in tests to record commands and script answers.
pub trait CommandRunner: Send + Sync {
    /// What: Run `command` to completion.
    ///
    /// Inputs:
    /// - `command`: Full `sh -c` command line.
    ///
    /// Output:
    /// - Captured stdout, lossily decoded, or the reason the run was abandoned.
    ///
    /// # Errors
    /// - `Spawn` when the shell cannot be started; `TimedOut`/`Cancelled` when the run was aborted.
    fn run(&self, command: &str) -> Result<String>;
}

/// [`CommandRunner`] backed by `sh -c`.
#[derive(Clone, Debug, Default)]
pub struct ShellRunner {
    timeout: Option<Duration>,
    cancel: Option<CancelToken>,
}

impl ShellRunner {
    /// Runner without timeout or cancellation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill dialogs still open after `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Kill the dialog when `token` fires.
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// What: Wait for `child`, killing it on timeout or cancellation.
    ///
    /// Inputs:
    /// - `child`: Spawned shell.
    ///
    /// Output:
    /// - `Ok(())` once it exits on its own.
    fn wait(&self, child: &mut Child) -> Result<()> {
        let started = Instant::now();
        loop {
            if child.try_wait()?.is_some() {
                return Ok(());
            }
            let abort = if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                Some(DialogError::Cancelled)
            } else if self.timeout.is_some_and(|t| started.elapsed() >= t) {
                Some(DialogError::TimedOut)
            } else {
                None
            };
            if let Some(err) = abort {
                kill_dialog(child);
                let _ = child.wait();
                return Err(err);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

/// What: Kill the shell and every dialog it started.
///
/// Inputs:
/// - `child`: Shell spawned as the leader of its own process group.
///
/// Details:
/// - Compound commands run the dialog as a grandchild, so the whole group is signalled.
/// - Falls back to killing the shell alone when the group signal fails.
fn kill_dialog(child: &mut Child) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, killpg};
        use nix::unistd::Pid;

        if let Ok(pid) = i32::try_from(child.id()) {
            match killpg(Pid::from_raw(pid), Signal::SIGKILL) {
                Ok(()) => return,
                Err(e) => tracing::warn!(error = %e, "failed to kill dialog process group"),
            }
        }
    }
    if let Err(e) = child.kill() {
        tracing::warn!(error = %e, "failed to kill dialog process");
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<String> {
        tracing::debug!(command, "running dialog command");
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command])
            .stdin(Stdio::null())
            .stdout(Stdio::piped());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }
        let mut child = cmd.spawn()?;

        let (tx, rx) = mpsc::channel();
        if let Some(mut stdout) = child.stdout.take() {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = stdout.read_to_end(&mut buf);
                let _ = tx.send(buf);
            });
        } else {
            drop(tx);
        }

        self.wait(&mut child)?;
        let out = rx.recv().unwrap_or_default();
        let text = String::from_utf8_lossy(&out).into_owned();
        tracing::debug!(bytes = text.len(), "dialog command finished");
        Ok(text)
    }
}
