//! The [`Dialogs`] entry point.
//!
//! Ties together settings, the capability cache, the backend registry and the
//! command runner. Each call screens the request, builds the command for the
//! selected backend, runs it, parses stdout and post-validates the answer.
//!
//! Two API families are exposed: the `try_*` calls report a [`DialogError`],
//! the plain calls collapse every failure to an empty answer.

use std::sync::Arc;

use serde::Serialize;

use crate::backend::{self, Backend, BackendKind};
use crate::config::Settings;
use crate::error::{DialogError, Result};
use crate::invoke::{CommandRunner, ShellRunner};
use crate::parse::strip_trailing_newline;
use crate::probe::{Capabilities, Probe, SystemProbe};
use crate::types::{FileRequest, FolderRequest, MessageRequest, Selection};
use crate::validate;

/// One line of [`Dialogs::probe_report`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BackendStatus {
    /// Backend checked.
    pub backend: BackendKind,
    /// Whether it can be used in this session.
    pub available: bool,
}

/// Dialog front end owning its capability cache.
pub struct Dialogs {
    settings: Settings,
    caps: Capabilities,
    runner: Box<dyn CommandRunner>,
    backends: Vec<Box<dyn Backend>>,
}

impl std::fmt::Debug for Dialogs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialogs")
            .field("settings", &self.settings)
            .field("caps", &self.caps)
            .finish_non_exhaustive()
    }
}

impl Default for Dialogs {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialogs {
    /// Dialogs configured from `dialogs.conf` and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::load())
    }

    /// What: Dialogs using explicit settings and the real system.
    ///
    /// Inputs:
    /// - `settings`: Backend override, timeout, input policy and so on.
    ///
    /// Output:
    /// - A `Dialogs` probing through [`SystemProbe`] and running commands with [`ShellRunner`].
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        let runner = ShellRunner::new().with_timeout(settings.timeout);
        Self::with_parts(settings, Arc::new(SystemProbe), Box::new(runner))
    }

    /// What: Dialogs assembled from caller-supplied parts.
    ///
    /// Inputs:
    /// - `settings`: Library settings.
    /// - `probe`: Environment and process access for detection.
    /// - `runner`: Executes synthesized commands.
    ///
    /// Output:
    /// - A `Dialogs` with an empty capability cache.
    ///
    /// Details:
    /// - Used by tests to inject fakes, and by callers wanting a [`crate::invoke::CancelToken`].
    #[must_use]
    pub fn with_parts(
        settings: Settings,
        probe: Arc<dyn Probe>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        let caps = Capabilities::new(probe, settings.python.clone(), settings.attach_window);
        Self {
            settings,
            caps,
            runner,
            backends: backend::registry(),
        }
    }

    /// Active settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Capability cache backing backend selection.
    #[must_use]
    pub const fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    fn backend(&self) -> Result<&dyn Backend> {
        backend::select(&self.backends, &self.caps, self.settings.backend).ok_or_else(|| {
            tracing::warn!(forced = ?self.settings.backend, "no usable dialog backend");
            DialogError::NoBackend
        })
    }

    /// Backend the next dialog would use, if any.
    pub fn active_backend(&self) -> Option<BackendKind> {
        backend::select(&self.backends, &self.caps, self.settings.backend).map(|b| b.kind())
    }

    /// Availability of every backend, in priority order.
    pub fn probe_report(&self) -> Vec<BackendStatus> {
        self.backends
            .iter()
            .map(|b| BackendStatus {
                backend: b.kind(),
                available: b.detect(&self.caps),
            })
            .collect()
    }

    fn run(&self, kind: BackendKind, command: &str) -> Result<String> {
        tracing::debug!(backend = %kind, command, "invoking dialog");
        self.runner.run(command).inspect_err(|e| {
            tracing::warn!(backend = %kind, error = %e, "dialog command failed");
        })
    }

    /// What: Show a save dialog.
    ///
    /// Inputs:
    /// - `req`: Title, default path, filters and the all-files flag.
    ///
    /// Output:
    /// - `Ok(Some(path))` for a valid choice, `Ok(None)` when cancelled.
    ///
    /// # Errors
    /// - `NoBackend`, `Spawn`, `TimedOut`, `Cancelled`, `QuotedInput` (reject policy),
    ///   or `InvalidPath` when the parent directory is missing or the file name is illegal.
    pub fn try_save_file(&self, req: &FileRequest) -> Result<Option<String>> {
        let req = validate::screen_file_request(req, self.settings.input_policy)?;
        #[cfg(windows)]
        let raw = crate::native::save_file(&req).unwrap_or_default();
        #[cfg(not(windows))]
        let raw = {
            let backend = self.backend()?;
            let out = self.run(backend.kind(), &backend.save_file(&self.caps, &req))?;
            strip_trailing_newline(&out).to_string()
        };
        validate::check_saved_path(raw)
    }

    /// What: Show an open dialog.
    ///
    /// Inputs:
    /// - `req`: Request; `allow_multiple` decides single or multi-select.
    ///
    /// Output:
    /// - Chosen paths that exist as regular files, in dialog order; empty when cancelled.
    ///
    /// # Errors
    /// - `NoBackend`, `Spawn`, `TimedOut`, `Cancelled` or `QuotedInput`.
    pub fn try_open_file(&self, req: &FileRequest) -> Result<Vec<String>> {
        let req = validate::screen_file_request(req, self.settings.input_policy)?;
        #[cfg(windows)]
        let paths = crate::native::open_file(&req);
        #[cfg(not(windows))]
        let paths = {
            let backend = self.backend()?;
            let out = self.run(backend.kind(), &backend.open_file(&self.caps, &req))?;
            backend.parse_files(&out, req.allow_multiple)
        };
        Ok(validate::retain_existing_files(paths))
    }

    /// Single-selection open dialog; see [`Dialogs::try_open_file`].
    ///
    /// # Errors
    /// - As [`Dialogs::try_open_file`].
    pub fn try_open_single_file(&self, req: &FileRequest) -> Result<Option<String>> {
        let req = req.clone().allow_multiple(false);
        Ok(self.try_open_file(&req)?.into_iter().next())
    }

    /// What: Show a folder picker.
    ///
    /// Inputs:
    /// - `req`: Title and start directory.
    ///
    /// Output:
    /// - `Ok(Some(dir))` for an existing directory, `Ok(None)` when cancelled.
    ///
    /// # Errors
    /// - `NoBackend`, `Spawn`, `TimedOut`, `Cancelled`, `QuotedInput`, or `InvalidPath`.
    pub fn try_select_folder(&self, req: &FolderRequest) -> Result<Option<String>> {
        let req = validate::screen_folder_request(req, self.settings.input_policy)?;
        #[cfg(windows)]
        let raw = crate::native::select_folder(&req).unwrap_or_default();
        #[cfg(not(windows))]
        let raw = {
            let backend = self.backend()?;
            let out = self.run(backend.kind(), &backend.select_folder(&self.caps, &req))?;
            strip_trailing_newline(&out).to_string()
        };
        validate::check_folder(raw)
    }

    /// What: Show a message box.
    ///
    /// Inputs:
    /// - `req`: Title, message, style and buttons.
    ///
    /// Output:
    /// - The button chosen; [`Selection::Quit`] when the tool answered something unexpected.
    ///
    /// # Errors
    /// - `NoBackend`, `Spawn`, `TimedOut`, `Cancelled` or `QuotedInput`.
    pub fn try_show_msg_box(&self, req: &MessageRequest) -> Result<Selection> {
        let req = validate::screen_message_request(req, self.settings.input_policy)?;
        #[cfg(windows)]
        {
            Ok(crate::native::message_box(&req))
        }
        #[cfg(not(windows))]
        {
            let backend = self.backend()?;
            let out = self.run(backend.kind(), &backend.message_box(&self.caps, &req))?;
            Ok(backend.parse_answer(&out, req.buttons))
        }
    }

    /// Save dialog; empty string when cancelled or on any failure.
    pub fn save_file(&self, req: &FileRequest) -> String {
        self.try_save_file(req)
            .inspect_err(log_collapsed)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Open dialog; empty when cancelled or on any failure.
    pub fn open_file(&self, req: &FileRequest) -> Vec<String> {
        self.try_open_file(req)
            .inspect_err(log_collapsed)
            .unwrap_or_default()
    }

    /// Single-selection open dialog; empty string when nothing valid was chosen.
    pub fn open_single_file(&self, req: &FileRequest) -> String {
        self.try_open_single_file(req)
            .inspect_err(log_collapsed)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Multi-selection open dialog; empty when nothing valid was chosen.
    pub fn open_multiple_files(&self, req: &FileRequest) -> Vec<String> {
        self.open_file(&req.clone().allow_multiple(true))
    }

    /// Folder picker; empty string when cancelled or on any failure.
    pub fn select_folder(&self, req: &FolderRequest) -> String {
        self.try_select_folder(req)
            .inspect_err(log_collapsed)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// What: Message box that never fails.
    ///
    /// Inputs:
    /// - `req`: Message box request.
    ///
    /// Output:
    /// - The chosen button, [`Selection::Error`] when no box could be shown,
    ///   [`Selection::None`] when it was closed by a timeout or cancel token.
    pub fn show_msg_box(&self, req: &MessageRequest) -> Selection {
        match self.try_show_msg_box(req) {
            Ok(sel) => sel,
            Err(DialogError::TimedOut | DialogError::Cancelled) => Selection::None,
            Err(e) => {
                log_collapsed(&e);
                Selection::Error
            }
        }
    }
}

fn log_collapsed(e: &DialogError) {
    tracing::debug!(error = %e, "dialog failure collapsed to empty answer");
}
