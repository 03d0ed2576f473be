//! External dialog tools and the commands that drive them.
//!
//! Each tool implements [`Backend`]; [`registry`] lists them in priority
//! order and [`select`] picks the first one the capability cache reports as
//! usable.

mod filters;
mod gtk;
mod kdialog;
mod tkinter;
mod yad;

use std::fmt;

use serde::Serialize;

use crate::parse;
use crate::probe::Capabilities;
use crate::types::{Buttons, FileRequest, FolderRequest, MessageRequest, Selection};

pub use filters::{generic_filter_args, kdialog_filter_arg, tkinter_filetypes};
pub use gtk::GtkDialog;
pub use kdialog::KDialog;
pub use tkinter::Tkinter;
pub use yad::Yad;

/// Known dialog tools, declared in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// KDE `kdialog`.
    KDialog,
    /// GNOME `zenity`.
    Zenity,
    /// MATE `matedialog`.
    MateDialog,
    /// `shellementary`.
    Shellementary,
    /// Qt `qarma`.
    Qarma,
    /// `yad`.
    Yad,
    /// Python `tkinter` run as a subprocess.
    Tkinter,
}

impl BackendKind {
    /// Every backend, most preferred first.
    pub const ALL: [Self; 7] = [
        Self::KDialog,
        Self::Zenity,
        Self::MateDialog,
        Self::Shellementary,
        Self::Qarma,
        Self::Yad,
        Self::Tkinter,
    ];

    /// Config and CLI name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::KDialog => "kdialog",
            Self::Zenity => "zenity",
            Self::MateDialog => "matedialog",
            Self::Shellementary => "shellementary",
            Self::Qarma => "qarma",
            Self::Yad => "yad",
            Self::Tkinter => "tkinter",
        }
    }

    /// What: Parse a backend name.
    ///
    /// Inputs:
    /// - `name`: Case-insensitive name; `python`/`python3` alias tkinter.
    ///
    /// Output:
    /// - `Some(kind)` when recognised.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        match lower.as_str() {
            "python" | "python3" => Some(Self::Tkinter),
            other => Self::ALL.into_iter().find(|k| k.name() == other),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One external dialog tool.
///
/// Command builders are pure string formatting: requests arrive already
/// screened for quotes, and the returned text is run through `sh -c`.
pub trait Backend: Send + Sync {
    /// Which tool this is.
    fn kind(&self) -> BackendKind;

    /// Return `true` if the tool can be used in this session.
    fn detect(&self, caps: &Capabilities) -> bool {
        caps.is_available(self.kind())
    }

    /// Command for a save dialog.
    fn save_file(&self, caps: &Capabilities, req: &FileRequest) -> String;

    /// Command for an open dialog, honouring `req.allow_multiple`.
    fn open_file(&self, caps: &Capabilities, req: &FileRequest) -> String;

    /// Command for a folder picker.
    fn select_folder(&self, caps: &Capabilities, req: &FolderRequest) -> String;

    /// Command for a message box that prints `1` or `0`.
    fn message_box(&self, caps: &Capabilities, req: &MessageRequest) -> String;

    /// Separator between paths of a multi-selection.
    fn separator(&self) -> char {
        '|'
    }

    /// Split file dialog output into paths.
    fn parse_files(&self, raw: &str, multiple: bool) -> Vec<String> {
        parse::split_selection(raw, self.separator(), multiple)
    }

    /// Map message box output to a [`Selection`].
    fn parse_answer(&self, raw: &str, buttons: Buttons) -> Selection {
        parse::parse_answer(raw, buttons)
    }
}

/// Every backend in priority order.
#[must_use]
pub fn registry() -> Vec<Box<dyn Backend>> {
    vec![
        Box::new(KDialog),
        Box::new(GtkDialog::zenity()),
        Box::new(GtkDialog::matedialog()),
        Box::new(GtkDialog::shellementary()),
        Box::new(GtkDialog::qarma()),
        Box::new(Yad),
        Box::new(Tkinter),
    ]
}

/// What: Pick the backend to use.
///
/// Inputs:
/// - `backends`: Candidates in priority order.
/// - `caps`: Capability cache.
/// - `forced`: Restrict the choice to this kind.
///
/// Output:
/// - The first detected candidate, or `None`.
pub fn select<'a>(
    backends: &'a [Box<dyn Backend>],
    caps: &Capabilities,
    forced: Option<BackendKind>,
) -> Option<&'a dyn Backend> {
    backends
        .iter()
        .filter(|b| forced.is_none_or(|k| k == b.kind()))
        .find(|b| b.detect(caps))
        .map(|b| &**b)
}

/// What: Escape text for use inside a double-quoted shell word.
///
/// Inputs:
/// - `s`: Caller text.
///
/// Output:
/// - `s` with `\`, `$` and `` ` `` backslash-escaped.
#[must_use]
pub fn shell_dq(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Shell tail turning the previous command's exit status into `1` (success) or `0`.
pub(crate) const STATUS_TO_ANSWER: &str = ";if [ $? = 0 ];then echo 1;else echo 0;fi";
