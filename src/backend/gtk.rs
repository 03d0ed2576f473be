//! Zenity and its look-alikes.
//!
//! Zenity, matedialog, shellementary and qarma share one command-line
//! dialect; they differ only in program name, attach support and whether
//! `--icon-name` is understood.

use super::{Backend, BackendKind, STATUS_TO_ANSWER, generic_filter_args, shell_dq};
use crate::probe::Capabilities;
use crate::types::{Buttons, FileRequest, FolderRequest, MessageRequest, Style};

/// One zenity-compatible tool.
#[derive(Clone, Copy, Debug)]
pub struct GtkDialog {
    kind: BackendKind,
    program: &'static str,
    icons: bool,
}

impl GtkDialog {
    /// GNOME `zenity`.
    #[must_use]
    pub const fn zenity() -> Self {
        Self {
            kind: BackendKind::Zenity,
            program: "zenity",
            icons: true,
        }
    }

    /// MATE `matedialog`.
    #[must_use]
    pub const fn matedialog() -> Self {
        Self {
            kind: BackendKind::MateDialog,
            program: "matedialog",
            icons: false,
        }
    }

    /// `shellementary`.
    #[must_use]
    pub const fn shellementary() -> Self {
        Self {
            kind: BackendKind::Shellementary,
            program: "shellementary",
            icons: true,
        }
    }

    /// Qt `qarma`.
    #[must_use]
    pub const fn qarma() -> Self {
        Self {
            kind: BackendKind::Qarma,
            program: "qarma",
            icons: true,
        }
    }

    fn head(&self, caps: &Capabilities) -> String {
        let mut cmd = String::from(self.program);
        if let Some(attach) = caps.attach_fragment(self.kind) {
            cmd.push_str(attach);
        }
        cmd
    }

    /// What: Build a `--file-selection` command.
    ///
    /// Inputs:
    /// - `caps`: For the attach fragment.
    /// - `action`: Flags following `--file-selection`, e.g. ` --save --confirm-overwrite`.
    /// - `title`, `path`: Request fields; omitted when empty.
    /// - `filters`: Pre-encoded `--file-filter` flags.
    ///
    /// Output:
    /// - Full command with stderr silenced.
    fn file_command(
        &self,
        caps: &Capabilities,
        action: &str,
        title: &str,
        path: &str,
        filters: &str,
    ) -> String {
        let mut cmd = self.head(caps);
        cmd.push_str(" --file-selection");
        cmd.push_str(action);
        cmd.push_str(&generic_tail(title, path, filters));
        cmd
    }
}

/// Title, filename and filter flags shared with yad, followed by `2>/dev/null`.
pub(super) fn generic_tail(title: &str, path: &str, filters: &str) -> String {
    let mut out = String::new();
    if !title.is_empty() {
        out.push_str(&format!(" --title=\"{}\"", shell_dq(title)));
    }
    if !path.is_empty() {
        out.push_str(&format!(" --filename=\"{}\"", shell_dq(path)));
    }
    out.push_str(filters);
    out.push_str(" 2>/dev/null");
    out
}

const fn icon_name(style: Style) -> &'static str {
    match style {
        Style::Question => "question",
        Style::Error => "error",
        Style::Warning => "warning",
        Style::Info => "information",
    }
}

impl Backend for GtkDialog {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn save_file(&self, caps: &Capabilities, req: &FileRequest) -> String {
        self.file_command(
            caps,
            " --save --confirm-overwrite",
            &req.title,
            &req.default_path,
            &generic_filter_args(&req.filters, req.all_files),
        )
    }

    fn open_file(&self, caps: &Capabilities, req: &FileRequest) -> String {
        let action = if req.allow_multiple { " --multiple" } else { "" };
        self.file_command(
            caps,
            action,
            &req.title,
            &req.default_path,
            &generic_filter_args(&req.filters, req.all_files),
        )
    }

    fn select_folder(&self, caps: &Capabilities, req: &FolderRequest) -> String {
        self.file_command(caps, " --directory", &req.title, &req.default_path, "")
    }

    fn message_box(&self, caps: &Capabilities, req: &MessageRequest) -> String {
        let verb = match (req.buttons, req.style) {
            (Buttons::OKCancel, _) => "question --ok-label=OK --cancel-label=Cancel",
            (Buttons::YesNo, _) => "question",
            (_, Style::Error) => "error",
            (_, Style::Warning) => "warning",
            _ => "info",
        };
        let mut cmd = format!("szAnswer=$({} --{verb}", self.head(caps));
        if req.buttons == Buttons::Quit {
            cmd.push_str(" --ok-label=Quit");
        }
        if !req.title.is_empty() {
            cmd.push_str(&format!(" --title=\"{}\"", shell_dq(&req.title)));
        }
        if !req.message.is_empty() {
            cmd.push_str(&format!(" --text=\"{}\"", shell_dq(&req.message)));
        }
        if self.icons {
            cmd.push_str(" --icon-name=dialog-");
            cmd.push_str(icon_name(req.style));
        }
        cmd.push_str(" 2>/dev/null)");
        cmd.push_str(STATUS_TO_ANSWER);
        cmd
    }
}
