use super::{Backend, BackendKind, STATUS_TO_ANSWER, kdialog_filter_arg, shell_dq};
use crate::probe::Capabilities;
use crate::types::{Buttons, FileRequest, FolderRequest, MessageRequest, Style};

/// KDE `kdialog`.
#[derive(Clone, Copy, Debug, Default)]
pub struct KDialog;

impl KDialog {
    /// What: Shared prefix of every kdialog file command.
    ///
    /// Inputs:
    /// - `caps`: For the attach fragment.
    /// - `action`: e.g. `--getsavefilename`.
    /// - `title`, `path`: Request fields.
    /// - `filters`: Pre-encoded filter argument.
    ///
    /// Output:
    /// - `kdialog[ --attach=..] ACTION PATH[FILTERS][ --title "T"]`.
    ///
    /// Details:
    /// - Relative and empty paths are anchored at `$PWD/` since kdialog needs an absolute start.
    fn file_command(
        caps: &Capabilities,
        action: &str,
        title: &str,
        path: &str,
        filters: &str,
    ) -> String {
        let mut cmd = String::from("kdialog");
        if let Some(attach) = caps.attach_fragment(BackendKind::KDialog) {
            cmd.push_str(attach);
        }
        cmd.push(' ');
        cmd.push_str(action);
        cmd.push(' ');
        if path.is_empty() {
            cmd.push_str("$PWD/");
        } else {
            if !path.starts_with('/') {
                cmd.push_str("$PWD/");
            }
            cmd.push_str(&format!("\"{}\"", shell_dq(path)));
        }
        cmd.push_str(filters);
        if !title.is_empty() {
            cmd.push_str(&format!(" --title \"{}\"", shell_dq(title)));
        }
        cmd
    }
}

impl Backend for KDialog {
    fn kind(&self) -> BackendKind {
        BackendKind::KDialog
    }

    fn save_file(&self, caps: &Capabilities, req: &FileRequest) -> String {
        Self::file_command(
            caps,
            "--getsavefilename",
            &req.title,
            &req.default_path,
            &kdialog_filter_arg(&req.filters, req.all_files),
        )
    }

    fn open_file(&self, caps: &Capabilities, req: &FileRequest) -> String {
        let action = if req.allow_multiple {
            "--getopenfilename --multiple --separate-output"
        } else {
            "--getopenfilename"
        };
        Self::file_command(
            caps,
            action,
            &req.title,
            &req.default_path,
            &kdialog_filter_arg(&req.filters, req.all_files),
        )
    }

    fn select_folder(&self, caps: &Capabilities, req: &FolderRequest) -> String {
        Self::file_command(
            caps,
            "--getexistingdirectory",
            &req.title,
            &req.default_path,
            "",
        )
    }

    fn message_box(&self, caps: &Capabilities, req: &MessageRequest) -> String {
        let two_buttons = matches!(req.buttons, Buttons::OKCancel | Buttons::YesNo);
        let kind = match (two_buttons, req.style) {
            (true, Style::Warning | Style::Error) => "warningyesno",
            (true, _) => "yesno",
            (false, Style::Error) => "error",
            (false, Style::Warning) => "sorry",
            (false, _) => "msgbox",
        };
        let mut cmd = String::from("kdialog");
        if let Some(attach) = caps.attach_fragment(BackendKind::KDialog) {
            cmd.push_str(attach);
        }
        cmd.push_str(&format!(" --{kind} \"{}\"", shell_dq(&req.message)));
        match req.buttons {
            Buttons::OKCancel => cmd.push_str(" --yes-label OK --no-label Cancel"),
            Buttons::Quit => cmd.push_str(" --ok-label Quit"),
            Buttons::OK | Buttons::YesNo => {}
        }
        if !req.title.is_empty() {
            cmd.push_str(&format!(" --title \"{}\"", shell_dq(&req.title)));
        }
        cmd.push_str(STATUS_TO_ANSWER);
        cmd
    }

    fn separator(&self) -> char {
        '\n'
    }
}
