use super::gtk::generic_tail;
use super::{Backend, BackendKind, generic_filter_args, shell_dq};
use crate::probe::Capabilities;
use crate::types::{Buttons, FileRequest, FolderRequest, MessageRequest, Style};

/// `yad`, a zenity fork with custom button support.
#[derive(Clone, Copy, Debug, Default)]
pub struct Yad;

impl Backend for Yad {
    fn kind(&self) -> BackendKind {
        BackendKind::Yad
    }

    fn save_file(&self, _caps: &Capabilities, req: &FileRequest) -> String {
        format!(
            "yad --file-selection --save --confirm-overwrite{}",
            generic_tail(
                &req.title,
                &req.default_path,
                &generic_filter_args(&req.filters, req.all_files)
            )
        )
    }

    fn open_file(&self, _caps: &Capabilities, req: &FileRequest) -> String {
        let multiple = if req.allow_multiple { " --multiple" } else { "" };
        format!(
            "yad --file-selection{multiple}{}",
            generic_tail(
                &req.title,
                &req.default_path,
                &generic_filter_args(&req.filters, req.all_files)
            )
        )
    }

    fn select_folder(&self, _caps: &Capabilities, req: &FolderRequest) -> String {
        format!(
            "yad --file-selection --directory{}",
            generic_tail(&req.title, &req.default_path, "")
        )
    }

    /// Buttons exit with 1 for the affirmative choice and 0 otherwise; the
    /// exit status is echoed as the answer.
    fn message_box(&self, _caps: &Capabilities, req: &MessageRequest) -> String {
        let buttons = match req.buttons {
            Buttons::OK => "--button=OK:1",
            Buttons::OKCancel => "--button=OK:1 --button=Cancel:0",
            Buttons::YesNo => "--button=Yes:1 --button=No:0",
            Buttons::Quit => "--button=Quit:1",
        };
        let image = match req.style {
            Style::Error => "dialog-error",
            Style::Warning => "dialog-warning",
            Style::Question => "dialog-question",
            Style::Info => "dialog-information",
        };
        let mut cmd = format!("szAnswer=$(yad {buttons} --image={image}");
        if !req.title.is_empty() {
            cmd.push_str(&format!(" --title=\"{}\"", shell_dq(&req.title)));
        }
        if !req.message.is_empty() {
            cmd.push_str(&format!(" --text=\"{}\"", shell_dq(&req.message)));
        }
        cmd.push_str(" 2>/dev/null);echo $?");
        cmd
    }
}
