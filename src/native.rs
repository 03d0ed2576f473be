//! Native Windows dialogs via `rfd`.
//!
//! Filters are forwarded to `rfd::FileDialog::add_filter`, which wants bare
//! extensions, so `*.txt` becomes `txt`.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::types::{Buttons, FileRequest, FolderRequest, MessageRequest, Selection, Style};
use crate::validate::{last_part, parent_part};

/// What: Turn a glob into the bare extension `rfd` expects.
///
/// Inputs:
/// - `glob`: e.g. `*.txt`, `.md`, `*`.
///
/// Output:
/// - `Some("txt")`, `Some("md")`, `Some("*")`; `None` for an empty glob.
fn plain_extension(glob: &str) -> Option<String> {
    let ext = glob.trim().trim_start_matches('*').trim_start_matches('.');
    if ext.is_empty() {
        (glob.trim() == "*").then(|| "*".to_string())
    } else {
        Some(ext.to_string())
    }
}

fn file_dialog(req: &FileRequest) -> rfd::FileDialog {
    let mut d = rfd::FileDialog::new();
    if !req.title.is_empty() {
        d = d.set_title(&req.title);
    }
    if !req.default_path.is_empty() {
        let dir = parent_part(&req.default_path);
        if !dir.is_empty() {
            d = d.set_directory(dir);
        }
        let file = last_part(&req.default_path);
        if !file.is_empty() {
            d = d.set_file_name(file);
        }
    }
    for f in &req.filters {
        let exts: Vec<String> = f.globs().filter_map(plain_extension).collect();
        if !exts.is_empty() {
            d = d.add_filter(f.label(), exts.as_slice());
        }
    }
    if req.all_files {
        d = d.add_filter("All Files", &["*"]);
    }
    d
}

/// Show a save dialog; `None` when cancelled.
pub fn save_file(req: &FileRequest) -> Option<String> {
    tracing::trace!("rfd save dialog");
    file_dialog(req)
        .save_file()
        .map(|p| p.display().to_string())
}

/// Show an open dialog; empty when cancelled.
pub fn open_file(req: &FileRequest) -> Vec<String> {
    tracing::trace!(multiple = req.allow_multiple, "rfd open dialog");
    let dialog = file_dialog(req);
    let picked = if req.allow_multiple {
        dialog.pick_files().unwrap_or_default()
    } else {
        dialog.pick_file().into_iter().collect()
    };
    picked.iter().map(|p| p.display().to_string()).collect()
}

/// Show a folder picker; `None` when cancelled.
pub fn select_folder(req: &FolderRequest) -> Option<String> {
    let mut d = rfd::FileDialog::new();
    if !req.title.is_empty() {
        d = d.set_title(&req.title);
    }
    if !req.default_path.is_empty() {
        d = d.set_directory(&req.default_path);
    }
    d.pick_folder().map(|p| p.display().to_string())
}

/// What: Map the native answer to a [`Selection`].
///
/// Inputs:
/// - `result`: Button pressed.
/// - `buttons`: Buttons the box was shown with.
///
/// Output:
/// - Ok maps to OK (Quit for a Quit box); Cancel, Yes and No map directly; anything else is `None`.
fn map_result(result: &MessageDialogResult, buttons: Buttons) -> Selection {
    match result {
        MessageDialogResult::Ok if buttons == Buttons::Quit => Selection::Quit,
        MessageDialogResult::Ok => Selection::OK,
        MessageDialogResult::Custom(label) if label == "Quit" => Selection::Quit,
        MessageDialogResult::Cancel => Selection::Cancel,
        MessageDialogResult::Yes => Selection::Yes,
        MessageDialogResult::No => Selection::No,
        MessageDialogResult::Custom(_) => Selection::None,
    }
}

/// Show a modal message box.
pub fn message_box(req: &MessageRequest) -> Selection {
    let level = match req.style {
        Style::Error => MessageLevel::Error,
        Style::Warning => MessageLevel::Warning,
        Style::Info | Style::Question => MessageLevel::Info,
    };
    let buttons = match req.buttons {
        Buttons::OK => MessageButtons::Ok,
        Buttons::OKCancel => MessageButtons::OkCancel,
        Buttons::YesNo => MessageButtons::YesNo,
        Buttons::Quit => MessageButtons::OkCustom("Quit".to_string()),
    };
    let result = MessageDialog::new()
        .set_title(&req.title)
        .set_description(&req.message)
        .set_level(level)
        .set_buttons(buttons)
        .show();
    map_result(&result, req.buttons)
}
