//! Native and external file, folder and message dialogs.
//!
//! On Windows the operating system's dialogs are shown through `rfd`. Elsewhere
//! the best installed dialog tool (kdialog, zenity, matedialog, shellementary,
//! qarma, yad or Python tkinter) is detected at runtime and driven through the
//! shell.
//!
//! The free functions below share one lazily created [`Dialogs`]; create your
//! own [`Dialogs`] for custom settings, a cancel token, or the `try_*` calls
//! that report why no answer came back.

pub mod backend;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod invoke;
#[cfg(windows)]
pub mod native;
pub mod parse;
pub mod probe;
pub mod types;
pub mod validate;

use std::sync::OnceLock;

pub use backend::BackendKind;
pub use config::{InputPolicy, Settings};
pub use dialogs::{BackendStatus, Dialogs};
pub use error::{DialogError, Result};
pub use invoke::{CancelToken, CommandRunner, ShellRunner};
pub use types::{
    Buttons, FileRequest, FilterPattern, FolderRequest, MessageRequest, Selection, Style,
};

/// Process-wide dialogs, configured from `dialogs.conf` and the environment on first use.
fn shared() -> &'static Dialogs {
    static SHARED: OnceLock<Dialogs> = OnceLock::new();
    SHARED.get_or_init(Dialogs::new)
}

fn file_request<I, F>(title: &str, default_path: &str, filters: I, all_files: bool) -> FileRequest
where
    I: IntoIterator<Item = F>,
    F: Into<FilterPattern>,
{
    FileRequest::new(title)
        .default_path(default_path)
        .filters(filters)
        .all_files(all_files)
}

/// What: Ask the user where to save a file.
///
/// Inputs:
/// - `title`: Window title.
/// - `default_path`: Initial directory and/or file name.
/// - `filters`: `(name, "*.a;*.b")` pairs or [`FilterPattern`]s.
/// - `all_files`: Append an "All Files" filter.
///
/// Output:
/// - The chosen path, or an empty string when cancelled or invalid.
pub fn save_file<I, F>(title: &str, default_path: &str, filters: I, all_files: bool) -> String
where
    I: IntoIterator<Item = F>,
    F: Into<FilterPattern>,
{
    shared().save_file(&file_request(title, default_path, filters, all_files))
}

/// What: Ask the user for one or more existing files.
///
/// Inputs:
/// - `title`, `default_path`, `filters`, `all_files`: As for [`save_file`].
/// - `allow_multiple`: Allow selecting several files.
///
/// Output:
/// - Existing files chosen, in dialog order; empty when cancelled.
pub fn open_file<I, F>(
    title: &str,
    default_path: &str,
    filters: I,
    allow_multiple: bool,
    all_files: bool,
) -> Vec<String>
where
    I: IntoIterator<Item = F>,
    F: Into<FilterPattern>,
{
    shared().open_file(
        &file_request(title, default_path, filters, all_files).allow_multiple(allow_multiple),
    )
}

/// Ask for exactly one existing file; empty string when cancelled.
pub fn open_single_file<I, F>(title: &str, default_path: &str, filters: I, all_files: bool) -> String
where
    I: IntoIterator<Item = F>,
    F: Into<FilterPattern>,
{
    shared().open_single_file(&file_request(title, default_path, filters, all_files))
}

/// Ask for any number of existing files; empty when cancelled.
pub fn open_multiple_files<I, F>(
    title: &str,
    default_path: &str,
    filters: I,
    all_files: bool,
) -> Vec<String>
where
    I: IntoIterator<Item = F>,
    F: Into<FilterPattern>,
{
    shared().open_multiple_files(&file_request(title, default_path, filters, all_files))
}

/// Ask for an existing directory; empty string when cancelled.
pub fn select_folder(title: &str, default_path: &str) -> String {
    shared().select_folder(&FolderRequest::new(title, default_path))
}

/// What: Show a message box.
///
/// Inputs:
/// - `title`, `message`: Texts; the message may span several lines.
/// - `style`: Icon.
/// - `buttons`: Button set.
///
/// Output:
/// - The button pressed, or [`Selection::Error`] when no box could be shown.
pub fn show_msg_box(title: &str, message: &str, style: Style, buttons: Buttons) -> Selection {
    shared().show_msg_box(
        &MessageRequest::new(title, message)
            .style(style)
            .buttons(buttons),
    )
}
