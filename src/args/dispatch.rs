//! Running the requested dialog and printing its answer.

use std::process::ExitCode;

use serde_json::json;
use sysdialogs::{Dialogs, FileRequest, FolderRequest, MessageRequest, Selection, Settings};

use super::definition::{Args, Command, FileArgs};
use super::utils::{BinResult, apply_cli_overrides};

/// What the dialog produced, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user chose something (exit 0).
    Selected,
    /// Cancelled or nothing valid chosen (exit 1).
    Empty,
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Selected => 0,
            Self::Empty => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(value: Outcome) -> Self {
        Self::from(value.code())
    }
}

fn file_request(file: FileArgs) -> FileRequest {
    FileRequest::new(file.title)
        .default_path(file.path)
        .filters(file.filters)
        .all_files(!file.no_all_files)
}

/// What: Render a list of paths.
///
/// Inputs:
/// - `paths`: Chosen paths.
/// - `as_json`: Emit `{"paths": [...]}` instead of one path per line.
///
/// Output:
/// - Text to print; empty when there is nothing to print in plain mode.
fn render_paths(paths: &[String], as_json: bool) -> String {
    if as_json {
        json!({ "paths": paths }).to_string()
    } else {
        paths.join("\n")
    }
}

fn render_selection(selection: Selection, as_json: bool) -> String {
    if as_json {
        json!({ "selection": selection }).to_string()
    } else {
        selection.as_str().to_string()
    }
}

fn emit(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}

/// What: Execute the parsed command line.
///
/// Inputs:
/// - `args`: Parsed arguments.
///
/// Output:
/// - [`Outcome`] of the dialog, or the error that prevented showing it.
///
/// Details:
/// - Settings come from `dialogs.conf` and `SYSDIALOGS_*`, then the CLI flags.
pub fn run(args: Args) -> BinResult<Outcome> {
    let settings = apply_cli_overrides(Settings::load(), &args)?;
    tracing::debug!(?settings, "effective settings");
    let dialogs = Dialogs::with_settings(settings);
    let as_json = args.json;

    match args.command {
        Command::Save(file) => {
            let answer = dialogs.try_save_file(&file_request(file))?;
            let paths: Vec<String> = answer.into_iter().collect();
            emit(&render_paths(&paths, as_json));
            Ok(outcome(!paths.is_empty()))
        }
        Command::Open { file, multiple } => {
            let req = file_request(file).allow_multiple(multiple);
            let paths = dialogs.try_open_file(&req)?;
            emit(&render_paths(&paths, as_json));
            Ok(outcome(!paths.is_empty()))
        }
        Command::Folder { title, path } => {
            let answer = dialogs.try_select_folder(&FolderRequest::new(title, path))?;
            let paths: Vec<String> = answer.into_iter().collect();
            emit(&render_paths(&paths, as_json));
            Ok(outcome(!paths.is_empty()))
        }
        Command::Message {
            title,
            text,
            style,
            buttons,
        } => {
            let req = MessageRequest::new(title, text)
                .style(style.into())
                .buttons(buttons.into());
            let selection = dialogs.try_show_msg_box(&req)?;
            emit(&render_selection(selection, as_json));
            Ok(outcome(selection != Selection::None))
        }
        Command::Probe => {
            let report = dialogs.probe_report();
            if as_json {
                println!(
                    "{}",
                    json!({ "active": dialogs.active_backend(), "backends": report })
                );
            } else {
                for status in &report {
                    let state = if status.available { "available" } else { "missing" };
                    println!("{:<14}{state}", status.backend.name());
                }
            }
            Ok(outcome(dialogs.active_backend().is_some()))
        }
    }
}

const fn outcome(selected: bool) -> Outcome {
    if selected {
        Outcome::Selected
    } else {
        Outcome::Empty
    }
}
