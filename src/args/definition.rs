//! Command-line argument definition.

use clap::{Parser, Subcommand, ValueEnum};
use sysdialogs::{Buttons, FilterPattern, Style};

use super::filter::parse_filter;

/// sysdialog - show a file, folder or message dialog and print the answer
#[derive(Parser, Debug)]
#[command(name = "sysdialog")]
#[command(version)]
#[command(about = "Show a native or external dialog and print the user's answer", long_about = None)]
pub struct Args {
    /// Use only this dialog backend (kdialog, zenity, matedialog, shellementary, qarma, yad, tkinter)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Close the dialog after this many seconds (0 waits forever)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Fail instead of substituting placeholders when input contains quotes
    #[arg(long, global = true)]
    pub reject_quotes: bool,

    /// Print the answer as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dialog to show
    #[command(subcommand)]
    pub command: Command,
}

/// Dialog kinds.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask where to save a file
    Save(FileArgs),
    /// Ask for existing files
    Open {
        /// Title, path and filters
        #[command(flatten)]
        file: FileArgs,
        /// Allow selecting several files
        #[arg(long)]
        multiple: bool,
    },
    /// Ask for an existing directory
    Folder {
        /// Window title
        #[arg(long, default_value = "")]
        title: String,
        /// Start directory
        #[arg(long, default_value = "")]
        path: String,
    },
    /// Show a message box
    Message {
        /// Window title
        #[arg(long, default_value = "")]
        title: String,
        /// Message text
        #[arg(long, default_value = "")]
        text: String,
        /// Icon
        #[arg(long, value_enum, default_value_t = StyleArg::Info)]
        style: StyleArg,
        /// Button set
        #[arg(long, value_enum, default_value_t = ButtonsArg::Ok)]
        buttons: ButtonsArg,
    },
    /// List dialog backends and whether each is usable here
    Probe,
}

/// Options shared by `save` and `open`.
#[derive(clap::Args, Debug)]
pub struct FileArgs {
    /// Window title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Initial directory and/or file name
    #[arg(long, default_value = "")]
    pub path: String,

    /// File filter as "Name=*.a;*.b" (repeatable)
    #[arg(long = "filter", value_parser = parse_filter)]
    pub filters: Vec<FilterPattern>,

    /// Do not append the "All Files" filter
    #[arg(long)]
    pub no_all_files: bool,
}

/// `--style` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Information icon
    Info,
    /// Warning icon
    Warning,
    /// Error icon
    Error,
    /// Question icon
    Question,
}

impl From<StyleArg> for Style {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::Info => Self::Info,
            StyleArg::Warning => Self::Warning,
            StyleArg::Error => Self::Error,
            StyleArg::Question => Self::Question,
        }
    }
}

/// `--buttons` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ButtonsArg {
    /// OK
    #[value(name = "ok")]
    Ok,
    /// OK and Cancel
    #[value(name = "okcancel")]
    OkCancel,
    /// Yes and No
    #[value(name = "yesno")]
    YesNo,
    /// Quit
    #[value(name = "quit")]
    Quit,
}

impl From<ButtonsArg> for Buttons {
    fn from(value: ButtonsArg) -> Self {
        match value {
            ButtonsArg::Ok => Self::OK,
            ButtonsArg::OkCancel => Self::OKCancel,
            ButtonsArg::YesNo => Self::YesNo,
            ButtonsArg::Quit => Self::Quit,
        }
    }
}
