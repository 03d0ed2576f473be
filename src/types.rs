//! Request and answer types shared by every backend.

use serde::Serialize;

/// A file-type filter shown in file dialogs, e.g. `("Text Files", "*.txt;*.TS")`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterPattern {
    /// Display name; empty means the glob list doubles as the label.
    pub name: String,
    /// Semicolon-separated glob list.
    pub extensions: String,
}

impl FilterPattern {
    /// Create a filter from a display name and a semicolon-separated glob list.
    pub fn new(name: impl Into<String>, extensions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.into(),
        }
    }

    /// What: Label shown to the user for this filter.
    ///
    /// Inputs:
    /// - None (uses `self`).
    ///
    /// Output:
    /// - The name, or the glob list when the name is empty.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.extensions
        } else {
            &self.name
        }
    }

    /// Individual globs, in the order given.
    pub fn globs(&self) -> impl Iterator<Item = &str> {
        self.extensions
            .split(';')
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}

impl<N: Into<String>, E: Into<String>> From<(N, E)> for FilterPattern {
    fn from(value: (N, E)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Everything a save or open dialog needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRequest {
    /// Window title; may be empty.
    pub title: String,
    /// Initial directory and/or file name; may be empty.
    pub default_path: String,
    /// Filters in display order.
    pub filters: Vec<FilterPattern>,
    /// Allow selecting more than one file (open dialogs only).
    pub allow_multiple: bool,
    /// Append an "All Files" filter.
    pub all_files: bool,
}

impl Default for FileRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            default_path: String::new(),
            filters: Vec::new(),
            allow_multiple: false,
            all_files: true,
        }
    }
}

impl FileRequest {
    /// Start a request with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the initial path and file name.
    #[must_use]
    pub fn default_path(mut self, path: impl Into<String>) -> Self {
        self.default_path = path.into();
        self
    }

    /// What: Append one filter.
    ///
    /// Inputs:
    /// - `filter`: Anything convertible into a [`FilterPattern`], e.g. a `(name, globs)` tuple.
    ///
    /// Output:
    /// - The updated request.
    ///
    /// Details:
    /// - A filter with no globs is dropped so a present filter always carries at least one glob.
    #[must_use]
    pub fn filter(mut self, filter: impl Into<FilterPattern>) -> Self {
        let filter = filter.into();
        if filter.globs().next().is_some() {
            self.filters.push(filter);
        }
        self
    }

    /// Append several filters.
    #[must_use]
    pub fn filters<I, F>(self, filters: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FilterPattern>,
    {
        filters.into_iter().fold(self, |req, f| req.filter(f))
    }

    /// Allow or forbid selecting several files.
    #[must_use]
    pub const fn allow_multiple(mut self, yes: bool) -> Self {
        self.allow_multiple = yes;
        self
    }

    /// Add or omit the trailing "All Files" filter.
    #[must_use]
    pub const fn all_files(mut self, yes: bool) -> Self {
        self.all_files = yes;
        self
    }
}

/// Request for a folder picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderRequest {
    /// Window title; may be empty.
    pub title: String,
    /// Initial directory; may be empty.
    pub default_path: String,
}

impl FolderRequest {
    /// Create a folder request.
    pub fn new(title: impl Into<String>, default_path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            default_path: default_path.into(),
        }
    }
}

/// Icon / severity of a message box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Informational.
    #[default]
    Info,
    /// Warning.
    Warning,
    /// Error.
    Error,
    /// Question.
    Question,
}

/// Button set of a message box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Buttons {
    /// A single OK button.
    #[default]
    OK,
    /// OK and Cancel.
    OKCancel,
    /// Yes and No.
    YesNo,
    /// A single button labelled Quit.
    Quit,
}

/// Outcome of a message box.
///
/// `None` means no option was chosen; `Error` means the box could not be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// The box could not be created.
    Error,
    /// Nothing was selected.
    None,
    /// OK.
    OK,
    /// Cancel.
    Cancel,
    /// Yes.
    Yes,
    /// No.
    No,
    /// Quit, or the box was closed.
    Quit,
}

impl Selection {
    /// Lower-case name used by the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::None => "none",
            Self::OK => "ok",
            Self::Cancel => "cancel",
            Self::Yes => "yes",
            Self::No => "no",
            Self::Quit => "quit",
        }
    }
}

/// Request for a message box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageRequest {
    /// Window title.
    pub title: String,
    /// Body text; may contain newlines.
    pub message: String,
    /// Icon / severity.
    pub style: Style,
    /// Button set.
    pub buttons: Buttons,
}

impl MessageRequest {
    /// Create a message box request with [`Style::Info`] and [`Buttons::OK`].
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Set the style.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the buttons.
    #[must_use]
    pub const fn buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }
}
