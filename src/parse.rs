//! Turning dialog tool stdout into answers.

use crate::types::{Buttons, Selection};

/// What: Remove exactly one trailing newline.
///
/// Inputs:
/// - `raw`: Captured stdout.
///
/// Output:
/// - `raw` without its final `\n` (and a `\r` right before it, if any).
#[must_use]
pub fn strip_trailing_newline(raw: &str) -> &str {
    raw.strip_suffix('\n')
        .map_or(raw, |s| s.strip_suffix('\r').unwrap_or(s))
}

/// What: Split a file dialog answer into paths.
///
/// Inputs:
/// - `raw`: Captured stdout.
/// - `separator`: Tool-specific separator (`'\n'` for kdialog, `'|'` for the others).
/// - `multiple`: Whether the dialog allowed several selections.
///
/// Output:
/// - Paths in dialog order; empty when nothing was chosen.
///
/// Details:
/// - Single selection keeps the whole (newline-stripped) answer as one path.
/// - Empty tokens produced by the split are dropped.
#[must_use]
pub fn split_selection(raw: &str, separator: char, multiple: bool) -> Vec<String> {
    let text = strip_trailing_newline(raw);
    if text.is_empty() {
        return Vec::new();
    }
    if !multiple {
        return vec![text.to_string()];
    }
    text.split(separator)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// What: Map a message box answer to a [`Selection`].
///
/// Inputs:
/// - `raw`: Captured stdout, normally `"1"` or `"0"`.
/// - `buttons`: Buttons the box was shown with.
///
/// Output:
/// - The selection per the answer table; anything unrecognised maps to [`Selection::Quit`].
#[must_use]
pub fn parse_answer(raw: &str, buttons: Buttons) -> Selection {
    match (strip_trailing_newline(raw), buttons) {
        ("1", Buttons::YesNo) => Selection::Yes,
        ("1", Buttons::OK | Buttons::OKCancel) => Selection::OK,
        ("0", Buttons::YesNo) => Selection::No,
        ("0", Buttons::OKCancel) => Selection::Cancel,
        _ => Selection::Quit,
    }
}
