//! Filter encodings, one per tool family.

use super::shell_dq;
use crate::types::FilterPattern;

/// What: Kdialog filter argument.
///
/// Inputs:
/// - `filters`: Request filters.
/// - `all_files`: Append "All Files (*.*)".
///
/// Output:
/// - ` "Label (*.a *.b)\nOther (*.c)\nAll Files (*.*)"`, or an empty string when there is nothing to show.
///
/// Details:
/// - Globs are space-separated; entries are newline-separated inside one quoted argument.
#[must_use]
pub fn kdialog_filter_arg(filters: &[FilterPattern], all_files: bool) -> String {
    let mut lines: Vec<String> = filters
        .iter()
        .map(|f| {
            let globs = f.globs().map(shell_dq).collect::<Vec<_>>().join(" ");
            format!("{} ({globs})", shell_dq(f.label()))
        })
        .collect();
    if all_files {
        lines.push("All Files (*.*)".to_string());
    }
    if lines.is_empty() {
        String::new()
    } else {
        format!(" \"{}\"", lines.join("\n"))
    }
}

/// What: `--file-filter` flags for zenity, matedialog, shellementary, qarma and yad.
///
/// Inputs:
/// - `filters`: Request filters.
/// - `all_files`: Append `--file-filter='All Files | *'`.
///
/// Output:
/// - One ` --file-filter='Label | *.a | *.b'` per filter.
#[must_use]
pub fn generic_filter_args(filters: &[FilterPattern], all_files: bool) -> String {
    let mut out = String::new();
    for f in filters {
        let globs = f.globs().collect::<Vec<_>>().join(" | ");
        out.push_str(&format!(" --file-filter='{} | {globs}'", f.label()));
    }
    if all_files {
        out.push_str(" --file-filter='All Files | *'");
    }
    out
}

/// What: Python `filetypes=` keyword for tkinter.
///
/// Inputs:
/// - `filters`: Request filters.
/// - `all_files`: Append `('All Files','*')`.
/// - `quote`: Escapes a Python string literal body.
///
/// Output:
/// - `filetypes=(('Label',('*.a','*.b',)),('All Files','*'))`, or empty.
///
/// Details:
/// - Omitted entirely when there are no filters or the first filter's globs end in `*`,
///   since tkinter then shows everything anyway.
#[must_use]
pub fn tkinter_filetypes(
    filters: &[FilterPattern],
    all_files: bool,
    quote: impl Fn(&str) -> String,
) -> String {
    let Some(first) = filters.first() else {
        return String::new();
    };
    if first.extensions.trim_end().ends_with('*') {
        return String::new();
    }
    let mut out = String::from("filetypes=(");
    for f in filters {
        let globs: String = f.globs().map(|g| format!("'{}',", quote(g))).collect();
        out.push_str(&format!("('{}',({globs})),", quote(f.label())));
    }
    if all_files {
        out.push_str("('All Files','*'))");
    } else {
        out.push(')');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_filters() -> Vec<FilterPattern> {
        vec![
            FilterPattern::new("Text", "*.txt;*.TS"),
            FilterPattern::new("", "*.md"),
        ]
    }

    #[test]
    /// What: Kdialog joins globs with spaces and labels unnamed filters with their globs.
    ///
    /// Inputs:
    /// - Two filters, with and without "All Files".
    ///
    /// Output:
    /// - Newline-joined entries in one quoted argument.
    fn kdialog_encoding() {
        assert_eq!(
            kdialog_filter_arg(&text_filters(), true),
            " \"Text (*.txt *.TS)\n*.md (*.md)\nAll Files (*.*)\""
        );
        assert_eq!(
            kdialog_filter_arg(&text_filters(), false),
            " \"Text (*.txt *.TS)\n*.md (*.md)\""
        );
        assert_eq!(kdialog_filter_arg(&[], true), " \"All Files (*.*)\"");
        assert_eq!(kdialog_filter_arg(&[], false), "");
    }

    #[test]
    /// What: Kdialog globs cannot expand or run shell code.
    ///
    /// Inputs:
    /// - A filter whose globs contain `$HOME` and a backquoted command.
    ///
    /// Output:
    /// - Both metacharacters backslash-escaped inside the quoted argument.
    fn kdialog_globs_are_shell_escaped() {
        let filters = [FilterPattern::new("Text", "*.$HOME;*.`id`")];
        assert_eq!(
            kdialog_filter_arg(&filters, false),
            " \"Text (*.\\$HOME *.\\`id\\`)\""
        );
    }

    #[test]
    /// What: GTK-style tools get one `--file-filter` per filter with ` | ` separators.
    ///
    /// Inputs:
    /// - Two filters plus "All Files".
    ///
    /// Output:
    /// - Three flags.
    fn generic_encoding() {
        assert_eq!(
            generic_filter_args(&text_filters(), true),
            " --file-filter='Text | *.txt | *.TS' --file-filter='*.md | *.md' --file-filter='All Files | *'"
        );
        assert_eq!(generic_filter_args(&[], false), "");
    }

    #[test]
    /// What: Tkinter gets a tuple literal with comma-separated globs.
    ///
    /// Inputs:
    /// - Filters with and without "All Files"; a wildcard-first filter list.
    ///
    /// Output:
    /// - Valid Python tuples; nothing for the wildcard case.
    fn tkinter_encoding() {
        let q = |s: &str| s.to_string();
        assert_eq!(
            tkinter_filetypes(&text_filters(), true, q),
            "filetypes=(('Text',('*.txt','*.TS',)),('*.md',('*.md',)),('All Files','*'))"
        );
        assert_eq!(
            tkinter_filetypes(&text_filters()[..1], false, q),
            "filetypes=(('Text',('*.txt','*.TS',)),)"
        );
        assert_eq!(
            tkinter_filetypes(&[FilterPattern::new("Any", "*")], true, q),
            ""
        );
        assert_eq!(tkinter_filetypes(&[], true, q), "");
    }
}
