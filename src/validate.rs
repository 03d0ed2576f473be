//! Input screening before a command is built and path checks after a dialog answers.

use std::path::Path;

use crate::config::InputPolicy;
use crate::error::{DialogError, Result};
use crate::types::{FileRequest, FolderRequest, MessageRequest};

/// Placeholder used when the title contains a quote.
pub const INVALID_TITLE: &str = "INVALID TITLE WITH QUOTES";
/// Placeholder used when the default path contains a quote.
pub const INVALID_DEFAULT_PATH: &str = "INVALID DEFAULT_PATH WITH QUOTES";
/// Title used when any filter contains a quote; the filters are dropped.
pub const INVALID_FILTER_PATTERN: &str = "INVALID FILTER_PATTERN WITH QUOTES";
/// Placeholder used when a message box body contains a quote.
pub const INVALID_MESSAGE: &str = "INVALID MESSAGE WITH QUOTES";

/// Characters that may not appear in a file name returned by a save dialog.
const ILLEGAL_FILENAME_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Return `true` if `s` contains a single or double quote.
#[must_use]
pub fn quote_detected(s: &str) -> bool {
    s.contains(['\'', '"'])
}

/// What: Replace a quoted field with its placeholder, or reject it.
///
/// Inputs:
/// - `policy`: Substitute or reject.
/// - `field`: Field name reported on rejection.
/// - `value`: Field to rewrite in place.
/// - `placeholder`: Replacement text.
///
/// Output:
/// - `Ok(())` after substitution; `Err(QuotedInput)` under [`InputPolicy::Reject`].
fn substitute(
    policy: InputPolicy,
    field: &'static str,
    value: &mut String,
    placeholder: &str,
) -> Result<()> {
    if policy == InputPolicy::Reject {
        return Err(DialogError::QuotedInput { field });
    }
    tracing::warn!(field, "quote in dialog input; substituting placeholder");
    placeholder.clone_into(value);
    Ok(())
}

/// What: Screen a file request for quote characters.
///
/// Inputs:
/// - `req`: Caller request.
/// - `policy`: What to do with offending fields.
///
/// Output:
/// - A request safe to embed in a shell command, or `QuotedInput` under `Reject`.
///
/// Details:
/// - Title and default path are replaced individually.
/// - A quote in any filter replaces the title with [`INVALID_FILTER_PATTERN`] and clears every filter.
/// - Filters without any glob are dropped, including ones pushed directly onto `filters`.
pub fn screen_file_request(req: &FileRequest, policy: InputPolicy) -> Result<FileRequest> {
    let mut out = req.clone();
    out.filters.retain(|f| f.globs().next().is_some());
    if quote_detected(&out.title) {
        substitute(policy, "title", &mut out.title, INVALID_TITLE)?;
    }
    if quote_detected(&out.default_path) {
        substitute(
            policy,
            "default path",
            &mut out.default_path,
            INVALID_DEFAULT_PATH,
        )?;
    }
    if out
        .filters
        .iter()
        .any(|f| quote_detected(&f.name) || quote_detected(&f.extensions))
    {
        substitute(policy, "filter", &mut out.title, INVALID_FILTER_PATTERN)?;
        out.filters.clear();
    }
    Ok(out)
}

/// Screen a folder request for quote characters.
pub fn screen_folder_request(req: &FolderRequest, policy: InputPolicy) -> Result<FolderRequest> {
    let mut out = req.clone();
    if quote_detected(&out.title) {
        substitute(policy, "title", &mut out.title, INVALID_TITLE)?;
    }
    if quote_detected(&out.default_path) {
        substitute(
            policy,
            "default path",
            &mut out.default_path,
            INVALID_DEFAULT_PATH,
        )?;
    }
    Ok(out)
}

/// Screen a message box request for quote characters.
pub fn screen_message_request(
    req: &MessageRequest,
    policy: InputPolicy,
) -> Result<MessageRequest> {
    let mut out = req.clone();
    if quote_detected(&out.title) {
        substitute(policy, "title", &mut out.title, INVALID_TITLE)?;
    }
    if quote_detected(&out.message) {
        substitute(policy, "message", &mut out.message, INVALID_MESSAGE)?;
    }
    Ok(out)
}

/// What: Directory part of a path, without the final separator.
///
/// Inputs:
/// - `source`: Path using `/` or `\` separators.
///
/// Output:
/// - Everything before the last `/` (or `\` when there is no `/`); empty when there is no separator.
#[must_use]
pub fn parent_part(source: &str) -> &str {
    source
        .rfind('/')
        .or_else(|| source.rfind('\\'))
        .map_or("", |i| &source[..i])
}

/// Final path component; the whole input when there is no separator.
#[must_use]
pub fn last_part(source: &str) -> &str {
    source
        .rfind('/')
        .or_else(|| source.rfind('\\'))
        .map_or(source, |i| &source[i + 1..])
}

/// Return `true` for a non-empty file name without reserved characters.
#[must_use]
pub fn filename_valid(name: &str) -> bool {
    !name.is_empty() && !name.contains(ILLEGAL_FILENAME_CHARS)
}

/// Return `true` if `path` names an existing directory.
#[must_use]
pub fn dir_exists(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_dir()
}

/// Return `true` if `path` names an existing regular file.
#[must_use]
pub fn file_exists(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_file()
}

/// What: Check a save dialog answer.
///
/// Inputs:
/// - `path`: Raw answer with the trailing newline already stripped.
///
/// Output:
/// - `Ok(None)` for an empty answer (cancelled), `Ok(Some(path))` when valid, `InvalidPath` otherwise.
///
/// Details:
/// - The directory part must exist and the file name must pass [`filename_valid`].
pub fn check_saved_path(path: String) -> Result<Option<String>> {
    if path.is_empty() {
        return Ok(None);
    }
    if !dir_exists(parent_part(&path)) || !filename_valid(last_part(&path)) {
        return Err(DialogError::InvalidPath(path));
    }
    Ok(Some(path))
}

/// What: Keep only answers that are existing regular files.
///
/// Inputs:
/// - `paths`: Candidate paths in dialog order.
///
/// Output:
/// - The subset that exists, order preserved; dropped entries are logged, not reported.
#[must_use]
pub fn retain_existing_files(mut paths: Vec<String>) -> Vec<String> {
    paths.retain(|p| {
        let ok = file_exists(p);
        if !ok {
            tracing::debug!(path = %p, "dropping dialog answer that is not an existing file");
        }
        ok
    });
    paths
}

/// Check a folder dialog answer; `Ok(None)` when empty.
pub fn check_folder(path: String) -> Result<Option<String>> {
    if path.is_empty() {
        return Ok(None);
    }
    if dir_exists(&path) {
        Ok(Some(path))
    } else {
        Err(DialogError::InvalidPath(path))
    }
}
