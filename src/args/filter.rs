//! `--filter` value parsing.

use sysdialogs::FilterPattern;

/// What: Parse one `--filter` value.
///
/// Inputs:
/// - `value`: `"Name=*.a;*.b"`, or just `"*.a;*.b"` for an unnamed filter.
///
/// Output:
/// - The filter, or an error message when it holds no glob.
///
/// Details:
/// - Only the first `=` separates name from globs.
pub fn parse_filter(value: &str) -> Result<FilterPattern, String> {
    let (name, globs) = value.split_once('=').unwrap_or(("", value));
    let filter = FilterPattern::new(name.trim(), globs.trim());
    if filter.globs().next().is_none() {
        return Err(format!("filter '{value}' has no glob pattern"));
    }
    Ok(filter)
}
