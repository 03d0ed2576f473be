//! Pure helpers interpreting probe output.

/// Desktop identifiers under which kdialog is preferred over zenity.
const KDIALOG_DESKTOPS: [&str; 4] = ["KDE", "kde", "lxqt", "LXQT"];

/// Variables naming the desktop session, in lookup order.
pub const DESKTOP_VARS: [&str; 3] = ["XDG_SESSION_DESKTOP", "XDG_CURRENT_DESKTOP", "DESKTOP_SESSION"];

/// What: Classify `zenity --version` output.
///
/// Inputs:
/// - `output`: Raw stdout, e.g. `"3.44.0\n"`.
///
/// Output:
/// - `5` for 3.18+, `4` for 3.10+, `3` for other 3.x and later majors, `2` for 2.32+, else `0`.
///
/// Details:
/// - Variant 4 and up accept `--attach`.
/// - Majors above 3 dropped `--attach`, so they report 3.
#[must_use]
pub fn zenity_variant(output: &str) -> u8 {
    let mut parts = output.trim().split('.');
    let major = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    let minor = parts
        .next()
        .and_then(|p| {
            let digits: String = p.chars().take_while(char::is_ascii_digit).collect();
            digits.parse::<u32>().ok()
        })
        .unwrap_or(0);
    match major {
        Some(3) if minor >= 18 => 5,
        Some(3) if minor >= 10 => 4,
        Some(m) if m >= 3 => 3,
        Some(2) if minor >= 32 => 2,
        _ => 0,
    }
}

/// What: Decide whether the desktop session allows kdialog when zenity is also installed.
///
/// Inputs:
/// - `lookup`: Environment accessor.
///
/// Output:
/// - `true` when the first set of [`DESKTOP_VARS`] is a KDE or LXQt identifier.
pub fn kdialog_desktop(lookup: impl Fn(&str) -> Option<String>) -> bool {
    DESKTOP_VARS
        .iter()
        .find_map(|v| lookup(v))
        .is_some_and(|desktop| KDIALOG_DESKTOPS.contains(&desktop.as_str()))
}

/// Interpreter names tried for the tkinter backend, most preferred first.
#[must_use]
pub fn python_candidates() -> Vec<String> {
    std::iter::once("python3".to_string())
        .chain((0..=10).rev().map(|minor| format!("python3.{minor}")))
        .collect()
}

/// Shell snippet that prints `0` when tkinter cannot be imported.
#[must_use]
pub fn tkinter_check_command(python: &str) -> String {
    format!("{python} -S -c \"try:\n\timport tkinter;\nexcept:\n\tprint(0);\"")
}
