//! Save, open and folder dialogs end to end over fakes.
//!
//! Tests cover:
//! - Folder picker echo round trip and invalid answers
//! - Open filtering of answers that are not existing files
//! - Save post-validation
//! - Quote substitution before command synthesis

use sysdialogs::validate::{INVALID_FILTER_PATTERN, INVALID_TITLE};
use sysdialogs::{DialogError, FileRequest, FolderRequest, Settings};

use crate::common::{ScriptedRunner, TestProbe, dialogs_with};

fn zenity() -> TestProbe {
    TestProbe::x11()
        .program("zenity")
        .output("zenity --version", "3.44.0\n")
}

#[test]
/// What: The directory the tool prints comes back unchanged.
///
/// Inputs:
/// - Zenity answering with an existing temp dir.
///
/// Output:
/// - Same path; the command asked for a directory starting at it.
///
/// Details:
/// - Exactly one trailing newline is stripped.
fn select_folder_echo_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().display().to_string();
    let runner = ScriptedRunner::answering([format!("{path}\n")]);
    let (d, _) = dialogs_with(zenity(), &runner, Settings::default());

    assert_eq!(d.select_folder(&FolderRequest::new("Pick", &path)), path);
    let cmds = runner.commands();
    assert_eq!(cmds.len(), 1);
    assert_eq!(
        cmds[0],
        format!("zenity --file-selection --directory --title=\"Pick\" --filename=\"{path}\" 2>/dev/null")
    );
}

#[test]
/// What: A folder answer that does not exist is rejected.
///
/// Inputs:
/// - Answers naming a missing directory and a regular file.
///
/// Output:
/// - `InvalidPath` from `try_select_folder`; empty from `select_folder`.
fn select_folder_rejects_non_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("plain.txt");
    std::fs::write(&file, "x").expect("write");
    let missing = dir.path().join("gone").display().to_string();
    let runner = ScriptedRunner::answering([format!("{missing}\n"), format!("{}\n", file.display())]);
    let (d, _) = dialogs_with(zenity(), &runner, Settings::default());

    assert!(matches!(
        d.try_select_folder(&FolderRequest::default()),
        Err(DialogError::InvalidPath(p)) if p == missing
    ));
    assert_eq!(d.select_folder(&FolderRequest::default()), "");
}

#[test]
/// What: Open keeps only answers that are existing regular files, in order.
///
/// Inputs:
/// - Multi-select answer with two real files, a missing one and a directory.
///
/// Output:
/// - The two real files.
fn open_multiple_drops_missing_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "a").expect("write");
    std::fs::write(&b, "b").expect("write");
    let (a, b) = (a.display().to_string(), b.display().to_string());
    let answer = format!(
        "{b}|{}|{a}|{}\n",
        dir.path().join("missing.txt").display(),
        dir.path().display()
    );
    let runner = ScriptedRunner::answering([answer]);
    let (d, _) = dialogs_with(zenity(), &runner, Settings::default());

    let req = FileRequest::new("Open").filter(("Text", "*.txt"));
    assert_eq!(d.open_multiple_files(&req), vec![b, a]);
    let cmds = runner.commands();
    let cmd = &cmds[0];
    assert!(cmd.contains(" --multiple"));
    assert!(cmd.contains("--file-filter='Text | *.txt' --file-filter='All Files | *'"));
}

#[test]
/// What: Kdialog multi-select answers are split on newlines.
///
/// Inputs:
/// - KDE session with kdialog only; two files on separate lines.
///
/// Output:
/// - Both files.
fn open_multiple_with_kdialog_newlines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("one.md");
    let b = dir.path().join("two.md");
    std::fs::write(&a, "1").expect("write");
    std::fs::write(&b, "2").expect("write");
    let runner = ScriptedRunner::answering([format!("{}\n{}\n", a.display(), b.display())]);
    let (d, _) = dialogs_with(TestProbe::x11().program("kdialog"), &runner, Settings::default());

    let got = d.open_multiple_files(&FileRequest::new(""));
    assert_eq!(got, vec![a.display().to_string(), b.display().to_string()]);
    assert!(runner.commands()[0].contains("--getopenfilename --multiple --separate-output"));
}

#[test]
/// What: Single open returns the path, or empty when it does not exist.
///
/// Inputs:
/// - Yad answering an existing file, then a missing one.
///
/// Output:
/// - The file; then an empty string.
fn open_single_file_checks_existence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let f = dir.path().join("doc.pdf");
    std::fs::write(&f, "%PDF").expect("write");
    let f = f.display().to_string();
    let runner = ScriptedRunner::answering([format!("{f}\n"), "/no/such/file.pdf\n".to_string()]);
    let (d, _) = dialogs_with(TestProbe::x11().program("yad"), &runner, Settings::default());

    let req = FileRequest::new("").allow_multiple(true);
    assert_eq!(d.open_single_file(&req), f);
    assert_eq!(d.open_single_file(&req), "");
    assert!(!runner.commands()[0].contains("--multiple"));
}

#[test]
/// What: Save accepts a new file in an existing directory and rejects the rest.
///
/// Inputs:
/// - Answers: valid new file, file in a missing directory, illegal name, cancel.
///
/// Output:
/// - Path; `InvalidPath`; empty; `Ok(None)`.
fn save_file_post_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = dir.path().join("new.txt").display().to_string();
    let bad_dir = dir.path().join("nope").join("new.txt").display().to_string();
    let bad_name = format!("{}/what?.txt", dir.path().display());
    let runner = ScriptedRunner::answering([
        format!("{good}\n"),
        format!("{bad_dir}\n"),
        format!("{bad_name}\n"),
        String::new(),
    ]);
    let (d, _) = dialogs_with(zenity(), &runner, Settings::default());
    let req = FileRequest::new("Save").default_path(&good);

    assert_eq!(d.save_file(&req), good);
    assert!(matches!(
        d.try_save_file(&req),
        Err(DialogError::InvalidPath(p)) if p == bad_dir
    ));
    assert_eq!(d.save_file(&req), "");
    assert!(matches!(d.try_save_file(&req), Ok(None)));
    assert!(runner.commands()[0].contains("--save --confirm-overwrite"));
}

#[test]
/// What: Quotes never reach the command; placeholders are shown instead.
///
/// Inputs:
/// - Kdialog; title with an apostrophe; then a filter with a double quote.
///
/// Output:
/// - Title placeholder; filter placeholder as title and no filters.
fn quotes_are_substituted() {
    let runner = ScriptedRunner::answering(["", ""]);
    let (d, _) = dialogs_with(TestProbe::x11().program("kdialog"), &runner, Settings::default());

    d.save_file(&FileRequest::new("Bob's file"));
    d.open_file(&FileRequest::new("Open").filter(("Text \"files\"", "*.txt")).all_files(false));

    let cmds = runner.commands();
    assert!(cmds[0].contains(&format!("--title \"{INVALID_TITLE}\"")));
    assert!(!cmds[0].contains("Bob's"));
    assert_eq!(
        cmds[1],
        format!("kdialog --getopenfilename $PWD/ --title \"{INVALID_FILTER_PATTERN}\"")
    );
}
