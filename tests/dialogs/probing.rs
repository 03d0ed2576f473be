//! Backend detection through `Dialogs`.

use sysdialogs::{BackendKind, FolderRequest, MessageRequest, Settings};

use crate::common::{ScriptedRunner, TestProbe, dialogs_with};

#[test]
/// What: Each tool is probed once however many dialogs are shown.
///
/// Inputs:
/// - Zenity installed; ten message boxes and a probe report.
///
/// Output:
/// - One `PATH` lookup for zenity and one version capture.
fn probing_is_memoized() {
    let runner = ScriptedRunner::default();
    let (d, probe) = dialogs_with(
        TestProbe::x11()
            .program("zenity")
            .output("zenity --version", "3.20.1\n"),
        &runner,
        Settings::default(),
    );
    for _ in 0..10 {
        d.show_msg_box(&MessageRequest::new("t", "m"));
    }
    let _ = d.probe_report();
    assert_eq!(runner.commands().len(), 10);
    assert_eq!(probe.path_calls_for("zenity"), 1);
    assert_eq!(probe.capture_calls(), 1);
}

#[test]
/// What: Priority order picks kdialog on KDE and zenity elsewhere.
///
/// Inputs:
/// - Both installed under KDE, then under GNOME.
///
/// Output:
/// - KDialog, then Zenity.
fn priority_respects_desktop() {
    let both = |desktop: &str| {
        TestProbe::x11()
            .program("kdialog")
            .program("zenity")
            .var("XDG_CURRENT_DESKTOP", desktop)
    };
    let runner = ScriptedRunner::default();
    let (kde, _) = dialogs_with(both("KDE"), &runner, Settings::default());
    assert_eq!(kde.active_backend(), Some(BackendKind::KDialog));
    let (gnome, _) = dialogs_with(both("GNOME"), &runner, Settings::default());
    assert_eq!(gnome.active_backend(), Some(BackendKind::Zenity));
}

#[test]
/// What: A Wayland-only session still counts as graphical.
///
/// Inputs:
/// - `WAYLAND_DISPLAY` set, qarma installed.
///
/// Output:
/// - Qarma active and used for the folder picker.
fn wayland_session_is_graphical() {
    let runner = ScriptedRunner::answering([""]);
    let (d, _) = dialogs_with(
        TestProbe::default()
            .var("WAYLAND_DISPLAY", "wayland-0")
            .program("qarma"),
        &runner,
        Settings::default(),
    );
    assert_eq!(d.active_backend(), Some(BackendKind::Qarma));
    assert_eq!(d.select_folder(&FolderRequest::new("Dir", "")), "");
    assert!(runner.commands()[0].starts_with("qarma --file-selection --directory"));
}

#[test]
/// What: The probe report lists every backend in priority order.
///
/// Inputs:
/// - Only tkinter usable.
///
/// Output:
/// - Seven entries, only tkinter available.
fn probe_report_in_priority_order() {
    let runner = ScriptedRunner::default();
    let (d, _) = dialogs_with(TestProbe::x11().program("python3"), &runner, Settings::default());
    let report = d.probe_report();
    let kinds: Vec<BackendKind> = report.iter().map(|s| s.backend).collect();
    assert_eq!(kinds, BackendKind::ALL.to_vec());
    let available: Vec<BackendKind> = report
        .iter()
        .filter(|s| s.available)
        .map(|s| s.backend)
        .collect();
    assert_eq!(available, vec![BackendKind::Tkinter]);
}
