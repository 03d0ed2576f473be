//! Message boxes over fakes.

use sysdialogs::validate::INVALID_MESSAGE;
use sysdialogs::{Buttons, MessageRequest, Selection, Settings, Style};

use crate::common::{ScriptedRunner, TestProbe, dialogs_with};

#[test]
/// What: The Quit button is labelled Quit and any answer reports Quit.
///
/// Inputs:
/// - Zenity, kdialog and yad each showing a Quit box answered `1`.
///
/// Output:
/// - Tool-specific Quit label in each command; `Selection::Quit` each time.
fn quit_button_label_and_mapping() {
    let cases = [
        (TestProbe::x11().program("zenity"), "--ok-label=Quit"),
        (TestProbe::x11().program("kdialog"), "--ok-label Quit"),
        (TestProbe::x11().program("yad"), "--button=Quit:1"),
    ];
    for (probe, label) in cases {
        let runner = ScriptedRunner::answering(["1\n"]);
        let (d, _) = dialogs_with(probe, &runner, Settings::default());
        let req = MessageRequest::new("Done", "All finished").buttons(Buttons::Quit);
        assert_eq!(d.show_msg_box(&req), Selection::Quit);
        assert!(runner.commands()[0].contains(label), "missing {label}");
    }
}

#[test]
/// What: OK/Cancel and Yes/No answers map through the selection table.
///
/// Inputs:
/// - Zenity answering `1`, `0`, `0`, then garbage.
///
/// Output:
/// - OK, Cancel, No, Quit.
fn answers_follow_selection_table() {
    let runner = ScriptedRunner::answering(["1\n", "0\n", "0\n", "what\n"]);
    let (d, _) = dialogs_with(TestProbe::x11().program("zenity"), &runner, Settings::default());
    let ok_cancel = MessageRequest::new("", "Proceed?").buttons(Buttons::OKCancel);
    let yes_no = MessageRequest::new("", "Sure?")
        .style(Style::Question)
        .buttons(Buttons::YesNo);

    assert_eq!(d.show_msg_box(&ok_cancel), Selection::OK);
    assert_eq!(d.show_msg_box(&ok_cancel), Selection::Cancel);
    assert_eq!(d.show_msg_box(&yes_no), Selection::No);
    assert_eq!(d.show_msg_box(&yes_no), Selection::Quit);

    let cmds = runner.commands();
    assert!(cmds[0].contains("--question --ok-label=OK --cancel-label=Cancel"));
    assert!(cmds[2].contains("--icon-name=dialog-question"));
}

#[test]
/// What: A quoted message is replaced before the box is shown.
///
/// Inputs:
/// - Tkinter via python3; message containing a double quote.
///
/// Output:
/// - Placeholder in the Python call; the raw text absent.
fn quoted_message_is_substituted() {
    let runner = ScriptedRunner::answering(["1\n"]);
    let (d, _) = dialogs_with(TestProbe::x11().program("python3"), &runner, Settings::default());
    let req = MessageRequest::new("Note", "He said \"hi\"").style(Style::Warning);

    assert_eq!(d.show_msg_box(&req), Selection::OK);
    let cmd = runner.commands()[0].clone();
    assert!(cmd.starts_with("python3 -S -c \"import tkinter;from tkinter import messagebox;"));
    assert!(cmd.contains(&format!("message='{INVALID_MESSAGE}'")));
    assert!(!cmd.contains("said"));
}

#[test]
/// What: Without any backend the box reports an error and nothing runs.
///
/// Inputs:
/// - No display.
///
/// Output:
/// - `Selection::Error`; no command.
fn no_backend_is_error() {
    let runner = ScriptedRunner::answering(["1\n"]);
    let (d, _) = dialogs_with(TestProbe::default().program("zenity"), &runner, Settings::default());
    assert_eq!(
        d.show_msg_box(&MessageRequest::new("t", "m")),
        Selection::Error
    );
    assert!(runner.commands().is_empty());
}
