//! Python `tkinter` driven through `python3 -S -c`.
//!
//! The Python program travels inside one double-quoted shell word, so text is
//! escaped twice: once for the single-quoted Python literal, then for the
//! shell.

use super::{Backend, BackendKind, shell_dq, tkinter_filetypes};
use crate::probe::Capabilities;
use crate::types::{Buttons, FileRequest, FolderRequest, MessageRequest, Style};
use crate::validate::{last_part, parent_part};

/// Tkinter through the detected Python 3 interpreter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tkinter;

/// Escape a Python single-quoted literal body for the shell.
fn py_lit(s: &str) -> String {
    shell_dq(&s.replace('\\', "\\\\").replace('\n', "\\n"))
}

fn interpreter(caps: &Capabilities) -> &str {
    caps.python().unwrap_or("python3")
}

fn prelude(caps: &Capabilities, module: &str) -> String {
    format!(
        "{} -S -c \"import tkinter;from tkinter import {module};root=tkinter.Tk();root.withdraw();",
        interpreter(caps)
    )
}

/// `title=`, `initialdir=` and `initialfile=` keywords for a file request.
fn location_args(title: &str, path: &str) -> String {
    let mut out = String::new();
    if !title.is_empty() {
        out.push_str(&format!("title='{}',", py_lit(title)));
    }
    if !path.is_empty() {
        let dir = parent_part(path);
        if !dir.is_empty() {
            out.push_str(&format!("initialdir='{}',", py_lit(dir)));
        }
        let file = last_part(path);
        if !file.is_empty() {
            out.push_str(&format!("initialfile='{}',", py_lit(file)));
        }
    }
    out
}

const PRINT_STRING_RESULT: &str = ");\nif not isinstance(res, tuple):\n\tprint(res)\n\"";

impl Backend for Tkinter {
    fn kind(&self) -> BackendKind {
        BackendKind::Tkinter
    }

    fn save_file(&self, caps: &Capabilities, req: &FileRequest) -> String {
        format!(
            "{}res=filedialog.asksaveasfilename({}{}{PRINT_STRING_RESULT}",
            prelude(caps, "filedialog"),
            location_args(&req.title, &req.default_path),
            tkinter_filetypes(&req.filters, req.all_files, py_lit),
        )
    }

    fn open_file(&self, caps: &Capabilities, req: &FileRequest) -> String {
        let multiple = if req.allow_multiple { "multiple=1," } else { "" };
        format!(
            "{}lFiles=filedialog.askopenfilename({multiple}{}{});\n\
             if not isinstance(lFiles, tuple):\n\tprint(lFiles)\n\
             else:\n\tprint('|'.join(str(f) for f in lFiles))\n\"",
            prelude(caps, "filedialog"),
            location_args(&req.title, &req.default_path),
            tkinter_filetypes(&req.filters, req.all_files, py_lit),
        )
    }

    fn select_folder(&self, caps: &Capabilities, req: &FolderRequest) -> String {
        let mut args = String::new();
        if !req.title.is_empty() {
            args.push_str(&format!("title='{}',", py_lit(&req.title)));
        }
        if !req.default_path.is_empty() {
            args.push_str(&format!("initialdir='{}',", py_lit(&req.default_path)));
        }
        format!(
            "{}res=filedialog.askdirectory({args}{PRINT_STRING_RESULT}",
            prelude(caps, "filedialog")
        )
    }

    /// `showinfo` cannot relabel its button, so [`Buttons::Quit`] shows an
    /// ordinary OK button and still reports Quit.
    fn message_box(&self, caps: &Capabilities, req: &MessageRequest) -> String {
        let function = match req.buttons {
            Buttons::OKCancel => "askokcancel",
            Buttons::YesNo => "askyesno",
            Buttons::OK | Buttons::Quit => "showinfo",
        };
        let icon = match req.style {
            Style::Error => "error",
            Style::Question => "question",
            Style::Warning => "warning",
            Style::Info => "info",
        };
        let mut args = format!("icon='{icon}',");
        if !req.title.is_empty() {
            args.push_str(&format!("title='{}',", py_lit(&req.title)));
        }
        if !req.message.is_empty() {
            args.push_str(&format!("message='{}',", py_lit(&req.message)));
        }
        format!(
            "{}res=messagebox.{function}({args});\nif res is False :\n\tprint(0)\nelse :\n\tprint(1)\n\"",
            prelude(caps, "messagebox")
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::probe::fake::FakeProbe;
    use crate::types::Selection;

    fn caps() -> Capabilities {
        Capabilities::new(
            Arc::new(FakeProbe::with_display().program("python3.8")),
            None,
            true,
        )
    }

    #[test]
    /// What: Save dialog splits the default path into directory and file.
    ///
    /// Inputs:
    /// - `/home/me/report.txt` with one filter.
    ///
    /// Output:
    /// - Detected interpreter, `initialdir`, `initialfile`, `filetypes`.
    fn save_splits_default_path() {
        let req = FileRequest::new("Save")
            .default_path("/home/me/report.txt")
            .filter(("Text", "*.txt"));
        assert_eq!(
            Tkinter.save_file(&caps(), &req),
            "python3.8 -S -c \"import tkinter;from tkinter import filedialog;root=tkinter.Tk();root.withdraw();\
             res=filedialog.asksaveasfilename(title='Save',initialdir='/home/me',initialfile='report.txt',\
             filetypes=(('Text',('*.txt',)),('All Files','*')));\nif not isinstance(res, tuple):\n\tprint(res)\n\""
        );
    }

    #[test]
    /// What: Multi-select open joins the tuple with `|`.
    ///
    /// Inputs:
    /// - `allow_multiple = true`, no filters.
    ///
    /// Output:
    /// - `multiple=1` keyword and a join over the tuple.
    fn open_multiple_joins_with_pipe() {
        let req = FileRequest::new("").allow_multiple(true);
        let cmd = Tkinter.open_file(&caps(), &req);
        assert!(cmd.contains("lFiles=filedialog.askopenfilename(multiple=1,);"));
        assert!(cmd.contains("print('|'.join(str(f) for f in lFiles))"));
        assert_eq!(
            Tkinter.parse_files("/a|/b\n", true),
            vec!["/a".to_string(), "/b".to_string()]
        );
    }

    #[test]
    /// What: Message text is escaped for Python and the shell.
    ///
    /// Inputs:
    /// - A two-line message with a dollar sign; YesNo warning.
    ///
    /// Output:
    /// - `askyesno`, `\\n` in the literal, escaped `$`.
    fn message_escaping() {
        let req = MessageRequest::new("Cost", "Line one\nCosts $3")
            .style(Style::Warning)
            .buttons(Buttons::YesNo);
        let cmd = Tkinter.message_box(&caps(), &req);
        assert!(cmd.contains(
            "res=messagebox.askyesno(icon='warning',title='Cost',message='Line one\\\\nCosts \\$3',);"
        ));
        assert!(cmd.ends_with("if res is False :\n\tprint(0)\nelse :\n\tprint(1)\n\""));
        assert_eq!(Tkinter.parse_answer("0\n", Buttons::YesNo), Selection::No);
    }

    #[test]
    /// What: Quit falls back to `showinfo` and still reports Quit.
    ///
    /// Inputs:
    /// - Quit box answered with `1`.
    ///
    /// Output:
    /// - `showinfo` call; Quit selection.
    fn quit_uses_showinfo() {
        let req = MessageRequest::new("", "Bye").buttons(Buttons::Quit);
        assert!(Tkinter.message_box(&caps(), &req).contains("messagebox.showinfo(icon='info',"));
        assert_eq!(Tkinter.parse_answer("1\n", Buttons::Quit), Selection::Quit);
    }

    #[test]
    /// What: Folder picker passes the whole default path as `initialdir`.
    ///
    /// Inputs:
    /// - No python detected; `/srv/data`.
    ///
    /// Output:
    /// - Falls back to `python3`; `initialdir='/srv/data'`.
    fn folder_without_detected_python() {
        let caps = Capabilities::new(Arc::new(FakeProbe::with_display()), None, true);
        let cmd = Tkinter.select_folder(&caps, &FolderRequest::new("", "/srv/data"));
        assert!(cmd.starts_with("python3 -S -c \"import tkinter;"));
        assert!(cmd.contains("res=filedialog.askdirectory(initialdir='/srv/data',);"));
    }
}
