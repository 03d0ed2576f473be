//! Shared fakes: a counting `Probe` and a scripted `CommandRunner`.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use sysdialogs::probe::Probe;
use sysdialogs::{CommandRunner, Dialogs, Result, Settings};

/// Probe reporting a fixed set of installed programs and variables.
#[derive(Default)]
pub struct TestProbe {
    programs: HashSet<String>,
    outputs: HashMap<String, String>,
    vars: HashMap<String, String>,
    path_calls: Mutex<Vec<String>>,
    capture_calls: Mutex<usize>,
}

impl TestProbe {
    /// Probe with `DISPLAY=:0` and nothing installed.
    pub fn x11() -> Self {
        Self::default().var("DISPLAY", ":0")
    }

    pub fn program(mut self, name: &str) -> Self {
        self.programs.insert(name.to_string());
        self
    }

    pub fn output(mut self, cmd: &str, out: &str) -> Self {
        self.outputs.insert(cmd.to_string(), out.to_string());
        self
    }

    pub fn var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// How often `on_path(name)` was asked.
    pub fn path_calls_for(&self, name: &str) -> usize {
        self.path_calls
            .lock()
            .map(|c| c.iter().filter(|n| n.as_str() == name).count())
            .unwrap_or(0)
    }

    pub fn capture_calls(&self) -> usize {
        self.capture_calls.lock().map(|c| *c).unwrap_or(0)
    }
}

impl Probe for TestProbe {
    fn on_path(&self, program: &str) -> bool {
        if let Ok(mut calls) = self.path_calls.lock() {
            calls.push(program.to_string());
        }
        self.programs.contains(program)
    }

    fn capture(&self, shell_command: &str) -> Option<String> {
        if let Ok(mut calls) = self.capture_calls.lock() {
            *calls += 1;
        }
        Some(self.outputs.get(shell_command).cloned().unwrap_or_default())
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn is_darwin(&self) -> bool {
        false
    }
}

/// Runner popping scripted answers and recording every command.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    answers: Arc<Mutex<VecDeque<String>>>,
    commands: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn answering<I: IntoIterator<Item = S>, S: Into<String>>(answers: I) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().map(Into::into).collect())),
            commands: Arc::default(),
        }
    }

    /// Commands run so far.
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str) -> Result<String> {
        if let Ok(mut c) = self.commands.lock() {
            c.push(command.to_string());
        }
        Ok(self
            .answers
            .lock()
            .ok()
            .and_then(|mut a| a.pop_front())
            .unwrap_or_default())
    }
}

/// What: Build `Dialogs` over fakes.
///
/// Inputs:
/// - `probe`: Installed tools and environment.
/// - `runner`: Scripted answers; a clone is kept by the caller to inspect commands.
/// - `settings`: Library settings.
///
/// Output:
/// - `Dialogs` plus the shared probe handle.
pub fn dialogs_with(
    probe: TestProbe,
    runner: &ScriptedRunner,
    settings: Settings,
) -> (Dialogs, Arc<TestProbe>) {
    let probe = Arc::new(probe);
    let d = Dialogs::with_parts(settings, probe.clone(), Box::new(runner.clone()));
    (d, probe)
}
