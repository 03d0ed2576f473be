//! Runtime detection of the dialog tools installed on this machine.
//!
//! Every answer is computed at most once per [`Capabilities`] and cached in a
//! `OnceLock`, so concurrent first use still probes a tool only once. The
//! graphic-session check is re-read on each call since it is just an
//! environment lookup.

mod detect;
mod system;

use std::sync::{Arc, OnceLock};

use crate::backend::BackendKind;

pub use detect::{
    DESKTOP_VARS, kdialog_desktop, python_candidates, tkinter_check_command, zenity_variant,
};
pub use system::{SystemProbe, command_on_path};

/// Shell fragment that attaches a dialog to the currently active X window.
pub const XPROP_ATTACH: &str =
    " --attach=$(sleep .01;xprop -root 32x '\t$0' _NET_ACTIVE_WINDOW | cut -f 2)";

/// Access to the outside world needed for probing.
///
/// Swapped out in tests to count probe invocations.
pub trait Probe: Send + Sync {
    /// Return `true` if `program` resolves to an executable on `PATH`.
    fn on_path(&self, program: &str) -> bool;
    /// Run `shell_command` through `sh -c` and return its stdout, or `None` if it could not start.
    fn capture(&self, shell_command: &str) -> Option<String>;
    /// Read an environment variable; `Some` even when set to an empty string.
    fn var(&self, name: &str) -> Option<String>;
    /// Return `true` on macOS.
    fn is_darwin(&self) -> bool;
}

/// Cached state of one tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolAvailability {
    /// Not installed or not usable.
    Absent,
    /// Installed, no special capabilities.
    Present,
    /// Installed, with a tool-specific capability level.
    Variant(u8),
}

impl ToolAvailability {
    /// Return `true` unless [`ToolAvailability::Absent`].
    #[must_use]
    pub const fn is_present(self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Capability level; `Present` counts as 1, `Absent` as 0.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Variant(v) => v,
        }
    }

    const fn from_bool(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }
}

/// Memoized answers for every probe.
#[derive(Default)]
struct Cache {
    kdialog: OnceLock<ToolAvailability>,
    zenity: OnceLock<ToolAvailability>,
    matedialog: OnceLock<bool>,
    shellementary: OnceLock<bool>,
    qarma: OnceLock<bool>,
    yad: OnceLock<bool>,
    xprop: OnceLock<bool>,
    python: OnceLock<Option<String>>,
    tkinter: OnceLock<bool>,
    darwin: OnceLock<bool>,
}

/// Capability cache owned by a `Dialogs` instance.
pub struct Capabilities {
    probe: Arc<dyn Probe>,
    python_override: Option<String>,
    attach_window: bool,
    cache: Cache,
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("python_override", &self.python_override)
            .field("attach_window", &self.attach_window)
            .finish_non_exhaustive()
    }
}

impl Capabilities {
    /// What: Create an empty cache over `probe`.
    ///
    /// Inputs:
    /// - `probe`: Environment access.
    /// - `python_override`: Interpreter to use instead of probing `python3*`.
    /// - `attach_window`: Whether attach fragments may be emitted at all.
    ///
    /// Output:
    /// - A cache with nothing probed yet.
    pub fn new(probe: Arc<dyn Probe>, python_override: Option<String>, attach_window: bool) -> Self {
        Self {
            probe,
            python_override,
            attach_window,
            cache: Cache::default(),
        }
    }

    /// Return `true` on macOS (memoized).
    pub fn is_darwin(&self) -> bool {
        *self.cache.darwin.get_or_init(|| self.probe.is_darwin())
    }

    /// What: Whether a graphical session is active.
    ///
    /// Inputs:
    /// - None.
    ///
    /// Output:
    /// - `true` when `DISPLAY` is set, or `WAYLAND_DISPLAY` outside macOS.
    pub fn graphic_mode(&self) -> bool {
        self.probe.var("DISPLAY").is_some()
            || (!self.is_darwin() && self.probe.var("WAYLAND_DISPLAY").is_some())
    }

    fn on_path_once(&self, cell: &OnceLock<bool>, program: &str) -> bool {
        *cell.get_or_init(|| self.probe.on_path(program))
    }

    /// `xprop` is installed and a display is active.
    pub fn xprop_present(&self) -> bool {
        self.on_path_once(&self.cache.xprop, "xprop") && self.graphic_mode()
    }

    fn zenity_raw(&self) -> ToolAvailability {
        *self.cache.zenity.get_or_init(|| {
            if !self.probe.on_path("zenity") {
                return ToolAvailability::Absent;
            }
            let variant = self
                .probe
                .capture("zenity --version")
                .map_or(0, |out| zenity_variant(&out));
            tracing::debug!(variant, "zenity detected");
            ToolAvailability::Variant(variant)
        })
    }

    /// Zenity availability with its version variant; `Absent` without a display.
    pub fn zenity(&self) -> ToolAvailability {
        if self.graphic_mode() {
            self.zenity_raw()
        } else {
            ToolAvailability::Absent
        }
    }

    fn kdialog_raw(&self) -> ToolAvailability {
        *self.cache.kdialog.get_or_init(|| {
            if self.zenity().is_present() && !kdialog_desktop(|v| self.probe.var(v)) {
                tracing::debug!("zenity present outside KDE/LXQt; skipping kdialog");
                return ToolAvailability::Absent;
            }
            if !self.probe.on_path("kdialog") {
                return ToolAvailability::Absent;
            }
            let attach_ok = self
                .probe
                .capture("kdialog --attach 2>&1")
                .is_some_and(|out| !out.contains("Unknown"));
            if attach_ok {
                ToolAvailability::Variant(2)
            } else {
                ToolAvailability::Present
            }
        })
    }

    /// Kdialog availability; `Variant(2)` when `--attach` is understood.
    pub fn kdialog(&self) -> ToolAvailability {
        if self.graphic_mode() {
            self.kdialog_raw()
        } else {
            ToolAvailability::Absent
        }
    }

    /// What: Interpreter used by the tkinter backend.
    ///
    /// Inputs:
    /// - None.
    ///
    /// Output:
    /// - The configured override, else the first `python3*` name found on `PATH`.
    pub fn python(&self) -> Option<&str> {
        if let Some(p) = self.python_override.as_deref() {
            return Some(p);
        }
        self.cache
            .python
            .get_or_init(|| {
                python_candidates()
                    .into_iter()
                    .find(|name| self.probe.on_path(name))
            })
            .as_deref()
    }

    /// Python with an importable tkinter, a display, and not macOS.
    pub fn tkinter_present(&self) -> bool {
        let importable = *self.cache.tkinter.get_or_init(|| {
            self.python().is_some_and(|py| {
                self.probe
                    .capture(&tkinter_check_command(py))
                    .is_some_and(|out| out.trim().is_empty())
            })
        });
        importable && self.graphic_mode() && !self.is_darwin()
    }

    /// What: Availability of one backend.
    ///
    /// Inputs:
    /// - `kind`: Backend to check.
    ///
    /// Output:
    /// - Cached availability, `Absent` whenever no display is active.
    pub fn availability(&self, kind: BackendKind) -> ToolAvailability {
        let simple = |cell: &OnceLock<bool>, program: &str| {
            ToolAvailability::from_bool(self.on_path_once(cell, program) && self.graphic_mode())
        };
        match kind {
            BackendKind::KDialog => self.kdialog(),
            BackendKind::Zenity => self.zenity(),
            BackendKind::MateDialog => simple(&self.cache.matedialog, "matedialog"),
            BackendKind::Shellementary => simple(&self.cache.shellementary, "shellementary"),
            BackendKind::Qarma => simple(&self.cache.qarma, "qarma"),
            BackendKind::Yad => simple(&self.cache.yad, "yad"),
            BackendKind::Tkinter => ToolAvailability::from_bool(self.tkinter_present()),
        }
    }

    /// Return `true` if `kind` can be used now.
    pub fn is_available(&self, kind: BackendKind) -> bool {
        self.availability(kind).is_present()
    }

    /// What: Attach fragment for a backend, if it supports one here.
    ///
    /// Inputs:
    /// - `kind`: Backend building the command.
    ///
    /// Output:
    /// - [`XPROP_ATTACH`] when attaching is enabled, `xprop` exists, and the tool understands `--attach`.
    pub fn attach_fragment(&self, kind: BackendKind) -> Option<&'static str> {
        if !self.attach_window {
            return None;
        }
        let supported = match kind {
            BackendKind::KDialog => self.kdialog().level() == 2,
            BackendKind::Zenity => self.zenity().level() >= 4,
            BackendKind::Qarma => true,
            _ => false,
        };
        (supported && self.xprop_present()).then_some(XPROP_ATTACH)
    }
}
