//! sysdialog binary entrypoint kept minimal. Dialog logic lives in the `sysdialogs` library.

mod args;

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

struct SysdialogTimer;

impl tracing_subscriber::fmt::time::FormatTime for SysdialogTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
///
/// Output:
/// - None; logs go to `<config>/logs/sysdialog.log`, or stderr when the file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_dir = sysdialogs::config::logs_dir();
    let log_path = log_dir.join("sysdialog.log");
    let opened = std::fs::create_dir_all(&log_dir).and_then(|()| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
    });
    match opened {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(SysdialogTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::debug!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr, keeping stdout clean for the answer
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(SysdialogTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() -> ExitCode {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "sysdialog starting");

    match args::run(args) {
        Ok(outcome) => {
            tracing::info!(?outcome, "sysdialog finished");
            outcome.into()
        }
        Err(err) => {
            tracing::error!(error = %err, "dialog failed");
            eprintln!("sysdialog: {err}");
            ExitCode::from(2)
        }
    }
}
