//! Logging init: append to a file under the XDG state dir, or fall back to
//! stderr with only warnings and errors.
//!
//! Stdout and stderr are the user's terminal, so only the file sink gets the
//! chatty default filter. `RUST_LOG` overrides either default.

use anyhow::Result;
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// `~/.local/state/linktab/linktab.log`.
    File,
    /// Used when the state dir is unusable.
    Stderr,
}

impl LogSink {
    /// Filter directives applied when `RUST_LOG` is unset.
    pub fn default_directives(self) -> &'static str {
        match self {
            LogSink::File => "info,linktab=debug",
            LogSink::Stderr => "warn",
        }
    }

    fn env_filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directives()))
    }
}

/// Initialize structured logging to `~/.local/state/linktab/linktab.log`.
/// On failure (e.g. state dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linktab")?;
    let log_file_path = xdg_dirs.place_state_file("linktab.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(LogSink::File.env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!("linktab logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr, warnings and errors only unless `RUST_LOG` says otherwise.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(LogSink::Stderr.env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
