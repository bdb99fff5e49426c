//! `linktab <path>` – open every valid link in the file.

use anyhow::Result;
use linktab_core::opener::{BrowserOpener, DryRunOpener};
use linktab_core::session;
use linktab_core::ExtractConfig;
use std::io;
use std::path::Path;

/// Run against `path` and return the exit code: 0 when the file was usable
/// (even with no links in it), 1 after printing a diagnostic.
pub fn run_open(path: &Path, cfg: &ExtractConfig, dry_run: bool) -> Result<i32> {
    let mut out = io::stdout();
    let result = if dry_run {
        let mut opener = DryRunOpener::new(io::stdout());
        session::open_links_from_file(path, cfg, &mut opener, &mut out)
    } else {
        session::open_links_from_file(path, cfg, &mut BrowserOpener, &mut out)
    };

    match result {
        Ok(outcome) => {
            tracing::info!(path = %path.display(), ?outcome, "run finished");
            Ok(0)
        }
        Err(err) => {
            tracing::error!(path = %path.display(), "run failed: {}", err);
            session::write_diagnostic(&err, &mut out)?;
            Ok(1)
        }
    }
}
