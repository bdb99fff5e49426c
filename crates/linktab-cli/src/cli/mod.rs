//! CLI for linktab.

mod commands;

use anyhow::Result;
use clap::Parser;
use linktab_core::config::{self, LinktabConfig};
use linktab_core::ExtractConfig;
use std::ffi::OsString;
use std::io;
use std::path::Path;

use commands::{run_open, run_usage};

/// Top-level CLI for linktab.
#[derive(Debug, Parser)]
#[command(name = "linktab", version)]
#[command(about = "Open every link listed in a JSON export in new browser tabs", long_about = None)]
pub struct Cli {
    /// Path to the JSON file to read links from.
    // Raw OsString so an empty path reaches the loader and gets its diagnostic.
    #[arg(value_parser = clap::value_parser!(OsString))]
    pub path: Option<OsString>,

    /// Top-level key holding the list of records (overrides config.toml).
    #[arg(long, value_name = "KEY")]
    pub list_key: Option<String>,

    /// Key inside each record holding the URL (overrides config.toml).
    #[arg(long, value_name = "KEY")]
    pub url_key: Option<String>,

    /// List the links that would be opened without launching a browser.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse arguments, run, and return the process exit code.
    pub fn run_from_args() -> Result<i32> {
        Cli::parse().run()
    }

    /// Run parsed arguments and return the process exit code.
    pub fn run(&self) -> Result<i32> {
        let Some(path) = self.path.as_deref().map(Path::new) else {
            run_usage(&mut io::stdout().lock())?;
            return Ok(0);
        };

        // The config file is a convenience; a broken one falls back to defaults.
        let cfg = config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("using default config: {:#}", e);
            LinktabConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        run_open(path, &self.extract_config(&cfg), self.dry_run)
    }

    /// Keys to extract with: flags win over the config file.
    pub fn extract_config(&self, cfg: &LinktabConfig) -> ExtractConfig {
        let mut extract = cfg.extract_config();
        if let Some(key) = &self.list_key {
            extract.primary_list_key = key.clone();
        }
        if let Some(key) = &self.url_key {
            extract.url_key_in_item = key.clone();
        }
        extract
    }
}

#[cfg(test)]
mod tests;
