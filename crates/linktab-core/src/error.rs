//! Error taxonomy for a linktab run.
//!
//! The `Display` text of each variant is the diagnostic shown to the user.
//! An empty link set is not an error; see [`crate::session::RunOutcome::NoLinks`].

use std::io;
use std::path::PathBuf;

/// Terminal failure of a run. Each one is reported once and ends the run.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The input path does not exist.
    #[error("Error: File not found at '{}'", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not well-formed JSON.
    #[error("Error: Invalid JSON format in '{}'", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document has no array under the primary list key.
    #[error("Error: Could not find a list under the key '{key}'.")]
    Structure { key: String },

    /// Any other failure while reading the input (permissions, directory, bad UTF-8).
    #[error("An unexpected error occurred during file reading: {source}")]
    Unexpected {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing progress lines to the output failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl LinkError {
    /// Second diagnostic line, for errors the user can fix by reconfiguring.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LinkError::Structure { .. } => Some(
                "Please check your JSON structure and set `primary_list_key` in config.toml (or pass --list-key).",
            ),
            _ => None,
        }
    }
}
