//! Shared helpers for linktab-core integration tests.

pub mod recording_opener;

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `contents` to a fresh temp file that lives as long as the handle.
pub fn json_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}
