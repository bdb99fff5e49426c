//! Read a JSON document from disk.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::LinkError;

/// Read `path` as UTF-8 text and parse it as JSON.
///
/// A missing file is [`LinkError::FileAccess`], malformed JSON is
/// [`LinkError::Format`], and every other read failure is
/// [`LinkError::Unexpected`].
pub fn load_document(path: &Path) -> Result<Value, LinkError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LinkError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        _ => LinkError::Unexpected {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let doc = serde_json::from_str(&text).map_err(|source| LinkError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded JSON document");
    Ok(doc)
}
