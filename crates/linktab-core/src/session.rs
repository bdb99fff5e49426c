//! One end-to-end run: load, extract, open, with every user-facing line
//! written to a caller-supplied writer.

use std::io::{self, Write};
use std::path::Path;

use crate::error::LinkError;
use crate::extract::{extract_links, ExtractConfig};
use crate::loader::load_document;
use crate::opener::{open_all, UrlOpener};

/// How a run that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The document was well-formed but carried no usable link.
    NoLinks,
    /// Every link was handed to the opener; `failed` of them were refused.
    Opened { count: usize, failed: usize },
}

/// Open every valid link found in the JSON file at `path`.
///
/// Writes the found count, per-link progress and the closing banner to `out`.
/// Diagnostics for the returned error are left to the caller, see
/// [`write_diagnostic`].
pub fn open_links_from_file<O, W>(
    path: &Path,
    cfg: &ExtractConfig,
    opener: &mut O,
    out: &mut W,
) -> Result<RunOutcome, LinkError>
where
    O: UrlOpener + ?Sized,
    W: Write,
{
    let doc = load_document(path)?;
    let links = extract_links(&doc, cfg)?;

    if links.is_empty() {
        writeln!(out, "No valid links found after parsing the file.").map_err(LinkError::Output)?;
        return Ok(RunOutcome::NoLinks);
    }

    writeln!(out, "Found {} valid links to open.", links.len()).map_err(LinkError::Output)?;
    let summary = open_all(&links, opener, out).map_err(LinkError::Output)?;
    tracing::info!(
        path = %path.display(),
        opened = summary.attempted,
        failed = summary.failed,
        "opened links"
    );

    Ok(RunOutcome::Opened {
        count: summary.attempted,
        failed: summary.failed,
    })
}

/// Write the user-facing diagnostic for `err`: its message, then its hint if any.
pub fn write_diagnostic<W: Write>(err: &LinkError, out: &mut W) -> io::Result<()> {
    writeln!(out, "{err}")?;
    if let Some(hint) = err.hint() {
        writeln!(out, "{hint}")?;
    }
    Ok(())
}
