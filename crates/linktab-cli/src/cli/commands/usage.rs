//! `linktab` with no path – print usage and examples.

use anyhow::Result;
use std::io::Write;

pub fn run_usage<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Usage: linktab <path_to_your_json_file>")?;
    writeln!(out)?;
    writeln!(out, "Example: linktab your_data.json")?;
    writeln!(
        out,
        "Example: linktab --list-key \"Saved Media\" --url-key \"Media Download Url\" export.json"
    )?;
    Ok(())
}
