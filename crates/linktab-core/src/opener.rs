//! Opening links: the `UrlOpener` capability and the progress-reporting loop.

use std::io::{self, Write};

use crate::extract::LinkSet;

/// Something that can show a URL to the user, normally a browser tab.
pub trait UrlOpener {
    /// Ask for `url` to be opened in a new tab.
    ///
    /// Success only means the request was handed off; nothing checks that a
    /// tab actually appeared.
    fn open_in_new_tab(&mut self, url: &str) -> io::Result<()>;

    /// Closing line printed after every link has been handed off.
    fn completion_message(&self) -> &'static str {
        "✅ All valid links have been opened in new browser tabs."
    }
}

/// Opens URLs in the user's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserOpener;

impl UrlOpener for BrowserOpener {
    fn open_in_new_tab(&mut self, url: &str) -> io::Result<()> {
        // Browsers that are already running get a new tab rather than a window.
        webbrowser::open(url)
    }
}

/// Prints each URL instead of launching anything.
#[derive(Debug)]
pub struct DryRunOpener<W> {
    out: W,
}

impl<W: Write> DryRunOpener<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> UrlOpener for DryRunOpener<W> {
    fn open_in_new_tab(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.out, "  {url}")
    }

    fn completion_message(&self) -> &'static str {
        "Dry run: no browser tabs were opened."
    }
}

/// Counts from one pass of [`open_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenSummary {
    pub attempted: usize,
    /// Hand-offs the opener reported as failed. They are logged, not fatal.
    pub failed: usize,
}

/// Hand every link to `opener` in order, printing `Opening link i/total` first.
///
/// Opener failures are logged and the loop moves on; only a failure to write
/// to `out` stops it.
pub fn open_all<O, W>(links: &LinkSet, opener: &mut O, out: &mut W) -> io::Result<OpenSummary>
where
    O: UrlOpener + ?Sized,
    W: Write,
{
    let total = links.len();
    let mut failed = 0;

    for (i, url) in links.iter().enumerate() {
        writeln!(out, "Opening link {}/{}", i + 1, total)?;
        out.flush()?;
        if let Err(e) = opener.open_in_new_tab(url) {
            failed += 1;
            tracing::warn!(url = %url, error = %e, "failed to hand link to browser");
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", opener.completion_message())?;

    Ok(OpenSummary {
        attempted: total,
        failed,
    })
}
