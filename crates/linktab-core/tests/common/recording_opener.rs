//! `UrlOpener` fake that records every URL instead of launching a browser.

use linktab_core::UrlOpener;
use std::io;

#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
    /// When set, every call is recorded and then reported as failed.
    pub fail: bool,
}

impl RecordingOpener {
    pub fn failing() -> Self {
        Self {
            opened: Vec::new(),
            fail: true,
        }
    }
}

impl UrlOpener for RecordingOpener {
    fn open_in_new_tab(&mut self, url: &str) -> io::Result<()> {
        self.opened.push(url.to_string());
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no browser available"));
        }
        Ok(())
    }
}
