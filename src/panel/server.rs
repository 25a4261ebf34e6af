//! Line-delimited JSON transport between the panel and the host.
//!
//! One request per input line, at most one response line per request.
//! Requests are handled strictly in order; a bad line is logged and skipped.

use crate::error::PathyError;
use crate::panel::message::{PanelRequest, PanelResponse};
use crate::panel::Panel;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Serves one panel over a reader/writer pair
pub struct PanelServer<R, W> {
    panel: Panel,
    reader: R,
    writer: W,
}

/// Counters reported when the input side closes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeSummary {
    pub handled: usize,
    pub ignored: usize,
    pub malformed: usize,
}

impl<R: BufRead, W: Write> PanelServer<R, W> {
    pub fn new(panel: Panel, reader: R, writer: W) -> Self {
        Self {
            panel,
            reader,
            writer,
        }
    }

    /// Send the seed, then answer requests until the reader hits EOF
    pub fn run(mut self) -> Result<ServeSummary, PathyError> {
        let opened = self.panel.seed().to_response();
        self.send(&opened)?;

        let mut summary = ServeSummary::default();
        let mut line = Vec::new();
        loop {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let text = match std::str::from_utf8(&line) {
                Ok(text) => text.trim(),
                Err(e) => {
                    warn!(error = %e, "Skipping panel message that is not UTF-8");
                    summary.malformed += 1;
                    continue;
                }
            };
            if text.is_empty() {
                continue;
            }

            let request = match PanelRequest::from_json(text) {
                Ok(request) => request,
                Err(e) => {
                    warn!(error = %e, "Skipping malformed panel message");
                    summary.malformed += 1;
                    continue;
                }
            };

            match self.panel.handle(request) {
                Some(response) => {
                    self.send(&response)?;
                    summary.handled += 1;
                }
                None => summary.ignored += 1,
            }
        }

        info!(
            handled = summary.handled,
            ignored = summary.ignored,
            malformed = summary.malformed,
            "Panel closed"
        );
        Ok(summary)
    }

    fn send(&mut self, response: &PanelResponse) -> Result<(), PathyError> {
        let encoded = response.to_json()?;
        debug!(bytes = encoded.len(), "Sending panel response");
        writeln!(self.writer, "{}", encoded)?;
        self.writer.flush()?;
        Ok(())
    }
}
