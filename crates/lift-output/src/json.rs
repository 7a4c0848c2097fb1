//! JSON-lines backend.

use std::io::Write;

use lift_core::Event;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes each event as a single-line JSON object tagged by `kind`:
///
/// ```text
/// {"kind":"move","floor":1,"time_taken":1,"total_time":1}
/// {"kind":"pickup","floor":1,"count":1}
/// ```
pub struct JsonLinesWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for JsonLinesWriter<W> {
    fn write_event(&mut self, event: &Event) -> OutputResult<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
