//! Human-readable log backend.

use std::io::Write;

use lift_core::Event;
use lift_sim::LiftState;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes each event as one log line, e.g.
///
/// ```text
/// Moving to floor 1 (Time taken 1 second, Total time: 1).
/// Picking up 1 passenger(s) on floor 1
/// ```
///
/// With [`with_load`][Self::with_load], a `Passengers in the lift: N` line
/// follows every stop.
pub struct TextLogWriter<W: Write> {
    out:       W,
    show_load: bool,
    finished:  bool,
}

impl<W: Write> TextLogWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, show_load: false, finished: false }
    }

    /// Also print the car's load after each stop.
    pub fn with_load(mut self, show_load: bool) -> Self {
        self.show_load = show_load;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TextLogWriter<W> {
    fn write_event(&mut self, event: &Event) -> OutputResult<()> {
        writeln!(self.out, "{event}")?;
        Ok(())
    }

    fn write_state(&mut self, _step: u64, state: &LiftState) -> OutputResult<()> {
        if self.show_load {
            writeln!(self.out, "Passengers in the lift: {}", state.onboard_count())?;
        }
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
