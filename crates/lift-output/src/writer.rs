//! The `OutputWriter` trait implemented by all backend writers.

use lift_core::Event;
use lift_sim::LiftState;

use crate::OutputResult;

/// Trait implemented by the text, JSON-lines and CSV writers.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error`.
pub trait OutputWriter {
    /// Write one event.
    fn write_event(&mut self, event: &Event) -> OutputResult<()>;

    /// Record the car state after a stop.  Most backends ignore it.
    fn write_state(&mut self, _step: u64, _state: &LiftState) -> OutputResult<()> {
        Ok(())
    }

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_event(&mut self, event: &Event) -> OutputResult<()> {
        (**self).write_event(event)
    }

    fn write_state(&mut self, step: u64, state: &LiftState) -> OutputResult<()> {
        (**self).write_state(step, state)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
