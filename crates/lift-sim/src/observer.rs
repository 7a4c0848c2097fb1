//! Simulation observer trait for logging, output and rendering.

use lift_core::{Event, WaitStats};

use crate::LiftState;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step_with`][crate::Sim::step_with].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — load printer
///
/// ```rust,ignore
/// struct LoadPrinter;
///
/// impl SimObserver for LoadPrinter {
///     fn on_step_end(&mut self, _step: u64, state: &LiftState) {
///         println!("Passengers in the lift: {}", state.onboard_count());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the next move is selected.
    fn on_step_start(&mut self, _step: u64, _state: &LiftState) {}

    /// Called once per emitted event, in emission order.
    fn on_event(&mut self, _event: &Event) {}

    /// Called after a move and its stop have been applied.  Not called for
    /// the terminal iteration.
    fn on_step_end(&mut self, _step: u64, _state: &LiftState) {}

    /// Called once, right after the `Finished` event.
    fn on_sim_end(&mut self, _state: &LiftState, _stats: &WaitStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that keeps every event.
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    pub events: Vec<Event>,
}

impl SimObserver for EventRecorder {
    fn on_event(&mut self, event: &Event) {
        self.events.push(*event);
    }
}
