//! Wait-time accounting per move.

use lift_core::{Floor, WaitStats};

use crate::LiftState;

/// Accumulates [`WaitStats`] across the moves of one run.
///
/// Each move is charged against the state *before* the car moves, so
/// passengers boarding at the target floor do not pay for the trip there.
#[derive(Debug, Clone, Default)]
pub struct WaitTimeAccumulator {
    stats: WaitStats,
}

impl WaitTimeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Charge the move from `state.current_floor` to `next`; returns the
    /// time the move takes.
    pub fn record_move(&mut self, state: &LiftState, next: Floor) -> u64 {
        let time_taken = state.current_floor.distance(next);
        let stats = &mut self.stats;
        stats.total_time += time_taken;
        stats.onboard_wait += time_taken * state.onboard_count as u64;
        stats.offboard_wait += time_taken * state.offboard_count as u64;
        stats.initial_passenger_wait += time_taken * state.initial_passengers.len() as u64;
        time_taken
    }

    pub fn stats(&self) -> WaitStats {
        self.stats
    }
}
