//! Aggregate wait-time counters reported when a run finishes.

/// The four wait-time totals accumulated over one simulation run.
///
/// Time is measured in floor-travel units: one floor of travel costs one unit
/// and there is no acceleration or door time.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitStats {
    /// Total travel time of the car.
    pub total_time:             u64,
    /// Sum over moves of `time_taken * passengers onboard before the move`.
    pub onboard_wait:           u64,
    /// Sum over moves of `time_taken * passengers still waiting before the move`.
    pub offboard_wait:          u64,
    /// Sum over moves of `time_taken * initial passengers still aboard`.
    pub initial_passenger_wait: u64,
}
