//! Applying a stop: drop-offs, then pick-ups, then the floor change.

use tracing::debug;

use lift_core::Floor;

use crate::{LiftState, SimError, SimResult};

/// How many passengers left and boarded at one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopOutcome {
    pub dropped: u32,
    pub boarded: u32,
}

/// Move the car to `next` and exchange passengers there.
///
/// Fails with [`SimError::InternalInconsistency`] if the manifests disagree
/// with the counters afterwards.
pub fn apply_stop(state: &mut LiftState, next: Floor) -> SimResult<StopOutcome> {
    let dropped = drop_off(state, next)?;
    let boarded = pick_up(state, next)?;
    state.current_floor = next;
    retain_initial_passengers(state);
    state.check_counts()?;
    Ok(StopOutcome { dropped, boarded })
}

/// Every onboard passenger bound for `floor` leaves.
fn drop_off(state: &mut LiftState, floor: Floor) -> SimResult<u32> {
    let before = state.drop_off_floors.len();
    state.drop_off_floors.retain(|&f| f != floor);
    let departures = (before - state.drop_off_floors.len()) as u32;

    state.onboard_count = state.onboard_count.checked_sub(departures).ok_or_else(|| {
        SimError::InternalInconsistency(format!(
            "{departures} passengers left at floor {floor} but only {} were aboard",
            state.onboard_count
        ))
    })?;

    if departures > 0 {
        debug!(%floor, departures, onboard = state.onboard_count, "drop-off");
    }
    Ok(departures)
}

/// Waiting passengers at `floor` board in queue order until the car is full.
///
/// Destinations are consumed from the head of `pick_up_destinations`, one
/// per boarder. Those who do not fit keep their place in the queue.
fn pick_up(state: &mut LiftState, floor: Floor) -> SimResult<u32> {
    let mut space = state.free_capacity();
    let mut boarded = 0u32;

    state.pick_up_floors.retain(|&f| {
        if f == floor && space > 0 {
            space -= 1;
            boarded += 1;
            false
        } else {
            true
        }
    });

    let queued = state.pick_up_destinations.len();
    if boarded as usize > queued {
        return Err(SimError::InternalInconsistency(format!(
            "{boarded} passengers boarded at floor {floor} but only {queued} destinations were queued"
        )));
    }
    state.drop_off_floors.extend(state.pick_up_destinations.drain(..boarded as usize));

    state.offboard_count = state.offboard_count.checked_sub(boarded).ok_or_else(|| {
        SimError::InternalInconsistency(format!(
            "{boarded} passengers boarded at floor {floor} but only {} were waiting",
            state.offboard_count
        ))
    })?;
    state.onboard_count += boarded;

    if boarded > 0 {
        debug!(%floor, boarded, onboard = state.onboard_count, "pick-up");
    }
    Ok(boarded)
}

/// Forget initial passengers whose destination no longer has a drop-off.
fn retain_initial_passengers(state: &mut LiftState) {
    let LiftState { initial_passengers, drop_off_floors, .. } = state;
    initial_passengers.retain(|f| drop_off_floors.contains(f));
}
