//! Next-move selection.
//!
//! Both scans are monotonic: they walk floors strictly ahead of the car in
//! the current direction and take the first match, so a request two floors
//! away is only reached once nothing nearer is pending.

use tracing::trace;

use lift_core::Floor;

use crate::LiftState;

/// Choose the next floor to visit, or `None` when the run is terminal.
///
/// Reverses `state.direction` (at most once per call) when nothing is ahead.
/// The reversal is kept even when the reversed scan also finds nothing.
pub fn next_move(state: &mut LiftState) -> Option<Floor> {
    let (mut drop_off, mut pick_up) = (next_drop_off(state), next_pick_up(state));

    if drop_off.is_none() && pick_up.is_none() {
        state.direction = state.direction.reversed();
        trace!(floor = %state.current_floor, direction = %state.direction, "reversing");

        (drop_off, pick_up) = (next_drop_off(state), next_pick_up(state));
        if drop_off.is_none() && pick_up.is_none() {
            return None;
        }
    }

    match (drop_off, pick_up) {
        // Board on the way when the pick-up is no further than the drop-off.
        (Some(d), Some(p)) if pick_up_on_way(state, d, p) && state.has_space() => Some(p),
        (Some(d), _) => Some(d),
        (None, p) => p,
    }
}

/// Nearest floor ahead where an onboard passenger wants to leave.
pub fn next_drop_off(state: &LiftState) -> Option<Floor> {
    nearest_ahead(state, &state.drop_off_floors)
}

/// Nearest floor ahead where a passenger is waiting.
///
/// Capacity is not considered here: a full car with nothing else ahead still
/// travels to the pick-up, and boarding is capped at the stop.
pub fn next_pick_up(state: &LiftState) -> Option<Floor> {
    nearest_ahead(state, &state.pick_up_floors)
}

/// `true` if `pick_up` lies between the car and `drop_off` (inclusive of the
/// drop-off floor) in the direction of travel.
pub fn pick_up_on_way(state: &LiftState, drop_off: Floor, pick_up: Floor) -> bool {
    pick_up.is_on_way(state.current_floor, drop_off, state.direction)
}

fn nearest_ahead(state: &LiftState, requests: &[Floor]) -> Option<Floor> {
    state
        .current_floor
        .ahead(state.direction)
        .find(|floor| requests.contains(floor))
}
