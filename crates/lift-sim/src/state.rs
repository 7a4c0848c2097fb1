//! The mutable car state owned by one simulation run.

use lift_core::{CAPACITY, Direction, Floor};

use crate::{SimError, SimResult};

/// Car position, scan direction and passenger manifests.
///
/// Invariants (checked by [`check_counts`][Self::check_counts]):
///
/// - `onboard_count == drop_off_floors.len() <= CAPACITY`
/// - `offboard_count == pick_up_floors.len() == pick_up_destinations.len()`
/// - `pick_up_destinations[i]` is the destination of the passenger waiting
///   at `pick_up_floors[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftState {
    pub(crate) current_floor:        Floor,
    pub(crate) direction:            Direction,
    pub(crate) onboard_count:        u32,
    pub(crate) drop_off_floors:      Vec<Floor>,
    pub(crate) offboard_count:       u32,
    pub(crate) pick_up_floors:       Vec<Floor>,
    pub(crate) pick_up_destinations: Vec<Floor>,
    /// Destinations of passengers that were aboard at the start of the run
    /// and have not yet left.
    pub(crate) initial_passengers:   Vec<Floor>,
}

impl LiftState {
    /// Build from already-validated parts.  Counts are taken from the list
    /// lengths.
    pub(crate) fn new(
        current_floor:        Floor,
        direction:            Direction,
        drop_off_floors:      Vec<Floor>,
        pick_up_floors:       Vec<Floor>,
        pick_up_destinations: Vec<Floor>,
    ) -> Self {
        Self {
            current_floor,
            direction,
            onboard_count: drop_off_floors.len() as u32,
            initial_passengers: drop_off_floors.clone(),
            drop_off_floors,
            offboard_count: pick_up_floors.len() as u32,
            pick_up_floors,
            pick_up_destinations,
        }
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn onboard_count(&self) -> u32 {
        self.onboard_count
    }

    pub fn offboard_count(&self) -> u32 {
        self.offboard_count
    }

    pub fn drop_off_floors(&self) -> &[Floor] {
        &self.drop_off_floors
    }

    pub fn pick_up_floors(&self) -> &[Floor] {
        &self.pick_up_floors
    }

    pub fn pick_up_destinations(&self) -> &[Floor] {
        &self.pick_up_destinations
    }

    pub fn initial_passengers(&self) -> &[Floor] {
        &self.initial_passengers
    }

    /// Free seats in the car.
    #[inline]
    pub fn free_capacity(&self) -> u32 {
        CAPACITY.saturating_sub(self.onboard_count)
    }

    #[inline]
    pub fn has_space(&self) -> bool {
        self.onboard_count < CAPACITY
    }

    /// `true` when no drop-off or pick-up request is pending at all.
    pub fn is_idle(&self) -> bool {
        self.drop_off_floors.is_empty() && self.pick_up_floors.is_empty()
    }

    /// Verify the passenger-count invariants.
    pub fn check_counts(&self) -> SimResult<()> {
        if self.onboard_count as usize != self.drop_off_floors.len() {
            return Err(SimError::InternalInconsistency(format!(
                "{} onboard passengers but {} drop-off requests",
                self.onboard_count,
                self.drop_off_floors.len()
            )));
        }
        if self.onboard_count > CAPACITY {
            return Err(SimError::InternalInconsistency(format!(
                "{} onboard passengers exceeds capacity {CAPACITY}",
                self.onboard_count
            )));
        }
        if self.offboard_count as usize != self.pick_up_floors.len()
            || self.pick_up_floors.len() != self.pick_up_destinations.len()
        {
            return Err(SimError::InternalInconsistency(format!(
                "{} waiting passengers, {} pick-up floors, {} pick-up destinations",
                self.offboard_count,
                self.pick_up_floors.len(),
                self.pick_up_destinations.len()
            )));
        }
        Ok(())
    }
}
