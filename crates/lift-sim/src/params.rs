//! Raw construction parameters and the input validator.

use serde::{Deserialize, Serialize};
use tracing::warn;

use lift_core::{CAPACITY, Direction, Floor};

use crate::{LiftState, SimError, SimResult};

/// Initial parameters exactly as a caller supplies them.
///
/// Integers are signed so that negative values survive decoding and are
/// rejected by [`validate`][Self::validate] with a field-specific message
/// rather than by the decoder.
///
/// ```json
/// {
///   "current_floor": 0,
///   "onboard_count": 1,
///   "direction": 1,
///   "drop_off_floors": [2],
///   "offboard_count": 1,
///   "pick_up_floors": [1],
///   "pick_up_destinations": [3]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiftParams {
    pub current_floor:        i64,
    #[serde(default)]
    pub onboard_count:        i64,
    #[serde(default)]
    pub direction:            Direction,
    /// One destination per onboard passenger.
    #[serde(default)]
    pub drop_off_floors:      Vec<i64>,
    /// Passengers waiting to be picked up.
    #[serde(default)]
    pub offboard_count:       i64,
    /// The floor each waiting passenger is waiting on.
    #[serde(default)]
    pub pick_up_floors:       Vec<i64>,
    /// The destination of each waiting passenger, index-aligned with
    /// `pick_up_floors`.
    #[serde(default)]
    pub pick_up_destinations: Vec<i64>,
}

impl LiftParams {
    /// Check every field and build the initial [`LiftState`].
    ///
    /// Pure: calling it twice on the same parameters gives the same result.
    pub fn validate(&self) -> SimResult<LiftState> {
        self.check().inspect_err(|e| warn!(error = %e, "rejected lift parameters"))
    }

    fn check(&self) -> SimResult<LiftState> {
        let current_floor = floor("current_floor", self.current_floor)?;

        let onboard_count = count("onboard_count", self.onboard_count)?;
        if onboard_count > CAPACITY {
            return Err(SimError::invalid(
                "onboard_count",
                format!("{onboard_count} passengers exceeds the capacity of {CAPACITY}"),
            ));
        }
        if onboard_count as usize != self.drop_off_floors.len() {
            return Err(SimError::invalid(
                "drop_off_floors",
                format!(
                    "{} drop-off requests for {onboard_count} onboard passengers",
                    self.drop_off_floors.len()
                ),
            ));
        }
        let drop_off_floors = floors("drop_off_floors", &self.drop_off_floors)?;

        let offboard_count = count("offboard_count", self.offboard_count)?;
        if self.pick_up_floors.len() != self.pick_up_destinations.len()
            || self.pick_up_floors.len() != offboard_count as usize
        {
            return Err(SimError::invalid(
                "pick_up_floors",
                format!(
                    "{} pick-up floors, {} pick-up destinations and {offboard_count} waiting \
                     passengers are not consistent",
                    self.pick_up_floors.len(),
                    self.pick_up_destinations.len(),
                ),
            ));
        }
        let pick_up_floors = floors("pick_up_floors", &self.pick_up_floors)?;
        let pick_up_destinations = floors("pick_up_destinations", &self.pick_up_destinations)?;

        Ok(LiftState::new(
            current_floor,
            self.direction,
            drop_off_floors,
            pick_up_floors,
            pick_up_destinations,
        ))
    }

    /// Total number of passengers named by these parameters.
    pub fn passenger_count(&self) -> usize {
        self.drop_off_floors.len() + self.pick_up_floors.len()
    }
}

// ── Field helpers ─────────────────────────────────────────────────────────────

fn floor(field: &'static str, raw: i64) -> SimResult<Floor> {
    Floor::new(raw).map_err(|e| SimError::invalid(field, e.to_string()))
}

fn floors(field: &'static str, raw: &[i64]) -> SimResult<Vec<Floor>> {
    raw.iter().map(|&f| floor(field, f)).collect()
}

fn count(field: &'static str, raw: i64) -> SimResult<u32> {
    if raw < 0 {
        return Err(SimError::invalid(field, format!("cannot be negative, got {raw}")));
    }
    u32::try_from(raw).map_err(|_| SimError::invalid(field, format!("{raw} is too large")))
}
