//! Seeded random scenario generation.
//!
//! The same seed always produces the same parameters.  Generated scenarios
//! are always valid: nobody onboard is bound for the starting floor and no
//! waiting passenger is bound for the floor they wait on.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lift_core::{CAPACITY, Direction, FLOOR_COUNT};

use crate::LiftParams;

/// Upper bound on waiting passengers in a generated scenario.
pub const MAX_RANDOM_WAITING: usize = 8;

/// Generate a valid random parameter set from `seed`.
pub fn random_params(seed: u64) -> LiftParams {
    let mut rng = SmallRng::seed_from_u64(seed);

    let current_floor = rng.gen_range(0..FLOOR_COUNT as i64);
    let direction = if rng.gen_bool(0.5) { Direction::Up } else { Direction::Down };

    let onboard = rng.gen_range(0..=CAPACITY as usize);
    let drop_off_floors: Vec<i64> = (0..onboard)
        .map(|_| other_floor(&mut rng, current_floor))
        .collect();

    let waiting = rng.gen_range(0..=MAX_RANDOM_WAITING);
    let (pick_up_floors, pick_up_destinations): (Vec<i64>, Vec<i64>) = (0..waiting)
        .map(|_| {
            let floor = rng.gen_range(0..FLOOR_COUNT as i64);
            (floor, other_floor(&mut rng, floor))
        })
        .unzip();

    LiftParams {
        current_floor,
        onboard_count: onboard as i64,
        direction,
        drop_off_floors,
        offboard_count: waiting as i64,
        pick_up_floors,
        pick_up_destinations,
    }
}

/// A uniformly chosen floor other than `exclude`.
fn other_floor(rng: &mut SmallRng, exclude: i64) -> i64 {
    let floor = rng.gen_range(0..FLOOR_COUNT as i64 - 1);
    if floor >= exclude { floor + 1 } else { floor }
}
