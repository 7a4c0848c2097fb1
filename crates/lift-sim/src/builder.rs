//! Fluent builder for constructing a [`Sim`].

use lift_core::{Direction, FLOOR_COUNT};

use crate::{LiftParams, Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                       |
/// |-----------------------|-----------------------------------------------|
/// | `.onboard(v)`         | Empty car                                     |
/// | `.waiting(f, d)`      | Nobody waiting                                |
/// | `.max_steps(n)`       | `(2 * waiting + onboard + 1) * FLOOR_COUNT`   |
///
/// The counts are taken from the list lengths.  Use
/// [`from_params`][Self::from_params] to supply explicit counts.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(0, Direction::Up)
///     .onboard(vec![2])
///     .waiting(vec![1], vec![3])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    params:    LiftParams,
    max_steps: Option<u64>,
}

impl SimBuilder {
    /// Start from an empty car at `current_floor` scanning in `direction`.
    pub fn new(current_floor: i64, direction: Direction) -> Self {
        Self::from_params(LiftParams {
            current_floor,
            direction,
            ..LiftParams::default()
        })
    }

    /// Start from a complete raw parameter set.
    pub fn from_params(params: LiftParams) -> Self {
        Self { params, max_steps: None }
    }

    /// Destinations of the passengers already in the car.
    pub fn onboard(mut self, drop_off_floors: Vec<i64>) -> Self {
        self.params.onboard_count = drop_off_floors.len() as i64;
        self.params.drop_off_floors = drop_off_floors;
        self
    }

    /// Waiting passengers: where each waits and where each is going.
    pub fn waiting(mut self, pick_up_floors: Vec<i64>, destinations: Vec<i64>) -> Self {
        self.params.offboard_count = pick_up_floors.len() as i64;
        self.params.pick_up_floors = pick_up_floors;
        self.params.pick_up_destinations = destinations;
        self
    }

    /// Override the iteration cap.  Exceeding it aborts the run with
    /// `InternalInconsistency`.
    pub fn max_steps(mut self, n: u64) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let state = self.params.validate()?;

        // Every move either removes a drop-off or converts a pick-up into
        // one, except a full car's trips toward pick-ups it cannot serve.
        // Fewer than FLOOR_COUNT of those happen in a row before a
        // drop-off, so (2P + D) * FLOOR_COUNT bounds the number of moves.
        let requests = 2 * state.offboard_count() as u64 + state.onboard_count() as u64;
        let max_steps = self
            .max_steps
            .unwrap_or((requests + 1) * FLOOR_COUNT as u64);

        Ok(Sim::new(state, max_steps))
    }
}
