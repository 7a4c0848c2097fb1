//! The `Sim` struct and its dispatch loop.

use std::collections::VecDeque;

use tracing::{debug, info};

use lift_core::{Event, WaitStats};

use crate::update::apply_stop;
use crate::wait::WaitTimeAccumulator;
use crate::{LiftParams, LiftState, NoopObserver, SimBuilder, SimError, SimObserver, SimResult, select};

/// Run state of the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminal,
}

/// One simulation run.
///
/// Owns its [`LiftState`] exclusively; nothing else aliases it.  Each call to
/// [`step`][Self::step] performs one loop iteration and returns the events it
/// produced:
///
/// - `[Move, Dropoff?, Pickup?]` while running,
/// - `[Finished]` on the terminal iteration,
/// - `[]` once terminal.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    state:     LiftState,
    wait:      WaitTimeAccumulator,
    phase:     Phase,
    steps:     u64,
    max_steps: u64,
}

impl Sim {
    pub(crate) fn new(state: LiftState, max_steps: u64) -> Self {
        Self {
            state,
            wait: WaitTimeAccumulator::new(),
            phase: Phase::Running,
            steps: 0,
            max_steps,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn state(&self) -> &LiftState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Moves made so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Run until the terminal state and return the final statistics.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<WaitStats> {
        while !self.is_finished() {
            self.step_with(observer)?;
        }
        Ok(self.wait.stats())
    }

    /// Perform one loop iteration without an observer.
    pub fn step(&mut self) -> SimResult<Vec<Event>> {
        self.step_with(&mut NoopObserver)
    }

    /// Perform one loop iteration, reporting to `observer`.
    pub fn step_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Vec<Event>> {
        if self.is_finished() {
            return Ok(Vec::new());
        }
        self.state.check_counts()?;

        let step = self.steps;
        observer.on_step_start(step, &self.state);

        let Some(next) = select::next_move(&mut self.state) else {
            return Ok(vec![self.finish(observer)]);
        };

        if self.steps >= self.max_steps {
            return Err(SimError::InternalInconsistency(format!(
                "no terminal state after {} moves",
                self.max_steps
            )));
        }

        let from = self.state.current_floor();
        let time_taken = self.wait.record_move(&self.state, next);
        debug!(step, %from, to = %next, time_taken, "moving");

        let mut events = Vec::with_capacity(3);
        events.push(Event::Move {
            floor:      next,
            time_taken,
            total_time: self.wait.stats().total_time,
        });

        let outcome = apply_stop(&mut self.state, next)?;
        if outcome.dropped > 0 {
            events.push(Event::Dropoff { floor: next, count: outcome.dropped });
        }
        if outcome.boarded > 0 {
            events.push(Event::Pickup { floor: next, count: outcome.boarded });
        }
        self.steps += 1;

        for event in &events {
            observer.on_event(event);
        }
        observer.on_step_end(step, &self.state);
        Ok(events)
    }

    /// Consume the run into a lazy iterator of events.
    pub fn into_events(self) -> Events {
        Events { sim: self, buffered: VecDeque::new(), failed: false }
    }

    // ── Terminal transition ───────────────────────────────────────────────

    fn finish<O: SimObserver>(&mut self, observer: &mut O) -> Event {
        self.phase = Phase::Terminal;
        let stats = self.wait.stats();
        let event = Event::Finished {
            floor:   self.state.current_floor(),
            onboard: self.state.onboard_count(),
            waiting: self.state.offboard_count(),
            stats,
        };
        info!(
            floor = %self.state.current_floor(),
            moves = self.steps,
            total_time = stats.total_time,
            "simulation finished"
        );
        observer.on_event(&event);
        observer.on_sim_end(&self.state, &stats);
        event
    }
}

// ── Events iterator ───────────────────────────────────────────────────────────

/// Pull-based event stream returned by [`Sim::into_events`].
///
/// The engine only computes when an event is pulled, so dropping the iterator
/// early simply abandons the run.  After an error the iterator is fused.
pub struct Events {
    sim:      Sim,
    buffered: VecDeque<Event>,
    failed:   bool,
}

impl Events {
    /// The underlying run, e.g. to inspect state between pulls.
    pub fn sim(&self) -> &Sim {
        &self.sim
    }
}

impl Iterator for Events {
    type Item = SimResult<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.buffered.pop_front() {
                return Some(Ok(event));
            }
            if self.failed || self.sim.is_finished() {
                return None;
            }
            match self.sim.step() {
                Ok(events) => self.buffered.extend(events),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Validate `params`, run to completion and return every event.
pub fn simulate(params: &LiftParams) -> SimResult<Vec<Event>> {
    SimBuilder::from_params(params.clone()).build()?.into_events().collect()
}
