//! The structured events emitted by the engine.
//!
//! A run produces a finite ordered sequence of [`Event`]s ending in exactly
//! one [`Event::Finished`].  Renderers consume these values directly; the
//! `Display` impl is a diagnostic rendering only.

use std::fmt;

use crate::{Floor, WaitStats};

/// One state transition of the car.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Event {
    /// The car travelled to `floor`, taking `time_taken` units; `total_time`
    /// is the running total including this move.
    Move {
        floor:      Floor,
        time_taken: u64,
        total_time: u64,
    },

    /// `count` waiting passengers boarded at `floor`.
    Pickup {
        floor: Floor,
        count: u32,
    },

    /// `count` onboard passengers left the car at `floor`.
    Dropoff {
        floor: Floor,
        count: u32,
    },

    /// No request remains reachable in either direction.
    Finished {
        floor:   Floor,
        onboard: u32,
        /// Passengers never picked up (left at the car's starting floor).
        waiting: u32,
        stats:   WaitStats,
    },
}

impl Event {
    /// The floor this event happened at (the target floor for `Move`).
    pub fn floor(&self) -> Floor {
        match *self {
            Event::Move { floor, .. }
            | Event::Pickup { floor, .. }
            | Event::Dropoff { floor, .. }
            | Event::Finished { floor, .. } => floor,
        }
    }

    /// Short label, used as the `kind` column in tabular output.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Move { .. }     => "move",
            Event::Pickup { .. }   => "pickup",
            Event::Dropoff { .. }  => "dropoff",
            Event::Finished { .. } => "finished",
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, Event::Finished { .. })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Move { floor, time_taken, total_time } => write!(
                f,
                "Moving to floor {floor} (Time taken {time_taken} second, Total time: {total_time})."
            ),
            Event::Pickup { floor, count } => {
                write!(f, "Picking up {count} passenger(s) on floor {floor}")
            }
            Event::Dropoff { floor, count } => {
                write!(f, "Dropping off {count} passenger(s) on floor {floor}.")
            }
            Event::Finished { floor, onboard, stats, .. } => write!(
                f,
                "Final state: Lift at floor {floor}. Passengers in lift: {onboard}. \
                 Total wait time for passengers inside the lift: {}. \
                 Total wait time for passengers waiting to be picked up: {}. \
                 Total wait time for passengers originally in the lift: {}.",
                stats.onboard_wait, stats.offboard_wait, stats.initial_passenger_wait,
            ),
        }
    }
}
