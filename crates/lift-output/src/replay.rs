//! Renderer-side replay of an event log.
//!
//! A `Replay` owns everything a front-end needs to animate one session: car
//! position, riders and waiting passengers per floor.  Nothing is global, so
//! several sessions can be replayed side by side.
//!
//! Waiting passengers are seeded up front from the total `Pickup` count per
//! floor, the same way the front-end draws every waiting passenger before the
//! animation starts.

use lift_core::{Event, FLOOR_COUNT, Floor};

use crate::{OutputError, OutputResult};

/// Width of the shaft column in a rendered frame.
const SHAFT_WIDTH: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    car:      Floor,
    riders:   u32,
    waiting:  [u32; FLOOR_COUNT as usize],
    applied:  usize,
    finished: bool,
}

impl Replay {
    /// Prepare a session for `events`, starting with the car at `start` with
    /// `riders` passengers aboard.
    pub fn new(start: Floor, riders: u32, events: &[Event]) -> Self {
        let mut waiting = [0; FLOOR_COUNT as usize];
        for event in events {
            if let Event::Pickup { floor, count } = *event {
                waiting[floor.index()] += count;
            }
        }
        Self { car: start, riders, waiting, applied: 0, finished: false }
    }

    /// Apply the next event.  Events must arrive in emission order; anything
    /// after `Finished` is rejected.
    pub fn apply(&mut self, event: &Event) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Replay(format!(
                "event {} ({}) arrived after the session finished",
                self.applied,
                event.kind()
            )));
        }

        match *event {
            Event::Move { floor, .. } => self.car = floor,
            Event::Pickup { floor, count } => {
                let slot = &mut self.waiting[floor.index()];
                *slot = slot.saturating_sub(count);
                self.riders += count;
            }
            Event::Dropoff { count, .. } => {
                self.riders = self.riders.saturating_sub(count);
            }
            Event::Finished { floor, .. } => {
                self.car = floor;
                self.finished = true;
            }
        }
        self.applied += 1;
        Ok(())
    }

    pub fn car_floor(&self) -> Floor {
        self.car
    }

    pub fn riders(&self) -> u32 {
        self.riders
    }

    pub fn waiting_at(&self, floor: Floor) -> u32 {
        self.waiting[floor.index()]
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Draw the shaft, top floor first: the car shows its rider count and
    /// each waiting passenger is an `o` beside the shaft.
    ///
    /// ```text
    /// 3 |       |
    /// 2 |  [2]  | o
    /// 1 |       |
    /// 0 |       | o o
    /// ```
    pub fn render(&self) -> String {
        Floor::ALL
            .iter()
            .rev()
            .map(|&floor| {
                let car = if floor == self.car { format!("[{}]", self.riders) } else { String::new() };
                let queue = vec!["o"; self.waiting_at(floor) as usize].join(" ");
                format!("{floor} |{car:^SHAFT_WIDTH$}| {queue}").trim_end().to_owned()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
