//! Floor numbers and the directional scan over them.
//!
//! The building has a fixed four floors, `0..=3`.  A `Floor` can only be
//! constructed through a range check, so every `Floor` held by the engine is
//! valid by construction.

use std::fmt;

use crate::{CoreError, CoreResult, Direction};

/// Number of floors served by the car.
pub const FLOOR_COUNT: u8 = 4;

/// A validated floor number in `0..FLOOR_COUNT`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Floor(u8);

impl Floor {
    pub const GROUND: Floor = Floor(0);
    pub const TOP:    Floor = Floor(FLOOR_COUNT - 1);

    /// Every floor, ground first.
    pub const ALL: [Floor; FLOOR_COUNT as usize] = [Floor(0), Floor(1), Floor(2), Floor(3)];

    /// Range-checked constructor from a raw (possibly negative) integer.
    pub fn new(raw: i64) -> CoreResult<Floor> {
        if (0..FLOOR_COUNT as i64).contains(&raw) {
            Ok(Floor(raw as u8))
        } else {
            Err(CoreError::FloorOutOfRange(raw))
        }
    }

    #[inline(always)]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Cast to `usize` for indexing per-floor arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Number of floors travelled between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u64 {
        self.0.abs_diff(other.0) as u64
    }

    /// The floors strictly ahead of `self` in `direction`, nearest first.
    ///
    /// Going up from the top floor (or down from the ground floor) yields
    /// nothing.
    pub fn ahead(self, direction: Direction) -> FloorsAhead {
        FloorsAhead { cursor: self.0, direction }
    }

    /// `true` if `self` lies strictly between `from` and `to` in `direction`,
    /// counting `to` itself but not `from`.
    pub fn is_on_way(self, from: Floor, to: Floor, direction: Direction) -> bool {
        match direction {
            Direction::Up   => from < self && self <= to,
            Direction::Down => to <= self && self < from,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Floor {
    type Error = CoreError;
    fn try_from(n: u8) -> CoreResult<Floor> {
        Floor::new(n as i64)
    }
}

impl TryFrom<i64> for Floor {
    type Error = CoreError;
    fn try_from(n: i64) -> CoreResult<Floor> {
        Floor::new(n)
    }
}

impl From<Floor> for u8 {
    #[inline(always)]
    fn from(floor: Floor) -> u8 {
        floor.0
    }
}

// ── FloorsAhead ───────────────────────────────────────────────────────────────

/// Iterator returned by [`Floor::ahead`].
///
/// A monotonic linear scan: the first floor yielded is the one adjacent to
/// the starting floor, the last is the top (or ground) floor.
#[derive(Clone, Debug)]
pub struct FloorsAhead {
    cursor:    u8,
    direction: Direction,
}

impl Iterator for FloorsAhead {
    type Item = Floor;

    fn next(&mut self) -> Option<Floor> {
        match self.direction {
            Direction::Up => {
                if self.cursor >= Floor::TOP.0 {
                    return None;
                }
                self.cursor += 1;
            }
            Direction::Down => {
                if self.cursor == Floor::GROUND.0 {
                    return None;
                }
                self.cursor -= 1;
            }
        }
        Some(Floor(self.cursor))
    }
}
