//! Scan direction of the car.
//!
//! On the command line and in scenario files the direction is the integer
//! flag `1` (up) or `0` (down); the names `up` and `down` are accepted too.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Direction the car is currently scanning for requests.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    /// Toward the top floor.
    #[default]
    Up,
    /// Toward the ground floor.
    Down,
}

impl Direction {
    /// Decode the integer flag: `1` = up, `0` = down.
    pub fn from_flag(flag: i64) -> CoreResult<Direction> {
        match flag {
            1 => Ok(Direction::Up),
            0 => Ok(Direction::Down),
            other => Err(CoreError::InvalidDirection(other)),
        }
    }

    /// Inverse of [`from_flag`][Self::from_flag].
    pub fn flag(self) -> i64 {
        match self {
            Direction::Up   => 1,
            Direction::Down => 0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Direction> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "up"   => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => s
                .parse::<i64>()
                .map_err(|_| {
                    CoreError::Parse(format!(
                        "invalid direction {s:?}: expected 1, 0, \"up\" or \"down\""
                    ))
                })
                .and_then(Direction::from_flag),
        }
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Direction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Direction {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(i64),
            Name(String),
        }

        let parsed = match Repr::deserialize(deserializer)? {
            Repr::Flag(flag) => Direction::from_flag(flag),
            Repr::Name(name) => name.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
