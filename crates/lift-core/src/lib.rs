//! `lift-core` — foundational types for the lift dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and no I/O; the only external crates are `thiserror`
//! and the optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`floor`]       | `Floor`, `FloorsAhead`, `FLOOR_COUNT`                 |
//! | [`direction`]   | `Direction` (UP / DOWN scan direction)                |
//! | [`event`]       | `Event` — the structured output unit of the engine    |
//! | [`stats`]       | `WaitStats` — the four wait-time counters             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod event;
pub mod floor;
pub mod stats;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use event::Event;
pub use floor::{FLOOR_COUNT, Floor, FloorsAhead};
pub use stats::WaitStats;

/// Maximum number of passengers the car can hold.
pub const CAPACITY: u32 = 5;
