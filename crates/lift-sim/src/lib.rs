//! `lift-sim` — the dispatch loop of the lift simulator.
//!
//! # Dispatch loop
//!
//! ```text
//! validate(params) → LiftState
//! loop:
//!   ① Check   — passenger-count invariants hold (else InternalInconsistency).
//!   ② Select  — nearest drop-off / pick-up strictly ahead; reverse once if
//!               neither exists; none after reversing → Finished.
//!   ③ Time    — accumulate wait statistics for the move, emit Move.
//!   ④ Stop    — drop-offs at the target (emit Dropoff), then pick-ups up to
//!               free capacity (emit Pickup).
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::Direction;
//! use lift_sim::{EventRecorder, SimBuilder};
//!
//! let mut sim = SimBuilder::new(0, Direction::Up)
//!     .onboard(vec![2])
//!     .waiting(vec![1], vec![3])
//!     .build()?;
//! let mut recorder = EventRecorder::default();
//! sim.run(&mut recorder)?;
//! ```

pub mod builder;
pub mod error;
pub mod loader;
pub mod observer;
pub mod params;
pub mod scenario;
pub mod select;
pub mod sim;
pub mod state;
pub mod update;
pub mod wait;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use loader::{load_params_json, load_params_reader, parse_int, parse_int_list};
pub use observer::{EventRecorder, NoopObserver, SimObserver};
pub use params::LiftParams;
pub use scenario::random_params;
pub use sim::{Events, Phase, Sim, simulate};
pub use state::LiftState;
pub use wait::WaitTimeAccumulator;
