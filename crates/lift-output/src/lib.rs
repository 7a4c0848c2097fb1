//! `lift-output` — consumers of the engine's event stream.
//!
//! Three writer backends:
//!
//! | Writer              | Output                                                  |
//! |---------------------|---------------------------------------------------------|
//! | [`TextLogWriter`]   | Human-readable log lines on any `io::Write`             |
//! | [`JsonLinesWriter`] | One JSON object per event on any `io::Write`            |
//! | [`CsvWriter`]       | `events.csv`, `summary.csv` in a directory              |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::SimObserver`.
//!
//! [`Replay`] is the renderer-side state machine: it consumes events in order
//! and draws the shaft as text.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{SimOutputObserver, TextLogWriter};
//!
//! let mut obs = SimOutputObserver::new(TextLogWriter::new(std::io::stdout()));
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod replay;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonLinesWriter;
pub use observer::SimOutputObserver;
pub use replay::Replay;
pub use text::TextLogWriter;
pub use writer::OutputWriter;
