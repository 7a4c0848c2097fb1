//! Error type for conversions into the core value types.
//!
//! Higher crates keep their own error enums (`SimError`, `OutputError`) and
//! map a `CoreError` into whichever of their variants names the failing input.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("floor {0} out of range; floors are 0, 1, 2, 3")]
    FloorOutOfRange(i64),

    #[error("direction flag {0} is invalid; use 1 for up or 0 for down")]
    InvalidDirection(i64),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `lift-core` conversions.
pub type CoreResult<T> = Result<T, CoreError>;
