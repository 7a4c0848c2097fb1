//! Parameter loading from JSON files and command-line strings.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "current_floor": 0,
//!   "onboard_count": 1,
//!   "direction": "up",
//!   "drop_off_floors": [3],
//!   "offboard_count": 3,
//!   "pick_up_floors": [1, 1, 2],
//!   "pick_up_destinations": [3, 0, 1]
//! }
//! ```
//!
//! `direction` accepts `1` / `0` or `"up"` / `"down"`.  List fields default
//! to empty.  Loading only decodes; range and count checks happen in
//! [`LiftParams::validate`].
//!
//! # List strings
//!
//! On the command line each list is one argument.  [`parse_int_list`] accepts
//! `"4, 5, 6"`, `"[4,5,6]"` and `"4 5 6"`; an empty string is an empty list.

use std::io::Read;
use std::path::Path;

use crate::{LiftParams, SimError, SimResult};

/// Load [`LiftParams`] from a JSON file.
pub fn load_params_json(path: &Path) -> SimResult<LiftParams> {
    let file = std::fs::File::open(path)?;
    load_params_reader(file)
}

/// Like [`load_params_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading stdin.
pub fn load_params_reader<R: Read>(reader: R) -> SimResult<LiftParams> {
    serde_json::from_reader(reader).map_err(|e| SimError::Parse(e.to_string()))
}

/// Parse one integer argument, naming `field` in the error.
pub fn parse_int(field: &str, s: &str) -> SimResult<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| SimError::Parse(format!("{field}: expected an integer, got {s:?}")))
}

/// Parse a list of integers written as a single string.
pub fn parse_int_list(s: &str) -> SimResult<Vec<i64>> {
    s.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                SimError::Parse(format!("invalid integer {token:?} in list {s:?}"))
            })
        })
        .collect()
}
