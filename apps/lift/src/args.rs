//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, ValueEnum};

use lift_core::Direction;
use lift_sim::{LiftParams, parse_int, parse_int_list};

const USAGE_HINT: &str = "write lists as one quoted argument, e.g. \"4, 5, 6\": \
    lift <current_floor> <onboard_count> <direction> <drop_off_floors> \
    <offboard_count> <pick_up_floors> <pick_up_destinations>";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable log lines.
    Text,
    /// One JSON object per event.
    Json,
    /// `events.csv` and `summary.csv` in `--out`.
    Csv,
}

/// Simulate a single four-floor lift and print its event log.
#[derive(Debug, Parser)]
#[command(name = "lift", version, after_help = USAGE_HINT)]
pub struct Cli {
    /// Positional parameters: current_floor onboard_count direction(1=up, 0=down)
    /// drop_off_floors offboard_count pick_up_floors pick_up_destinations.
    #[arg(value_name = "PARAM", allow_negative_numbers = true)]
    pub params: Vec<String>,

    /// Load parameters from a JSON file instead.
    #[arg(long, conflicts_with_all = ["params", "random"])]
    pub scenario: Option<PathBuf>,

    /// Generate a random valid scenario from this seed.
    #[arg(long, value_name = "SEED", conflicts_with = "params")]
    pub random: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Output directory for `--format csv`.
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Print the car's load after each stop (text format).
    #[arg(long)]
    pub show_load: bool,

    /// Print a text frame of the shaft after every event.
    #[arg(long)]
    pub replay: bool,

    /// Echo the resolved parameters as JSON on stderr.
    #[arg(long)]
    pub print_params: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).  `RUST_LOG`
    /// overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Decode the seven positional parameters.
pub fn params_from_positional(params: &[String]) -> Result<LiftParams> {
    let [current, onboard, direction, drop_offs, offboard, pick_ups, destinations] = params else {
        bail!("expected 7 parameters, got {}; {USAGE_HINT}", params.len());
    };

    Ok(LiftParams {
        current_floor:        parse_int("current_floor", current)?,
        onboard_count:        parse_int("onboard_count", onboard)?,
        direction:            direction.parse::<Direction>()?,
        drop_off_floors:      parse_int_list(drop_offs)?,
        offboard_count:       parse_int("offboard_count", offboard)?,
        pick_up_floors:       parse_int_list(pick_ups)?,
        pick_up_destinations: parse_int_list(destinations)?,
    })
}
