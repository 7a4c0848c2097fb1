//! Command-line front end for the lift dispatch simulator.
//!
//! Parameters come from one of three places:
//!
//! ```text
//! lift 0 1 1 "2" 1 "1" "3"                  # positional parameters
//! lift --scenario scenarios/frontend_demo.json
//! lift --random 42                          # seeded random scenario
//! ```
//!
//! The event log goes to stdout (text, JSON lines, or CSV files); tracing
//! diagnostics go to stderr.

mod args;

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_core::{Event, Floor, WaitStats};
use lift_output::{
    CsvWriter, JsonLinesWriter, OutputWriter, Replay, SimOutputObserver, TextLogWriter,
};
use lift_sim::{LiftParams, LiftState, SimBuilder, SimObserver, load_params_json, random_params};

use args::{Cli, Format};

// ── Observer wrapper to keep events for the replay ───────────────────────────

struct RecordingObserver<W: OutputWriter> {
    inner:  SimOutputObserver<W>,
    events: Vec<Event>,
}

impl<W: OutputWriter> RecordingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, events: Vec::new() }
    }
}

impl<W: OutputWriter> SimObserver for RecordingObserver<W> {
    fn on_event(&mut self, event: &Event) {
        self.events.push(*event);
        self.inner.on_event(event);
    }

    fn on_step_end(&mut self, step: u64, state: &LiftState) {
        self.inner.on_step_end(step, state);
    }

    fn on_sim_end(&mut self, state: &LiftState, stats: &WaitStats) {
        self.inner.on_sim_end(state, stats);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = load_params(&cli)?;
    if cli.print_params {
        eprintln!("{}", serde_json::to_string_pretty(&params)?);
    }

    let mut sim = SimBuilder::from_params(params).build()?;
    let start = sim.state().current_floor();
    let riders = sim.state().onboard_count();

    let writer: Box<dyn OutputWriter> = match cli.format {
        Format::Text => Box::new(TextLogWriter::new(io::stdout().lock()).with_load(cli.show_load)),
        Format::Json => Box::new(JsonLinesWriter::new(io::stdout().lock())),
        Format::Csv => {
            let dir = cli.out.as_deref().context("--format csv requires --out <DIR>")?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Box::new(CsvWriter::new(dir)?)
        }
    };

    let mut obs = RecordingObserver::new(SimOutputObserver::new(writer));
    let stats = sim.run(&mut obs)?;
    if let Some(e) = obs.inner.take_error() {
        bail!("output error: {e}");
    }
    info!(moves = sim.steps(), total_time = stats.total_time, "run complete");

    if cli.replay {
        replay(start, riders, &obs.events)?;
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_params(cli: &Cli) -> Result<LiftParams> {
    if let Some(path) = &cli.scenario {
        return load_params_json(path).with_context(|| format!("loading {}", path.display()));
    }
    if let Some(seed) = cli.random {
        return Ok(random_params(seed));
    }
    args::params_from_positional(&cli.params)
}

/// Print one frame per event, as a front-end would animate them.
fn replay(start: Floor, riders: u32, events: &[Event]) -> Result<()> {
    let mut replay = Replay::new(start, riders, events);
    let mut out = io::stdout().lock();
    writeln!(out, "\n{}", replay.render())?;
    for event in events {
        replay.apply(event)?;
        writeln!(out, "\n> {event}\n{}", replay.render())?;
    }
    Ok(())
}
