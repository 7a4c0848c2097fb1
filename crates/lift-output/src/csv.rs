//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`  — one row per event
//! - `summary.csv` — one row with the final state and wait totals

use std::fs::File;
use std::path::Path;

use csv::Writer;

use lift_core::Event;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes the event log to two CSV files.
///
/// Columns that do not apply to an event kind are left empty.
pub struct CsvWriter {
    events:   Writer<File>,
    summary:  Writer<File>,
    seq:      u64,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["seq", "kind", "floor", "count", "time_taken", "total_time"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record([
            "final_floor",
            "onboard",
            "waiting",
            "total_time",
            "onboard_wait",
            "offboard_wait",
            "initial_passenger_wait",
        ])?;

        Ok(Self { events, summary, seq: 0, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, event: &Event) -> OutputResult<()> {
        let (count, time_taken, total_time) = match *event {
            Event::Move { time_taken, total_time, .. } => {
                (String::new(), time_taken.to_string(), total_time.to_string())
            }
            Event::Pickup { count, .. } | Event::Dropoff { count, .. } => {
                (count.to_string(), String::new(), String::new())
            }
            Event::Finished { floor, onboard, waiting, stats } => {
                self.summary.write_record(&[
                    floor.to_string(),
                    onboard.to_string(),
                    waiting.to_string(),
                    stats.total_time.to_string(),
                    stats.onboard_wait.to_string(),
                    stats.offboard_wait.to_string(),
                    stats.initial_passenger_wait.to_string(),
                ])?;
                (onboard.to_string(), String::new(), stats.total_time.to_string())
            }
        };

        self.events.write_record(&[
            self.seq.to_string(),
            event.kind().to_string(),
            event.floor().to_string(),
            count,
            time_taken,
            total_time,
        ])?;
        self.seq += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
