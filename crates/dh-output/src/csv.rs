//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_summaries.csv`
//! - `faction_scores.csv`
//! - `drone_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DroneSnapshotRow, FactionScoreRow, OutputResult, TickSummaryRow};

const SUMMARY_HEADER: [&str; 13] = [
    "tick", "elapsed_secs", "searching", "moving", "collecting", "returning", "delivering",
    "carrying", "resources", "available", "spawned", "deliveries", "active_effects",
];

const SCORE_HEADER: [&str; 5] = ["tick", "faction_id", "name", "score", "color"];

const SNAPSHOT_HEADER: [&str; 9] = [
    "drone_id", "tick", "faction_id", "state", "x", "y", "z", "has_resource", "target",
];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    scores:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    ///
    /// `dir` is created if it does not exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut scores = Writer::from_path(dir.join("faction_scores.csv"))?;
        scores.write_record(SCORE_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("drone_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self { summaries, scores, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.4}", row.elapsed_secs),
            row.searching.to_string(),
            row.moving.to_string(),
            row.collecting.to_string(),
            row.returning.to_string(),
            row.delivering.to_string(),
            row.carrying.to_string(),
            row.resources.to_string(),
            row.available.to_string(),
            row.spawned.to_string(),
            row.deliveries.to_string(),
            row.active_effects.to_string(),
        ])?;
        Ok(())
    }

    fn write_scores(&mut self, rows: &[FactionScoreRow]) -> OutputResult<()> {
        for row in rows {
            self.scores.write_record(&[
                row.tick.to_string(),
                row.faction_id.to_string(),
                row.name.clone(),
                row.score.to_string(),
                row.color.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[DroneSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.drone_id.to_string(),
                row.tick.to_string(),
                row.faction_id.to_string(),
                row.state.to_owned(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                (row.has_resource as u8).to_string(),
                row.target.map(|t| t.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.scores.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
