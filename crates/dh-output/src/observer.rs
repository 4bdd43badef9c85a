//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use dh_agent::DroneStore;
use dh_core::Tick;
use dh_directory::{Directory, ScoreLine};
use dh_sim::{SimObserver, TickSummary};

use crate::row::{DroneSnapshotRow, FactionScoreRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries, score changes and drone
/// snapshots to any [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:           summary.tick.0,
            elapsed_secs:   summary.elapsed_secs,
            searching:      summary.searching as u64,
            moving:         summary.moving as u64,
            collecting:     summary.collecting as u64,
            returning:      summary.returning as u64,
            delivering:     summary.delivering as u64,
            carrying:       summary.carrying as u64,
            resources:      summary.resources as u64,
            available:      summary.available as u64,
            spawned:        summary.spawned as u64,
            deliveries:     summary.deliveries as u64,
            active_effects: summary.active_effects as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_scores(&mut self, tick: Tick, lines: &[ScoreLine]) {
        let rows: Vec<FactionScoreRow> = lines
            .iter()
            .map(|line| FactionScoreRow {
                tick:       tick.0,
                faction_id: line.faction.0,
                name:       line.name.clone(),
                score:      line.count,
                color:      line.color.to_hex(),
            })
            .collect();
        let result = self.writer.write_scores(&rows);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, drones: &DroneStore, _directory: &Directory) {
        let rows: Vec<DroneSnapshotRow> = (0..drones.count)
            .map(|i| {
                let p = drones.position[i];
                DroneSnapshotRow {
                    drone_id:     i as u32,
                    tick:         tick.0,
                    faction_id:   drones.faction[i].0,
                    state:        drones.state[i].as_str(),
                    x:            p.x,
                    y:            p.y,
                    z:            p.z,
                    has_resource: drones.has_resource[i],
                    target:       drones.target[i].map(|r| r.0),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
