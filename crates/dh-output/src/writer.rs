//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DroneSnapshotRow, FactionScoreRow, OutputResult, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the full score table after a score change.
    fn write_scores(&mut self, rows: &[FactionScoreRow]) -> OutputResult<()>;

    /// Write a batch of drone snapshots.
    fn write_snapshots(&mut self, rows: &[DroneSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
