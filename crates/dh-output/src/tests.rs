//! Integration tests for dh-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{DroneSnapshotRow, FactionScoreRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn snap_row(drone_id: u32, target: Option<u64>) -> DroneSnapshotRow {
        DroneSnapshotRow {
            drone_id,
            tick:         5,
            faction_id:   1,
            state:        "moving_to_resource",
            x:            1.5,
            y:            1.0,
            z:            -2.0,
            has_resource: false,
            target,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("faction_scores.csv").exists());
        assert!(dir.path().join("drone_snapshots.csv").exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(dir.path().join("faction_scores.csv")), ["tick", "faction_id", "name", "score", "color"]);
        assert_eq!(
            headers(dir.path().join("drone_snapshots.csv")),
            ["drone_id", "tick", "faction_id", "state", "x", "y", "z", "has_resource", "target"]
        );
        assert_eq!(headers(dir.path().join("tick_summaries.csv")).len(), 13);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, Some(7)), snap_row(1, None)]).unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("drone_snapshots.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][3], "moving_to_resource");
        assert_eq!(&rows[0][4], "1.5");
        assert_eq!(&rows[0][8], "7");
        assert_eq!(&rows[1][8], ""); // no target
    }

    #[test]
    fn csv_score_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_scores(&[FactionScoreRow {
            tick:       42,
            faction_id: 0,
            name:       "Red".into(),
            score:      3,
            color:      "#ff0000".into(),
        }])
        .unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("faction_scores.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "Red");
        assert_eq!(&rows[0][3], "3");
        assert_eq!(&rows[0][4], "#ff0000");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:           3,
            elapsed_secs:   0.05,
            searching:      4,
            moving:         2,
            collecting:     1,
            returning:      1,
            delivering:     0,
            carrying:       1,
            resources:      6,
            available:      5,
            spawned:        1,
            deliveries:     0,
            active_effects: 2,
        })
        .unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("tick_summaries.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "0.0500");
        assert_eq!(&rows[0][2], "4");
        assert_eq!(&rows[0][12], "2");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
        w.write_scores(&[]).unwrap();
    }
}

// ── Observer integration ──────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use dh_behavior::HarvestBehavior;
    use dh_core::{Color, Faction, SimConfig, Vec3};
    use dh_sim::{SimBuilder, SimObserver};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{DroneSnapshotRow, FactionScoreRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn factions() -> Vec<Faction> {
        vec![
            Faction::new("Red", Color::RED, Vec3::new(-12.0, 0.0, 0.0)),
            Faction::new("Blue", Color::BLUE, Vec3::new(12.0, 0.0, 0.0)),
        ]
    }

    #[test]
    fn integration_csv() {
        let config = SimConfig {
            total_ticks:           6,
            drones_per_faction:    2,
            output_interval_ticks: 2,
            ..SimConfig::default()
        };
        let behavior = HarvestBehavior::from_config(&config);
        let mut sim = SimBuilder::new(config, factions(), behavior).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.restart(&mut obs);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 4 drones = 12 rows)
        let mut rdr = csv::Reader::from_path(dir.path().join("drone_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12, "expected 3 ticks × 4 drones = 12 snapshot rows, got {}", rows.len());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);

        // restart reports one zeroed line per faction
        let mut rdr = csv::Reader::from_path(dir.path().join("faction_scores.csv")).unwrap();
        let scores: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(scores.len(), 2);
        assert_eq!(&scores[1][2], "Blue");
        assert_eq!(&scores[1][3], "0");
        assert_eq!(&scores[1][4], "#0000ff");
    }

    /// Fails every write with an I/O error.
    struct Broken {
        finished: u32,
    }

    impl OutputWriter for Broken {
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn write_scores(&mut self, _rows: &[FactionScoreRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_snapshots(&mut self, _rows: &[DroneSnapshotRow]) -> OutputResult<()> {
            Err(std::io::Error::other("second failure").into())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let config = SimConfig { total_ticks: 3, output_interval_ticks: 1, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config, factions(), HarvestBehavior::default()).build().unwrap();

        let mut obs = SimOutputObserver::new(Broken { finished: 0 });
        sim.run(&mut obs);

        let err = obs.take_error().expect("error stored");
        assert!(matches!(&err, OutputError::Io(e) if e.to_string() == "disk full"));
        assert!(obs.take_error().is_none());
        obs.on_sim_end(dh_core::Tick(3));
        assert_eq!(obs.into_writer().finished, 2);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{DroneSnapshotRow, FactionScoreRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap(drone_id: u32, target: Option<u64>) -> DroneSnapshotRow {
        DroneSnapshotRow {
            drone_id,
            tick:         1,
            faction_id:   0,
            state:        "collecting",
            x:            0.0,
            y:            1.0,
            z:            0.0,
            has_resource: true,
            target,
        }
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap(0, Some(3)), snap(1, None), snap(2, Some(9))]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM drone_snapshots", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_missing_target_is_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap(0, None)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let val: Option<i64> = conn.query_row(
            "SELECT target FROM drone_snapshots WHERE drone_id = 0", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(val, None);
    }

    #[test]
    fn sqlite_scores() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_scores(&[FactionScoreRow {
            tick:       10,
            faction_id: 1,
            name:       "Blue".into(),
            score:      4,
            color:      "#0000ff".into(),
        }])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (name, score): (String, i64) = conn.query_row(
            "SELECT name, score FROM faction_scores", [], |r| Ok((r.get(0)?, r.get(1)?))
        ).unwrap();
        assert_eq!(name, "Blue");
        assert_eq!(score, 4);
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
