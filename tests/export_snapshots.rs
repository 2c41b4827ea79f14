// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end export over real snapshot files

mod common;

use anyhow::Result;
use snapshot_export::export::{
    ExportGraphicsInfo, ExportGraphicsOptions, ExportLinesInfo, ExportStats, GraphicsExporter,
    GraphicsSink, YieldPoint,
};
use snapshot_export::snapshot::QUALIFYING_ELEMENTS_SQL;
use snapshot_export::{
    export_snapshot, export_snapshot_directory, export_snapshot_file, ElementId, ExportConfig,
    ExportError, ExportHost, NoopSink, Snapshot, SnapshotDb,
};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::Path;
use tempfile::TempDir;

/// Wraps a real snapshot and records each export call's id slice
struct Recording<'a> {
    inner: &'a SnapshotDb,
    calls: RefCell<Vec<Vec<ElementId>>>,
}

impl GraphicsExporter for Recording<'_> {
    fn export_graphics(
        &self,
        options: &ExportGraphicsOptions<'_>,
        sink: &mut dyn GraphicsSink,
    ) -> snapshot_export::Result<ExportStats> {
        self.calls.borrow_mut().push(options.element_ids.to_vec());
        self.inner.export_graphics(options, sink)
    }
}

impl Snapshot for Recording<'_> {
    fn name(&self) -> String {
        self.inner.name()
    }

    fn query_element_ids(&self, sql: &str) -> snapshot_export::Result<Vec<ElementId>> {
        self.inner.query_element_ids(sql)
    }
}

/// Overwrite one element's geometry with text that is not a geometry stream
fn corrupt_geometry(path: &Path, element: ElementId) -> Result<()> {
    let conn = rusqlite::Connection::open(path)?;
    let updated = conn.execute(
        "UPDATE bis_GeometricElement3d SET GeometryStream = '{\"origin\": [0, 0' WHERE Id = ?1",
        [element.0 as i64],
    )?;
    assert_eq!(updated, 1);
    conn.close().map_err(|(_, e)| e)?;
    Ok(())
}

#[derive(Default)]
struct CountingSink {
    meshes: usize,
    lines: usize,
    elements: BTreeSet<ElementId>,
}

impl GraphicsSink for CountingSink {
    fn on_graphics(&mut self, info: &ExportGraphicsInfo<'_>) {
        self.meshes += 1;
        self.elements.insert(info.element_id);
    }

    fn on_line_graphics(&mut self, info: &ExportLinesInfo<'_>) {
        self.lines += 1;
        self.elements.insert(info.element_id);
    }
}

#[derive(Default)]
struct CountingYield(usize);

impl YieldPoint for CountingYield {
    fn between_chunks(&mut self, _completed: usize, _remaining: usize) {
        self.0 += 1;
    }
}

#[test]
fn test_one_hundred_twenty_elements_export_in_three_chunks() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("plant.bim");
    let expected = common::build_snapshot(&path, 120);

    let db = SnapshotDb::open_file(&path)?;
    let recording = Recording {
        inner: &db,
        calls: RefCell::new(Vec::new()),
    };
    let mut sink = CountingSink::default();
    let mut pacer = CountingYield::default();

    let report = export_snapshot(&recording, &ExportConfig::default(), &mut sink, &mut pacer)?;

    let calls = recording.calls.into_inner();
    let sizes: Vec<usize> = calls.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![50, 50, 20]);
    assert_eq!(calls.concat(), expected);

    assert_eq!(report.element_count, 120);
    assert_eq!(report.chunks, 3);
    assert_eq!(report.stats.elements, 120);
    assert_eq!(report.stats.meshes, 120);
    assert_eq!(report.stats.lines, 120);
    assert!(report.elapsed.as_secs_f64() >= 0.0);

    assert_eq!(pacer.0, 2);
    assert_eq!(sink.meshes, 120);
    assert_eq!(sink.lines, 120);
    assert_eq!(sink.elements, expected.into_iter().collect::<BTreeSet<_>>());

    db.close()?;
    Ok(())
}

#[test]
fn test_template_and_private_models_are_excluded() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("flags.bim");
    let expected = common::build_snapshot(&path, 25);

    let db = SnapshotDb::open_file(&path)?;
    let ids = db.query_element_ids(QUALIFYING_ELEMENTS_SQL)?;
    assert_eq!(ids, expected);
    Ok(())
}

#[test]
fn test_empty_snapshot_makes_no_export_call() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("empty.bim");
    common::build_snapshot(&path, 0);

    let db = SnapshotDb::open_file(&path)?;
    let recording = Recording {
        inner: &db,
        calls: RefCell::new(Vec::new()),
    };
    let report = export_snapshot(
        &recording,
        &ExportConfig::default(),
        &mut NoopSink,
        &mut CountingYield::default(),
    )?;

    assert_eq!(report.element_count, 0);
    assert!(recording.calls.borrow().is_empty());
    Ok(())
}

#[test]
fn test_decimation_reduces_line_points() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("lines.bim");
    common::build_snapshot(&path, 1);

    let db = SnapshotDb::open_file(&path)?;
    let report = export_snapshot(
        &db,
        &ExportConfig::default(),
        &mut NoopSink,
        &mut CountingYield::default(),
    )?;

    // The collinear middle point of the sample polyline is dropped
    assert_eq!(report.stats.line_points, 3);
    Ok(())
}

#[test]
fn test_file_export_opens_and_closes() -> Result<()> {
    let _host = ExportHost::startup();
    let dir = TempDir::new()?;
    let path = common::snapshot_in(dir.path(), "single.bim", 7);

    let report = export_snapshot_file(&path, &ExportConfig::default())?;
    assert_eq!(report.element_count, 7);
    assert_eq!(report.chunks, 1);

    // The handle was released, so the file can be removed
    std::fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_file_export_of_missing_snapshot_fails() {
    let _host = ExportHost::startup();
    let dir = TempDir::new().unwrap();

    let result = export_snapshot_file(&dir.path().join("absent.bim"), &ExportConfig::default());
    assert!(matches!(result, Err(ExportError::Open { .. })));
}

#[test]
fn test_directory_run_isolates_failing_files() -> Result<()> {
    let _host = ExportHost::startup();
    let dir = TempDir::new()?;
    common::snapshot_in(dir.path(), "a.bim", 60);
    std::fs::write(dir.path().join("b.bim"), "definitely not a snapshot database file")?;
    common::snapshot_in(dir.path(), "c.bim", 3);
    common::snapshot_in(dir.path(), "ignored.db", 10);
    std::fs::create_dir(dir.path().join("nested"))?;
    common::snapshot_in(&dir.path().join("nested"), "deep.bim", 10);

    let batch = export_snapshot_directory(dir.path(), &ExportConfig::default())?;

    assert_eq!(batch.total_files(), 3);
    assert_eq!(batch.exported.len(), 2);
    assert_eq!(batch.total_elements(), 63);
    assert_eq!(batch.failed.len(), 1);
    assert_eq!(batch.failed[0].path, dir.path().join("b.bim"));
    assert!(!batch.is_success());
    Ok(())
}

#[test]
fn test_directory_run_of_missing_directory_fails() {
    let _host = ExportHost::startup();
    let dir = TempDir::new().unwrap();

    let result = export_snapshot_directory(&dir.path().join("absent"), &ExportConfig::default());
    assert!(matches!(result, Err(ExportError::NotADirectory(_))));
}

#[test]
fn test_bad_geometry_abandons_remaining_chunks() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.bim");
    let ids = common::build_snapshot(&path, 120);
    corrupt_geometry(&path, ids[70])?;

    let db = SnapshotDb::open_file(&path)?;
    let recording = Recording {
        inner: &db,
        calls: RefCell::new(Vec::new()),
    };
    let mut pacer = CountingYield::default();

    let result = export_snapshot(&recording, &ExportConfig::default(), &mut NoopSink, &mut pacer);

    match result {
        Err(ExportError::Geometry { element, .. }) => assert_eq!(element, ids[70]),
        other => panic!("expected a geometry error, got {:?}", other),
    }
    let sizes: Vec<usize> = recording.calls.borrow().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![50, 50]);
    assert_eq!(pacer.0, 1);

    db.close()?;
    Ok(())
}

#[test]
fn test_file_export_failure_still_closes_snapshot() -> Result<()> {
    let _host = ExportHost::startup();
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.bim");
    let ids = common::build_snapshot(&path, 80);
    corrupt_geometry(&path, ids[60])?;

    let result = export_snapshot_file(&path, &ExportConfig::default());
    assert!(matches!(result, Err(ExportError::Geometry { .. })));

    // The export error is reported and the handle is released
    std::fs::remove_file(&path)?;
    common::build_snapshot(&path, 2);
    assert_eq!(export_snapshot_file(&path, &ExportConfig::default())?.element_count, 2);
    Ok(())
}

#[test]
fn test_directory_run_continues_past_export_failure() -> Result<()> {
    let _host = ExportHost::startup();
    let dir = TempDir::new()?;
    common::snapshot_in(dir.path(), "a.bim", 5);
    let broken = dir.path().join("b.bim");
    let ids = common::build_snapshot(&broken, 80);
    corrupt_geometry(&broken, ids[60])?;
    common::snapshot_in(dir.path(), "c.bim", 3);

    let batch = export_snapshot_directory(dir.path(), &ExportConfig::default())?;

    assert_eq!(batch.exported.len(), 2);
    assert_eq!(batch.total_elements(), 8);
    assert_eq!(batch.failed.len(), 1);
    assert_eq!(batch.failed[0].path, broken);
    assert!(batch.failed[0].error.contains("malformed geometry stream"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_directory_run_survives_dangling_symlink() -> Result<()> {
    let _host = ExportHost::startup();
    let dir = TempDir::new()?;
    common::snapshot_in(dir.path(), "good.bim", 5);
    std::os::unix::fs::symlink(dir.path().join("gone.bim"), dir.path().join("stale.bim"))?;

    let batch = export_snapshot_directory(dir.path(), &ExportConfig::default())?;

    assert_eq!(batch.exported.len(), 1);
    assert_eq!(batch.total_elements(), 5);
    assert_eq!(batch.failed.len(), 1);
    assert_eq!(batch.failed[0].path, dir.path().join("stale.bim"));
    assert!(!batch.is_success());
    Ok(())
}
