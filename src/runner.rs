// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shared export routine behind both front ends

use crate::config::ExportConfig;
use crate::discovery::discover_snapshots;
use crate::error::Result;
use crate::export::{
    export_in_chunks, CooperativeYield, ExportStats, GraphicsSink, NoopSink, YieldPoint,
};
use crate::host::ExportHost;
use crate::snapshot::{Snapshot, SnapshotDb, QUALIFYING_ELEMENTS_SQL};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Result of exporting one snapshot
#[derive(Debug, Clone)]
pub struct SnapshotReport {
    pub name: String,
    pub element_count: usize,
    pub chunks: usize,
    pub stats: ExportStats,
    /// Time spent in the chunked export, zero when nothing qualified
    pub elapsed: Duration,
}

/// A snapshot in a directory run that could not be exported
#[derive(Debug, Clone)]
pub struct FailedSnapshot {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a directory run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub exported: Vec<SnapshotReport>,
    pub failed: Vec<FailedSnapshot>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total_files(&self) -> usize {
        self.exported.len() + self.failed.len()
    }

    pub fn total_elements(&self) -> usize {
        self.exported.iter().map(|r| r.element_count).sum()
    }

    pub fn total_elapsed(&self) -> Duration {
        self.exported.iter().map(|r| r.elapsed).sum()
    }
}

/// Query the qualifying 3D elements of `snapshot` and export them in chunks
pub fn export_snapshot<S>(
    snapshot: &S,
    config: &ExportConfig,
    sink: &mut dyn GraphicsSink,
    pacer: &mut dyn YieldPoint,
) -> Result<SnapshotReport>
where
    S: Snapshot + ?Sized,
{
    config.validate()?;
    let name = snapshot.name();

    let ids = snapshot.query_element_ids(QUALIFYING_ELEMENTS_SQL)?;
    info!("Found {} 3D elements in {}", ids.len(), name);

    if ids.is_empty() {
        return Ok(SnapshotReport {
            name,
            element_count: 0,
            chunks: 0,
            stats: ExportStats::default(),
            elapsed: Duration::ZERO,
        });
    }

    let start = Instant::now();
    let summary = export_in_chunks(snapshot, &ids, config, sink, pacer)?;
    let elapsed = start.elapsed();
    info!("Exported {} in {:.2}s", name, elapsed.as_secs_f64());

    Ok(SnapshotReport {
        name,
        element_count: ids.len(),
        chunks: summary.chunks,
        stats: summary.stats,
        elapsed,
    })
}

/// Open `path`, export it with no-op callbacks, and close it again
pub fn export_snapshot_file(path: &Path, config: &ExportConfig) -> Result<SnapshotReport> {
    ExportHost::ensure_running()?;

    let db = SnapshotDb::open_file(path)?;
    info!("Opened {}", path.display());

    let exported = export_snapshot(&db, config, &mut NoopSink, &mut CooperativeYield);
    // Close even when the export failed; the export error wins
    let closed = db.close();
    let report = exported?;
    closed?;
    Ok(report)
}

/// Export every snapshot file directly inside `dir`.
///
/// A file that fails is logged and recorded in the report; the remaining
/// files are still processed.
pub fn export_snapshot_directory(dir: &Path, config: &ExportConfig) -> Result<BatchReport> {
    ExportHost::ensure_running()?;
    config.validate()?;

    let discovered = discover_snapshots(dir, &config.extension)?;
    info!(
        "Found {} .{} files in {}",
        discovered.snapshots.len() + discovered.unreadable.len(),
        config.extension,
        dir.display()
    );

    let mut batch = BatchReport::default();
    for (path, e) in discovered.unreadable {
        error!("Failed to export {}: {}", path.display(), e);
        batch.failed.push(FailedSnapshot {
            path,
            error: e.to_string(),
        });
    }

    for path in discovered.snapshots {
        match export_snapshot_file(&path, config) {
            Ok(report) => batch.exported.push(report),
            Err(e) => {
                error!("Failed to export {}: {}", path.display(), e);
                batch.failed.push(FailedSnapshot {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(batch)
}
