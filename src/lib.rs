// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Snapshot graphics export
//!
//! Opens read-only geometric database snapshots, selects the 3D elements
//! that belong to neither template nor private models, and runs graphics
//! export over them in fixed-size chunks with a yield point between chunks.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod geometry;
pub mod host;
pub mod runner;
pub mod snapshot;
pub mod utils;

pub use config::ExportConfig;
pub use error::{ExportError, Result};
pub use export::{GraphicsExporter, GraphicsSink, NoopSink};
pub use host::ExportHost;
pub use runner::{
    export_snapshot, export_snapshot_directory, export_snapshot_file, BatchReport, SnapshotReport,
};
pub use snapshot::{ElementId, Snapshot, SnapshotBuilder, SnapshotDb};
