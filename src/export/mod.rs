// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Graphics export - exporter trait, sinks, and the chunked driver

pub mod chunked;
mod engine;
mod sink;

pub use chunked::{export_in_chunks, ChunkSummary, CooperativeYield, YieldPoint};
pub use engine::{export_stream, ExportGraphicsOptions, ExportStats, GraphicsExporter};
pub use sink::{ExportGraphicsInfo, ExportLinesInfo, GraphicsSink, NoopSink};
