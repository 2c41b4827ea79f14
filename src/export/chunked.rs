// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Chunked export driver
//!
//! Hands the exporter at most `chunk_size` elements per call, strictly in
//! list order, so engine working memory stays bounded to about one chunk.
//! A [`YieldPoint`] runs between consecutive chunks.

use super::{ExportGraphicsOptions, ExportStats, GraphicsExporter, GraphicsSink};
use crate::config::ExportConfig;
use crate::error::Result;
use crate::snapshot::ElementId;
use tracing::debug;

/// Invoked after every chunk except the last
pub trait YieldPoint {
    fn between_chunks(&mut self, completed: usize, remaining: usize);
}

/// Gives up the thread so pending reclamation can run before the next chunk
#[derive(Debug, Default, Clone, Copy)]
pub struct CooperativeYield;

impl YieldPoint for CooperativeYield {
    fn between_chunks(&mut self, _completed: usize, _remaining: usize) {
        std::thread::yield_now();
    }
}

/// Outcome of exporting one identifier list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkSummary {
    pub chunks: usize,
    pub stats: ExportStats,
}

/// Export `ids` in contiguous chunks of `config.chunk_size`.
///
/// An empty list makes no export call. The first failing chunk aborts the
/// remaining ones.
pub fn export_in_chunks<E>(
    exporter: &E,
    ids: &[ElementId],
    config: &ExportConfig,
    sink: &mut dyn GraphicsSink,
    pacer: &mut dyn YieldPoint,
) -> Result<ChunkSummary>
where
    E: GraphicsExporter + ?Sized,
{
    config.validate()?;

    let total = ids.len().div_ceil(config.chunk_size);
    let mut summary = ChunkSummary::default();

    for (index, chunk) in ids.chunks(config.chunk_size).enumerate() {
        let options = ExportGraphicsOptions {
            element_ids: chunk,
            chord_tol: config.chord_tol,
            decimation_tol: config.decimation_tol,
        };
        let stats = exporter.export_graphics(&options, sink)?;
        debug!(
            chunk = index + 1,
            of = total,
            elements = chunk.len(),
            triangles = stats.triangles,
            "exported chunk"
        );

        summary.chunks += 1;
        summary.stats += stats;

        if summary.chunks < total {
            pacer.between_chunks(summary.chunks, total - summary.chunks);
        }
    }

    Ok(summary)
}
