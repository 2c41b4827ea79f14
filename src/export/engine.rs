// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Graphics export over snapshot geometry streams

use super::{ExportGraphicsInfo, ExportLinesInfo, GraphicsSink};
use crate::error::Result;
use crate::geometry::{GeometryStream, Tessellation};
use crate::snapshot::{ElementId, SnapshotDb};
use nalgebra::Point3;
use serde::Serialize;
use std::ops::AddAssign;
use tracing::trace;

/// Parameters of one export call
#[derive(Debug, Clone, Copy)]
pub struct ExportGraphicsOptions<'a> {
    pub element_ids: &'a [ElementId],
    pub chord_tol: f64,
    pub decimation_tol: f64,
}

/// Work counters for one or more export calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportStats {
    /// Elements that had geometry to export
    pub elements: usize,
    pub meshes: usize,
    pub triangles: usize,
    pub lines: usize,
    pub line_points: usize,
}

impl AddAssign for ExportStats {
    fn add_assign(&mut self, other: Self) {
        self.elements += other.elements;
        self.meshes += other.meshes;
        self.triangles += other.triangles;
        self.lines += other.lines;
        self.line_points += other.line_points;
    }
}

/// Produces graphics for a set of elements and feeds them to a sink
pub trait GraphicsExporter {
    fn export_graphics(
        &self,
        options: &ExportGraphicsOptions<'_>,
        sink: &mut dyn GraphicsSink,
    ) -> Result<ExportStats>;
}

impl GraphicsExporter for SnapshotDb {
    fn export_graphics(
        &self,
        options: &ExportGraphicsOptions<'_>,
        sink: &mut dyn GraphicsSink,
    ) -> Result<ExportStats> {
        let mut stats = ExportStats::default();

        for &element_id in options.element_ids {
            // Unknown ids and elements without geometry export nothing
            let Some(stream) = self.geometry_stream(element_id)? else {
                trace!(%element_id, "no geometry");
                continue;
            };
            stats += export_stream(element_id, &stream, options, sink);
        }

        Ok(stats)
    }
}

/// Tessellate every primitive of `stream`, placed at the stream origin
pub fn export_stream(
    element_id: ElementId,
    stream: &GeometryStream,
    options: &ExportGraphicsOptions<'_>,
    sink: &mut dyn GraphicsSink,
) -> ExportStats {
    let mut stats = ExportStats::default();
    if stream.primitives.is_empty() {
        return stats;
    }
    stats.elements = 1;

    for primitive in &stream.primitives {
        match primitive.tessellate(options.chord_tol, options.decimation_tol) {
            Tessellation::Mesh(mut mesh) => {
                if mesh.is_empty() {
                    continue;
                }
                mesh.translate(&stream.origin);
                stats.meshes += 1;
                stats.triangles += mesh.triangle_count();
                sink.on_graphics(&ExportGraphicsInfo {
                    element_id,
                    mesh: &mesh,
                });
            }
            Tessellation::Line(points) => {
                if points.len() < 2 {
                    continue;
                }
                let points: Vec<Point3<f64>> =
                    points.into_iter().map(|p| p + stream.origin).collect();
                stats.lines += 1;
                stats.line_points += points.len();
                sink.on_line_graphics(&ExportLinesInfo {
                    element_id,
                    points: &points,
                });
            }
        }
    }

    stats
}
