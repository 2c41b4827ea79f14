// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Receivers for exported graphics

use crate::geometry::Mesh;
use crate::snapshot::ElementId;
use nalgebra::Point3;

/// One tessellated solid of an element
#[derive(Debug)]
pub struct ExportGraphicsInfo<'a> {
    pub element_id: ElementId,
    pub mesh: &'a Mesh,
}

/// One polyline of an element
#[derive(Debug)]
pub struct ExportLinesInfo<'a> {
    pub element_id: ElementId,
    pub points: &'a [Point3<f64>],
}

/// Callbacks invoked synchronously while `export_graphics` runs. The
/// borrowed graphics are only valid for the duration of the call.
pub trait GraphicsSink {
    fn on_graphics(&mut self, info: &ExportGraphicsInfo<'_>);

    fn on_line_graphics(&mut self, info: &ExportLinesInfo<'_>);
}

/// Discards everything; the export runs only for the work it does
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl GraphicsSink for NoopSink {
    fn on_graphics(&mut self, _info: &ExportGraphicsInfo<'_>) {}

    fn on_line_graphics(&mut self, _info: &ExportLinesInfo<'_>) {}
}
