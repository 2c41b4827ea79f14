// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Snapshot fixtures shared by the integration tests

#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use snapshot_export::geometry::{GeometryStream, Primitive};
use snapshot_export::{ElementId, SnapshotBuilder};
use std::path::{Path, PathBuf};

/// Geometry with one solid and one polyline, offset by `i` along x
pub fn sample_stream(i: usize) -> GeometryStream {
    GeometryStream::new(Vector3::new(i as f64 * 3.0, 0.0, 0.0))
        .with_primitive(Primitive::cylinder(Point3::origin(), 2.0, 1.0))
        .with_primitive(Primitive::line_string(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
        ]))
}

/// Snapshot with `count` qualifying elements plus elements in a template
/// model, a private model, and 2D elements, none of which qualify.
pub fn build_snapshot(path: &Path, count: usize) -> Vec<ElementId> {
    let mut builder = SnapshotBuilder::create(path).expect("create snapshot");
    let physical = builder.add_model("Physical", false, false).unwrap();
    let template = builder.add_model("Template", true, false).unwrap();
    let private = builder.add_model("Private", false, true).unwrap();
    let drawing = builder.add_model("Drawing", false, false).unwrap();

    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        ids.push(builder.add_element(physical, Some(&sample_stream(i))).unwrap());
        if i % 10 == 0 {
            builder.add_element(template, Some(&sample_stream(i))).unwrap();
            builder.add_element(private, Some(&sample_stream(i))).unwrap();
            builder.add_element_2d(drawing, None).unwrap();
        }
    }

    builder.finish().expect("finish snapshot");
    ids
}

pub fn snapshot_in(dir: &Path, name: &str, count: usize) -> PathBuf {
    let path = dir.join(name);
    build_snapshot(&path, count);
    path
}
