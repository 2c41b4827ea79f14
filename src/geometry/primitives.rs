// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometric primitives stored in element geometry streams

use super::polyline;
use super::{Mesh, Triangle, Vertex};
use crate::utils::math::segments_for_chord;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parametric primitive as persisted in a geometry stream.
///
/// Solids tessellate to meshes; `LineString` and `Arc` produce polylines.
/// Arcs lie in the XY plane at the height of their center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Primitive {
    Box { origin: Point3<f64>, size: Vector3<f64> },
    Sphere { center: Point3<f64>, radius: f64 },
    Cylinder { base: Point3<f64>, height: f64, radius: f64 },
    Cone { base: Point3<f64>, height: f64, r1: f64, r2: f64 },
    LineString { points: Vec<Point3<f64>> },
    Arc { center: Point3<f64>, radius: f64, start: f64, sweep: f64 },
}

/// Output of tessellating one primitive
#[derive(Debug, Clone)]
pub enum Tessellation {
    Mesh(Mesh),
    Line(Vec<Point3<f64>>),
}

impl Primitive {
    pub fn cube(origin: Point3<f64>, size: f64) -> Self {
        Self::Box {
            origin,
            size: Vector3::new(size, size, size),
        }
    }

    pub fn sphere(center: Point3<f64>, radius: f64) -> Self {
        Self::Sphere { center, radius }
    }

    pub fn cylinder(base: Point3<f64>, height: f64, radius: f64) -> Self {
        Self::Cylinder { base, height, radius }
    }

    pub fn line_string(points: Vec<Point3<f64>>) -> Self {
        Self::LineString { points }
    }

    /// Tessellate using `chord_tol` for curved surfaces and arcs and
    /// `decimation_tol` for polyline point reduction.
    pub fn tessellate(&self, chord_tol: f64, decimation_tol: f64) -> Tessellation {
        match self {
            Self::Box { origin, size } => Tessellation::Mesh(generate_box_mesh(origin, size)),
            Self::Sphere { center, radius } => {
                Tessellation::Mesh(generate_sphere_mesh(center, *radius, chord_tol))
            }
            Self::Cylinder { base, height, radius } => Tessellation::Mesh(generate_cone_mesh(
                base, *height, *radius, *radius, chord_tol,
            )),
            Self::Cone { base, height, r1, r2 } => {
                Tessellation::Mesh(generate_cone_mesh(base, *height, *r1, *r2, chord_tol))
            }
            Self::LineString { points } => {
                Tessellation::Line(polyline::decimate(points, decimation_tol))
            }
            Self::Arc { center, radius, start, sweep } => {
                let points = polyline::arc_points(center, *radius, *start, *sweep, chord_tol);
                Tessellation::Line(polyline::decimate(&points, decimation_tol))
            }
        }
    }
}

fn generate_box_mesh(origin: &Point3<f64>, size: &Vector3<f64>) -> Mesh {
    let mut mesh = Mesh::with_capacity(36, 12);

    let (min_x, max_x) = (origin.x, origin.x + size.x);
    let (min_y, max_y) = (origin.y, origin.y + size.y);
    let (min_z, max_z) = (origin.z, origin.z + size.z);

    let positions = [
        Point3::new(min_x, min_y, min_z),
        Point3::new(max_x, min_y, min_z),
        Point3::new(max_x, max_y, min_z),
        Point3::new(min_x, max_y, min_z),
        Point3::new(min_x, min_y, max_z),
        Point3::new(max_x, min_y, max_z),
        Point3::new(max_x, max_y, max_z),
        Point3::new(min_x, max_y, max_z),
    ];

    // Two triangles per face, each face with its own vertices for flat normals
    let faces = [
        ([4, 5, 6], Vector3::new(0.0, 0.0, 1.0)),
        ([4, 6, 7], Vector3::new(0.0, 0.0, 1.0)),
        ([1, 0, 3], Vector3::new(0.0, 0.0, -1.0)),
        ([1, 3, 2], Vector3::new(0.0, 0.0, -1.0)),
        ([5, 1, 2], Vector3::new(1.0, 0.0, 0.0)),
        ([5, 2, 6], Vector3::new(1.0, 0.0, 0.0)),
        ([0, 4, 7], Vector3::new(-1.0, 0.0, 0.0)),
        ([0, 7, 3], Vector3::new(-1.0, 0.0, 0.0)),
        ([7, 6, 2], Vector3::new(0.0, 1.0, 0.0)),
        ([7, 2, 3], Vector3::new(0.0, 1.0, 0.0)),
        ([0, 1, 5], Vector3::new(0.0, -1.0, 0.0)),
        ([0, 5, 4], Vector3::new(0.0, -1.0, 0.0)),
    ];

    for (indices, normal) in faces {
        let v0 = mesh.add_vertex(Vertex::new(positions[indices[0]], normal));
        let v1 = mesh.add_vertex(Vertex::new(positions[indices[1]], normal));
        let v2 = mesh.add_vertex(Vertex::new(positions[indices[2]], normal));
        mesh.add_triangle(Triangle::new([v0, v1, v2]));
    }

    mesh
}

fn generate_sphere_mesh(center: &Point3<f64>, radius: f64, chord_tol: f64) -> Mesh {
    let slices = segments_for_chord(radius, 2.0 * PI, chord_tol) as usize;
    let stacks = segments_for_chord(radius, PI, chord_tol).max(2) as usize;
    let mut mesh = Mesh::with_capacity((stacks + 1) * (slices + 1), 2 * stacks * slices);

    for i in 0..=stacks {
        let phi = PI * i as f64 / stacks as f64;
        let z = radius * phi.cos();
        let r = radius * phi.sin();

        for j in 0..=slices {
            let theta = 2.0 * PI * j as f64 / slices as f64;
            let offset = Vector3::new(r * theta.cos(), r * theta.sin(), z);
            let normal = if offset.norm() > 0.0 {
                offset.normalize()
            } else {
                Vector3::z()
            };
            mesh.add_vertex(Vertex::new(center + offset, normal));
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let first = i * (slices + 1) + j;
            let second = first + slices + 1;

            mesh.add_triangle(Triangle::new([first, second, first + 1]));
            mesh.add_triangle(Triangle::new([second, second + 1, first + 1]));
        }
    }

    mesh
}

fn generate_cone_mesh(base: &Point3<f64>, height: f64, r1: f64, r2: f64, chord_tol: f64) -> Mesh {
    let segments = segments_for_chord(r1.max(r2), 2.0 * PI, chord_tol) as usize;
    let mut mesh = Mesh::with_capacity(2 + 2 * segments, 4 * segments);

    let bottom_center = mesh.add_vertex(Vertex::new(*base, -Vector3::z()));
    let top_center = mesh.add_vertex(Vertex::new(
        base + Vector3::new(0.0, 0.0, height),
        Vector3::z(),
    ));

    let mut bottom = Vec::with_capacity(segments);
    let mut top = Vec::with_capacity(segments);

    for i in 0..segments {
        let angle = 2.0 * PI * i as f64 / segments as f64;
        let (sin, cos) = angle.sin_cos();

        bottom.push(mesh.add_vertex(Vertex::new(
            base + Vector3::new(r1 * cos, r1 * sin, 0.0),
            -Vector3::z(),
        )));
        top.push(mesh.add_vertex(Vertex::new(
            base + Vector3::new(r2 * cos, r2 * sin, height),
            Vector3::z(),
        )));
    }

    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle(Triangle::new([bottom_center, bottom[next], bottom[i]]));
        mesh.add_triangle(Triangle::new([top_center, top[i], top[next]]));
        // Side quads reuse the rim vertices to keep the mesh closed
        mesh.add_triangle(Triangle::new([bottom[i], top[i], bottom[next]]));
        mesh.add_triangle(Triangle::new([top[i], top[next], bottom[next]]));
    }

    mesh.recompute_normals();
    mesh
}
