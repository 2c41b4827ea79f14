// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyline tessellation and point decimation

use crate::utils::math::{distance_to_segment, segments_for_chord};
use nalgebra::{Point3, Vector3};

/// Points along an arc in the XY plane, spaced so every chord stays within
/// `chord_tol` of the true curve. Both endpoints are included.
pub fn arc_points(
    center: &Point3<f64>,
    radius: f64,
    start: f64,
    sweep: f64,
    chord_tol: f64,
) -> Vec<Point3<f64>> {
    let segments = segments_for_chord(radius, sweep, chord_tol) as usize;
    (0..=segments)
        .map(|i| {
            let angle = start + sweep * i as f64 / segments as f64;
            let (sin, cos) = angle.sin_cos();
            center + Vector3::new(radius * cos, radius * sin, 0.0)
        })
        .collect()
}

/// Drop interior points lying within `tolerance` of the simplified line.
///
/// Iterative Douglas-Peucker; the first and last points are always kept and
/// the surviving points keep their original order.
pub fn decimate(points: &[Point3<f64>], tolerance: f64) -> Vec<Point3<f64>> {
    if points.len() < 3 || tolerance <= 0.0 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut pending = vec![(0, last)];
    while let Some((start, end)) = pending.pop() {
        if end <= start + 1 {
            continue;
        }

        let (farthest, distance) = (start + 1..end)
            .map(|i| (i, distance_to_segment(&points[i], &points[start], &points[end])))
            .fold((start, 0.0), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            });

        if distance > tolerance {
            keep[farthest] = true;
            pending.push((start, farthest));
            pending.push((farthest, end));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(point, kept)| kept.then_some(*point))
        .collect()
}
