// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::Point3;
use std::f64::consts::PI;

/// Fewest segments any curved primitive is tessellated into
pub const MIN_SEGMENTS: u32 = 3;

/// Upper bound on segments per full turn
pub const MAX_SEGMENTS: u32 = 256;

/// Number of segments needed to cover `sweep` radians of a circle of `radius`
/// so that no chord deviates from the arc by more than `chord_tol`.
///
/// Both bounds scale with the number of turns, so a sweep past a full turn
/// keeps the same spacing as a single turn.
///
/// The sagitta of a chord spanning angle `θ` is `r (1 - cos(θ/2))`, so the
/// largest allowed step is `2 acos(1 - tol/r)`.
pub fn segments_for_chord(radius: f64, sweep: f64, chord_tol: f64) -> u32 {
    let sweep = sweep.abs();
    let full_turn_fraction = sweep / (2.0 * PI);
    let min_segments = ((MIN_SEGMENTS as f64 * full_turn_fraction).ceil() as u32).max(1);
    let max_segments = ((MAX_SEGMENTS as f64 * full_turn_fraction).ceil() as u32).max(min_segments);

    if radius <= 0.0 || chord_tol >= radius {
        return min_segments;
    }

    // Float-to-int casts saturate, so a vanishing step lands on the cap
    let max_step = 2.0 * (1.0 - chord_tol / radius).acos();
    ((sweep / max_step).ceil() as u32).clamp(min_segments, max_segments)
}

/// Perpendicular distance from `p` to the segment `a`-`b`
pub fn distance_to_segment(p: &Point3<f64>, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= f64::EPSILON {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}
