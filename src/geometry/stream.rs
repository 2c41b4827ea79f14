// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Element geometry streams

use super::Primitive;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Geometry of one element: primitives in local coordinates plus the
/// placement origin that moves them into world space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryStream {
    #[serde(default = "zero_origin")]
    pub origin: Vector3<f64>,
    #[serde(default)]
    pub primitives: Vec<Primitive>,
}

fn zero_origin() -> Vector3<f64> {
    Vector3::zeros()
}

impl GeometryStream {
    pub fn new(origin: Vector3<f64>) -> Self {
        Self {
            origin,
            primitives: Vec::new(),
        }
    }

    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
