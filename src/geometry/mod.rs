// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - element geometry streams and their tessellation

mod mesh;
pub mod polyline;
mod primitives;
mod stream;

pub use mesh::{Mesh, Triangle, Vertex};
pub use primitives::{Primitive, Tessellation};
pub use stream::GeometryStream;
