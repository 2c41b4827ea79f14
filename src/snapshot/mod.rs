// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Snapshot access - opening files, querying element ids, writing fixtures

mod builder;
mod db;
mod id;
pub mod schema;

pub use builder::SnapshotBuilder;
pub use db::SnapshotDb;
pub use id::{ElementId, ModelId};
pub use schema::QUALIFYING_ELEMENTS_SQL;

use crate::error::Result;
use crate::export::GraphicsExporter;

/// An open snapshot the export routine can query and export from
pub trait Snapshot: GraphicsExporter {
    /// Human-readable name used in log lines
    fn name(&self) -> String;

    /// Run `sql`, reading the first column of every row as an element id
    fn query_element_ids(&self, sql: &str) -> Result<Vec<ElementId>>;
}
