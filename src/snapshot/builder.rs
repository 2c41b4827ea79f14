// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Writer for new snapshot files

use super::schema::{CREATE_SCHEMA, SCHEMA_VERSION};
use super::{ElementId, ModelId};
use crate::error::{ExportError, Result};
use crate::geometry::GeometryStream;
use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Builds a snapshot file inside a single transaction.
///
/// Models and elements share one id sequence, starting at 1.
pub struct SnapshotBuilder {
    conn: Connection,
    path: PathBuf,
    next_id: u64,
}

impl SnapshotBuilder {
    /// Create a new snapshot at `path`. Fails if the file already exists.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            return Err(ExportError::InvalidSnapshot {
                path,
                reason: "refusing to overwrite an existing file".to_string(),
            });
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )
        .map_err(|source| ExportError::Open {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch("BEGIN")?;
        conn.execute_batch(CREATE_SCHEMA)?;
        conn.execute(
            "INSERT INTO snapshot_meta (Key, Value) VALUES ('schemaVersion', ?1)",
            [SCHEMA_VERSION],
        )?;

        Ok(Self {
            conn,
            path,
            next_id: 1,
        })
    }

    pub fn add_model(&mut self, name: &str, is_template: bool, is_private: bool) -> Result<ModelId> {
        let id = ModelId(self.allocate_id());
        self.conn
            .prepare_cached(
                "INSERT INTO bis_Model (Id, Name, IsTemplate, IsPrivate) VALUES (?1, ?2, ?3, ?4)",
            )?
            .execute(params![id.to_sql(), name, is_template, is_private])?;
        Ok(id)
    }

    /// Insert a 3D element; `None` stores an element without geometry
    pub fn add_element(
        &mut self,
        model: ModelId,
        geometry: Option<&GeometryStream>,
    ) -> Result<ElementId> {
        self.insert_element("bis_GeometricElement3d", model, geometry)
    }

    /// Insert a 2D element, which is never selected for export
    pub fn add_element_2d(
        &mut self,
        model: ModelId,
        geometry: Option<&GeometryStream>,
    ) -> Result<ElementId> {
        self.insert_element("bis_GeometricElement2d", model, geometry)
    }

    /// Commit and close, returning the path of the finished snapshot
    pub fn finish(self) -> Result<PathBuf> {
        self.conn.execute_batch("COMMIT")?;
        let path = self.path;
        self.conn.close().map_err(|(_, source)| ExportError::Close {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    fn insert_element(
        &mut self,
        table: &str,
        model: ModelId,
        geometry: Option<&GeometryStream>,
    ) -> Result<ElementId> {
        let id = ElementId(self.allocate_id());
        let json = geometry.map(GeometryStream::to_json).transpose()?;
        let sql = format!(
            "INSERT INTO {} (Id, ModelId, GeometryStream) VALUES (?1, ?2, ?3)",
            table
        );
        self.conn
            .prepare_cached(&sql)?
            .execute(params![id.to_sql(), model.to_sql(), json])?;
        Ok(id)
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
