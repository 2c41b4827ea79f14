// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Read-only snapshot handle

use super::schema::{
    REQUIRED_TABLES, SCHEMA_VERSION, SELECT_GEOMETRY_3D, SELECT_SCHEMA_VERSION,
    SELECT_TABLE_EXISTS,
};
use super::{ElementId, Snapshot};
use crate::error::{ExportError, Result};
use crate::geometry::GeometryStream;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Statement};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An opened snapshot file. Dropping the handle closes the connection;
/// [`SnapshotDb::close`] does the same but reports close errors.
pub struct SnapshotDb {
    conn: Connection,
    path: PathBuf,
}

impl SnapshotDb {
    /// Open an existing snapshot read-only and verify its schema
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| ExportError::Open {
            path: path.clone(),
            source,
        })?;

        let db = Self { conn, path };
        db.check_schema()?;
        debug!(path = %db.path.display(), "opened snapshot");
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Prepare `sql` once and hand the statement to `f`
    pub fn with_prepared_statement<T, F>(&self, sql: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Statement<'_>) -> Result<T>,
    {
        let mut stmt = self.conn.prepare_cached(sql)?;
        f(&mut stmt)
    }

    /// Geometry stream of a 3D element. `None` when the element does not
    /// exist or carries no geometry.
    pub fn geometry_stream(&self, id: ElementId) -> Result<Option<GeometryStream>> {
        let json: Option<Option<String>> = self.with_prepared_statement(SELECT_GEOMETRY_3D, |stmt| {
            Ok(stmt
                .query_row([id.to_sql()], |row| row.get::<_, Option<String>>(0))
                .optional()?)
        })?;

        match json.flatten() {
            Some(json) => GeometryStream::from_json(&json)
                .map(Some)
                .map_err(|source| ExportError::Geometry { element: id, source }),
            None => Ok(None),
        }
    }

    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, source)| ExportError::Close {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "closed snapshot");
        Ok(())
    }

    fn check_schema(&self) -> Result<()> {
        let invalid = |reason: String| ExportError::InvalidSnapshot {
            path: self.path.clone(),
            reason,
        };

        for table in REQUIRED_TABLES {
            let count: i64 = self
                .conn
                .query_row(SELECT_TABLE_EXISTS, [table], |row| row.get(0))
                .map_err(|e| invalid(e.to_string()))?;
            if count == 0 {
                return Err(invalid(format!("missing table {}", table)));
            }
        }

        let version: Option<String> = self
            .conn
            .query_row(SELECT_SCHEMA_VERSION, [], |row| row.get(0))
            .optional()
            .map_err(|e| invalid(e.to_string()))?;

        match version.as_deref() {
            Some(SCHEMA_VERSION) => Ok(()),
            Some(other) => Err(invalid(format!("unsupported schema version {}", other))),
            None => Err(invalid("no schema version recorded".to_string())),
        }
    }
}

impl Snapshot for SnapshotDb {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn query_element_ids(&self, sql: &str) -> Result<Vec<ElementId>> {
        self.with_prepared_statement(sql, |stmt| {
            let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;
            let mut ids = Vec::new();
            for raw in rows {
                ids.push(ElementId::from_sql(raw?));
            }
            Ok(ids)
        })
    }
}
