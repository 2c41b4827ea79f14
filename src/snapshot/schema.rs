// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Snapshot schema and the fixed element query

/// Value of `schemaVersion` in `snapshot_meta` this crate reads and writes
pub const SCHEMA_VERSION: &str = "1";

/// Tables a file must carry to be opened as a snapshot
pub const REQUIRED_TABLES: [&str; 3] = ["snapshot_meta", "bis_Model", "bis_GeometricElement3d"];

pub const CREATE_SCHEMA: &str = "
CREATE TABLE snapshot_meta (
    Key TEXT PRIMARY KEY NOT NULL,
    Value TEXT NOT NULL
);
CREATE TABLE bis_Model (
    Id INTEGER PRIMARY KEY NOT NULL,
    Name TEXT NOT NULL,
    IsTemplate INTEGER NOT NULL DEFAULT 0,
    IsPrivate INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE bis_GeometricElement3d (
    Id INTEGER PRIMARY KEY NOT NULL,
    ModelId INTEGER NOT NULL REFERENCES bis_Model(Id),
    GeometryStream TEXT
);
CREATE TABLE bis_GeometricElement2d (
    Id INTEGER PRIMARY KEY NOT NULL,
    ModelId INTEGER NOT NULL REFERENCES bis_Model(Id),
    GeometryStream TEXT
);
CREATE INDEX ix_GeometricElement3d_Model ON bis_GeometricElement3d(ModelId);
";

/// All 3D elements that aren't part of template definitions or in private models
pub const QUALIFYING_ELEMENTS_SQL: &str = "\
SELECT e.Id FROM bis_GeometricElement3d e \
JOIN bis_Model m ON e.ModelId = m.Id \
WHERE m.IsTemplate = 0 AND m.IsPrivate = 0 \
ORDER BY e.Id";

pub(crate) const SELECT_SCHEMA_VERSION: &str =
    "SELECT Value FROM snapshot_meta WHERE Key = 'schemaVersion'";

pub(crate) const SELECT_TABLE_EXISTS: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";

pub(crate) const SELECT_GEOMETRY_3D: &str =
    "SELECT GeometryStream FROM bis_GeometricElement3d WHERE Id = ?1";
