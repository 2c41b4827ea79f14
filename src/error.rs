// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for snapshot access and graphics export

use crate::snapshot::ElementId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ExportError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to open snapshot {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{} is not a valid snapshot: {reason}", path.display())]
    InvalidSnapshot { path: PathBuf, reason: String },

    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("failed to close snapshot {}: {source}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("malformed geometry stream on element {element}: {source}")]
    Geometry {
        element: ElementId,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read snapshot directory {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot read snapshot {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid export configuration: {0}")]
    InvalidConfig(String),

    #[error("export host is not running")]
    HostNotRunning,

    #[error("failed to encode geometry stream: {0}")]
    Serialize(#[from] serde_json::Error),
}
