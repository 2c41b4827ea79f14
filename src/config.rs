// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Export configuration

use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};

/// Elements handed to the exporter per call
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Fine enough to do some work without running slowly
pub const DEFAULT_CHORD_TOL: f64 = 0.05;

pub const DEFAULT_DECIMATION_TOL: f64 = 0.05;

/// File extension of snapshot files picked up by directory scans
pub const SNAPSHOT_EXTENSION: &str = "bim";

/// Tunables shared by both front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub chunk_size: usize,
    pub chord_tol: f64,
    pub decimation_tol: f64,
    /// Extension without the leading dot
    pub extension: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chord_tol: DEFAULT_CHORD_TOL,
            decimation_tol: DEFAULT_DECIMATION_TOL,
            extension: SNAPSHOT_EXTENSION.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Reject settings the export driver cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ExportError::InvalidConfig("chunk size must be at least 1".into()));
        }
        for (name, value) in [
            ("chord tolerance", self.chord_tol),
            ("decimation tolerance", self.decimation_tol),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ExportError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(ExportError::InvalidConfig(format!(
                "extension must be non-empty and without a leading dot, got {:?}",
                self.extension
            )));
        }
        Ok(())
    }
}
