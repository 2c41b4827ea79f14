// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Snapshot file discovery

use crate::error::{ExportError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Snapshot files found in a directory
#[derive(Debug, Default)]
pub struct Discovered {
    pub snapshots: Vec<PathBuf>,
    /// Entries named like snapshots that could not be resolved, such as
    /// dangling symlinks
    pub unreadable: Vec<(PathBuf, ExportError)>,
}

/// Immediate files of `dir` whose name ends in `.{extension}`.
///
/// Subdirectories are not descended into. Results are ordered by file name
/// so runs over the same directory log in the same order. Only a failure to
/// read `dir` itself is an error; a bad entry is reported in
/// [`Discovered::unreadable`] or skipped when its name does not match.
pub fn discover_snapshots(dir: &Path, extension: &str) -> Result<Discovered> {
    if !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }

    let mut found = Discovered::default();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let source = match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && has_extension(entry.path(), extension) {
                    found.snapshots.push(entry.into_path());
                }
                continue;
            }
            Err(source) => source,
        };

        let entry_path = source
            .path()
            .filter(|path| source.depth() > 0 && *path != dir)
            .map(Path::to_path_buf);
        let Some(path) = entry_path else {
            return Err(ExportError::Discovery {
                path: dir.to_path_buf(),
                source,
            });
        };

        if has_extension(&path, extension) {
            found
                .unreadable
                .push((path.clone(), ExportError::Unreadable { path, source }));
        } else {
            warn!("Skipping {}: {}", path.display(), source);
        }
    }

    Ok(found)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .strip_suffix(extension)
                .is_some_and(|stem| stem.ends_with('.'))
        })
        .unwrap_or(false)
}
