// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Export graphics for one compiled-in snapshot path

use anyhow::{Context, Result};
use snapshot_export::cli::Reporter;
use snapshot_export::{export_snapshot_file, ExportConfig, ExportHost};
use std::path::Path;

/// Snapshot exported by this binary, relative to the working directory
const SNAPSHOT_PATH: &str = "snapshot.bim";

fn main() {
    let host = ExportHost::startup();
    let result = run();
    host.shutdown();

    if let Err(e) = result {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let path = Path::new(SNAPSHOT_PATH);
    export_snapshot_file(path, &ExportConfig::default())
        .with_context(|| format!("Failed to export {}", path.display()))?;
    Ok(())
}
