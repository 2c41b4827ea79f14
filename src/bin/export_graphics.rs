// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Export graphics for every snapshot in a directory

use anyhow::{Context, Result};
use clap::Parser;
use snapshot_export::cli::Reporter;
use snapshot_export::{export_snapshot_directory, BatchReport, ExportConfig, ExportHost};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "export-graphics")]
#[command(about = "Exercise graphics export over every snapshot in a directory", long_about = None)]
struct Cli {
    /// Directory whose .bim files are exported
    #[arg(short = 's', long = "snapshotDirectory", value_name = "DIR")]
    snapshot_directory: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let host = ExportHost::startup();
    let result = run(&cli);
    host.shutdown();

    match result {
        Ok(report) => {
            Reporter::report_batch(&report);
            if !report.is_success() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            Reporter::report_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<BatchReport> {
    let config = ExportConfig::default();
    export_snapshot_directory(&cli.snapshot_directory, &config).with_context(|| {
        format!(
            "Failed to export snapshots in {}",
            cli.snapshot_directory.display()
        )
    })
}
