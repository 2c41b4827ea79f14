// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::runner::BatchReport;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Summary printed at the end of a directory run
    pub fn report_batch(report: &BatchReport) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{}", "Export Summary".bold());
        println!("{}", "━".repeat(80).bright_black());

        println!(
            "  {} {}",
            "Snapshots:".bright_black(),
            report.total_files().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Exported:".bright_black(),
            report.exported.len().to_string().green()
        );
        println!(
            "  {} {}",
            "Failed:".bright_black(),
            if report.failed.is_empty() {
                "0".green()
            } else {
                report.failed.len().to_string().red()
            }
        );
        println!(
            "  {} {}",
            "Elements:".bright_black(),
            report.total_elements().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Export time:".bright_black(),
            Self::format_duration(report.total_elapsed()).yellow()
        );

        if !report.failed.is_empty() {
            println!("\n  {}", "Failures:".red().bold());
            for failure in &report.failed {
                println!("    {} {}", "❌".red(), failure.path.display());
                println!("       {}", failure.error.bright_black());
            }
        }

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Fatal error, written to stdout
    pub fn report_error(message: &str) {
        println!("{}", message);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
