//! Stats command implementation.

use crate::config::Config;
use crate::internal;
use crate::stats::stats;
use std::process::ExitCode;

/// Handles `locyst stats`.
#[must_use]
pub fn cmd_stats(config: &Config) -> ExitCode {
    match stats(&config.target_paths()) {
        Ok(all) => {
            for target in &all {
                for line in target.report() {
                    println!("{line}");
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("STATS", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}
