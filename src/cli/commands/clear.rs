//! Truncating logs is irreversible, so the prompt is the default and `--yes` the opt-out.

use crate::config::Config;
use crate::confirm::PromptConfirm;
use crate::internal;
use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_clear(config: &Config, yes: bool) -> ExitCode {
    let logger = match Logger::from_config(config) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLEAR", &format!("Cannot open log targets: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let result = if yes {
        logger.clear_logs(&mut |_: &str| true)
    } else {
        logger.clear_logs(&mut PromptConfirm)
    };

    match result {
        Ok(true) => {
            println!("Cleared {} file(s)", logger.targets().len());
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("Nothing cleared");
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("CLEAR", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}
