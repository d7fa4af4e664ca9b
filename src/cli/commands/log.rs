//! One-shot logging: a CLI process lives for a single record, so it flushes
//! before exiting.

use crate::config::Config;
use crate::fmt::Extras;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_log(
    config: &Config,
    level: Level,
    source: Option<&str>,
    message: &[String],
    args: &[String],
    kv: &[(String, String)],
) -> ExitCode {
    let mut logger = match Logger::from_config(config) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLI", &format!("Cannot open log targets: {e}"));
            return ExitCode::FAILURE;
        }
    };
    logger.initialize();

    let extras = args.iter().fold(Extras::new(), |extras, a| extras.arg(a));
    let extras = kv.iter().fold(extras, |extras, (k, v)| extras.kv(k, v));

    let result = logger
        .log(level, source, &message.join(" "), extras)
        .and_then(|()| logger.flush());

    match result {
        Ok(()) => {
            // rotation notes land in the cache after the flush that caused them
            if !logger.get_buffered_logs().is_empty()
                && let Err(e) = logger.flush()
            {
                internal::warn("CLI", &format!("Could not write rotation notes: {e}"));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("CLI", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}
