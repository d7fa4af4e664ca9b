//! Builds a logger from the parsed TOML config.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// # Errors
    /// Invalid `max_size`, or any error from [`LoggerBuilder::build`].
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        Self::builder_from_config(config)?.build()
    }

    /// Builder pre-filled from config, for callers that override a setting or two.
    ///
    /// # Errors
    /// Invalid `max_size`.
    pub fn builder_from_config(config: &Config) -> Result<LoggerBuilder, crate::Error> {
        let targets = config.target_paths();
        let max_size = config.max_size_bytes()?;
        internal::debug(
            "CONFIG",
            &format!("{} target(s), max_size={max_size}", targets.len()),
        );

        Ok(Self::builder()
            .targets(targets)
            .max_size(max_size)
            .auto_flush(config.file.auto_flush)
            .name(&config.general.name)
            .format(&config.file.format)
            .unique_archive_names(config.rotation.unique_names)
            .compress_archives(config.rotation.compress))
    }
}
