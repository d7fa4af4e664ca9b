//! The logging facade: an explicitly constructed, explicitly initialized
//! object that renders records into its cache and persists them on `flush()`.
//!
//! There is no global instance. Pass the `Logger` (or a [`SharedLogger`] when
//! several threads need it) to whatever code logs.

mod builder;
mod flush;
mod from_config;
mod shared;

pub use builder::LoggerBuilder;
pub use shared::SharedLogger;

use crate::Error;
use crate::cache::Cache;
use crate::confirm::Confirm;
use crate::fmt::{Extras, FormatTemplate, LogRecord};
use crate::internal;
use crate::level::Level;
use crate::output::TargetFile;
use crate::rotation::RotationPolicy;

/// Source name used by records that do not name one.
pub const DEFAULT_NAME: &str = "LocystLogger";

/// Question put to the [`Confirm`] collaborator before truncating targets.
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all logs? (y/n)";

/// Buffers rendered records and writes them to every target on [`Logger::flush`].
///
/// Built with [`Logger::builder`] or [`Logger::from_config`]; rejects records
/// until [`Logger::initialize`] is called.
#[derive(Debug)]
pub struct Logger {
    targets: Vec<TargetFile>,
    cache: Cache,
    policy: RotationPolicy,
    template: FormatTemplate,
    auto_flush: bool,
    initialized: bool,
    name: String,
    /// Leading cache lines that are notes queued by the last flush.
    pending_notes: usize,
}

impl Logger {
    /// Starts a [`LoggerBuilder`] with the default threshold and name.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Opens the gate. May be called again; it only re-announces the logger.
    pub fn initialize(&mut self) {
        self.initialized = true;
        internal::info(
            "LOGGER",
            &format!(
                "{} logging to {} with max size {} bytes",
                self.name,
                builder::describe(&self.targets),
                self.policy.threshold()
            ),
        );
    }

    /// Like [`Self::initialize`], and makes `name` the default source name.
    pub fn initialize_as(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.initialize();
    }

    /// Whether records are accepted yet.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current default source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn targets(&self) -> &[TargetFile] {
        &self.targets
    }

    /// Rotation threshold in bytes.
    #[must_use]
    pub const fn max_size(&self) -> u64 {
        self.policy.threshold()
    }

    #[must_use]
    pub const fn auto_flush(&self) -> bool {
        self.auto_flush
    }

    /// Rendered lines not yet flushed, in emission order.
    #[must_use]
    pub fn get_buffered_logs(&self) -> &[String] {
        self.cache.lines()
    }

    fn gate(&self) -> Result<(), Error> {
        if self.initialized {
            return Ok(());
        }
        internal::notice(
            &self.name,
            "Error: Logger is not initialized. Please call initialize() first.",
        );
        Err(Error::NotInitialized)
    }

    /// Single entry point behind the per-level methods. `source` falls back to
    /// the logger's default name when `None` or empty.
    ///
    /// # Errors
    /// `NotInitialized` before `initialize()` (nothing is buffered), or flush
    /// errors when auto-flush is on (the record stays buffered).
    pub fn log(
        &mut self,
        level: Level,
        source: Option<&str>,
        msg: &str,
        extras: Extras,
    ) -> Result<(), Error> {
        self.gate()?;

        let source = source.filter(|s| !s.is_empty()).unwrap_or(self.name.as_str());
        let line = LogRecord::now(source, level, msg, extras).render(&self.template);
        self.cache.append(line);

        if self.auto_flush {
            self.flush()?;
        }
        Ok(())
    }

    /// # Errors
    /// See [`Self::log`].
    pub fn debug(&mut self, msg: &str) -> Result<(), Error> {
        self.log(Level::Debug, None, msg, Extras::new())
    }

    /// # Errors
    /// See [`Self::log`].
    pub fn info(&mut self, msg: &str) -> Result<(), Error> {
        self.log(Level::Info, None, msg, Extras::new())
    }

    /// # Errors
    /// See [`Self::log`].
    pub fn warn(&mut self, msg: &str) -> Result<(), Error> {
        self.log(Level::Warn, None, msg, Extras::new())
    }

    /// # Errors
    /// See [`Self::log`].
    pub fn error(&mut self, msg: &str) -> Result<(), Error> {
        self.log(Level::Error, None, msg, Extras::new())
    }

    /// # Errors
    /// See [`Self::log`].
    pub fn critical(&mut self, msg: &str) -> Result<(), Error> {
        self.log(Level::Critical, None, msg, Extras::new())
    }

    /// # Errors
    /// See [`Self::log`].
    pub fn debug_with(&mut self, msg: &str, extras: Extras) -> Result<(), Error> {
        self.log(Level::Debug, None, msg, extras)
    }

    /// # Errors
    /// See [`Self::log`].
    pub fn info_with(&mut self, msg: &str, extras: Extras) -> Result<(), Error> {
        self.log(Level::Info, None, msg, extras)
    }

    /// # Errors
    /// See [`Self::log`].
    pub fn warn_with(&mut self, msg: &str, extras: Extras) -> Result<(), Error> {
        self.log(Level::Warn, None, msg, extras)
    }

    /// # Errors
    /// See [`Self::log`].
    pub fn error_with(&mut self, msg: &str, extras: Extras) -> Result<(), Error> {
        self.log(Level::Error, None, msg, extras)
    }

    /// # Errors
    /// See [`Self::log`].
    pub fn critical_with(&mut self, msg: &str, extras: Extras) -> Result<(), Error> {
        self.log(Level::Critical, None, msg, extras)
    }

    /// Truncates every existing target to empty, but only after `confirm`
    /// answers yes. The cache is not touched.
    ///
    /// Returns whether the files were cleared.
    ///
    /// # Errors
    /// I/O errors from truncation; targets before the failing one are already empty.
    pub fn clear_logs(&self, confirm: &mut impl Confirm) -> Result<bool, Error> {
        if !confirm.confirm(CLEAR_PROMPT) {
            internal::info("CLEAR", "Clear cancelled");
            return Ok(false);
        }

        for target in &self.targets {
            if target.truncate()? {
                internal::info("CLEAR", &format!("Cleared {}", target.path().display()));
            }
        }
        Ok(true)
    }
}
