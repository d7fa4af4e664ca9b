//! A `Logger` behind one mutex for callers that log from several threads.
//!
//! Append and the full flush sequence (write, rotate, clear) run under the same
//! lock, so a record is never appended between a batch being written and the
//! cache being cleared.

use super::Logger;
use crate::Error;
use crate::confirm::Confirm;
use crate::fmt::Extras;
use crate::level::Level;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone)]
pub struct SharedLogger {
    inner: Arc<Mutex<Logger>>,
}

impl From<Logger> for SharedLogger {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}

impl SharedLogger {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    // A panic mid-log leaves the cache consistent (append is a single push), so poison is ignored.
    fn lock(&self) -> MutexGuard<'_, Logger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access, for sequences that must not interleave.
    pub fn with<T>(&self, f: impl FnOnce(&mut Logger) -> T) -> T {
        f(&mut self.lock())
    }

    pub fn initialize(&self) {
        self.lock().initialize();
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn log(
        &self,
        level: Level,
        source: Option<&str>,
        msg: &str,
        extras: Extras,
    ) -> Result<(), Error> {
        self.lock().log(level, source, msg, extras)
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn debug(&self, msg: &str) -> Result<(), Error> {
        self.lock().debug(msg)
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn info(&self, msg: &str) -> Result<(), Error> {
        self.lock().info(msg)
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn warn(&self, msg: &str) -> Result<(), Error> {
        self.lock().warn(msg)
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn error(&self, msg: &str) -> Result<(), Error> {
        self.lock().error(msg)
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn critical(&self, msg: &str) -> Result<(), Error> {
        self.lock().critical(msg)
    }

    /// # Errors
    /// See [`Logger::flush`].
    pub fn flush(&self) -> Result<(), Error> {
        self.lock().flush()
    }

    /// Snapshot; the cache may change as soon as the lock is released.
    #[must_use]
    pub fn get_buffered_logs(&self) -> Vec<String> {
        self.lock().get_buffered_logs().to_vec()
    }

    /// # Errors
    /// See [`Logger::clear_logs`].
    pub fn clear_logs(&self, confirm: &mut impl Confirm) -> Result<bool, Error> {
        self.lock().clear_logs(confirm)
    }
}
