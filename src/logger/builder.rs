//! Stepwise construction; `build` validates and prepares every target before a
//! logger exists, so a built logger always has writable files behind it.

use super::{DEFAULT_NAME, Logger};
use crate::cache::Cache;
use crate::fmt::FormatTemplate;
use crate::internal;
use crate::output::TargetFile;
use crate::rotation::RotationPolicy;
use std::path::PathBuf;

/// Collects construction parameters; nothing touches the filesystem until [`Self::build`].
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    targets: Vec<PathBuf>,
    max_size: u64,
    auto_flush: bool,
    name: String,
    template: FormatTemplate,
    unique_names: bool,
    compress: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// No targets yet, 20560-byte threshold, auto-flush off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            max_size: RotationPolicy::DEFAULT_THRESHOLD,
            auto_flush: false,
            name: DEFAULT_NAME.to_string(),
            template: FormatTemplate::default(),
            unique_names: false,
            compress: false,
        }
    }

    /// Adds one file to the fan-out set. Order is the write order.
    #[must_use]
    pub fn target(mut self, path: impl Into<PathBuf>) -> Self {
        self.targets.push(path.into());
        self
    }

    /// Adds several files at once, keeping their order.
    #[must_use]
    pub fn targets<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.targets.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Rotation threshold in bytes, shared by every target.
    #[must_use]
    pub const fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = bytes;
        self
    }

    /// Flush the whole cache after every accepted record.
    #[must_use]
    pub const fn auto_flush(mut self, enabled: bool) -> Self {
        self.auto_flush = enabled;
        self
    }

    /// Source name used when a log call does not give one.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Line template, e.g. `"{level} {msg}"`. Unknown `{names}` stay literal.
    #[must_use]
    pub fn format(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    /// Suffix same-second archives with `.1`, `.2`, ... instead of replacing them.
    #[must_use]
    pub const fn unique_archive_names(mut self, enabled: bool) -> Self {
        self.unique_names = enabled;
        self
    }

    /// Gzip each archive after rotation.
    #[must_use]
    pub const fn compress_archives(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }

    /// Creates missing directories and files (with their creation stamp line).
    /// The logger still needs `initialize()` before it accepts records.
    ///
    /// # Errors
    /// `NoTargets` for an empty target list, I/O errors from preparing a target.
    pub fn build(self) -> Result<Logger, crate::Error> {
        if self.targets.is_empty() {
            return Err(crate::Error::NoTargets);
        }

        let targets: Vec<TargetFile> = self.targets.into_iter().map(TargetFile::new).collect();
        for target in &targets {
            target.prepare()?;
        }

        internal::info(
            "LOGGER",
            &format!(
                "Initialized logger with file path: {}, and max size: {}",
                describe(&targets),
                self.max_size
            ),
        );

        Ok(Logger {
            targets,
            cache: Cache::new(),
            policy: RotationPolicy::new(self.max_size)
                .unique_names(self.unique_names)
                .compress(self.compress),
            template: self.template,
            auto_flush: self.auto_flush,
            initialized: false,
            name: self.name,
            pending_notes: 0,
        })
    }
}

pub(super) fn describe(targets: &[TargetFile]) -> String {
    targets
        .iter()
        .map(|t| t.path().display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
