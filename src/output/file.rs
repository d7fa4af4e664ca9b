//! One configured log file: directory and header creation, appends, truncation.

use crate::fmt;
use crate::internal;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A path in the fan-out set. Holds no open handle; every operation reopens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    path: PathBuf,
}

impl TargetFile {
    /// Does not touch the filesystem; see [`Self::prepare`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True only for a regular file; a directory at the path does not count.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Creates missing parent directories and, if the file is absent, a new file
    /// whose first line is the creation stamp. Safe to call repeatedly.
    ///
    /// Returns whether the file was created by this call.
    ///
    /// # Errors
    /// Directory or file creation failures.
    pub fn prepare(&self) -> Result<bool, crate::Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            match fs::create_dir_all(parent) {
                Ok(()) => {
                    internal::debug("FILE", &format!("Created directory: {}", parent.display()));
                }
                Err(e) => {
                    internal::error(
                        "FILE",
                        &format!("Failed to create directory {}: {}", parent.display(), e),
                    );
                    return Err(e.into());
                }
            }
        }

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        writeln!(file, "{}", fmt::stamp(&Local::now()))?;
        internal::debug("FILE", &format!("Created {}", self.path.display()));
        Ok(true)
    }

    /// Appends `payload` as-is. Never truncates.
    ///
    /// # Errors
    /// Open or write failures (permission denied, disk full).
    pub fn append(&self, payload: &str) -> Result<(), crate::Error> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(payload.as_bytes())?;
        Ok(())
    }

    /// `None` when the file does not exist.
    ///
    /// # Errors
    /// Metadata failures other than not-found.
    pub fn size(&self) -> Result<Option<u64>, crate::Error> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(Some(meta.len())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Empties an existing file; absent files are left absent.
    ///
    /// Returns whether a file was truncated.
    ///
    /// # Errors
    /// Open failures on an existing file.
    pub fn truncate(&self) -> Result<bool, crate::Error> {
        if !self.exists() {
            return Ok(false);
        }
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        Ok(true)
    }
}
