//! Size-based rotation of target files.
//!
//! The check runs on the size a file has *after* a flush wrote to it, so a
//! single large batch can push a file well past the threshold; the rename only
//! happens once that write has completed. Files are never capped exactly.
//!
//! Archives are named `<path>-<YYYY-MM-DD-HH-MM-SS>`. Two rotations of the same
//! path within one second map to the same archive name and the second one
//! replaces the first unless [`RotationPolicy::unique_names`] is enabled.

mod compress;

use crate::fmt::{self, STAMP_FORMAT};
use crate::internal;
use chrono::{DateTime, Local, NaiveDateTime};
use compress::compress_file;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of checking one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Below threshold, keep writing.
    Pass,
    /// At or above threshold, archive before further writes.
    Rotate,
    /// Nothing at the path; the flush pipeline recreates it.
    Missing,
}

/// When to archive a target and how to name the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    threshold: u64,
    unique_names: bool,
    compress: bool,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl RotationPolicy {
    pub const DEFAULT_THRESHOLD: u64 = 20_560;

    /// Overwrites same-second archives and leaves them uncompressed.
    #[must_use]
    pub const fn new(threshold: u64) -> Self {
        Self {
            threshold,
            unique_names: false,
            compress: false,
        }
    }

    /// Appends `.1`, `.2`, ... instead of replacing an archive from the same second.
    #[must_use]
    pub const fn unique_names(mut self, enabled: bool) -> Self {
        self.unique_names = enabled;
        self
    }

    /// Gzips each archive after the rename.
    #[must_use]
    pub const fn compress(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }

    #[must_use]
    pub const fn threshold(&self) -> u64 {
        self.threshold
    }

    /// `Rotate` at or above the threshold.
    #[must_use]
    pub const fn decide(&self, size: u64) -> Decision {
        if size >= self.threshold {
            Decision::Rotate
        } else {
            Decision::Pass
        }
    }

    /// Decides on the file's current size.
    ///
    /// # Errors
    /// Metadata failures other than not-found.
    pub fn check(&self, path: &Path) -> Result<Decision, crate::Error> {
        self.check_discounting(path, 0)
    }

    /// Like [`Self::check`], but the last `discount` bytes written do not count
    /// toward the threshold.
    ///
    /// # Errors
    /// Metadata failures other than not-found.
    pub fn check_discounting(&self, path: &Path, discount: u64) -> Result<Decision, crate::Error> {
        match fs::metadata(path) {
            Ok(meta) => Ok(self.decide(meta.len().saturating_sub(discount))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Decision::Missing),
            Err(e) => Err(e.into()),
        }
    }

    /// Archives `path` under the current local time. See [`Self::rotate_at`].
    ///
    /// # Errors
    /// Rename, create, or compression failures.
    pub fn rotate(&self, path: &Path) -> Result<PathBuf, crate::Error> {
        self.rotate_at(path, &Local::now())
    }

    /// Renames `path` to its archive name for `at`, then leaves an empty file at
    /// `path`. Returns where the archive ended up.
    ///
    /// # Errors
    /// Rename, create, or compression failures.
    pub fn rotate_at(&self, path: &Path, at: &DateTime<Local>) -> Result<PathBuf, crate::Error> {
        let base = archive_path(path, at);
        let archive = if self.unique_names {
            self.next_free(&base)
        } else {
            // rename() replaces on unix but not everywhere; make the clobber explicit
            if base.exists() {
                internal::warn(
                    "ROTATE",
                    &format!("Overwriting existing archive {}", base.display()),
                );
                fs::remove_file(&base)?;
            }
            base
        };

        fs::rename(path, &archive)?;
        File::create(path)?;

        let archive = if self.compress {
            compress_file(&archive)?
        } else {
            archive
        };

        internal::debug(
            "ROTATE",
            &format!("Rotated {} to {}", path.display(), archive.display()),
        );
        Ok(archive)
    }

    fn next_free(&self, base: &Path) -> PathBuf {
        let taken = |p: &Path| {
            p.exists() || (self.compress && with_suffix(p, ".gz").exists())
        };
        if !taken(base) {
            return base.to_path_buf();
        }
        (1u32..)
            .map(|n| with_suffix(base, &format!(".{n}")))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| base.to_path_buf())
    }
}

/// `<path>-<YYYY-MM-DD-HH-MM-SS>`.
#[must_use]
pub fn archive_path(path: &Path, at: &DateTime<Local>) -> PathBuf {
    with_suffix(path, &format!("-{}", fmt::stamp(at)))
}

/// Existing archives of `path`, oldest first.
///
/// # Errors
/// Directory read failures other than the directory not existing.
pub fn archives(path: &Path) -> Result<Vec<PathBuf>, crate::Error> {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return Ok(Vec::new());
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let prefix = format!("{file_name}-");
    let stamp_len = fmt::stamp(&Local::now()).len();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(rest) = name.strip_prefix(&prefix) else {
            continue;
        };
        let is_archive = rest
            .get(..stamp_len)
            .is_some_and(|s| NaiveDateTime::parse_from_str(s, STAMP_FORMAT).is_ok());
        if is_archive && entry.path().is_file() {
            found.push(entry.path());
        }
    }

    found.sort();
    Ok(found)
}

pub(crate) fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
