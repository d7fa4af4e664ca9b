//! TOML configuration loading with `source = "..."` include resolution.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle
//! detection, merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{FileConfig, GeneralConfig, RotationConfig, SizeSetting};

use crate::internal;
use crate::level::Level;
use crate::size::parse_size;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config: every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub file: FileConfig,
    pub rotation: RotationConfig,
}

/// Pulls `source = "..."` lines out of raw TOML before deserialization.
/// Returns the paths and the remaining content.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("source") && trimmed.contains('=') {
            if let Some(path) = trimmed
                .split_once('=')
                .map(|(_, v)| v.trim().trim_matches('"').trim_matches('\''))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads `<config_dir>/locyst/locyst.toml`, or defaults when it does not exist.
    ///
    /// # Errors
    /// No config directory on this platform, unreadable file, TOML syntax errors.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        internal::debug(
            "CONFIG",
            &format!("Loading config from {}", config_path.display()),
        );
        Self::load_from(&config_path)
    }

    /// # Errors
    /// Unreadable file, TOML syntax errors, cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            if source_file.exists() {
                let source_config = Self::load_with_sources(source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Adds an included file's targets after this file's own, skipping duplicates.
    /// Scalar settings of the including file always win.
    pub fn merge(&mut self, other: Self) {
        for target in other.file.targets {
            if !self.file.targets.contains(&target) {
                self.file.targets.push(target);
            }
        }
    }

    /// # Errors
    /// Fails when the platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("locyst").join("locyst.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Configured targets with `~` expanded, or the platform default when none are set.
    #[must_use]
    pub fn target_paths(&self) -> Vec<PathBuf> {
        if self.file.targets.is_empty() {
            return vec![default_target_path()];
        }
        self.file
            .targets
            .iter()
            .map(|t| PathBuf::from(shellexpand::tilde(t).as_ref()))
            .collect()
    }

    /// # Errors
    /// `InvalidSize` for strings `parse_size` rejects.
    pub fn max_size_bytes(&self) -> Result<u64, crate::Error> {
        match &self.file.max_size {
            SizeSetting::Bytes(n) => Ok(*n),
            SizeSetting::Text(s) => {
                parse_size(s).ok_or_else(|| crate::Error::InvalidSize(s.clone()))
            }
        }
    }

    /// Falls back to warn on unknown names.
    #[must_use]
    pub fn parse_internal_level(&self) -> Level {
        self.general.internal_level.parse().unwrap_or(Level::Warn)
    }
}

/// `<state_dir>/locyst/logging.txt`, falling back to the data dir, then `logs/`.
#[must_use]
pub fn default_target_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "locyst").map_or_else(
        || PathBuf::from("logs").join("logging.txt"),
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("logging.txt")
        },
    )
}
