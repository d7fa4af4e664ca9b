//! Unified error type for all locyst operations.

use std::path::PathBuf;

/// Error type for locyst operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing, renaming, or truncating a target.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
    /// Logging or flushing attempted before `initialize()`.
    NotInitialized,
    /// A logger needs at least one target path.
    NoTargets,
    /// Target vanished during flush and could not be recreated.
    MissingTarget(PathBuf),
    /// Unparseable size string (e.g. `max_size = "lots"`).
    InvalidSize(String),
    /// Unknown level name.
    InvalidLevel(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::NotInitialized => {
                write!(f, "logger is not initialized, call initialize() first")
            }
            Self::NoTargets => write!(f, "no target files configured"),
            Self::MissingTarget(p) => {
                write!(f, "target file {} is missing and could not be recreated", p.display())
            }
            Self::InvalidSize(s) => write!(f, "invalid size: {s}"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
