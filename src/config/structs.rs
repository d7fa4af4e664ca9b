//! Configuration struct definitions.

use crate::logger::DEFAULT_NAME;
use crate::rotation::RotationPolicy;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default source name for records.
    pub name: String,
    /// Threshold of locyst's own stderr diagnostics.
    pub internal_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            internal_level: "warn".to_string(),
        }
    }
}

/// Either a plain byte count (`20560`) or a size string (`"20K"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SizeSetting {
    Bytes(u64),
    Text(String),
}

impl Default for SizeSetting {
    fn default() -> Self {
        Self::Bytes(RotationPolicy::DEFAULT_THRESHOLD)
    }
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Files every flush writes to. Empty means the platform default path.
    pub targets: Vec<String>,
    /// Rotation threshold.
    pub max_size: SizeSetting,
    /// Flush after every record.
    pub auto_flush: bool,
    /// Line template.
    pub format: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            max_size: SizeSetting::default(),
            auto_flush: false,
            format: crate::fmt::FormatTemplate::DEFAULT.to_string(),
        }
    }
}

/// Archive handling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Add `.N` suffixes instead of replacing a same-second archive.
    pub unique_names: bool,
    /// Gzip archives after rotation.
    pub compress: bool,
}
