//! `locyst` - buffered file logger with size-based rotation.
//!
//! Records are rendered into an in-memory cache and written to every
//! configured file on [`Logger::flush`] (or after each record with
//! auto-flush). A file whose size reached the threshold after a flush is
//! renamed to `<path>-<YYYY-MM-DD-HH-MM-SS>` and a fresh file takes its place.
//!
//! # Example
//!
//! ```no_run
//! use locyst::{Extras, Logger};
//!
//! # fn main() -> Result<(), locyst::Error> {
//! let mut logger = Logger::builder()
//!     .target("data/logging.txt")
//!     .max_size(20_560)
//!     .build()?;
//!
//! logger.initialize_as("Main");
//! logger.info("Application started")?;
//! logger.warn_with("Slow response", Extras::new().arg("db").kv("ms", 812))?;
//! logger.flush()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `locyst` binary and the terminal confirmation prompt

pub mod cache;
pub mod config;
pub mod confirm;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod rotation;
pub mod size;
pub mod stats;

#[cfg(feature = "cli")]
pub mod cli;

pub use cache::Cache;
pub use config::Config;
pub use confirm::Confirm;
pub use error::Error;
pub use fmt::{Extras, FormatTemplate, LogRecord};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, SharedLogger};
pub use output::TargetFile;
pub use rotation::{Decision, RotationPolicy};
pub use size::{format_size, parse_size};
pub use stats::{TargetStats, stats};

#[cfg(feature = "cli")]
pub use confirm::PromptConfirm;
