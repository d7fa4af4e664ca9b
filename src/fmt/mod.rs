//! Record rendering: the template engine and the record/extras types it consumes.

mod format;
mod record;

pub use format::{FormatSegment, FormatTemplate, FormatValues, Placeholder};
pub use record::{Extras, LogRecord};

use chrono::{DateTime, Local};

/// Sortable second-resolution stamp shared by file headers and archive suffixes.
pub const STAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

#[must_use]
pub fn stamp(at: &DateTime<Local>) -> String {
    at.format(STAMP_FORMAT).to_string()
}
