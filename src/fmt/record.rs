//! A record exists only long enough to be rendered; the cache keeps the text.

use super::{FormatTemplate, FormatValues};
use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt::Display;

/// Positional and keyed values appended after the message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extras {
    positional: Vec<String>,
    keyed: Vec<(String, String)>,
}

impl Extras {
    /// No extras: the message ends the line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn arg(mut self, value: impl Display) -> Self {
        self.positional.push(value.to_string());
        self
    }

    /// Keys render in insertion order.
    #[must_use]
    pub fn kv(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.keyed.push((key.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyed.is_empty()
    }

    #[must_use]
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    #[must_use]
    pub fn keyed(&self) -> &[(String, String)] {
        &self.keyed
    }

    /// `" a b k=v"`, or the empty string when there is nothing to add.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for value in &self.positional {
            out.push(' ');
            out.push_str(value);
        }
        for (key, value) in &self.keyed {
            out.push(' ');
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

/// One log call, before rendering.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub source: String,
    pub level: Level,
    pub message: String,
    pub extras: Extras,
}

impl LogRecord {
    /// Stamped with the current local time.
    #[must_use]
    pub fn now(source: &str, level: Level, message: &str, extras: Extras) -> Self {
        Self {
            timestamp: Local::now(),
            source: source.to_string(),
            level,
            message: message.to_string(),
            extras,
        }
    }

    #[must_use]
    pub fn render(&self, template: &FormatTemplate) -> String {
        let values = FormatValues::new()
            .time(self.timestamp.format("%H:%M:%S").to_string())
            .date(self.timestamp.format("%Y-%m-%d").to_string())
            .scope(&self.source)
            .level(self.level.as_str())
            .msg(&self.message)
            .extras(self.extras.render());

        template.render(&values)
    }
}
