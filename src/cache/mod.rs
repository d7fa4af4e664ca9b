//! In-memory buffer of rendered lines awaiting a flush.
//!
//! There is no size cap: with auto-flush off and no explicit `flush()`, the
//! cache grows for the lifetime of the logger. Callers that log heavily
//! without flushing own that memory cost.

/// Ordered, append-only buffer. Insertion order is emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cache {
    lines: Vec<String>,
}

impl Cache {
    /// An empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Pushes a rendered line to the end.
    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Takes every line in order and leaves the cache empty in one step.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Pending lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The on-disk form of the batch: lines joined by `\n`, with a trailing `\n`.
    /// Empty cache yields an empty payload.
    #[must_use]
    pub fn payload(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
