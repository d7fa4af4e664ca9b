//! Draining the cache to every target and rotating what grew too large.
//!
//! Per target, in configured order: recreate it if it vanished, append the
//! batch, then check its post-write size. The cache is cleared once, after all
//! targets succeeded. An error leaves the cache as it was; targets written
//! before the failure keep the batch, so retrying after a partial failure
//! duplicates it there.
//!
//! Rotation and missing-file notes become records too, but only after a
//! successful flush: they are appended to the cache for the next one. A failed
//! flush mirrors them to stderr and drops them, so retrying a broken target
//! does not pile up copies of the same warning. The flush that writes notes
//! does not count their bytes toward the rotation threshold; otherwise a note
//! about a rotation could rotate the fresh file again within the same second
//! and replace the archive holding the caller's records.

use super::Logger;
use crate::Error;
use crate::fmt::{Extras, LogRecord};
use crate::internal;
use crate::level::Level;
use crate::output::TargetFile;
use crate::rotation::Decision;

impl Logger {
    /// Persists the cache to every target and clears it.
    ///
    /// # Errors
    /// `NotInitialized` before `initialize()`, `MissingTarget` when a vanished
    /// target cannot be recreated, `Io` for write/rename failures. The cache is
    /// kept on every error.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.gate()?;

        let mut notes = Vec::new();
        let result = self.write_batch(&mut notes);

        if let Err(e) = &result {
            internal::error("FLUSH", &format!("Flush failed, cache kept: {e}"));
            return result;
        }

        let flushed = self.cache.drain();
        internal::debug(
            "FLUSH",
            &format!(
                "Flushed {} line(s) to {} target(s)",
                flushed.len(),
                self.targets.len()
            ),
        );

        self.pending_notes = notes.len();
        for (level, msg) in notes {
            let line = LogRecord::now(&self.name, level, &msg, Extras::new()).render(&self.template);
            self.cache.append(line);
        }

        result
    }

    /// Bytes of the payload taken up by notes queued by the previous flush.
    /// They always sit at the front of the cache.
    fn note_bytes(&self) -> u64 {
        let bytes: usize = self
            .cache
            .lines()
            .iter()
            .take(self.pending_notes)
            .map(|line| line.len() + 1)
            .sum();
        u64::try_from(bytes).unwrap_or(u64::MAX)
    }

    fn write_batch(&self, notes: &mut Vec<(Level, String)>) -> Result<(), Error> {
        let payload = self.cache.payload();
        let exempt = self.note_bytes();

        for target in &self.targets {
            Self::ensure_target(target, notes)?;

            if !payload.is_empty() {
                target.append(&payload)?;
            }

            match self.policy.check_discounting(target.path(), exempt)? {
                Decision::Pass => {}
                Decision::Rotate => {
                    let archive = self.policy.rotate(target.path())?;
                    notes.push((
                        Level::Debug,
                        format!(
                            "Rotated file from {} to {}",
                            target.path().display(),
                            archive.display()
                        ),
                    ));
                }
                Decision::Missing => {
                    // removed between our write and the size check; recreated next flush
                    let msg = format!("File {} disappeared after write", target.path().display());
                    internal::warn("FLUSH", &msg);
                    notes.push((Level::Warn, msg));
                }
            }
        }

        Ok(())
    }

    /// One recreation attempt; a target that still is not a file afterwards is fatal.
    fn ensure_target(target: &TargetFile, notes: &mut Vec<(Level, String)>) -> Result<(), Error> {
        if target.exists() {
            return Ok(());
        }

        let msg = format!("File {} does not exist", target.path().display());
        internal::warn("FLUSH", &msg);
        notes.push((Level::Warn, msg));

        target.prepare()?;
        if target.exists() {
            return Ok(());
        }

        internal::error(
            "FLUSH",
            &format!("Could not recreate {}", target.path().display()),
        );
        Err(Error::MissingTarget(target.path().to_path_buf()))
    }
}
