//! locyst's own diagnostic channel.
//!
//! Rotation, target recovery, config loading and the not-initialized notice
//! report here. It writes straight to stderr and never touches a [`Logger`]
//! cache, so diagnostics raised mid-flush cannot alter the batch being written.
//!
//! The threshold lives in a `OnceLock`: the first `init` wins, later calls are
//! no-ops. Before `init`, only warnings and errors are shown.
//!
//! [`Logger`]: crate::Logger

use crate::level::Level;
use std::sync::OnceLock;

static THRESHOLD: OnceLock<Level> = OnceLock::new();

const DEFAULT_THRESHOLD: Level = Level::Warn;

pub fn init(level: Level) {
    if THRESHOLD.set(level).is_ok() {
        debug("INTERNAL", &format!("Internal diagnostics at {level}"));
    }
}

fn threshold() -> Level {
    THRESHOLD.get().copied().unwrap_or(DEFAULT_THRESHOLD)
}

fn log(level: Level, scope: &str, msg: &str) {
    if level >= threshold() {
        eprintln!("[locyst] {:<8} {scope:<8} {msg}", level.as_str());
    }
}

/// Always printed, regardless of threshold. Used for caller mistakes such as
/// logging before `initialize()`.
pub fn notice(scope: &str, msg: &str) {
    eprintln!("[{scope}] {msg}");
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
