//! One file per subcommand. Each handler owns its error reporting and exit code.

mod clear;
mod log;
mod stats;

pub use clear::cmd_clear;
pub use log::cmd_log;
pub use stats::cmd_stats;
