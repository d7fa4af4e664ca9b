//! CLI module for locyst.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
        }
    }
}

/// locyst - buffered file logger with size-based rotation.
#[derive(Parser)]
#[command(
    name = "locyst",
    version,
    about = "Append records to rotating log files"
)]
pub struct Cli {
    /// Config file (default: <config dir>/locyst/locyst.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write one record to every target, rotating if needed.
    Log {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
        /// Source name (default: general.name from config)
        #[arg(short, long)]
        source: Option<String>,
        /// Positional extra, repeatable
        #[arg(long = "arg", value_name = "VALUE")]
        args: Vec<String>,
        /// Keyed extra, repeatable
        #[arg(long = "kv", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        kv: Vec<(String, String)>,
    },
    /// Truncate every target file.
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show target sizes and rotated archives.
    Stats,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}

pub use commands::{cmd_clear, cmd_log, cmd_stats};
