//! `locyst` command-line entry point.
//!
//! Usage:
//!   locyst log <level> <message...> [--source S] [--arg V]... [--kv K=V]...
//!   locyst clear [--yes]
//!   locyst stats
//!   locyst --config <path> <command>

use clap::Parser;
use locyst::cli::{Cli, Command, cmd_clear, cmd_log, cmd_stats};
use locyst::config::Config;
use locyst::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Targets, size threshold, and format all come from config
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init(config.parse_internal_level());

    match cli.command {
        Command::Log {
            level,
            message,
            source,
            args,
            kv,
        } => cmd_log(
            &config,
            level.into(),
            source.as_deref(),
            &message,
            &args,
            &kv,
        ),
        Command::Clear { yes } => cmd_clear(&config, yes),
        Command::Stats => cmd_stats(&config),
    }
}
