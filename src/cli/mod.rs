//! cli
//!
//! Command-line interface layer for the `pw` binary.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT implement any text or tree logic itself
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that call into [`crate::core`] and [`crate::page`]. The probe
//! command is async underneath and bridged with a tokio runtime inside its
//! handler.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;

/// Shared context derived from global flags.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Minimal output.
    pub quiet: bool,
    /// Machine-readable JSON output.
    pub json: bool,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let ctx = Context {
        quiet: cli.quiet,
        json: cli.json,
    };

    commands::dispatch(cli.command, &ctx)
}
