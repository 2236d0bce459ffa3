//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler validates its arguments, calls into the library,
//! and formats output. The probe command is async because it involves
//! network I/O; its handler is a synchronous wrapper that builds a tokio
//! runtime.

mod completion;
mod probe;
mod query;
mod slug;
mod truncate;

pub use completion::completion;
pub use probe::probe;
pub use query::query;
pub use slug::slug;
pub use truncate::truncate;

use anyhow::Result;

use super::args::Command;
use super::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Slug { text } => slug(ctx, &text),
        Command::Truncate {
            max_chars,
            suffix,
            text,
        } => truncate(ctx, max_chars, suffix.as_deref(), &text),
        Command::Query { url, name } => query(ctx, &url, &name),
        Command::Probe { url, timeout_secs } => probe(ctx, &url, timeout_secs),
        Command::Completion { shell } => completion(shell),
    }
}
