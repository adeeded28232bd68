//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Does the work (resolving paths, probing PATH, running scripts)
//! 3. Formats and displays output
//!
//! Handlers return `anyhow::Result`; `main` owns the final error line.

mod completion;
mod doctor;
mod install;
mod list;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use doctor::doctor;
pub use install::install;
pub use list::list;

use anyhow::Result;

use crate::cli::args::Command;
use crate::core::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Install {
            tool,
            version,
            all,
            dry_run,
        } => install(ctx, tool.as_deref(), version.as_deref(), all, dry_run),
        Command::List { json } => list(ctx, json),
        Command::Doctor { json } => doctor(ctx, json),
        Command::Completion { shell } => completion(shell),
    }
}
