//! cli
//!
//! Command-line interface layer for Cairn.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and build the execution context
//! - Run the init routine (welcome screen, debug flag dump)
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, folds the config
//! file into a [`crate::core::Context`], and dispatches to the handlers in
//! [`commands`]. Script execution itself lives in [`crate::runner`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::GlobalConfig;
use crate::core::Context;
use crate::ui::{banner, output};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = GlobalConfig::load().context("failed to load configuration")?;

    let ctx = Context {
        debug: cli.debug,
        quiet: cli.quiet,
        clear: cli.clear_screen(config.clear),
        scripts_dir: cli.scripts_dir.clone(),
        config,
    };

    if ctx.debug {
        let verbosity = output::Verbosity::from_flags(ctx.quiet, ctx.debug);
        output::debug(format!("flags: {:?}", cli), verbosity);
        output::debug(format!("config: {:?}", ctx.config), verbosity);
    }

    match cli.command {
        Some(command) => commands::dispatch(command, &ctx),
        None => {
            // Bare invocation: the init routine is the whole program.
            if !ctx.quiet {
                banner::welcome(ctx.clear).context("failed to print welcome screen")?;
            }
            Ok(())
        }
    }
}
