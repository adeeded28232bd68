//! core
//!
//! Core domain types for Cairn.
//!
//! # Modules
//!
//! - [`catalog`] - The table of installable tools
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Install-script directory resolution

pub mod catalog;
pub mod config;
pub mod paths;

use std::path::PathBuf;

use config::GlobalConfig;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags and configuration.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Clear the terminal before the welcome screen.
    pub clear: bool,
    /// Scripts directory override from the command line.
    pub scripts_dir: Option<PathBuf>,
    /// Loaded global configuration.
    pub config: GlobalConfig,
}
