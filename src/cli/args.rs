//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `--clear` / `--no-clear`: Control terminal clearing before the welcome screen
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--scripts-dir <DIR>`: Override install-script directory resolution

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cairn - Bootstrap a Starknet development environment
#[derive(Parser, Debug)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Clear the terminal before the welcome screen
    #[arg(long, global = true, conflicts_with = "no_clear")]
    pub clear: bool,

    /// Never clear the terminal, even if the config file says to
    #[arg(long, global = true)]
    pub no_clear: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory containing the install scripts
    #[arg(long, global = true, value_name = "DIR")]
    pub scripts_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Whether to clear the terminal before the welcome screen.
    ///
    /// `--no-clear` beats everything, `--clear` beats the config file, and
    /// the config file's `clear` key is the default.
    pub fn clear_screen(&self, configured: Option<bool>) -> bool {
        if self.no_clear {
            false
        } else if self.clear {
            true
        } else {
            configured.unwrap_or(false)
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install one tool, or the whole toolchain
    #[command(
        name = "install",
        long_about = "Install a Starknet toolchain component.\n\n\
            Runs the tool's install script as `bash <script> <version>`. The \
            version defaults to `latest` and is handed to the script as its \
            single argument. With --all, every catalog tool is installed in \
            catalog order, which always installs prerequisites first.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Install the whole toolchain (good first step on a fresh machine)
    cairn install --all

    # Install one tool at its latest version
    cairn install scarb

    # Pin a version; it is passed to the script as $1
    cairn install scarb 2.8.4

    # See what would run without spawning anything
    cairn install --all --dry-run"
    )]
    Install {
        /// Tool to install (see `cairn list`)
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        tool: Option<String>,

        /// Version to install (forwarded to the script, defaults to latest)
        version: Option<String>,

        /// Install every catalog tool, in order
        #[arg(long)]
        all: bool,

        /// Print what would run without spawning anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List the installable tools
    #[command(
        name = "list",
        long_about = "List the tools cairn knows how to install.\n\n\
            Shows each catalog entry with an installed marker (a PATH probe \
            for the tool's binary) and a one-line summary.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Human-readable table
    cairn list

    # Names only, one per line (handy for shell loops)
    cairn list --quiet

    # Machine-readable form for scripting
    cairn list --json"
    )]
    List {
        /// Emit JSON instead of the human-readable table
        #[arg(long)]
        json: bool,
    },

    /// Diagnose the host environment
    #[command(
        name = "doctor",
        long_about = "Diagnose the host environment.\n\n\
            Checks the host prerequisites (bash, curl, git), the resolved \
            scripts directory and its install scripts, and whether each \
            catalog tool is already installed. Doctor reports; it never \
            changes anything and always exits 0.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Check the host before a first install
    cairn doctor

    # Machine-readable report
    cairn doctor --json"
    )]
    Doctor {
        /// Emit JSON instead of the human-readable report
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts.\n\n\
            Writes the completion script for the given shell to stdout.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash
    cairn completion bash > ~/.local/share/bash-completion/completions/cairn

    # Zsh
    cairn completion zsh > ~/.zfunc/_cairn

    # Fish
    cairn completion fish > ~/.config/fish/completions/cairn.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
