//! Cairn - Bootstrap a Starknet development environment
//!
//! Cairn is a single-binary CLI that installs the Starknet toolchain
//! (scarb, starknet-foundry, starkli, dojo, and the asdf version manager
//! that pins them) by running the bundled install scripts.
//!
//! # Architecture
//!
//! The codebase is layered:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`core`] - Tool catalog, configuration, and scripts-directory resolution
//! - [`runner`] - Spawns install scripts and reports how they finished
//! - [`ui`] - User-facing output utilities
//!
//! # Correctness Invariants
//!
//! 1. Scripts are spawned with a discrete argv (`bash <script> [flag]`);
//!    arguments are never interpolated into a shell command line
//! 2. Script failures surface as typed errors carrying the exit status and
//!    captured stderr; nothing is swallowed below the binary boundary
//! 3. Catalog order satisfies prerequisites: every `requires` entry names a
//!    tool that appears earlier in the table

pub mod cli;
pub mod core;
pub mod runner;
pub mod ui;
