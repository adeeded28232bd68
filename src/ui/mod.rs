//! ui
//!
//! User-facing output utilities.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-gated printing helpers
//! - [`banner`] - The welcome screen
//!
//! # Design
//!
//! All human-facing output goes through this module so that quiet mode and
//! styling behave the same everywhere. Machine-readable output (`--json`)
//! is written by the command handlers directly.

pub mod banner;
pub mod output;
