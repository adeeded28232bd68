//! ui::banner
//!
//! The welcome screen shown when cairn runs without a subcommand.

use std::io;

use console::{style, Term};

/// Print the welcome screen, optionally wiping the terminal first.
pub fn welcome(clear: bool) -> io::Result<()> {
    if clear {
        Term::stdout().clear_screen()?;
    }

    println!("{}", style("cairn").cyan().bold());
    println!(
        "{}",
        style("Bootstrap a Starknet development environment").dim()
    );
    println!();
    println!(
        "Run {} to see available commands, or {} to get going.",
        style("cairn --help").green(),
        style("cairn install --all").green()
    );

    Ok(())
}
