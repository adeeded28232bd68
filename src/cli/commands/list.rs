//! list command - Show the tool catalog with installed markers

use anyhow::{Context as _, Result};
use console::style;
use serde_json::json;

use crate::core::catalog::CATALOG;
use crate::core::Context;

/// Run the list command.
///
/// A tool counts as installed when its binary is on PATH. In quiet mode the
/// output is names only, one per line; `--json` emits a machine-readable
/// array on stdout.
pub fn list(ctx: &Context, json: bool) -> Result<()> {
    if json {
        let tools: Vec<_> = CATALOG
            .iter()
            .map(|spec| {
                json!({
                    "name": spec.name,
                    "binary": spec.binary,
                    "script": spec.script,
                    "summary": spec.summary,
                    "requires": spec.requires,
                    "installed": which::which(spec.binary).is_ok(),
                })
            })
            .collect();
        let rendered =
            serde_json::to_string_pretty(&tools).context("failed to serialize tool list")?;
        println!("{}", rendered);
        return Ok(());
    }

    if ctx.quiet {
        for spec in CATALOG {
            println!("{}", spec.name);
        }
        return Ok(());
    }

    let width = CATALOG
        .iter()
        .map(|spec| spec.name.len())
        .max()
        .unwrap_or(0);

    for spec in CATALOG {
        let marker = if which::which(spec.binary).is_ok() {
            style("✓").green()
        } else {
            style("✗").dim()
        };
        println!("{} {:width$}  {}", marker, spec.name, spec.summary);
    }

    Ok(())
}
