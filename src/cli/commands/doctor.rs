//! doctor command - Diagnose the host environment
//!
//! # Design
//!
//! Doctor reports three sections: host prerequisites the install scripts
//! lean on (bash, curl, git), the resolved scripts directory and its
//! scripts, and the catalog tools themselves. It never changes anything
//! and always exits 0; a missing tool is a finding, not a failure.

use std::path::Path;
use std::process::Command;

use anyhow::{Context as _, Result};
use console::style;
use serde_json::json;

use crate::core::catalog::CATALOG;
use crate::core::paths::resolve_scripts_dir;
use crate::core::Context;

/// Host binaries the install scripts depend on.
const PREREQUISITES: &[&str] = &["bash", "curl", "git"];

/// One probed binary: on PATH or not, and its reported version.
struct Probe {
    name: String,
    found: bool,
    version: Option<String>,
}

impl Probe {
    fn binary(name: &str) -> Self {
        let found = which::which(name).is_ok();
        let version = if found { probe_version(name) } else { None };
        Self {
            name: name.to_string(),
            found,
            version,
        }
    }
}

/// First line of `<binary> --version` stdout, if the probe ran cleanly.
fn probe_version(binary: &str) -> Option<String> {
    Command::new(binary)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| {
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|line| line.trim().to_string())
        })
        .filter(|line| !line.is_empty())
}

/// Run the doctor command.
pub fn doctor(ctx: &Context, json: bool) -> Result<()> {
    let prerequisites: Vec<Probe> = PREREQUISITES
        .iter()
        .map(|name| Probe::binary(name))
        .collect();

    let scripts_dir = resolve_scripts_dir(
        ctx.scripts_dir.as_deref(),
        ctx.config.scripts_dir.as_deref(),
    );

    let tools: Vec<Probe> = CATALOG
        .iter()
        .map(|spec| {
            let mut probe = Probe::binary(spec.binary);
            probe.name = spec.name.to_string();
            probe
        })
        .collect();

    if json {
        let scripts = match &scripts_dir {
            Ok(dir) => json!({
                "dir": dir.display().to_string(),
                "scripts": CATALOG
                    .iter()
                    .map(|spec| json!({
                        "script": spec.script,
                        "present": dir.join(spec.script).is_file(),
                    }))
                    .collect::<Vec<_>>(),
            }),
            Err(e) => json!({ "error": e.to_string() }),
        };

        let report = json!({
            "prerequisites": render_probes(&prerequisites),
            "scripts": scripts,
            "tools": render_probes(&tools),
        });
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", style("host prerequisites").bold());
    for probe in &prerequisites {
        print_probe(probe, "not found on PATH");
    }

    println!();
    println!("{}", style("install scripts").bold());
    match &scripts_dir {
        Ok(dir) => {
            println!("  {} {}", style("✓").green(), dir.display());
            for spec in CATALOG {
                print_script(dir, spec.script);
            }
        }
        Err(e) => println!("  {} {}", style("✗").red(), e),
    }

    println!();
    println!("{}", style("toolchain").bold());
    for probe in &tools {
        print_probe(probe, "not installed");
    }

    Ok(())
}

fn render_probes(probes: &[Probe]) -> serde_json::Value {
    probes
        .iter()
        .map(|probe| {
            json!({
                "name": probe.name,
                "found": probe.found,
                "version": probe.version,
            })
        })
        .collect()
}

fn print_probe(probe: &Probe, missing: &str) {
    if probe.found {
        match &probe.version {
            Some(version) => {
                println!("  {} {} ({})", style("✓").green(), probe.name, version)
            }
            None => println!("  {} {}", style("✓").green(), probe.name),
        }
    } else {
        println!(
            "  {} {} ({})",
            style("✗").red(),
            probe.name,
            style(missing).dim()
        );
    }
}

fn print_script(dir: &Path, script: &str) {
    if dir.join(script).is_file() {
        println!("  {} {}", style("✓").green(), script);
    } else {
        println!(
            "  {} {} ({})",
            style("✗").red(),
            script,
            style("missing").dim()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_version_of_missing_binary_is_none() {
        assert_eq!(probe_version("definitely-not-a-binary-cairn"), None);
    }

    #[test]
    fn bash_probe_finds_bash() {
        let probe = Probe::binary("bash");
        assert!(probe.found);
        assert!(probe.version.is_some());
    }
}
