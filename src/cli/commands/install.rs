//! install command - Run install scripts for catalog tools
//!
//! # Design
//!
//! Each tool installs by spawning its script through [`crate::runner`] as
//! `bash <script> <version>`. With `--all` the whole catalog runs in table
//! order, fail-fast, which installs prerequisites before their dependents.
//!
//! A missing prerequisite binary is a warning, not an error: the script is
//! authoritative about what it actually needs, and some scripts install
//! their own prerequisites.
//!
//! # Example
//!
//! ```bash
//! # Install one tool at its latest version
//! cairn install scarb
//!
//! # Pin a version
//! cairn install scarb 2.8.4
//!
//! # Everything, in catalog order
//! cairn install --all
//! ```

use anyhow::{bail, Context as _, Result};

use crate::core::catalog::{self, ToolSpec};
use crate::core::paths::resolve_scripts_dir;
use crate::core::Context;
use crate::runner::{self, ScriptCall};
use crate::ui::output::{self, Verbosity};

/// Run the install command.
pub fn install(
    ctx: &Context,
    tool: Option<&str>,
    version: Option<&str>,
    all: bool,
    dry_run: bool,
) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    let targets: Vec<&ToolSpec> = if all {
        catalog::CATALOG.iter().collect()
    } else {
        // clap guarantees the tool argument is present when --all is absent
        let name = tool.unwrap_or_default();
        match catalog::find(name) {
            Some(spec) => vec![spec],
            None => bail!(
                "unknown tool '{}' (available: {})",
                name,
                catalog::names().join(", ")
            ),
        }
    };

    let scripts_dir = resolve_scripts_dir(
        ctx.scripts_dir.as_deref(),
        ctx.config.scripts_dir.as_deref(),
    )?;
    output::debug(
        format!("scripts directory: {}", scripts_dir.display()),
        verbosity,
    );

    let flag = version.unwrap_or("latest");

    // Tools already installed by this invocation. A prerequisite that just
    // ran won't show up on the parent's PATH probe, so it must not be
    // warned about.
    let mut completed: Vec<&str> = Vec::new();

    for spec in targets {
        let call = ScriptCall::new(scripts_dir.join(spec.script), flag);

        if dry_run {
            output::print(format!("would run: {}", call.render()), verbosity);
            continue;
        }

        for requirement in spec.requires {
            if completed.contains(requirement) {
                continue;
            }
            let binary = catalog::find(requirement).map(|dep| dep.binary);
            if binary.is_some_and(|b| which::which(b).is_err()) {
                output::warn(
                    format!(
                        "{} expects {} to be installed first (try `cairn install {}`)",
                        spec.name, requirement, requirement
                    ),
                    verbosity,
                );
            }
        }

        output::step(format!("Installing {} ({})...", spec.name, flag), verbosity);
        output::debug(format!("running: {}", call.render()), verbosity);

        runner::run(&call).with_context(|| format!("failed to install {}", spec.name))?;

        output::done(format!("{} installed", spec.name), verbosity);
        completed.push(spec.name);
    }

    Ok(())
}
