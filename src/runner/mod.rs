//! runner
//!
//! Spawns install scripts and reports how they finished.
//!
//! # Design
//!
//! Every script is executed as `bash <script> [flag]` with the script path
//! and the flag passed as discrete argv entries. Nothing is ever routed
//! through a shell command line, so metacharacters in the flag reach the
//! script verbatim as `$1`.
//!
//! Child stdout and stderr are buffered until the script exits. A zero exit
//! is silent success; anything else becomes a [`RunError::Failed`] carrying
//! the exit status and the captured stderr. The runner itself prints
//! nothing and holds no shared state, so concurrent calls are independent.
//!
//! There is deliberately no timeout, cancellation, or output streaming: a
//! script runs until it exits, and the caller decides what to do with the
//! outcome.

use std::io;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// A request to run one install script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCall {
    /// Path to the script handed to bash.
    pub script: PathBuf,
    /// Single argument forwarded to the script. Empty means no argument.
    pub flag: String,
}

impl ScriptCall {
    /// Create a call for `script` with `flag` as its only argument.
    pub fn new(script: impl Into<PathBuf>, flag: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            flag: flag.into(),
        }
    }

    /// Render the call the way it would be typed, for dry runs and debug
    /// output. Not suitable for handing to a shell.
    pub fn render(&self) -> String {
        if self.flag.is_empty() {
            format!("bash {}", self.script.display())
        } else {
            format!("bash {} {}", self.script.display(), self.flag)
        }
    }
}

/// How a script run went wrong.
#[derive(Debug, Error)]
pub enum RunError {
    /// bash itself could not be started.
    #[error("failed to spawn bash for '{}': {source}", script.display())]
    Spawn {
        script: PathBuf,
        source: io::Error,
    },

    /// The script ran and exited nonzero, or died on a signal.
    ///
    /// `code` is `None` for signal death. `stderr` holds everything the
    /// script wrote to stderr; the `Display` rendering stays on one line
    /// and quotes only the last non-empty stderr line.
    #[error("script '{}' {}", script.display(), describe_failure(*code, stderr))]
    Failed {
        script: PathBuf,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_failure(code: Option<i32>, stderr: &str) -> String {
    let reason = match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    };
    match last_stderr_line(stderr) {
        Some(line) => format!("{}: {}", reason, line),
        None => reason,
    }
}

/// Last non-empty line of the captured stderr, the most proximate message.
fn last_stderr_line(stderr: &str) -> Option<&str> {
    stderr.lines().rev().map(str::trim).find(|l| !l.is_empty())
}

/// Run one script to completion.
///
/// A missing script is not pre-checked: bash reports it like any other
/// failure (exit 127), so the error always reflects what actually ran.
pub fn run(call: &ScriptCall) -> Result<(), RunError> {
    let mut command = Command::new("bash");
    command.arg(&call.script);
    if !call.flag.is_empty() {
        command.arg(&call.flag);
    }

    let output = command.output().map_err(|e| RunError::Spawn {
        script: call.script.clone(),
        source: e,
    })?;

    if output.status.success() {
        return Ok(());
    }

    Err(RunError::Failed {
        script: call.script.clone(),
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
