//! core::paths
//!
//! Install-script directory resolution.
//!
//! # Resolution order
//!
//! 1. `--scripts-dir` flag
//! 2. `$CAIRN_SCRIPTS_DIR`
//! 3. `scripts_dir` from the config file
//! 4. `scripts/` next to the executable
//! 5. `scripts/` under the current directory
//!
//! An explicit override (1-3) must exist; a missing override is an error
//! rather than a silent fall-through to some other location. Only the
//! default locations (4-5) are tried in sequence.
//!
//! # Example
//!
//! ```no_run
//! use cairn::core::paths::resolve_scripts_dir;
//! use std::path::Path;
//!
//! let dir = resolve_scripts_dir(Some(Path::new("/opt/cairn/scripts")), None).unwrap();
//! assert_eq!(dir, Path::new("/opt/cairn/scripts").to_path_buf());
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from scripts-directory resolution.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("scripts directory '{}' ({origin}) does not exist", path.display())]
    MissingOverride { origin: &'static str, path: PathBuf },

    #[error("no scripts directory found (searched {})", render_candidates(searched))]
    NotFound { searched: Vec<PathBuf> },
}

fn render_candidates(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve the directory holding the install scripts.
///
/// `flag` is the `--scripts-dir` value, `configured` the config file value.
/// The environment variable is consulted between them.
pub fn resolve_scripts_dir(
    flag: Option<&Path>,
    configured: Option<&Path>,
) -> Result<PathBuf, PathError> {
    if let Some(dir) = flag {
        return require_dir(dir, "--scripts-dir");
    }

    if let Ok(dir) = std::env::var("CAIRN_SCRIPTS_DIR") {
        return require_dir(Path::new(&dir), "$CAIRN_SCRIPTS_DIR");
    }

    if let Some(dir) = configured {
        return require_dir(dir, "config scripts_dir");
    }

    let mut searched = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join("scripts");
            if candidate.is_dir() {
                return Ok(candidate);
            }
            searched.push(candidate);
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        let candidate = cwd.join("scripts");
        if candidate.is_dir() {
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    Err(PathError::NotFound { searched })
}

/// An explicit override must point at an existing directory.
fn require_dir(dir: &Path, origin: &'static str) -> Result<PathBuf, PathError> {
    if dir.is_dir() {
        Ok(dir.to_path_buf())
    } else {
        Err(PathError::MissingOverride {
            origin,
            path: dir.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Everything that resolves without a flag reads `CAIRN_SCRIPTS_DIR`, so
    // all of those assertions live in this one test; the cargo test harness
    // runs sibling tests in parallel and a process-wide env var would leak
    // into them through the set/remove window.
    #[test]
    fn resolution_precedence() {
        let flag_dir = TempDir::new().unwrap();
        let env_dir = TempDir::new().unwrap();
        let config_dir = TempDir::new().unwrap();

        // Flag wins over everything.
        std::env::set_var("CAIRN_SCRIPTS_DIR", env_dir.path());
        let resolved =
            resolve_scripts_dir(Some(flag_dir.path()), Some(config_dir.path())).unwrap();
        assert_eq!(resolved, flag_dir.path());

        // Environment wins over config when no flag is given.
        let resolved = resolve_scripts_dir(None, Some(config_dir.path())).unwrap();
        assert_eq!(resolved, env_dir.path());
        std::env::remove_var("CAIRN_SCRIPTS_DIR");

        // Config is used once flag and environment are out of the picture.
        let resolved = resolve_scripts_dir(None, Some(config_dir.path())).unwrap();
        assert_eq!(resolved, config_dir.path());

        // A configured directory that does not exist is a hard error, not a
        // fall-through to the defaults.
        let missing = config_dir.path().join("no-such-dir");
        let err = resolve_scripts_dir(None, Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config scripts_dir"));
        assert!(err.to_string().contains("no-such-dir"));
    }

    #[test]
    fn missing_flag_override_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-dir");

        let err = resolve_scripts_dir(Some(&missing), None).unwrap_err();
        match err {
            PathError::MissingOverride { origin, path } => {
                assert_eq!(origin, "--scripts-dir");
                assert_eq!(path, missing);
            }
            other => panic!("expected MissingOverride, got {:?}", other),
        }
    }

    #[test]
    fn file_override_is_rejected() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("scripts");
        std::fs::write(&file, "not a directory").unwrap();

        let err = resolve_scripts_dir(Some(&file), None).unwrap_err();
        assert!(matches!(err, PathError::MissingOverride { .. }));
    }

    #[test]
    fn not_found_lists_searched_locations() {
        let err = PathError::NotFound {
            searched: vec![
                PathBuf::from("/opt/cairn/scripts"),
                PathBuf::from("/home/dev/scripts"),
            ],
        };

        let rendered = err.to_string();
        assert!(rendered.contains("/opt/cairn/scripts"));
        assert!(rendered.contains("/home/dev/scripts"));
        assert_eq!(rendered.lines().count(), 1);
    }
}
