//! Configuration file discovery.
//!
//! Checks candidate locations in a fixed priority order:
//!
//! 1. `--config` flag (explicit path, trusted as-is)
//! 2. `{project}/annot-lint.toml` or `.annot-lint.toml`
//! 3. `~/.annot-lint/config.toml` (global fallback)
//! 4. Nothing found, built-in defaults apply

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given via the `--config` flag.
    Explicit(PathBuf),
    /// Found next to the analyzed project.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.annot-lint/`).
    Global(PathBuf),
    /// Nothing found; built-in defaults apply.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config came from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["annot-lint.toml", ".annot-lint.toml"];

/// Config file name inside the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Testable core: takes `global_dir` as a parameter to avoid env var races.
fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    // An explicit path is not checked for existence; the loader reports
    // the error so the user sees the path they typed.
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.exists() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Returns the global config directory.
///
/// `$ANNOT_LINT_CONFIG_DIR` overrides `~/.annot-lint/` for tests and CI.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ANNOT_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".annot-lint"))
}
