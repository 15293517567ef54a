//! Configuration types for annot-lint.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scanner::{ReportMode, ScanOptions};
use crate::target::{AnnotationTarget, MatchPolicy};

/// Top-level configuration for annot-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Scan configuration.
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/target/**".to_string(), "**/vendor/**".to_string()],
        }
    }
}

/// Scan-level configuration: what to look for and how to report it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Annotation identity to search for. A bare name under the `name`
    /// policy, a full path (wildcards allowed) under `path`.
    #[serde(default = "default_annotation")]
    pub annotation: String,

    /// Identity comparison policy.
    #[serde(default, rename = "match")]
    pub match_policy: MatchPolicy,

    /// Report mode: `emit` or `dry-run`.
    #[serde(default)]
    pub report: ReportMode,

    /// Emit a note-severity record for candidates that fail to resolve.
    /// Only embedding front ends with their own resolver can hit this;
    /// the bundled per-file scan resolves every method it collects.
    #[serde(default = "default_true")]
    pub note_unresolved: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            annotation: default_annotation(),
            match_policy: MatchPolicy::default(),
            report: ReportMode::default(),
            note_unresolved: true,
        }
    }
}

impl ScanConfig {
    /// Builds the annotation target this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured annotation path is invalid.
    pub fn target(&self) -> Result<AnnotationTarget, ConfigError> {
        AnnotationTarget::new(&self.annotation, self.match_policy).map_err(|e| {
            ConfigError::Scan {
                message: e.to_string(),
            }
        })
    }

    /// Builds the scan options this configuration describes.
    #[must_use]
    pub fn options(&self) -> ScanOptions {
        ScanOptions {
            report_mode: self.report,
            note_unresolved: self.note_unresolved,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_annotation() -> String {
    "range".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Invalid scan section.
    #[error("Invalid scan configuration: {message}")]
    Scan {
        /// Validation error message.
        message: String,
    },
}
