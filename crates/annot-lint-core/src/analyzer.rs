//! Analyzer orchestrating the scan over a file tree.

use crate::collector::{MethodCollector, SynWalker, TreeWalker};
use crate::config::Config;
use crate::context::FileContext;
use crate::diagnostics::{Diagnostic, ScanReport};
use crate::resolver::FileResolver;
use crate::scanner::{ReportMode, Scanner, ScanSummary};
use crate::sink::CollectSink;
use crate::target::AnnotationTarget;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing Rust source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    target: Option<AnnotationTarget>,
    report_mode: Option<ReportMode>,
    note_unresolved: Option<bool>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the annotation target, overriding the configured one.
    #[must_use]
    pub fn target(mut self, target: AnnotationTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the report mode, overriding the configured one.
    #[must_use]
    pub fn report_mode(mut self, mode: ReportMode) -> Self {
        self.report_mode = Some(mode);
        self
    }

    /// Sets whether unresolved candidates produce notes, overriding the
    /// configured value.
    #[must_use]
    pub fn note_unresolved(mut self, note: bool) -> Self {
        self.note_unresolved = Some(note);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// Explicit builder settings win over the configuration; the
    /// configuration wins over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured target is invalid or the
    /// current directory cannot be determined.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self.root.unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.clone());
        if exclude_patterns.is_empty() {
            exclude_patterns.extend(["**/target/**".to_string(), "**/vendor/**".to_string()]);
        }

        let target = match self.target {
            Some(target) => target,
            None => config.scan.target()?,
        };
        let mut options = config.scan.options();
        if let Some(mode) = self.report_mode {
            options.report_mode = mode;
        }
        if let Some(note) = self.note_unresolved {
            options.note_unresolved = note;
        }

        Ok(Analyzer {
            root,
            scanner: Scanner::new(target).with_options(options),
            exclude_patterns,
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The analyzer that runs the scan pipeline over every file in a tree.
///
/// Use [`Analyzer::builder()`] to construct an instance. Files are
/// processed one at a time in discovery order; each file gets a fresh
/// collector, resolver, and sink.
pub struct Analyzer {
    root: PathBuf,
    scanner: Scanner,
    exclude_patterns: Vec<String>,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the target annotation the scan searches for.
    #[must_use]
    pub fn target(&self) -> &AnnotationTarget {
        self.scanner.target()
    }

    /// Scans all files and returns the report.
    ///
    /// Files that fail to parse are skipped with a warning unless
    /// `fail_on_parse_error` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails.
    pub fn analyze(&self) -> Result<ScanReport, AnalyzerError> {
        info!("Starting scan at {:?}", self.root);

        let mut report = ScanReport::new();
        let files = self.discover_files()?;

        info!("Found {} files to scan", files.len());

        for file_path in &files {
            match self.analyze_file(file_path) {
                Ok((diagnostics, summary)) => {
                    report.diagnostics.extend(diagnostics);
                    report.summary.merge(summary);
                    report.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        // Sort diagnostics by file, then line
        report.diagnostics.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Scan complete: {} diagnostics in {} files",
            report.diagnostics.len(),
            report.files_checked
        );

        Ok(report)
    }

    /// Runs the collect/resolve/scan pipeline over a single file.
    fn analyze_file(&self, path: &Path) -> Result<(Vec<Diagnostic>, ScanSummary), AnalyzerError> {
        debug!("Scanning: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let ast = syn::parse_file(&content).map_err(|e| AnalyzerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let ctx = FileContext::new(path, &content, &self.root);
        let mut collector = MethodCollector::new();
        SynWalker.walk(&ast, &mut collector);

        let resolver = FileResolver::new(&ctx, &ast);
        let mut sink = CollectSink::new();
        let summary = self.scanner.scan(collector.methods(), &resolver, &mut sink);

        Ok((sink.into_diagnostics(), summary))
    }

    /// Discovers all Rust source files to scan.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let pattern = format!("{}/**/*.rs", self.root.display());
        let mut files = Vec::new();

        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| AnalyzerError::Io(e.into()))?;

            // Check exclude patterns
            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            // Simple glob matching
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/target/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}
