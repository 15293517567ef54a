//! Check command implementation.

use annot_lint_core::{Analyzer, Config, MatchPolicy, ReportMode};
use anyhow::{Context, Result};
use std::path::Path;

use crate::config_resolver::{self, ConfigSource};
use crate::OutputFormat;

/// Command-line overrides applied on top of the resolved configuration.
pub struct Overrides {
    /// Annotation identity to search for.
    pub annotation: Option<String>,
    /// Identity comparison policy.
    pub match_policy: Option<MatchPolicy>,
    /// Construct diagnostics but report none of them.
    pub dry_run: bool,
}

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    overrides: Overrides,
    exclude: Vec<String>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let source = config_resolver::resolve(path, explicit_config);

    let mut config = match &source {
        ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always carry a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    // Fold flag overrides into the scan section so the usual
    // builder-over-config precedence applies.
    if let Some(annotation) = overrides.annotation {
        config.scan.annotation = annotation;
    }
    if let Some(policy) = overrides.match_policy {
        config.scan.match_policy = policy;
    }

    let mut builder = Analyzer::builder().root(path).config(config);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    if overrides.dry_run {
        builder = builder.report_mode(ReportMode::DryRun);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Scanning {:?} for '{}' annotations",
        path,
        analyzer.target()
    );

    let report = analyzer.analyze().context("Scan failed")?;

    super::output::print(&report, format)?;

    // Findings are informational; the exit code reflects only
    // operational failures.
    Ok(())
}
