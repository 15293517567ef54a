//! Core types for diagnostics and scan reports.

use miette::SourceSpan;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scanner::ScanSummary;

/// Severity level for reported diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Bookkeeping note about the scan itself (e.g. a skipped candidate).
    Note,
    /// Informational finding, never fails a scan.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Note => write!(f, "note"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location from span information.
    #[must_use]
    pub fn from_span(file: PathBuf, span: proc_macro2::Span) -> Self {
        let start = span.start();
        Self {
            file,
            line: start.line,
            column: start.column + 1,
            offset: 0, // Calculated from content via FileContext
            length: 0,
        }
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// Identity and presentation of one diagnostic rule.
///
/// Descriptors are declared as constants and shared by every record the
/// rule produces; see [`crate::scanner::RANGE_ARGUMENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// Stable rule identifier (e.g. "test").
    pub id: &'static str,
    /// Short human-readable title.
    pub title: &'static str,
    /// Message template with positional `{0}`, `{1}` placeholders.
    pub message_template: &'static str,
    /// Grouping category for reporting tools.
    pub category: &'static str,
    /// Severity assigned to every record of this rule.
    pub severity: Severity,
    /// Whether the rule is enabled by default.
    pub enabled_by_default: bool,
}

/// One finding produced by a scan.
///
/// A record is inert data: constructing one has no observable effect
/// until it is handed to a [`crate::sink::DiagnosticSink`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// The rule this record belongs to.
    pub descriptor: Descriptor,
    /// Primary location of the finding.
    pub location: Location,
    /// Positional arguments substituted into the message template.
    pub args: Vec<String>,
}

impl Diagnostic {
    /// Creates a record with no message arguments.
    #[must_use]
    pub fn new(descriptor: Descriptor, location: Location) -> Self {
        Self {
            descriptor,
            location,
            args: Vec::new(),
        }
    }

    /// Appends a message argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Severity of this record, taken from its descriptor.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.descriptor.severity
    }

    /// Renders the message template with this record's arguments.
    #[must_use]
    pub fn message(&self) -> String {
        interpolate(self.descriptor.message_template, &self.args)
    }

    /// Formats the record for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.descriptor.id,
            self.descriptor.title,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity(), self.message());
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity(),
            self.descriptor.id,
            self.message()
        )
    }
}

/// Substitutes positional `{0}`, `{1}`, ... placeholders in a template.
///
/// Placeholders without a matching argument are kept verbatim, as is any
/// brace sequence that is not a numeric placeholder.
fn interpolate(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('}') {
            Some(close) => {
                let key = &tail[1..close];
                match key.parse::<usize>().ok().and_then(|i| args.get(i)) {
                    Some(arg) => out.push_str(arg),
                    None => out.push_str(&tail[..=close]),
                }
                rest = &tail[close + 1..];
            }
            None => {
                out.push_str(tail);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Converts a Diagnostic to a miette diagnostic for rich error display.
#[allow(dead_code)] // Public API for miette integration
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
pub struct RenderedDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Diagnostic> for RenderedDiagnostic {
    fn from(d: &Diagnostic) -> Self {
        Self {
            message: format!("[{}] {}", d.descriptor.id, d.message()),
            span: SourceSpan::from((d.location.offset, d.location.length)),
            label_message: d.descriptor.title.to_string(),
        }
    }
}

/// Result of scanning a file tree.
#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    /// All diagnostics reported, sorted by file, line, and column.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files scanned.
    pub files_checked: usize,
    /// Counters aggregated over every scanned file.
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no diagnostics were reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Counts reported diagnostics of the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    /// Returns diagnostics filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .collect()
    }
}
