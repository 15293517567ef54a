//! # annot-lint-core
//!
//! Core framework for scanning Rust sources for annotated function
//! parameters, based on `syn` AST analysis.
//!
//! The pipeline runs two phases per file, in strict sequence:
//!
//! 1. Collection: a [`TreeWalker`] drives the syntax walk and a
//!    [`MethodCollector`] records every method declaration it visits,
//!    in document order.
//! 2. Scanning: a [`Scanner`] resolves each candidate through a
//!    [`SymbolResolver`], flattens the parameters of the resolved
//!    symbols into one sequence, and constructs an informational
//!    [`Diagnostic`] for every parameter carrying the target
//!    annotation, delivering records to a [`DiagnosticSink`].
//!
//! The host seams are traits so the scan logic runs against any front
//! end: walking, resolution, and reporting can each be swapped without
//! touching the classification.
//!
//! ## Example
//!
//! ```ignore
//! use annot_lint_core::{Analyzer, AnnotationTarget, MatchPolicy};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .target(AnnotationTarget::new("validators::range", MatchPolicy::Path)?)
//!     .build()?;
//!
//! let report = analyzer.analyze()?;
//! println!("{} annotated parameter(s)", report.summary.matches);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod collector;
mod config;
mod context;
mod diagnostics;
mod resolver;
mod scanner;
mod sink;
mod symbol;
mod target;

/// Utility modules shared by the pipeline.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use collector::{MethodCollector, MethodDecl, SynWalker, TreeWalker};
pub use config::{AnalyzerConfig, Config, ConfigError, ScanConfig};
pub use context::FileContext;
pub use diagnostics::{
    Descriptor, Diagnostic, Location, RenderedDiagnostic, ScanReport, Severity,
};
pub use resolver::{FileResolver, SymbolResolver};
pub use scanner::{
    ReportMode, ScanOptions, ScanSummary, Scanner, RANGE_ARGUMENT, UNRESOLVED_METHOD,
};
pub use sink::{CollectSink, DiagnosticSink, NullSink};
pub use symbol::{Annotation, MethodSymbol, ParamSymbol};
pub use target::{AnnotationTarget, MatchPolicy, TargetError};
