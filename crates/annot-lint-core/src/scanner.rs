//! Annotation scanning over collected method declarations.
//!
//! A scan pass resolves each candidate to its symbol, flattens the
//! symbols' parameters into one sequence (candidates in collection
//! order, parameters in declaration order), and constructs one
//! informational diagnostic per parameter that carries the target
//! annotation. Candidates that fail to resolve are skipped, never
//! fatal.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collector::MethodDecl;
use crate::diagnostics::{Descriptor, Diagnostic, Location, Severity};
use crate::resolver::SymbolResolver;
use crate::sink::DiagnosticSink;
use crate::target::AnnotationTarget;

/// The informational finding for a parameter carrying the target
/// annotation.
pub const RANGE_ARGUMENT: Descriptor = Descriptor {
    id: "test",
    title: "Range argument",
    message_template: "Argument '{0}' has a '{1}' attribute",
    category: "Info",
    severity: Severity::Info,
    enabled_by_default: true,
};

/// Bookkeeping note for a candidate whose symbol could not be resolved.
pub const UNRESOLVED_METHOD: Descriptor = Descriptor {
    id: "unresolved-method",
    title: "Unresolved method",
    message_template: "Could not resolve method '{0}'; candidate skipped",
    category: "Info",
    severity: Severity::Note,
    enabled_by_default: true,
};

/// Whether constructed records are handed to the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportMode {
    /// Submit every constructed record to the sink.
    #[default]
    Emit,
    /// Construct and count records without submitting any.
    DryRun,
}

/// Options controlling a scan pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether constructed records reach the sink.
    pub report_mode: ReportMode,
    /// Emit a note-severity record for each candidate that fails to
    /// resolve.
    pub note_unresolved: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            report_mode: ReportMode::Emit,
            note_unresolved: true,
        }
    }
}

/// Counters describing one scan pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Candidates handed to the scanner.
    pub methods_seen: usize,
    /// Candidates that resolved to a symbol.
    pub methods_resolved: usize,
    /// Candidates skipped because resolution yielded nothing.
    pub methods_skipped: usize,
    /// Parameters classified, each exactly once.
    pub params_classified: usize,
    /// Parameters that matched the target annotation.
    pub matches: usize,
    /// Skip notes constructed for unresolved candidates.
    pub notes: usize,
    /// Records handed to the sink (zero in dry-run mode).
    pub reported: usize,
}

impl ScanSummary {
    /// Adds the counters from another pass.
    pub fn merge(&mut self, other: Self) {
        self.methods_seen += other.methods_seen;
        self.methods_resolved += other.methods_resolved;
        self.methods_skipped += other.methods_skipped;
        self.params_classified += other.params_classified;
        self.matches += other.matches;
        self.notes += other.notes;
        self.reported += other.reported;
    }
}

/// Scans resolved candidates for the target annotation.
///
/// The scanner holds no mutable state between passes: scanning the same
/// candidates twice yields identical records and counters.
#[derive(Debug, Clone)]
pub struct Scanner {
    target: AnnotationTarget,
    options: ScanOptions,
}

impl Scanner {
    /// Creates a scanner for `target` with default options.
    #[must_use]
    pub fn new(target: AnnotationTarget) -> Self {
        Self {
            target,
            options: ScanOptions::default(),
        }
    }

    /// Replaces the scan options.
    #[must_use]
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the target annotation.
    #[must_use]
    pub fn target(&self) -> &AnnotationTarget {
        &self.target
    }

    /// Runs one pass over `methods`.
    ///
    /// Every resolvable candidate has each of its parameters classified
    /// exactly once. A candidate whose resolution yields nothing is
    /// skipped (optionally with a note) and the pass continues with the
    /// remaining candidates.
    pub fn scan(
        &self,
        methods: &[MethodDecl<'_>],
        resolver: &dyn SymbolResolver,
        sink: &mut dyn DiagnosticSink,
    ) -> ScanSummary {
        let mut summary = ScanSummary {
            methods_seen: methods.len(),
            ..ScanSummary::default()
        };

        for decl in methods {
            let Some(symbol) = resolver.resolve(*decl) else {
                debug!("Skipping unresolved method: {}", decl.ident());
                summary.methods_skipped += 1;
                if self.options.note_unresolved {
                    summary.notes += 1;
                    // A failed resolution cannot say which file the node
                    // belongs to; the span still gives line and column.
                    let note = Diagnostic::new(
                        UNRESOLVED_METHOD,
                        Location::from_span(PathBuf::new(), decl.span()),
                    )
                    .with_arg(decl.ident().to_string());
                    self.deliver(note, &mut summary, sink);
                }
                continue;
            };
            summary.methods_resolved += 1;

            for param in &symbol.params {
                summary.params_classified += 1;
                if !param.has_annotation(|a| self.target.matches(a)) {
                    continue;
                }
                summary.matches += 1;
                let finding = Diagnostic::new(RANGE_ARGUMENT, param.location.clone())
                    .with_arg(param.name.clone())
                    .with_arg(self.target.name());
                self.deliver(finding, &mut summary, sink);
            }
        }

        debug!(
            "Scan pass complete: {} candidate(s), {} match(es), {} skipped",
            summary.methods_seen, summary.matches, summary.methods_skipped
        );
        summary
    }

    fn deliver(
        &self,
        diagnostic: Diagnostic,
        summary: &mut ScanSummary,
        sink: &mut dyn DiagnosticSink,
    ) {
        match self.options.report_mode {
            ReportMode::Emit => {
                summary.reported += 1;
                sink.report(diagnostic);
            }
            ReportMode::DryRun => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{MethodCollector, SynWalker, TreeWalker};
    use crate::context::FileContext;
    use crate::resolver::FileResolver;
    use crate::sink::CollectSink;
    use crate::target::MatchPolicy;
    use std::path::Path;

    fn make_ctx(content: &str) -> FileContext<'_> {
        FileContext {
            path: Path::new("test.rs"),
            content,
            relative_path: PathBuf::from("test.rs"),
        }
    }

    fn range_target() -> AnnotationTarget {
        AnnotationTarget::new("range", MatchPolicy::Name).unwrap()
    }

    fn scan_source(
        code: &str,
        target: AnnotationTarget,
        options: ScanOptions,
    ) -> (Vec<Diagnostic>, ScanSummary) {
        let file = syn::parse_file(code).expect("Failed to parse test code");
        let ctx = make_ctx(code);
        let resolver = FileResolver::new(&ctx, &file);
        let mut collector = MethodCollector::new();
        SynWalker.walk(&file, &mut collector);

        let scanner = Scanner::new(target).with_options(options);
        let mut sink = CollectSink::new();
        let summary = scanner.scan(collector.methods(), &resolver, &mut sink);
        (sink.into_diagnostics(), summary)
    }

    #[test]
    fn unannotated_parameters_yield_nothing() {
        let code = "fn f(x: i32) {}";
        let (diags, summary) = scan_source(code, range_target(), ScanOptions::default());
        assert!(diags.is_empty());
        assert_eq!(summary.params_classified, 1);
        assert_eq!(summary.matches, 0);
    }

    #[test]
    fn unrelated_annotation_does_not_match() {
        let code = "fn f(#[serde(default)] x: i32) {}";
        let (diags, summary) = scan_source(code, range_target(), ScanOptions::default());
        assert!(diags.is_empty());
        assert_eq!(summary.params_classified, 1);
    }

    #[test]
    fn annotated_parameter_yields_informational_record() {
        let code = "fn g(#[range(1, 10)] y: i32) {}";
        let (diags, summary) = scan_source(code, range_target(), ScanOptions::default());

        assert_eq!(diags.len(), 1);
        let d = &diags[0];
        assert_eq!(d.descriptor.id, "test");
        assert_eq!(d.descriptor.title, "Range argument");
        assert_eq!(d.descriptor.category, "Info");
        assert!(d.descriptor.enabled_by_default);
        assert_eq!(d.severity(), Severity::Info);
        assert_eq!(d.message(), "Argument 'y' has a 'range' attribute");
        assert_eq!(d.location.line, 1);
        assert_eq!(summary.matches, 1);
        assert_eq!(summary.reported, 1);
    }

    #[test]
    fn only_the_annotated_parameter_is_flagged() {
        let code = "fn h(a: i32, #[range(0, 5)] b: i32, c: i32) {}";
        let (diags, summary) = scan_source(code, range_target(), ScanOptions::default());

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].args[0], "b");
        assert_eq!(summary.params_classified, 3);
    }

    #[test]
    fn empty_input_scans_to_zero() {
        let (diags, summary) = scan_source("", range_target(), ScanOptions::default());
        assert!(diags.is_empty());
        assert_eq!(summary, ScanSummary::default());
    }

    #[test]
    fn flattening_preserves_candidate_then_parameter_order() {
        let code = r"
            fn m1(#[range(1, 2)] a: u8, #[range(1, 2)] b: u8) {}
            fn m2(#[range(1, 2)] c: u8) {}
        ";
        let (diags, _) = scan_source(code, range_target(), ScanOptions::default());

        let order: Vec<&str> = diags.iter().map(|d| d.args[0].as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn every_parameter_is_classified_exactly_once() {
        let code = r"
            fn p(a: u8, b: u8) {}
            fn q(#[range(0, 1)] c: u8) {}
            fn r() {}
        ";
        let (_, summary) = scan_source(code, range_target(), ScanOptions::default());
        assert_eq!(summary.methods_seen, 3);
        assert_eq!(summary.params_classified, 3);
        assert_eq!(summary.matches, 1);
    }

    #[test]
    fn second_message_argument_is_target_simple_name() {
        let code = r"
            use validators::range;
            fn f(#[range(0, 1)] x: u8) {}
        ";
        let target = AnnotationTarget::new("validators::range", MatchPolicy::Path).unwrap();
        let (diags, _) = scan_source(code, target, ScanOptions::default());

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].args, vec!["x".to_string(), "range".to_string()]);
        assert_eq!(diags[0].message(), "Argument 'x' has a 'range' attribute");
    }

    #[test]
    fn path_policy_ignores_unimported_simple_name() {
        let code = "fn f(#[range(0, 1)] x: u8) {}";
        let target = AnnotationTarget::new("validators::range", MatchPolicy::Path).unwrap();
        let (diags, summary) = scan_source(code, target, ScanOptions::default());

        assert!(diags.is_empty());
        assert_eq!(summary.params_classified, 1);
    }

    #[test]
    fn aliased_import_matches_under_name_policy() {
        // Name comparison follows the resolved identity, so the local
        // rename does not hide the annotation.
        let code = r"
            use validators::range as bounds;
            fn f(#[bounds(0, 5)] x: u8) {}
        ";
        let (diags, summary) = scan_source(code, range_target(), ScanOptions::default());

        assert_eq!(summary.matches, 1);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].args, vec!["x".to_string(), "range".to_string()]);
    }

    #[test]
    fn dry_run_constructs_without_submitting() {
        let code = "fn g(#[range(1, 10)] y: i32) {}";
        let options = ScanOptions {
            report_mode: ReportMode::DryRun,
            ..ScanOptions::default()
        };
        let (diags, summary) = scan_source(code, range_target(), options);

        assert!(diags.is_empty());
        assert_eq!(summary.matches, 1);
        assert_eq!(summary.reported, 0);
    }

    #[test]
    fn unresolved_candidate_is_skipped_with_note() {
        let own_code = "fn a1(#[range(1, 2)] x: i32) {} fn a2(#[range(1, 2)] z: i32) {}";
        let foreign_code = "fn b1(#[range(1, 2)] y: i32) {}";
        let own_file = syn::parse_file(own_code).expect("Failed to parse test code");
        let foreign_file = syn::parse_file(foreign_code).expect("Failed to parse test code");
        let ctx = make_ctx(own_code);
        let resolver = FileResolver::new(&ctx, &own_file);

        let mut own = MethodCollector::new();
        SynWalker.walk(&own_file, &mut own);
        let mut foreign = MethodCollector::new();
        SynWalker.walk(&foreign_file, &mut foreign);
        let candidates = vec![own.methods()[0], foreign.methods()[0], own.methods()[1]];

        let scanner = Scanner::new(range_target());
        let mut sink = CollectSink::new();
        let summary = scanner.scan(&candidates, &resolver, &mut sink);

        assert_eq!(summary.methods_seen, 3);
        assert_eq!(summary.methods_resolved, 2);
        assert_eq!(summary.methods_skipped, 1);
        assert_eq!(summary.notes, 1);
        assert_eq!(summary.matches, 2);
        assert_eq!(summary.reported, 3);

        let diags = sink.into_diagnostics();
        assert_eq!(diags[0].args[0], "x");
        assert_eq!(diags[1].descriptor.id, "unresolved-method");
        assert_eq!(diags[1].severity(), Severity::Note);
        assert_eq!(
            diags[1].message(),
            "Could not resolve method 'b1'; candidate skipped"
        );
        assert_eq!(diags[1].location.line, 1);
        assert_eq!(diags[1].location.column, 4);
        assert_eq!(diags[2].args[0], "z");
    }

    #[test]
    fn skip_note_can_be_disabled() {
        let own_code = "fn a1() {}";
        let foreign_code = "fn b1() {}";
        let own_file = syn::parse_file(own_code).expect("Failed to parse test code");
        let foreign_file = syn::parse_file(foreign_code).expect("Failed to parse test code");
        let ctx = make_ctx(own_code);
        let resolver = FileResolver::new(&ctx, &own_file);

        let mut foreign = MethodCollector::new();
        SynWalker.walk(&foreign_file, &mut foreign);

        let options = ScanOptions {
            note_unresolved: false,
            ..ScanOptions::default()
        };
        let scanner = Scanner::new(range_target()).with_options(options);
        let mut sink = CollectSink::new();
        let summary = scanner.scan(foreign.methods(), &resolver, &mut sink);

        assert_eq!(summary.methods_skipped, 1);
        assert_eq!(summary.notes, 0);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn repeated_scans_yield_identical_results() {
        let code = r"
            fn m1(#[range(1, 2)] a: u8) {}
            fn m2(b: u8, #[range(1, 2)] c: u8) {}
        ";
        let file = syn::parse_file(code).expect("Failed to parse test code");
        let ctx = make_ctx(code);
        let resolver = FileResolver::new(&ctx, &file);
        let mut collector = MethodCollector::new();
        SynWalker.walk(&file, &mut collector);
        let scanner = Scanner::new(range_target());

        let mut first_sink = CollectSink::new();
        let first = scanner.scan(collector.methods(), &resolver, &mut first_sink);
        let mut second_sink = CollectSink::new();
        let second = scanner.scan(collector.methods(), &resolver, &mut second_sink);

        assert_eq!(first, second);
        assert_eq!(first_sink.diagnostics(), second_sink.diagnostics());
    }

    #[test]
    fn summary_merge_adds_counters() {
        let mut left = ScanSummary {
            methods_seen: 2,
            methods_resolved: 2,
            params_classified: 3,
            matches: 1,
            reported: 1,
            ..ScanSummary::default()
        };
        let right = ScanSummary {
            methods_seen: 1,
            methods_skipped: 1,
            notes: 1,
            reported: 1,
            ..ScanSummary::default()
        };
        left.merge(right);

        assert_eq!(left.methods_seen, 3);
        assert_eq!(left.methods_resolved, 2);
        assert_eq!(left.methods_skipped, 1);
        assert_eq!(left.params_classified, 3);
        assert_eq!(left.reported, 2);
    }
}
