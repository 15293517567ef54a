//! Reporting channel for finished diagnostics.

use crate::diagnostics::Diagnostic;

/// Accepts finished diagnostic records.
///
/// Constructing a [`Diagnostic`] is inert; a record only becomes
/// observable once it is handed to a sink. Submission is infallible by
/// contract, and sinks must accept records in the order given.
pub trait DiagnosticSink {
    /// Accepts one finished record.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that gathers every reported record.
#[derive(Debug, Default)]
pub struct CollectSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records reported so far, in submission order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the sink, yielding the reported records.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Sink that discards every record.
///
/// Useful when only the scan counters are of interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
