//! Shared output formatting for scan reports.

use annot_lint_core::{ScanReport, Severity};
use anyhow::Result;

use crate::OutputFormat;

/// Print a scan report in the specified format.
pub fn print(report: &ScanReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &ScanReport) {
    for diagnostic in &report.diagnostics {
        let severity_indicator = match diagnostic.severity() {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
            Severity::Note => "\x1b[36mnote\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            diagnostic.descriptor.id,
            diagnostic.descriptor.title,
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
        );
        println!("  {}: {}", severity_indicator, diagnostic.message());
        println!();
    }

    let infos = report.count(Severity::Info);
    let notes = report.count(Severity::Note);

    let summary_color = if infos > 0 { "\x1b[34m" } else { "\x1b[32m" };

    println!(
        "{}Found {} info(s), {} note(s) in {} file(s)\x1b[0m",
        summary_color, infos, notes, report.files_checked
    );
}

fn print_json(report: &ScanReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &ScanReport) {
    for diagnostic in &report.diagnostics {
        println!("{diagnostic}");
    }
}
