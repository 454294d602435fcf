//! Output formatting for validation reports.
//!
//! `write_plain` is what the FunSec pipeline reads: the diagnostic token on a
//! failed run and nothing at all on success. `write_human` and `write_json`
//! add detail for people and for tooling.

use std::io::Write;

use crate::report::ValidationReport;

/// Write the bare diagnostic token, or nothing if the file passed.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_plain(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if let Some(token) = report.diagnostic() {
        writeln!(writer, "{token}")?;
    }
    Ok(())
}

/// Write the diagnostic token followed by the location of the problem.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    write_plain(report, writer)?;

    if let Some(scan_error) = &report.scan_error {
        writeln!(writer, "{}", scan_error.format_human_readable())?;
    } else if let Some(error) = &report.validation_error {
        writeln!(writer, "{}", error.format_human_readable())?;
    } else {
        writeln!(
            writer,
            "{}: OK ({} records, {} lines)",
            report.file.display(),
            report.records,
            report.lines_scanned
        )?;
    }
    Ok(())
}

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}
