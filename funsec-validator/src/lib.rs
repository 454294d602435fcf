//! # funsec-validator
//!
//! FASTA input gate for the FunSec secretome prediction pipeline.
//!
//! A file passes when it starts with `>`, every header line is at most 21
//! characters long with no spaces, and every sequence line uses only the
//! protein alphabet `ACDEFGHIKLMNPQRSTVWYX` (in either case). Scanning stops
//! at the first problem.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use funsec_validator::{validate_file, ValidationConfig};
//!
//! let report = validate_file(Path::new("proteins.fasta"), &ValidationConfig::default());
//! println!("Records: {}", report.records);
//! println!("OK: {}", report.ok);
//! if let Some(token) = report.diagnostic() {
//!     println!("{token}");
//! }
//! ```

mod config;
mod error;
pub mod output;
mod report;
mod strategy;

pub use config::ValidationConfig;
pub use error::{
    GENERIC_DIAGNOSTIC, ScanError, ScanErrorKind, ValidationError, ValidationErrorKind,
};
pub use report::{Outcome, ValidationReport};

use std::io::BufRead;
use std::path::Path;

use funsec_fasta::{HEADER_MARKER, HeaderError, ResidueError};
use tracing::{debug, warn};

use strategy::fs::{LineRead, open_file, read_line};

/// Validate a FASTA file on disk.
///
/// This is the primary public API. Failures to open or decode the file are
/// reported in `report.scan_error`, never as a panic or an `Err`.
#[must_use]
pub fn validate_file(path: &Path, config: &ValidationConfig) -> ValidationReport {
    match open_file(path) {
        Ok(reader) => validate_reader(reader, path, config),
        Err(scan_error) => {
            warn!(file = %path.display(), "{}", scan_error.message);
            let mut report = ValidationReport::new(path);
            report.abort(scan_error);
            report
        }
    }
}

/// Validate FASTA text from any buffered reader.
///
/// `file` is only used to label errors and the report.
#[must_use]
pub fn validate_reader<R: BufRead>(
    mut reader: R,
    file: &Path,
    config: &ValidationConfig,
) -> ValidationReport {
    debug!(file = %file.display(), "scanning FASTA input");
    let mut report = ValidationReport::new(file);
    let mut buffer = Vec::new();

    loop {
        let line_no = report.lines_scanned + 1;
        let raw = match read_line(&mut reader, &mut buffer, file, line_no) {
            LineRead::Line(raw) => raw,
            LineRead::Eof => break,
            LineRead::Err(scan_error) => {
                warn!(file = %file.display(), "{}", scan_error.message);
                report.abort(scan_error);
                return report;
            }
        };
        report.lines_scanned = line_no;

        let line = funsec_fasta::strip_line_end(raw);
        if let Some(error) = check_line(line, line_no, file, config) {
            debug!(
                file = %file.display(),
                line = line_no,
                column = error.column,
                "{}",
                error.message
            );
            report.reject(error);
            return report;
        }
        if funsec_fasta::is_header(line) {
            report.records += 1;
        }
    }

    if report.lines_scanned == 0 {
        let scan_error = ScanError::new(
            file.to_owned(),
            ScanErrorKind::EmptyFile,
            "File is empty".to_owned(),
        );
        warn!(file = %file.display(), "{}", scan_error.message);
        report.abort(scan_error);
        return report;
    }

    debug!(
        file = %file.display(),
        lines = report.lines_scanned,
        records = report.records,
        "FASTA input is valid"
    );
    report
}

/// Apply the rule for one stripped line; the first line must also be a header.
fn check_line(
    line: &str,
    line_no: usize,
    file: &Path,
    config: &ValidationConfig,
) -> Option<ValidationError> {
    let violation =
        |kind: ValidationErrorKind, column: usize, message: String| ValidationError {
            file: file.to_owned(),
            line: line_no,
            column,
            kind,
            message,
            context: line.to_owned(),
        };

    if line_no == 1 && !funsec_fasta::is_header(line) {
        return Some(violation(
            ValidationErrorKind::WrongFormat,
            1,
            format!("File does not start with '{HEADER_MARKER}'"),
        ));
    }

    if funsec_fasta::is_header(line) {
        return funsec_fasta::check_header(line, config.max_header_length)
            .err()
            .map(|e: HeaderError| {
                let (kind, column) = match e {
                    HeaderError::TooLong { max, .. } => {
                        (ValidationErrorKind::HeaderTooLong, max + 1)
                    }
                    HeaderError::ContainsSpace { column } => {
                        (ValidationErrorKind::HeaderContainsSpace, column)
                    }
                };
                violation(kind, column, e.to_string())
            });
    }

    funsec_fasta::check_sequence(line, config.alphabet)
        .err()
        .map(|e: ResidueError| {
            violation(ValidationErrorKind::InvalidResidue, e.column, e.to_string())
        })
}
