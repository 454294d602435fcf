//! Error types for FASTA validation.

use std::path::PathBuf;

use serde::Serialize;

/// Diagnostic printed when the input cannot be read as text.
pub const GENERIC_DIAGNOSTIC: &str = "ERROR";

/// The kind of scan-level failure that prevented a file from being validated.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while opening or reading the file.
    IoError,
    /// A line is not valid UTF-8.
    InvalidEncoding,
    /// The file has no content at all.
    EmptyFile,
}

/// A scan-level error: the input could not be split into text lines.
///
/// These are distinct from `ValidationError`, which means the input was
/// readable but broke a format rule.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    pub(crate) fn new(file: PathBuf, kind: ScanErrorKind, message: String) -> Self {
        Self {
            file,
            kind,
            message,
        }
    }

    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}

/// The format rule a file broke.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    /// The file does not start with `>`.
    WrongFormat,
    /// A header line is longer than the configured maximum.
    HeaderTooLong,
    /// A header line contains a space.
    HeaderContainsSpace,
    /// A sequence line contains a residue outside the alphabet.
    InvalidResidue,
}

impl ValidationErrorKind {
    /// The fixed token printed on stdout for this rule.
    ///
    /// Downstream pipeline steps match on these exact strings.
    #[must_use]
    pub const fn diagnostic(self) -> &'static str {
        match self {
            Self::WrongFormat => GENERIC_DIAGNOSTIC,
            Self::HeaderTooLong => "ERROR1",
            Self::HeaderContainsSpace => "ERROR2",
            Self::InvalidResidue => "ERROR3",
        }
    }
}

/// The first format violation found in a file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationError {
    /// File path where the error was found
    pub file: PathBuf,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed), counted in characters
    pub column: usize,
    /// Which rule was broken
    pub kind: ValidationErrorKind,
    /// Human-readable error description
    pub message: String,
    /// The offending line, trailing whitespace stripped
    pub context: String,
}

impl ValidationError {
    /// Format the error for human-readable output.
    ///
    /// `{file}:{line}:{column}: {message} [{context}]`
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!(
            "{}:{}:{}: {} [{}]",
            self.file.display(),
            self.line,
            self.column,
            self.message,
            self.context
        )
    }
}
