//! Validation report types.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{GENERIC_DIAGNOSTIC, ScanError, ValidationError};

/// How a validation run ended.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every line passed.
    Valid,
    /// A format rule was broken.
    Invalid,
    /// The input could not be read as text.
    Unreadable,
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
            Self::Unreadable => 2,
        }
    }
}

/// Result of a validation run.
///
/// Scanning stops at the first problem, so at most one of `validation_error`
/// and `scan_error` is set.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// The file that was validated.
    pub file: PathBuf,
    /// Number of lines read, including the one that failed.
    pub lines_scanned: usize,
    /// Number of accepted header lines.
    pub records: usize,
    /// Whether the whole file passed.
    pub ok: bool,
    /// The first format violation, if any.
    pub validation_error: Option<ValidationError>,
    /// Set when the input could not be read or decoded.
    pub scan_error: Option<ScanError>,
}

impl ValidationReport {
    pub(crate) fn new(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            lines_scanned: 0,
            records: 0,
            ok: true,
            validation_error: None,
            scan_error: None,
        }
    }

    pub(crate) fn reject(&mut self, error: ValidationError) {
        self.ok = false;
        self.validation_error = Some(error);
    }

    pub(crate) fn abort(&mut self, error: ScanError) {
        self.ok = false;
        self.scan_error = Some(error);
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.scan_error.is_some() {
            Outcome::Unreadable
        } else if self.validation_error.is_some() {
            Outcome::Invalid
        } else {
            Outcome::Valid
        }
    }

    /// The stdout token for a failed run; `None` when the file passed.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&'static str> {
        if self.scan_error.is_some() {
            return Some(GENERIC_DIAGNOSTIC);
        }
        self.validation_error.as_ref().map(|e| e.kind.diagnostic())
    }
}
