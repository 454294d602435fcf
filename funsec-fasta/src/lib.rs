//! FASTA line rules for FunSec protein inputs.
//!
//! This crate holds the line-level rules shared by the validator: header
//! detection, the header length and spacing rule, and residue membership in
//! an [`Alphabet`]. It does no I/O.

mod alphabet;

pub use alphabet::Alphabet;

use thiserror::Error;

/// The character that opens every header line.
pub const HEADER_MARKER: char = '>';

/// Maximum header length in characters, marker included.
pub const MAX_HEADER_LENGTH: usize = 21;

/// A header line that breaks the header rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The header has more characters than allowed.
    #[error("header is {length} characters long, maximum is {max}")]
    TooLong {
        /// Header length in characters, marker included.
        length: usize,
        /// The configured maximum.
        max: usize,
    },

    /// The header contains a space.
    #[error("header contains a space at column {column}")]
    ContainsSpace {
        /// 1-based column of the first space.
        column: usize,
    },
}

/// A sequence line containing a residue outside the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("residue '{residue}' at column {column} is not in the alphabet")]
pub struct ResidueError {
    /// 1-based column of the offending character.
    pub column: usize,
    /// The offending character, as written.
    pub residue: char,
}

/// Strip trailing whitespace, line endings included.
#[inline]
#[must_use]
pub fn strip_line_end(line: &str) -> &str {
    line.trim_end()
}

/// Whether the line opens a record.
#[inline]
#[must_use]
pub fn is_header(line: &str) -> bool {
    line.starts_with(HEADER_MARKER)
}

/// Check a header line against the length and spacing rule.
///
/// Length is checked before spacing, so an over-long header with spaces
/// reports [`HeaderError::TooLong`].
///
/// # Errors
/// Returns the first rule the header breaks.
pub fn check_header(line: &str, max_length: usize) -> Result<(), HeaderError> {
    let length = line.chars().count();
    if length > max_length {
        return Err(HeaderError::TooLong {
            length,
            max: max_length,
        });
    }
    if let Some(idx) = line.chars().position(|c| c == ' ') {
        return Err(HeaderError::ContainsSpace { column: idx + 1 });
    }
    Ok(())
}

/// Check that every character of a sequence line is in `alphabet`.
///
/// An empty line has no residues and passes.
///
/// # Errors
/// Returns the first character outside the alphabet.
pub fn check_sequence(line: &str, alphabet: Alphabet) -> Result<(), ResidueError> {
    match line
        .chars()
        .enumerate()
        .find(|&(_, residue)| !alphabet.contains(residue))
    {
        Some((idx, residue)) => Err(ResidueError {
            column: idx + 1,
            residue,
        }),
        None => Ok(()),
    }
}
