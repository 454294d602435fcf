//! Configuration for FASTA validation.

use funsec_fasta::{Alphabet, MAX_HEADER_LENGTH};

/// Rule parameters applied to every line.
///
/// The defaults are the FunSec pipeline rules: headers of at most 21
/// characters and the 21-letter protein alphabet.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Maximum header length in characters, `>` included (default: 21).
    pub max_header_length: usize,
    /// Residues allowed on sequence lines, matched case-insensitively
    /// (default: `ACDEFGHIKLMNPQRSTVWYX`).
    pub alphabet: Alphabet,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_header_length: MAX_HEADER_LENGTH,
            alphabet: Alphabet::PROTEIN,
        }
    }
}
