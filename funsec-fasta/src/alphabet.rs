//! Residue alphabets as case-insensitive letter bitmasks.

use std::fmt;

/// A set of residue letters, stored as a 26-bit mask over `A..=Z`.
///
/// Membership is case-insensitive. Anything that is not an ASCII letter is
/// outside every alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    mask: u32,
}

impl Alphabet {
    /// The 20 standard amino acids plus `X` for an unknown residue.
    pub const PROTEIN: Self = Self::new("ACDEFGHIKLMNPQRSTVWYX");

    /// Build an alphabet from a string of letters. Non-letters are ignored.
    #[must_use]
    pub const fn new(letters: &str) -> Self {
        let bytes = letters.as_bytes();
        let mut mask = 0u32;
        let mut i = 0;
        while i < bytes.len() {
            let upper = bytes[i].to_ascii_uppercase();
            if upper.is_ascii_uppercase() {
                mask |= 1u32 << (upper - b'A');
            }
            i += 1;
        }
        Self { mask }
    }

    /// Whether `residue` (in either case) belongs to the alphabet.
    ///
    /// Case folding is ASCII only: a non-ASCII letter whose Unicode uppercase
    /// is an alphabet letter, such as `\u{0131}` (uppercase `I`), is not a
    /// member.
    #[inline]
    #[must_use]
    pub fn contains(self, residue: char) -> bool {
        if !residue.is_ascii_alphabetic() {
            return false;
        }
        let offset = u32::from(residue.to_ascii_uppercase()) - u32::from('A');
        self.mask & (1u32 << offset) != 0
    }

    /// Number of distinct letters.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.mask.count_ones()
    }

    /// Whether the alphabet has no letters.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::PROTEIN
    }
}

/// Letters in alphabetical order, uppercase.
impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in 'A'..='Z' {
            if self.contains(letter) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_alphabet_has_21_letters() {
        assert_eq!(Alphabet::PROTEIN.len(), 21);
        assert_eq!(Alphabet::PROTEIN.to_string(), "ACDEFGHIKLMNPQRSTVWXY");
    }

    #[test]
    fn test_protein_membership_is_case_insensitive() {
        for residue in "ACDEFGHIKLMNPQRSTVWYX".chars() {
            assert!(Alphabet::PROTEIN.contains(residue), "{residue}");
            assert!(
                Alphabet::PROTEIN.contains(residue.to_ascii_lowercase()),
                "{residue}"
            );
        }
    }

    #[test]
    fn test_protein_rejects_ambiguity_codes_and_symbols() {
        for residue in ['B', 'J', 'O', 'U', 'Z', 'z', '*', '-', '.', ' ', '\t', '1'] {
            assert!(!Alphabet::PROTEIN.contains(residue), "{residue}");
        }
    }

    #[test]
    fn test_non_ascii_is_never_a_member() {
        assert!(!Alphabet::PROTEIN.contains('\u{00c5}'));
        assert!(!Alphabet::PROTEIN.contains('\u{0391}'));
        // Dotless i uppercases to `I` but is not an ASCII letter.
        assert!(!Alphabet::PROTEIN.contains('\u{0131}'));
    }

    #[test]
    fn test_new_ignores_non_letters_and_duplicates() {
        let dna = Alphabet::new("acgt-ACGT*");
        assert_eq!(dna.len(), 4);
        assert_eq!(dna.to_string(), "ACGT");
        assert!(Alphabet::new("123").is_empty());
    }

    #[test]
    fn test_default_is_protein() {
        assert_eq!(Alphabet::default(), Alphabet::PROTEIN);
    }
}
