//! Sequence alphabet: {A, C, G, T} plus the `-` and `X` placeholders

use crate::error::{AlignError, Result, SequenceRole};

/// Every symbol a sequence may contain, uppercase only
pub const ALPHABET: &[u8; 6] = b"ACGT-X";

/// Placeholder symbols: present positionally, never a scored match
pub const WILDCARDS: &[u8; 2] = b"-X";

#[inline]
pub fn is_symbol(base: u8) -> bool {
    ALPHABET.contains(&base)
}

#[inline]
pub fn is_wildcard(base: u8) -> bool {
    WILDCARDS.contains(&base)
}

/// True iff `sequence` is non-empty and made only of alphabet symbols.
///
/// Case-sensitive: lowercase bases are rejected, so run [`normalize`] first.
pub fn is_valid(sequence: &str) -> bool {
    !sequence.is_empty() && sequence.bytes().all(is_symbol)
}

/// Uppercase ASCII letters; everything else is left untouched
pub fn normalize(sequence: &str) -> String {
    sequence.to_ascii_uppercase()
}

/// Check `sequence` and describe the first problem found
pub fn validate(sequence: &str, role: SequenceRole) -> Result<()> {
    if sequence.is_empty() {
        return Err(AlignError::invalid_sequence(role, "sequence is empty"));
    }

    if let Some((index, c)) = sequence
        .char_indices()
        .find(|&(_, c)| !c.is_ascii() || !is_symbol(c as u8))
    {
        return Err(AlignError::invalid_sequence(
            role,
            format!("unexpected character {:?} at offset {} in {:?}", c, index, sequence),
        ));
    }

    Ok(())
}
