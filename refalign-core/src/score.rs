//! Scoring strategies
//!
//! A [`Scorer`] compares a reference substring with a query of the same
//! length. The search engine only relies on the returned scores being
//! comparable, so any strategy honoring the length and emptiness checks can
//! be swapped in, including plain closures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::is_wildcard;
use crate::error::{AlignError, Result};
use crate::types::Score;

/// Trait for scoring strategies
pub trait Scorer {
    /// Score `reference` (a reference substring) against `query`.
    ///
    /// Implementations must fail with [`AlignError::LengthMismatch`] when the
    /// lengths differ and [`AlignError::EmptyInput`] when either is empty.
    fn score(&self, reference: &[u8], query: &[u8]) -> Result<Score>;

    /// Get the name/identifier of this scoring strategy
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> Scorer for F
where
    F: Fn(&[u8], &[u8]) -> Result<Score>,
{
    fn score(&self, reference: &[u8], query: &[u8]) -> Result<Score> {
        self(reference, query)
    }
}

/// Shared precondition of every built-in scorer
pub fn check_lengths(reference: &[u8], query: &[u8]) -> Result<()> {
    if reference.len() != query.len() {
        return Err(AlignError::LengthMismatch {
            left: reference.len(),
            right: query.len(),
        });
    }
    if reference.is_empty() {
        return Err(AlignError::EmptyInput);
    }
    Ok(())
}

/// +1 for every identical non-wildcard position, -1 otherwise.
///
/// Two wildcards facing each other still score -1: `X` and `-` mark unknown
/// or missing bases, never a verified match.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchMismatchScorer;

impl MatchMismatchScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for MatchMismatchScorer {
    fn score(&self, reference: &[u8], query: &[u8]) -> Result<Score> {
        check_lengths(reference, query)?;

        Ok(reference
            .iter()
            .zip(query)
            .map(|(&r, &q)| if r == q && !is_wildcard(r) { 1 } else { -1 })
            .sum())
    }

    fn name(&self) -> &'static str {
        "match-mismatch"
    }
}

/// Counts reference positions whose symbol occurs anywhere in the query
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapScorer;

impl OverlapScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for OverlapScorer {
    fn score(&self, reference: &[u8], query: &[u8]) -> Result<Score> {
        check_lengths(reference, query)?;

        let mut present = [false; 256];
        for &base in query {
            present[base as usize] = true;
        }

        Ok(reference.iter().filter(|&&base| present[base as usize]).count() as Score)
    }

    fn name(&self) -> &'static str {
        "overlap"
    }
}

/// Built-in strategies selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScorerKind {
    #[default]
    MatchMismatch,
    Overlap,
}

impl ScorerKind {
    pub fn all() -> &'static [ScorerKind] {
        &[ScorerKind::MatchMismatch, ScorerKind::Overlap]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerKind::MatchMismatch => "match-mismatch",
            ScorerKind::Overlap => "overlap",
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ScorerKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown scorer '{}'", s))
    }
}

/// Factory for creating scoring strategies
pub struct ScorerFactory;

impl ScorerFactory {
    pub fn create(kind: ScorerKind) -> Box<dyn Scorer> {
        match kind {
            ScorerKind::MatchMismatch => Box::new(MatchMismatchScorer::new()),
            ScorerKind::Overlap => Box::new(OverlapScorer::new()),
        }
    }

    pub fn available_scorers() -> Vec<&'static str> {
        ScorerKind::all().iter().map(ScorerKind::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(a: &str, b: &str) -> Result<Score> {
        MatchMismatchScorer.score(a.as_bytes(), b.as_bytes())
    }

    #[test]
    fn test_match_mismatch_scores() {
        let cases = [
            ("ACGT", "ACGT", 4),
            ("ACGT", "ACTT", 2),
            ("AAAA", "TTTT", -4),
            ("A", "A", 1),
            ("ACGT", "AGCT", 0),
            ("ATCG", "TAGC", -4),
            ("ACGT", "AXGT", 2),
            ("A-GT", "ACGT", 2),
            ("AX-T", "ACGT", 0),
        ];
        for (a, b, expected) in cases {
            assert_eq!(score(a, b).unwrap(), expected, "score({}, {})", a, b);
        }
    }

    #[test]
    fn test_wildcards_self_penalize() {
        assert_eq!(score("XX--", "XX--").unwrap(), -4);
        assert_eq!(score("AX", "AX").unwrap(), 0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = score("ACGT", "ACG").unwrap_err();
        assert!(matches!(err, AlignError::LengthMismatch { left: 4, right: 3 }));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(score("", "").unwrap_err(), AlignError::EmptyInput));
        // Unequal lengths are reported before emptiness
        assert!(matches!(score("ACT", "").unwrap_err(), AlignError::LengthMismatch { .. }));
    }

    #[test]
    fn test_overlap_scorer() {
        let scorer = OverlapScorer::new();
        assert_eq!(scorer.score(b"ACGT", b"ACGX").unwrap(), 3);
        assert_eq!(scorer.score(b"ACGX", b"ACGT").unwrap(), 3);
        assert_eq!(scorer.score(b"AAAA", b"TTTA").unwrap(), 4);
        assert!(scorer.score(b"AC", b"A").is_err());
    }

    #[test]
    fn test_closure_is_a_scorer() {
        let hamming_matches = |a: &[u8], b: &[u8]| -> Result<Score> {
            check_lengths(a, b)?;
            Ok(a.iter().zip(b).filter(|(x, y)| x == y).count() as Score)
        };
        assert_eq!(hamming_matches.score(b"XX", b"XX").unwrap(), 2);
        assert_eq!(Scorer::name(&hamming_matches), "custom");
    }

    #[test]
    fn test_factory_and_kind_parsing() {
        assert_eq!("overlap".parse::<ScorerKind>().unwrap(), ScorerKind::Overlap);
        assert_eq!("Match-Mismatch".parse::<ScorerKind>().unwrap(), ScorerKind::MatchMismatch);
        assert!("blosum62".parse::<ScorerKind>().is_err());

        for kind in ScorerKind::all() {
            assert_eq!(ScorerFactory::create(*kind).name(), kind.as_str());
        }
        assert_eq!(ScorerFactory::available_scorers(), vec!["match-mismatch", "overlap"]);
    }
}
