//! Exhaustive best-offset search of a query along a reference

use crate::error::{AlignError, Result};
use crate::score::Scorer;
use crate::types::Placement;

/// Slide `query` over every offset of `reference` and keep the best score.
///
/// The reference must be strictly longer than the query. Every offset in
/// `0..=reference.len() - query.len()` is scored, with no early exit, so
/// scorers need not be monotonic. When several offsets share the maximum
/// score the smallest one wins: offsets are visited from the highest down
/// to zero and a later score replaces the running best on `>=`.
pub fn find_best<S>(reference: &[u8], query: &[u8], scorer: &S) -> Result<Placement>
where
    S: Scorer + ?Sized,
{
    if reference.len() <= query.len() {
        return Err(AlignError::LengthOrdering {
            reference: reference.len(),
            query: query.len(),
        });
    }

    let last = reference.len() - query.len();
    let mut best = Placement::new(last, scorer.score(&reference[last..], query)?);

    for offset in (0..last).rev() {
        let score = scorer.score(&reference[offset..offset + query.len()], query)?;
        if score >= best.score {
            best = Placement::new(offset, score);
        }
    }

    Ok(best)
}
