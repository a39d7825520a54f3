use serde::{Deserialize, Serialize};

/// Similarity score produced by a [`Scorer`](crate::score::Scorer)
pub type Score = i64;

/// Zero-based offset into the reference
pub type Offset = usize;

/// Winning offset of a best-position search and the score attained there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub position: Offset,
    pub score: Score,
}

impl Placement {
    pub fn new(position: Offset, score: Score) -> Self {
        Self { position, score }
    }
}

impl From<Placement> for (Offset, Score) {
    fn from(placement: Placement) -> Self {
        (placement.position, placement.score)
    }
}

/// Best alignment of one query against the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// Reference substring of `query.len()` bases starting at `position`
    pub matched_segment: String,
    pub query: String,
    pub position: Offset,
    pub score: Score,
}

impl AlignmentResult {
    pub fn new(matched_segment: String, query: String, position: Offset, score: Score) -> Self {
        Self {
            matched_segment,
            query,
            position,
            score,
        }
    }

    /// Build a result by slicing the matched segment out of `reference`
    pub fn from_placement(reference: &str, query: &str, placement: Placement) -> Self {
        let end = placement.position + query.len();
        Self::new(
            reference[placement.position..end].to_string(),
            query.to_string(),
            placement.position,
            placement.score,
        )
    }

    /// Exclusive end offset of the matched segment in the reference
    pub fn end(&self) -> Offset {
        self.position + self.query.len()
    }

    pub fn placement(&self) -> Placement {
        Placement::new(self.position, self.score)
    }
}
