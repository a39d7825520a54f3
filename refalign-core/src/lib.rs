//! refalign Core Library
//!
//! Alphabet validation, pluggable scoring, exhaustive best-offset search and
//! batch alignment sessions for short queries against a reference sequence.

pub mod alphabet;
pub mod error;
pub mod io;
pub mod score;
pub mod search;
pub mod session;
pub mod types;

// Re-export commonly used types and functions
pub use error::{AlignError, InputKind, Result, SequenceRole};
pub use score::{MatchMismatchScorer, OverlapScorer, Scorer, ScorerFactory, ScorerKind};
pub use search::find_best;
pub use session::{AlignRequest, AlignmentSession, QuerySource, ReferenceSource};
pub use types::{AlignmentResult, Offset, Placement, Score};

/// Version information for the refalign core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
