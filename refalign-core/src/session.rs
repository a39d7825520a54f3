//! Alignment sessions
//!
//! An [`AlignmentSession`] owns the current reference and query batch.
//! Each run resolves its inputs with a fixed precedence (explicit source,
//! then the stored value, then an error), validates them, stores them as the
//! new session state and searches every query in input order.
//!
//! A session is single-owner: all mutation goes through `&mut self`, so
//! sharing one between threads needs external synchronization.

use std::path::PathBuf;

use crate::alphabet::{normalize, validate};
use crate::error::{AlignError, InputKind, Result, SequenceRole};
use crate::io::sequence::{read_queries, read_reference};
use crate::score::{MatchMismatchScorer, Scorer};
use crate::search::find_best;
use crate::types::AlignmentResult;

/// Where a run takes its reference from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    Inline(String),
    File(PathBuf),
}

/// Where a run takes its query batch from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    Inline(Vec<String>),
    File(PathBuf),
}

/// Explicit inputs for one run; anything left unset falls back to the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignRequest {
    pub reference: Option<ReferenceSource>,
    pub queries: Option<QuerySource>,
}

impl AlignRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference<S: Into<String>>(mut self, reference: S) -> Self {
        self.reference = Some(ReferenceSource::Inline(reference.into()));
        self
    }

    pub fn with_reference_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.reference = Some(ReferenceSource::File(path.into()));
        self
    }

    pub fn with_queries<I, S>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queries = Some(QuerySource::Inline(queries.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_query_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.queries = Some(QuerySource::File(path.into()));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentSession {
    reference: Option<String>,
    queries: Option<Vec<String>>,
}

fn normalize_queries<I, S>(queries: I, first_index: usize) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    queries
        .into_iter()
        .enumerate()
        .map(|(i, query)| -> Result<String> {
            let query = normalize(query.as_ref());
            validate(&query, SequenceRole::Query(first_index + i))?;
            Ok(query)
        })
        .collect()
}

fn normalize_reference(reference: &str) -> Result<String> {
    let reference = normalize(reference);
    validate(&reference, SequenceRole::Reference)?;
    Ok(reference)
}

impl AlignmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with both inputs already set
    pub fn with_inputs<R, I, S>(reference: R, queries: I) -> Result<Self>
    where
        R: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut session = Self::new();
        session.set_reference(reference)?;
        session.set_queries(queries)?;
        Ok(session)
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn queries(&self) -> Option<&[String]> {
        self.queries.as_deref()
    }

    /// Replace the stored reference; state is untouched on error
    pub fn set_reference<R: AsRef<str>>(&mut self, reference: R) -> Result<()> {
        self.reference = Some(normalize_reference(reference.as_ref())?);
        Ok(())
    }

    /// Replace the stored query batch; state is untouched on error
    pub fn set_queries<I, S>(&mut self, queries: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.queries = Some(normalize_queries(queries, 0)?);
        Ok(())
    }

    /// Append to the stored query batch, creating it if needed
    pub fn extend_queries<I, S>(&mut self, queries: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stored = self.queries.as_ref().map_or(0, Vec::len);
        let added = normalize_queries(queries, stored)?;
        self.queries.get_or_insert_with(Vec::new).extend(added);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.reference = None;
        self.queries = None;
    }

    fn resolve_reference(&self, source: Option<ReferenceSource>) -> Result<String> {
        match source {
            Some(ReferenceSource::Inline(reference)) => Ok(reference),
            Some(ReferenceSource::File(path)) => {
                log::info!("Loading reference sequence from {}", path.display());
                read_reference(path)
            }
            None => self
                .reference
                .clone()
                .ok_or(AlignError::MissingInput(InputKind::Reference)),
        }
    }

    fn resolve_queries(&self, source: Option<QuerySource>) -> Result<Vec<String>> {
        match source {
            Some(QuerySource::Inline(queries)) => Ok(queries),
            Some(QuerySource::File(path)) => {
                log::info!("Loading queries from {}", path.display());
                read_queries(path)
            }
            None => self
                .queries
                .clone()
                .ok_or(AlignError::MissingInput(InputKind::Queries)),
        }
    }

    /// Align with the default match/mismatch scorer
    pub fn align(&mut self, request: AlignRequest) -> Result<Vec<AlignmentResult>> {
        self.align_all(request, &MatchMismatchScorer)
    }

    /// Resolve and validate the request's inputs, store them, then align
    /// every query in input order.
    ///
    /// A single invalid sequence aborts the whole run before any search and
    /// leaves the session unchanged.
    pub fn align_all<S>(&mut self, request: AlignRequest, scorer: &S) -> Result<Vec<AlignmentResult>>
    where
        S: Scorer + ?Sized,
    {
        let reference = self.resolve_reference(request.reference)?;
        let queries = self.resolve_queries(request.queries)?;

        let reference = normalize_reference(&reference)?;
        let queries = normalize_queries(queries, 0)?;

        self.reference = Some(reference);
        self.queries = Some(queries);

        self.align_stored(scorer)
    }

    /// Align the stored batch against the stored reference without changing either
    pub fn align_stored<S>(&self, scorer: &S) -> Result<Vec<AlignmentResult>>
    where
        S: Scorer + ?Sized,
    {
        let reference = self
            .reference
            .as_deref()
            .ok_or(AlignError::MissingInput(InputKind::Reference))?;
        let queries = self
            .queries
            .as_deref()
            .ok_or(AlignError::MissingInput(InputKind::Queries))?;

        log::info!(
            "Aligning {} queries against a {} base reference with the {} scorer",
            queries.len(),
            reference.len(),
            scorer.name()
        );

        queries
            .iter()
            .map(|query| -> Result<AlignmentResult> {
                let placement = find_best(reference.as_bytes(), query.as_bytes(), scorer)?;
                log::debug!(
                    "Query {} placed at offset {} with score {}",
                    query,
                    placement.position,
                    placement.score
                );
                Ok(AlignmentResult::from_placement(reference, query, placement))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::OverlapScorer;
    use crate::types::Score;

    fn tuples(results: &[AlignmentResult]) -> Vec<(&str, &str, usize, Score)> {
        results
            .iter()
            .map(|r| (r.matched_segment.as_str(), r.query.as_str(), r.position, r.score))
            .collect()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = AlignmentSession::new();
        assert!(session.reference().is_none());
        assert!(session.queries().is_none());
    }

    #[test]
    fn test_align_inline_inputs() {
        let mut session = AlignmentSession::new();
        let results = session
            .align(AlignRequest::new().with_reference("ACGTACGTACGT").with_queries(["ACGT", "TGCA"]))
            .unwrap();

        assert_eq!(
            tuples(&results),
            vec![("ACGT", "ACGT", 0, 4), ("CGTA", "TGCA", 1, 0)]
        );
        assert_eq!(session.reference(), Some("ACGTACGTACGT"));
        assert_eq!(session.queries().unwrap(), ["ACGT", "TGCA"]);
    }

    #[test]
    fn test_direct_input_cases() {
        let cases = [
            ("AT-TATATATAT", "ATAT", ("ATAT", "ATAT", 4, 4)),
            ("GCATG-ATGXAT", "ATGC", ("ATG-", "ATGC", 2, 2)),
        ];
        for (reference, query, expected) in cases {
            let results = AlignmentSession::new()
                .align(AlignRequest::new().with_reference(reference).with_queries([query]))
                .unwrap();
            assert_eq!(tuples(&results), vec![expected]);
        }
    }

    #[test]
    fn test_inputs_are_uppercased() {
        let mut session = AlignmentSession::new();
        let results = session
            .align(AlignRequest::new().with_reference("acgtacgt").with_queries(["cgta"]))
            .unwrap();
        assert_eq!(tuples(&results), vec![("CGTA", "CGTA", 1, 4)]);
        assert_eq!(session.reference(), Some("ACGTACGT"));
    }

    #[test]
    fn test_setters_then_stored_run() {
        let mut session = AlignmentSession::new();
        session.set_reference("ACGTACGTACGT").unwrap();
        session.set_queries(["ACGT", "TGCA"]).unwrap();

        let results = session.align(AlignRequest::new()).unwrap();
        assert_eq!(
            tuples(&results),
            vec![("ACGT", "ACGT", 0, 4), ("CGTA", "TGCA", 1, 0)]
        );
    }

    #[test]
    fn test_explicit_reference_overrides_stored() {
        let mut session = AlignmentSession::with_inputs("AAAAAAAA", ["ACGT"]).unwrap();
        let results = session
            .align(AlignRequest::new().with_reference("TTACGTTT"))
            .unwrap();
        assert_eq!(tuples(&results), vec![("ACGT", "ACGT", 2, 4)]);
        assert_eq!(session.reference(), Some("TTACGTTT"));
    }

    #[test]
    fn test_missing_inputs() {
        let err = AlignmentSession::new()
            .align(AlignRequest::new().with_queries(["ACGT"]))
            .unwrap_err();
        assert!(matches!(err, AlignError::MissingInput(InputKind::Reference)));

        let err = AlignmentSession::new()
            .align(AlignRequest::new().with_reference("ACGTACGTACGT"))
            .unwrap_err();
        assert!(matches!(err, AlignError::MissingInput(InputKind::Queries)));
    }

    #[test]
    fn test_invalid_reference() {
        let err = AlignmentSession::new()
            .align(AlignRequest::new().with_reference("123").with_queries(["ACGT"]))
            .unwrap_err();
        assert!(matches!(
            err,
            AlignError::InvalidSequence { role: SequenceRole::Reference, .. }
        ));
    }

    #[test]
    fn test_invalid_query_aborts_batch_and_keeps_state() {
        let mut session = AlignmentSession::with_inputs("GGGGGGGG", ["GGG"]).unwrap();
        let err = session
            .align(AlignRequest::new().with_reference("ACGTACGTACGT").with_queries(["ACGT", "123"]))
            .unwrap_err();

        assert!(matches!(
            err,
            AlignError::InvalidSequence { role: SequenceRole::Query(1), .. }
        ));
        assert_eq!(session.reference(), Some("GGGGGGGG"));
        assert_eq!(session.queries().unwrap(), ["GGG"]);
    }

    #[test]
    fn test_setters_reject_invalid_input() {
        let mut session = AlignmentSession::new();
        assert!(session.set_reference("123").is_err());
        assert!(session.set_reference("").is_err());
        assert!(session.set_queries(["ACGT", "123"]).is_err());
        assert!(session.reference().is_none());
        assert!(session.queries().is_none());
    }

    #[test]
    fn test_extend_queries_indexes_new_entries() {
        let mut session = AlignmentSession::new();
        session.set_queries(["ACGT"]).unwrap();

        let err = session.extend_queries(["TTT", "B"]).unwrap_err();
        assert!(matches!(
            err,
            AlignError::InvalidSequence { role: SequenceRole::Query(2), .. }
        ));

        session.extend_queries(["ttt"]).unwrap();
        assert_eq!(session.queries().unwrap(), ["ACGT", "TTT"]);
    }

    #[test]
    fn test_query_as_long_as_reference() {
        let mut session = AlignmentSession::new();
        let err = session
            .align(AlignRequest::new().with_reference("ACGT").with_queries(["ACGT"]))
            .unwrap_err();
        assert!(matches!(err, AlignError::LengthOrdering { .. }));

        // Validated inputs are stored even though the search failed
        assert_eq!(session.reference(), Some("ACGT"));
        assert_eq!(session.queries().unwrap(), ["ACGT"]);
    }

    #[test]
    fn test_custom_scorer() {
        let mut session = AlignmentSession::new();
        session.set_reference("ACGXACGXACGX").unwrap();

        let results = session
            .align_all(AlignRequest::new().with_queries(["ACGT"]), &OverlapScorer)
            .unwrap();
        assert_eq!(tuples(&results), vec![("ACGX", "ACGT", 0, 3)]);
    }

    #[test]
    fn test_stored_run_is_idempotent() {
        let session = AlignmentSession::with_inputs("GATCGTGGCTCTAGA", ["GATC", "GGCT", "CTAG"]).unwrap();
        let first = session.align_stored(&MatchMismatchScorer).unwrap();
        let second = session.align_stored(&MatchMismatchScorer).unwrap();
        assert_eq!(first, second);
    }
}
