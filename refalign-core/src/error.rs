//! Error types for refalign-core

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which input a sequence was supplied as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceRole {
    Reference,
    /// Zero-based index of the query within its batch
    Query(usize),
}

impl fmt::Display for SequenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceRole::Reference => write!(f, "reference sequence"),
            SequenceRole::Query(index) => write!(f, "query sequence #{}", index),
        }
    }
}

/// Input kinds that may be missing when a session resolves its sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Reference,
    Queries,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Reference => write!(f, "no reference available"),
            InputKind::Queries => write!(f, "no queries available"),
        }
    }
}

/// Errors that can occur while validating, scoring or aligning sequences
#[derive(Debug, Error)]
pub enum AlignError {
    #[error("Invalid {role}: {detail}")]
    InvalidSequence { role: SequenceRole, detail: String },

    #[error("Length mismatch: cannot score sequences of length {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Cannot score an empty sequence")]
    EmptyInput,

    #[error("Reference length ({reference}) must be greater than query length ({query})")]
    LengthOrdering { reference: usize, query: usize },

    #[error("Missing input: {0}")]
    MissingInput(InputKind),

    #[error("File not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report error: {0}")]
    Report(String),
}

impl AlignError {
    pub fn invalid_sequence<S: Into<String>>(role: SequenceRole, detail: S) -> Self {
        Self::InvalidSequence { role, detail: detail.into() }
    }

    /// Map an IO failure on `path`, keeping "not found" distinct from other failures
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ResourceNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl From<serde_json::Error> for AlignError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(format!("JSON serialization error: {}", err))
    }
}

/// Result type for refalign-core operations
pub type Result<T, E = AlignError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        let err = AlignError::invalid_sequence(SequenceRole::Query(2), "unexpected character 'B'");
        assert_eq!(err.to_string(), "Invalid query sequence #2: unexpected character 'B'");

        let err = AlignError::invalid_sequence(SequenceRole::Reference, "sequence is empty");
        assert_eq!(err.to_string(), "Invalid reference sequence: sequence is empty");
    }

    #[test]
    fn test_missing_input_display() {
        let err = AlignError::MissingInput(InputKind::Queries);
        assert_eq!(err.to_string(), "Missing input: no queries available");
    }

    #[test]
    fn test_io_error_not_found_maps_to_resource() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AlignError::from_io("missing.txt", io_err);
        assert!(matches!(err, AlignError::ResourceNotFound { .. }));
        assert_eq!(err.to_string(), "File not found: missing.txt");
    }

    #[test]
    fn test_io_error_other_kind() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AlignError::from_io("locked.txt", io_err);
        assert!(matches!(err, AlignError::Io { .. }));
    }
}
