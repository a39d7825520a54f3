//! Error handling for the refalign CLI

use refalign_core::{AlignError, InputKind};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for refalign CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("{message}")]
    InvalidSequence { message: String },

    #[error("Missing input: {message}")]
    MissingInput { kind: InputKind, message: String },

    #[error("Alignment error: {message}")]
    Alignment { message: String },

    #[error("Report error: {message}")]
    Report { message: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn alignment<S: Into<String>>(message: S) -> Self {
        Self::Alignment { message: message.into() }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into() }
    }
}

impl From<AlignError> for CliError {
    fn from(err: AlignError) -> Self {
        match err {
            AlignError::ResourceNotFound { path } => Self::file_not_found(path),
            AlignError::Io { .. } => Self::io(err.to_string()),
            AlignError::InvalidSequence { .. } => Self::InvalidSequence { message: err.to_string() },
            AlignError::MissingInput(kind) => Self::MissingInput {
                kind,
                message: kind.to_string(),
            },
            AlignError::Report(message) => Self::Report { message },
            AlignError::LengthMismatch { .. }
            | AlignError::EmptyInput
            | AlignError::LengthOrdering { .. } => Self::alignment(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::config(format!("TOML serialization error: {}", err))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file\n\
                 • Compressed inputs must use the .gz extension",
                path.display()
            ));
        }

        CliError::InvalidSequence { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Sequences may only contain A, C, G, T, '-' and 'X' (any case)\n\
                 • Remove blank lines from query files\n\
                 • Run 'refalign validate' to list every offending entry",
            );
        }

        CliError::MissingInput { kind, .. } => match kind {
            InputKind::Reference => message.push_str(
                "\n\nSuggestions:\n\
                 • Pass a reference file with --ref\n\
                 • Or pass the reference inline with --ref-seq",
            ),
            InputKind::Queries => message.push_str(
                "\n\nSuggestions:\n\
                 • Pass a query file with --qry\n\
                 • Or pass queries inline with one or more --query",
            ),
        },

        CliError::Alignment { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Every query must be strictly shorter than the reference\n\
                 • Sequences compared with 'refalign score' must have equal length",
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your refalign.toml configuration file\n\
                 • Use 'refalign config' to print a sample configuration\n\
                 • Verify that all configuration values are valid",
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
