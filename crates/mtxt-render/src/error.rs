//! Error types for loading style vocabularies.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a style vocabulary cannot be loaded.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// YAML parse error.
    #[error("failed to parse style vocabulary{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// Invalid color in a style definition.
    #[error("invalid color '{value}' for style '{style}'")]
    InvalidColor {
        /// Style name where the error occurred.
        style: String,
        /// The invalid color value.
        value: String,
    },

    /// Style name that could never be addressed from markup.
    #[error("invalid style name '{0}'")]
    InvalidName(String),

    /// I/O error while reading a vocabulary file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}
