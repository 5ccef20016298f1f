//! Error types for code highlighting.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned by the code-rendering helpers.
#[derive(Debug, Error)]
pub enum CodeError {
    /// No highlighter registered under this name.
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    /// Theme YAML could not be interpreted.
    #[error("failed to parse code theme{}: {message}", location(.path))]
    ThemeParse {
        path: Option<PathBuf>,
        message: String,
    },

    /// I/O error while reading a theme file.
    #[error("failed to read {path}: {source}")]
    Io {
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
