//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dictionary file is not valid JSON of the expected shape.
    #[error("invalid dictionary {path}: {source}")]
    Dictionary {
        /// The dictionary file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// An input pattern is not valid glob syntax.
    #[error("invalid input pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: glob::PatternError,
    },

    /// An input pattern matched no files at all.
    #[error("no input files matched '{0}'")]
    NoInput(String),
}
