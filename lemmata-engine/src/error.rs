//! Error types for the engine

use thiserror::Error;

/// Violations of the [`PhraseBook`](crate::PhraseBook) span contract.
///
/// Spans handed to a phrase book must be sorted by start offset and must
/// not overlap; scanner output satisfies this by construction, but spans
/// assembled by hand are validated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhraseBookError {
    /// A span starts before the span preceding it.
    #[error("phrase spans must be sorted by start: span {index} starts at {found}, after a span starting at {previous}")]
    Unsorted {
        /// Position of the offending span in the input.
        index: usize,
        /// Start offset of the offending span.
        found: usize,
        /// Start offset of the preceding span.
        previous: usize,
    },

    /// A span begins before the preceding span has ended.
    #[error("phrase spans must not overlap: span {index} starts at {found}, inside a span ending at {end}")]
    Overlapping {
        /// Position of the offending span in the input.
        index: usize,
        /// Start offset of the offending span.
        found: usize,
        /// End offset of the preceding span.
        end: usize,
    },
}
