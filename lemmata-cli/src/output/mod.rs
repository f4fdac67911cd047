//! Output formatting for scan reports

pub mod json;
pub mod text;

use serde::Serialize;

/// One located glossary phrase, resolved back to its dictionary entry.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    /// Byte offset of the phrase start within its file.
    pub from: usize,
    /// Byte offset just past the phrase end.
    pub to: usize,
    /// The phrase as written in the scanned text.
    pub text: String,
    /// The canonical dictionary term the phrase resolved to.
    pub term: String,
    /// The term's definition.
    pub definition: String,
}

/// All matches found in one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// The scanned file.
    pub path: String,
    /// Matches in position order.
    pub matches: Vec<MatchRecord>,
}
