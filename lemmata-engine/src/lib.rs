//! Glossary index and phrase scanning over the lemmata radix tree
//!
//! This crate turns the raw dictionary core of [`lemmata_trie`] into a
//! text-scanning engine: a [`Glossary`] built in bulk from `(key, value)`
//! pairs, a [`LineScanner`] that walks free text and reports every
//! glossary phrase it contains (respecting word and phrase boundaries),
//! and a [`PhraseBook`] that answers "which phrase covers this offset"
//! queries over a finished scan.
//!
//! # Example
//!
//! ```rust
//! use lemmata_engine::{Glossary, LineScanner};
//!
//! let mut glossary = Glossary::new();
//! glossary.build(
//!     [
//!         ("radix tree".to_owned(), 1),
//!         ("tree".to_owned(), 2),
//!     ],
//!     true,
//! );
//!
//! let scanner = LineScanner::new(&glossary);
//! let spans = scanner.scan_text("A radix tree compresses chains.", 0);
//! assert_eq!(spans.len(), 1);
//! assert_eq!(spans[0].text, "radix tree");
//! ```
//!
//! All offsets are byte offsets into the original (unfolded) text.

mod error;
mod fold;
mod glossary;
mod phrases;
mod scanner;

pub use error::PhraseBookError;
pub use fold::FoldedLine;
pub use glossary::{normalize_term, Glossary};
pub use phrases::PhraseBook;
pub use scanner::{LineScanner, PhraseSpan};

// The underlying dictionary core, re-exported for callers that need
// direct tree access.
pub use lemmata_trie::{MatchPosition, PrefixMatch, RadixNode, RadixTree};
