//! Cache of scanned phrase positions with offset lookup

use crate::{PhraseBookError, PhraseSpan};

/// The phrases found by a scan, held as a start-ascending,
/// non-overlapping span list for offset queries.
///
/// The calling layer owns one of these per scanned document and asks it
/// which phrase covers a given position (a cursor, a click target).
/// Lookup is a binary search; both span edges count as inside, so a
/// cursor sitting just past the last character still finds its phrase.
#[derive(Debug, Clone, Default)]
pub struct PhraseBook {
    spans: Vec<PhraseSpan>,
}

impl PhraseBook {
    /// Builds a phrase book from `spans`, validating the contract:
    /// sorted by start offset, no overlaps. Scanner output satisfies
    /// this as produced.
    pub fn new(spans: Vec<PhraseSpan>) -> Result<Self, PhraseBookError> {
        for (index, pair) in spans.windows(2).enumerate() {
            let (earlier, later) = (&pair[0], &pair[1]);
            if later.from < earlier.from {
                return Err(PhraseBookError::Unsorted {
                    index: index + 1,
                    found: later.from,
                    previous: earlier.from,
                });
            }
            if later.from < earlier.to {
                return Err(PhraseBookError::Overlapping {
                    index: index + 1,
                    found: later.from,
                    end: earlier.to,
                });
            }
        }
        Ok(Self { spans })
    }

    /// The phrase covering `offset`, if any. Bounds are inclusive on
    /// both ends.
    pub fn phrase_at(&self, offset: usize) -> Option<&PhraseSpan> {
        let mut low = 0;
        let mut high = self.spans.len();
        while low < high {
            let mid = (low + high) / 2;
            let span = &self.spans[mid];
            if offset < span.from {
                high = mid;
            } else if offset > span.to {
                low = mid + 1;
            } else {
                return Some(span);
            }
        }
        None
    }

    /// All spans, start-ascending.
    pub fn spans(&self) -> &[PhraseSpan] {
        &self.spans
    }

    /// Number of phrases recorded.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the book holds no phrases.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
