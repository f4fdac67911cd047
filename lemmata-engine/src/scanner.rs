//! Free-text scanning for glossary phrases

use std::time::Instant;

use tracing::debug;

use crate::{FoldedLine, Glossary};

/// A glossary phrase located in scanned text.
///
/// `from`/`to` are byte offsets into the original (unfolded) text,
/// `from` inclusive and `to` exclusive; `text` is the phrase exactly as
/// it appears there, original casing included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseSpan {
    /// Byte offset of the first character of the phrase.
    pub from: usize,
    /// Byte offset just past the last character of the phrase.
    pub to: usize,
    /// The phrase as written in the scanned text.
    pub text: String,
}

/// Scans lines of text for glossary phrases, respecting word and phrase
/// boundaries.
///
/// A phrase may start at the beginning of a line, right after a
/// terminating character, or anywhere within a run of Han script (which
/// has no spacing to delimit words). Symmetrically, it may end at the end
/// of a line, right before a terminating character, or on a Han
/// character. Matching is case-insensitive through simple folding; the
/// glossary's keys are already normalized the same way.
#[derive(Debug)]
pub struct LineScanner<'g, V> {
    glossary: &'g Glossary<V>,
}

impl<'g, V> LineScanner<'g, V> {
    /// A scanner over `glossary`.
    pub fn new(glossary: &'g Glossary<V>) -> Self {
        Self { glossary }
    }

    /// Scans a single line (no `'\n'` inside), reporting every phrase
    /// found. Offsets in the returned spans are shifted by `base`.
    ///
    /// After a phrase is recorded, scanning resumes past it, so the
    /// output of a single line is already non-overlapping and sorted.
    pub fn scan_line(&self, line: &str, base: usize) -> Vec<PhraseSpan> {
        let folded = FoldedLine::new(line);
        let count = folded.char_count();
        let mut spans = Vec::new();
        let mut at = 0;
        while at < count {
            if self.is_valid_start(&folded, at) {
                let (len, value) = self.glossary.find(folded.folded_suffix(at));
                if value.is_some() && len > 0 {
                    let matched = folded.chars_spanned(at, len);
                    let last = at + matched - 1;
                    if self.is_valid_end(&folded, last) {
                        let from = folded.original_start(at);
                        let to = folded.original_end(last);
                        spans.push(PhraseSpan {
                            from: base + from,
                            to: base + to,
                            text: line[from..to].to_owned(),
                        });
                        // Resume past the phrase.
                        at += matched;
                    }
                }
            }
            at += 1;
        }
        spans
    }

    /// Scans multi-line text, reporting a sorted, non-overlapping span
    /// list with longer phrases preferred over shorter ones wherever
    /// candidates overlap.
    pub fn scan_text(&self, text: &str, base: usize) -> Vec<PhraseSpan> {
        let started = Instant::now();
        let mut spans = Vec::new();
        let mut offset = base;
        for line in text.split('\n') {
            spans.extend(self.scan_line(line, offset));
            // One extra byte for the split '\n'.
            offset += line.len() + 1;
        }
        // Start ascending, then end descending, so that of two phrases
        // starting together the longer one survives the sweep below.
        spans.sort_by(|a, b| a.from.cmp(&b.from).then(b.to.cmp(&a.to)));
        let spans = drop_covered_spans(spans);
        debug!(
            spans = spans.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scanned text for glossary phrases"
        );
        spans
    }

    fn is_valid_start(&self, folded: &FoldedLine<'_>, at: usize) -> bool {
        let ch = folded.folded_char(at);
        if ch.is_whitespace() {
            return false;
        }
        if at == 0 || is_han(ch) {
            return true;
        }
        is_terminating(folded.original_char(at - 1))
    }

    fn is_valid_end(&self, folded: &FoldedLine<'_>, at: usize) -> bool {
        if is_han(folded.folded_char(at)) {
            return true;
        }
        if at + 1 == folded.char_count() {
            return true;
        }
        is_terminating(folded.original_char(at + 1))
    }
}

/// Keeps the first span of every overlapping group; the sort order
/// guarantees that is the longest one starting earliest.
fn drop_covered_spans(spans: Vec<PhraseSpan>) -> Vec<PhraseSpan> {
    let mut cursor = 0;
    spans
        .into_iter()
        .filter(|span| {
            if span.from >= cursor {
                cursor = span.to;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Characters that delimit phrases: ASCII punctuation, whitespace, and
/// the fullwidth/CJK punctuation repertoire.
pub(crate) fn is_terminating(ch: char) -> bool {
    if ch.is_whitespace() {
        return true;
    }
    matches!(
        ch,
        '!' | '@' | '#' | '$' | '%' | '^' | '&' | '*' | '(' | ')' | '+' | '='
            | '{' | '}' | '[' | ']' | ':' | ';' | '"' | '\'' | '<' | '>' | ','
            | '.' | '?' | '/' | '|' | '\\'
            | '（' | '）' | '＊' | '＋' | '，' | '－' | '／' | '：' | '；' | '＜'
            | '＝' | '＞' | '＠' | '［' | '＼' | '］' | '＾' | '＿' | '｀' | '｛'
            | '｜' | '｝' | '～' | '｟' | '｠' | '｢' | '｣' | '､' | '、' | '〃'
            | '〈' | '〉' | '《' | '》' | '「' | '」' | '『' | '』' | '【' | '】'
            | '〔' | '〕' | '〖' | '〗' | '〘' | '〙' | '〚' | '〛' | '〜' | '〝'
            | '〞' | '〟' | '—' | '\u{2018}' | '\u{2019}' | '\u{201b}' | '“'
            | '”' | '„' | '‟' | '…' | '‧' | '\u{fe4f}' | '﹑' | '﹔' | '·' | '。'
    )
}

/// Han-script characters, which delimit words positionally rather than
/// with spacing.
pub(crate) fn is_han(ch: char) -> bool {
    matches!(
        u32::from(ch),
        0x2E80..=0x2EFF        // CJK radicals supplement
            | 0x2F00..=0x2FDF  // Kangxi radicals
            | 0x3005 | 0x3007  // iteration mark, ideographic zero
            | 0x3400..=0x4DBF  // extension A
            | 0x4E00..=0x9FFF  // CJK unified ideographs
            | 0xF900..=0xFAFF  // compatibility ideographs
            | 0x20000..=0x2A6DF // extension B
            | 0x2A700..=0x2EBEF // extensions C through F
            | 0x2F800..=0x2FA1F // compatibility supplement
    )
}
