//! Candidate scanning
//!
//! Finds substrings of a text block that look like citations before any
//! semantic validation. The matching rule is the crux of the
//! recall/precision tradeoff, so it is spelled out here:
//!
//! 1. Core pattern: a run of word characters, optional periods and optional
//!    whitespace, then digits `:` digits - "chapter:verse" with a leading
//!    book word (`\b\w+\.*\s*\d+:\d+`).
//! 2. Greedy extension over trailing non-letter, non-underscore characters,
//!    covering range separators ("-17:2"), verse lists (",18") and blanks.
//! 3. Lookahead: the first unconsumed character must be a letter, newline,
//!    or tab; end of input is accepted permissively. This keeps a citation
//!    from matching inside a longer number-only run (dates, page numbers).
//!    When the extension stops before an underscore the scanner backtracks
//!    to the last newline/tab inside the trailing run; with none available
//!    the core match is discarded.
//!
//! Scanning is greedy left-to-right and never yields overlapping spans. The
//! iterator is lazy: dropping it early costs nothing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Core citation shape: book word, optional periods/whitespace,
/// chapter:verse. Trailing range/list characters and the lookahead are
/// handled by hand - the regex crate has no lookaround.
static CHAPTER_VERSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\.*\s*\d+:\d+").unwrap());

/// A substring that syntactically resembles a citation, with its exact
/// byte offsets in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub span: Range<usize>,
}

/// Scan a block of text for citation-shaped spans.
pub fn scan(text: &str) -> Candidates<'_> {
    Candidates { text, pos: 0 }
}

/// Lazy iterator over the candidates of one text block. One pass; re-invoke
/// [`scan`] per block.
#[derive(Debug)]
pub struct Candidates<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Candidates<'t> {
    /// Characters the trailing extension may consume: everything except
    /// letters and underscores (so digits, punctuation, and whitespace all
    /// count, matching range and list syntax).
    fn is_trailing(ch: char) -> bool {
        !ch.is_alphabetic() && ch != '_'
    }
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        while self.pos <= self.text.len() {
            let core = CHAPTER_VERSE.find_at(self.text, self.pos)?;
            let start = core.start();
            let core_end = core.end();

            // Greedy trailing extension.
            let mut end = core_end;
            for (offset, ch) in self.text[core_end..].char_indices() {
                if !Self::is_trailing(ch) {
                    break;
                }
                end = core_end + offset + ch.len_utf8();
            }

            // Lookahead: letter or end of input. The extension already
            // consumed every newline/tab it could, so the character at
            // `end` is a letter, an underscore, or absent.
            let satisfied = match self.text[end..].chars().next() {
                None => true,
                Some(ch) => ch.is_alphabetic(),
            };

            let end = if satisfied {
                end
            } else {
                // Underscore ahead: backtrack to the last newline/tab in
                // the trailing run, which satisfies the lookahead without
                // being consumed.
                match self.text[core_end..end].rfind(['\n', '\t']) {
                    Some(offset) => core_end + offset,
                    None => {
                        self.pos = core_end;
                        continue;
                    }
                }
            };

            self.pos = end.max(core_end);
            return Some(Candidate {
                text: self.text[start..end].to_string(),
                span: start..end,
            });
        }
        None
    }
}
