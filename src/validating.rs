//! Reference validation
//!
//! Consumes the token sequence of one candidate, resolves the leading
//! tokens against the book trie, and interprets the rest as chapter/verse
//! data. Purely functional: a token slice goes in, a [`Reference`] or a
//! specific [`ValidationError`] comes out.
//!
//! Book-name resolution is greedy longest-match: the trie walk extends
//! across whole leading Letters/Digits tokens, recording every token
//! boundary that lands on a registered abbreviation, and the longest
//! recorded match whose remainder parses as chapter/verse data wins. This
//! resolves prefix pairs like "jn" (John) inside "jnh" (Jonah) without any
//! lookahead hacks.

use crate::books::trie::{BookId, BookTrie};
use crate::lexing::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chapter/verse position. Ordered lexicographically: chapter first,
/// then verse.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ChapterVerse {
    pub chapter: u32,
    pub verse: u32,
}

impl fmt::Display for ChapterVerse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// A validated, structured citation.
///
/// Invariants: `start.chapter >= 1`, `start.verse >= 1`, and `end` (when
/// present) is >= `start`. Produced only by [`validate`]; immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub book: BookId,
    pub start: ChapterVerse,
    pub end: Option<ChapterVerse>,
}

/// Why a candidate's token sequence is not a citation.
///
/// Per-candidate failures; none of these abort the overall scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The leading tokens spell no registered book abbreviation.
    UnknownBook { name: String },
    /// Chapter, colon, or verse missing or not a positive number.
    /// `position` is a byte offset into the stripped candidate.
    MalformedChapterVerse { position: usize },
    /// Range end lexicographically precedes the start.
    InvalidRange {
        start: ChapterVerse,
        end: ChapterVerse,
    },
    /// A token kind appeared where the citation grammar allows none.
    UnexpectedToken { kind: TokenKind, position: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownBook { name } => write!(f, "unknown book '{}'", name),
            ValidationError::MalformedChapterVerse { position } => {
                write!(f, "malformed chapter:verse at position {}", position)
            }
            ValidationError::InvalidRange { start, end } => {
                write!(f, "range end {} precedes start {}", end, start)
            }
            ValidationError::UnexpectedToken { kind, position } => {
                write!(f, "unexpected {} token at position {}", kind, position)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate one candidate's token sequence against the book trie.
pub fn validate(trie: &BookTrie, tokens: &[Token]) -> Result<Reference, ValidationError> {
    let book_matches = match_book(trie, tokens);
    if book_matches.is_empty() {
        let name: String = tokens
            .iter()
            .take_while(|token| token.kind.is_name_material())
            .map(|token| token.text.as_str())
            .collect();
        return Err(ValidationError::UnknownBook { name });
    }

    // Longest match first; remember the error of the longest attempt so a
    // near-miss reports against the most plausible book split.
    let mut first_error = None;
    for &(book, consumed) in book_matches.iter().rev() {
        match parse_location(tokens, consumed) {
            Ok((start, end)) => return Ok(Reference { book, start, end }),
            Err(error) => {
                first_error.get_or_insert(error);
            }
        }
    }
    Err(first_error.unwrap_or(ValidationError::UnknownBook {
        name: String::new(),
    }))
}

/// Extend a trie walk across whole leading name-material tokens, recording
/// `(book, tokens consumed)` at every boundary that hits a registered
/// abbreviation. Stops when a token fails to extend the walk or a
/// non-name token kind appears.
fn match_book(trie: &BookTrie, tokens: &[Token]) -> Vec<(BookId, usize)> {
    let mut walk = trie.walk();
    let mut found = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        if !token.kind.is_name_material() {
            break;
        }
        let mut attempt = walk.clone();
        if !token.text.chars().all(|ch| attempt.step(ch)) {
            break;
        }
        walk = attempt;
        if let Some(book) = walk.book() {
            found.push((book, index + 1));
        }
    }
    found
}

/// Parse `chapter:verse` with an optional `-end` range from
/// `tokens[from..]`; anything left over afterwards is an error.
fn parse_location(
    tokens: &[Token],
    from: usize,
) -> Result<(ChapterVerse, Option<ChapterVerse>), ValidationError> {
    let mut index = from;
    let chapter = expect_number(tokens, &mut index)?;
    expect_colon(tokens, &mut index)?;
    let verse = expect_number(tokens, &mut index)?;
    let start = ChapterVerse { chapter, verse };

    let mut end = None;
    if tokens.get(index).map(|t| t.kind) == Some(TokenKind::Dash) {
        index += 1;
        let first = expect_number(tokens, &mut index)?;
        let range_end = if tokens.get(index).map(|t| t.kind) == Some(TokenKind::Colon) {
            index += 1;
            let end_verse = expect_number(tokens, &mut index)?;
            ChapterVerse {
                chapter: first,
                verse: end_verse,
            }
        } else {
            // Bare verse after the dash: same-chapter range.
            ChapterVerse {
                chapter: start.chapter,
                verse: first,
            }
        };
        if range_end < start {
            return Err(ValidationError::InvalidRange {
                start,
                end: range_end,
            });
        }
        end = Some(range_end);
    }

    if let Some(extra) = tokens.get(index) {
        return Err(ValidationError::UnexpectedToken {
            kind: extra.kind,
            position: extra.span.start,
        });
    }
    Ok((start, end))
}

/// Byte position reported for a failure at `tokens[index]`, falling back to
/// the end of the last token when input ran out.
fn position_at(tokens: &[Token], index: usize) -> usize {
    match tokens.get(index) {
        Some(token) => token.span.start,
        None => tokens.last().map(|token| token.span.end).unwrap_or(0),
    }
}

fn expect_number(tokens: &[Token], index: &mut usize) -> Result<u32, ValidationError> {
    let position = position_at(tokens, *index);
    let token = tokens
        .get(*index)
        .filter(|token| token.kind == TokenKind::Digits)
        .ok_or(ValidationError::MalformedChapterVerse { position })?;
    let number = token
        .text
        .parse::<u32>()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or(ValidationError::MalformedChapterVerse { position })?;
    *index += 1;
    Ok(number)
}

fn expect_colon(tokens: &[Token], index: &mut usize) -> Result<(), ValidationError> {
    let position = position_at(tokens, *index);
    match tokens.get(*index) {
        Some(token) if token.kind == TokenKind::Colon => {
            *index += 1;
            Ok(())
        }
        _ => Err(ValidationError::MalformedChapterVerse { position }),
    }
}
