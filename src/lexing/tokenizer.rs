//! Tokenize entry point
//!
//! Candidates arrive with whatever whitespace and periods the scanner's
//! pattern allowed through ("Mt. 16:24 - 17:2"); both are stripped before
//! classification, then the logos lexer produces maximal-run tokens over
//! the stripped string.

use crate::lexing::tokens::{Token, TokenKind};
use logos::Logos;
use std::fmt;

/// Tokenization failure: a character outside the expected alphabet.
///
/// This is a hard validation boundary, not a warning - the candidate is
/// rejected as a whole. Fatal to that candidate only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// `position` is a byte offset into the stripped candidate.
    InvalidCharacter { ch: char, position: usize },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::InvalidCharacter { ch, position } => {
                write!(f, "invalid character '{}' at position {}", ch, position)
            }
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Remove whitespace and periods from a candidate before classification.
pub fn strip_candidate(candidate: &str) -> String {
    candidate
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '.')
        .collect()
}

/// Convert a candidate string into its token sequence.
///
/// An empty candidate (or one that strips to empty) produces an empty
/// sequence, not an error. Token spans index into the stripped candidate.
pub fn tokenize(candidate: &str) -> Result<Vec<Token>, TokenizeError> {
    let stripped = strip_candidate(candidate);
    let mut lexer = TokenKind::lexer(&stripped);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), span)),
            Err(()) => {
                let ch = stripped[span.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(TokenizeError::InvalidCharacter {
                    ch,
                    position: span.start,
                });
            }
        }
    }

    Ok(tokens)
}
