//! Token definitions for candidate citations
//!
//! Tokens are maximal runs of one lexical class, defined with the logos
//! derive macro. Maximal munch gives the run-merging invariant for free:
//! adjacent tokens never share a kind.

use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Lexical class of a run of characters within a stripped candidate.
///
/// Every character of a valid candidate belongs to exactly one class; any
/// other character is a tokenization error, not a token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Alphabetic run (book-name material)
    #[regex(r"\p{Alphabetic}+")]
    Letters,

    /// ASCII digit run (chapter/verse numbers, numeric book prefixes)
    #[regex(r"[0-9]+")]
    Digits,

    #[regex(r":+")]
    Colon,

    /// Never produced by [`tokenize`](crate::lexing::tokenize) (periods are
    /// stripped first) but part of the lexical alphabet.
    #[regex(r"\.+")]
    Period,

    #[regex(r",+")]
    Comma,

    #[regex(r"-+")]
    Dash,
}

impl TokenKind {
    /// Whether tokens of this kind can contribute to a book name. A book
    /// name may start with a numeral ("1" in "1 Corinthians").
    pub fn is_name_material(&self) -> bool {
        matches!(self, TokenKind::Letters | TokenKind::Digits)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Letters => "LETTERS",
            TokenKind::Digits => "DIGITS",
            TokenKind::Colon => "COLON",
            TokenKind::Period => "PERIOD",
            TokenKind::Comma => "COMMA",
            TokenKind::Dash => "DASH",
        };
        write!(f, "{}", name)
    }
}

/// One maximal run of characters of a single class.
///
/// The span is the byte range in the *stripped* candidate (see
/// [`strip_candidate`](crate::lexing::strip_candidate)) and exists for
/// diagnostics; concatenating the `text` of all tokens reconstructs the
/// stripped candidate exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_lexing() {
        let mut lexer = TokenKind::lexer("Mt16:24");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Letters)));
        assert_eq!(lexer.slice(), "Mt");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Digits)));
        assert_eq!(lexer.slice(), "16");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Colon)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Digits)));
        assert_eq!(lexer.slice(), "24");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_separator_runs_merge() {
        let mut lexer = TokenKind::lexer("--");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Dash)));
        assert_eq!(lexer.slice(), "--");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_unexpected_character_is_error() {
        let mut lexer = TokenKind::lexer("a_b");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Letters)));
        assert_eq!(lexer.next(), Some(Err(())));
        assert_eq!(lexer.span(), 1..2);
    }

    #[test]
    fn test_name_material() {
        assert!(TokenKind::Letters.is_name_material());
        assert!(TokenKind::Digits.is_name_material());
        assert!(!TokenKind::Colon.is_name_material());
        assert!(!TokenKind::Dash.is_name_material());
    }
}
