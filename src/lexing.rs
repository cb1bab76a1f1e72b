//! Candidate tokenization
//!
//! Converts a candidate citation string into an ordered sequence of typed
//! tokens. Structure:
//! - `tokens`: the token types, defined with the logos derive macro
//! - `tokenizer`: preprocessing (whitespace/period stripping) and the
//!   tokenize entry point
//!
//! Periods are structural in the raw text (they mark abbreviations and feed
//! the scanner pattern) but carry no meaning once the trie locates book-name
//! boundaries, so they are stripped together with whitespace before
//! classification.

pub mod tokenizer;
pub mod tokens;

pub use tokenizer::{strip_candidate, tokenize, TokenizeError};
pub use tokens::{Token, TokenKind};
