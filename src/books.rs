//! Book identity: abbreviation trie and canon registry
//!
//! This module contains the book-name side of citation recognition:
//! - `trie`: a prefix tree over a 36-symbol alphabet (a-z, 0-9) mapping
//!   case-folded abbreviations to book identifiers
//! - `canon`: the registry pairing canonical display names with a trie,
//!   including the bundled standard book list

pub mod canon;
pub mod trie;

pub use canon::Canon;
pub use trie::{BookId, BookTrie, Lookup, RegisterError, Walk};
