//! Prefix tree over book-name abbreviations
//!
//! Abbreviations vary in length and may be prefixes of longer names
//! ("1co" vs "1corinthians"), so lookup must distinguish "needs more input"
//! from "invalid" - something a longest-match regex cannot express. The trie
//! gives O(length) lookup and both answers.
//!
//! Nodes live in a flat arena indexed by integer id rather than as nested
//! owned nodes. The trie is built once at startup and read-only afterwards;
//! it can be shared across threads without locking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque canonical identifier for a book of the cited corpus.
///
/// Assigned by the registry that built the trie (see
/// [`Canon`](crate::books::Canon)); meaningless on its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BookId(pub(crate) u16);

impl BookId {
    /// Position of this book in the owning registry.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One edge per lowercase letter a-z plus digit 0-9.
const ALPHABET_SIZE: usize = 36;

/// Map a character to its edge slot, case-folding letters.
///
/// Returns `None` for anything outside the 36-symbol alphabet; walks fail
/// immediately on such characters rather than skipping them.
fn edge_index(ch: char) -> Option<usize> {
    match ch {
        'a'..='z' => Some(ch as usize - 'a' as usize),
        'A'..='Z' => Some(ch as usize - 'A' as usize),
        '0'..='9' => Some(26 + ch as usize - '0' as usize),
        _ => None,
    }
}

#[derive(Debug, Clone)]
struct Node {
    children: [Option<u32>; ALPHABET_SIZE],
    book: Option<BookId>,
}

impl Node {
    fn new() -> Self {
        Node {
            children: [None; ALPHABET_SIZE],
            book: None,
        }
    }
}

/// The result of looking up a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The prefix spells no registered abbreviation and cannot be extended
    /// into one.
    NotFound,
    /// The prefix is a proper prefix of at least one registered abbreviation
    /// but is not itself registered.
    Partial,
    /// The prefix is a registered abbreviation for this book. Longer
    /// abbreviations may still extend it.
    Exact(BookId),
}

/// Registration failure raised while building a trie.
///
/// Build-time errors are fatal to trie construction and must surface before
/// any scanning begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// The abbreviation is already bound to a different book.
    DuplicateBook {
        abbreviation: String,
        existing: BookId,
        replacement: BookId,
    },
    /// The abbreviation contains a character outside a-z / 0-9 after
    /// case-folding.
    UnsupportedCharacter { abbreviation: String, ch: char },
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::DuplicateBook { abbreviation, .. } => {
                write!(
                    f,
                    "abbreviation '{}' is already registered to a different book",
                    abbreviation
                )
            }
            RegisterError::UnsupportedCharacter { abbreviation, ch } => {
                write!(
                    f,
                    "abbreviation '{}' contains unsupported character '{}'",
                    abbreviation, ch
                )
            }
        }
    }
}

impl std::error::Error for RegisterError {}

/// Prefix tree mapping case-folded abbreviations to book identifiers.
#[derive(Debug, Clone)]
pub struct BookTrie {
    nodes: Vec<Node>,
}

impl BookTrie {
    /// An empty trie containing only the root node.
    pub fn new() -> Self {
        BookTrie {
            nodes: vec![Node::new()],
        }
    }

    /// Register a case-insensitive abbreviation for a book.
    ///
    /// Idempotent when the abbreviation is already bound to the same book;
    /// fails with [`RegisterError::DuplicateBook`] when it is bound to a
    /// different one.
    pub fn insert(&mut self, abbreviation: &str, book: BookId) -> Result<(), RegisterError> {
        let mut node = 0usize;
        for ch in abbreviation.chars() {
            let edge = edge_index(ch).ok_or_else(|| RegisterError::UnsupportedCharacter {
                abbreviation: abbreviation.to_string(),
                ch,
            })?;
            node = match self.nodes[node].children[edge] {
                Some(next) => next as usize,
                None => {
                    let next = self.nodes.len() as u32;
                    self.nodes.push(Node::new());
                    self.nodes[node].children[edge] = Some(next);
                    next as usize
                }
            };
        }
        match self.nodes[node].book {
            Some(existing) if existing != book => Err(RegisterError::DuplicateBook {
                abbreviation: abbreviation.to_string(),
                existing,
                replacement: book,
            }),
            _ => {
                self.nodes[node].book = Some(book);
                Ok(())
            }
        }
    }

    /// Walk the trie along `prefix`, case-folding each character.
    ///
    /// Any character outside the alphabet fails with [`Lookup::NotFound`]
    /// immediately.
    pub fn lookup(&self, prefix: &str) -> Lookup {
        let mut walk = self.walk();
        for ch in prefix.chars() {
            if !walk.step(ch) {
                return Lookup::NotFound;
            }
        }
        match walk.book() {
            Some(book) => Lookup::Exact(book),
            None => Lookup::Partial,
        }
    }

    /// Start an incremental walk at the root.
    ///
    /// Used by the validator to extend a book-name match token by token,
    /// cloning the walker before each tentative extension.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            trie: self,
            node: 0,
        }
    }
}

impl Default for BookTrie {
    fn default() -> Self {
        BookTrie::new()
    }
}

/// An incremental position inside a [`BookTrie`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    trie: &'a BookTrie,
    node: u32,
}

impl Walk<'_> {
    /// Advance along one character. Returns `false` (leaving the walker
    /// unchanged) when no edge matches.
    pub fn step(&mut self, ch: char) -> bool {
        let Some(edge) = edge_index(ch) else {
            return false;
        };
        match self.trie.nodes[self.node as usize].children[edge] {
            Some(next) => {
                self.node = next;
                true
            }
            None => false,
        }
    }

    /// The book registered at the current position, if any.
    pub fn book(&self) -> Option<BookId> {
        self.trie.nodes[self.node as usize].book
    }
}
