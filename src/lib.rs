//! # citefind
//!
//! Recognition of scripture-style citations (e.g. `Mt.16:24-17:2`) in plain
//! text, extracted as validated, structured references.
//!
//! The pipeline:
//! 1. [`scanning`] finds citation-shaped candidate spans in raw text
//! 2. [`lexing`] tokenizes each candidate into typed lexical runs
//! 3. [`validating`] checks the leading tokens against the book trie in
//!    [`books`] and interprets the rest as chapter/verse data
//! 4. [`finding`] orchestrates the three stages and yields references
//!    (and, when configured, rejections with a specific reason)
//!
//! The core is pure CPU work over in-memory strings; file traversal and
//! reading live in [`walking`] and the `citefind` binary.

pub mod books;
pub mod finding;
pub mod lexing;
pub mod scanning;
pub mod validating;
pub mod walking;

pub use books::{BookId, BookTrie, Canon};
pub use finding::{Finding, FinderConfig, ReferenceFinder, RejectReason, Rejection};
pub use validating::{ChapterVerse, Reference};
