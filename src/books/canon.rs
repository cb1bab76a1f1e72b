//! Canon registry: canonical book names plus their abbreviation trie
//!
//! The trie itself knows nothing about display names; the canon pairs the
//! two and hands out [`BookId`]s as books are registered. The bundled
//! [`Canon::standard`] table covers the conventional 66-book canon with the
//! abbreviations commonly seen in print. Callers with their own lists build
//! a canon with [`Canon::add_book`] instead.

use crate::books::trie::{BookId, BookTrie, RegisterError};
use crate::validating::Reference;

/// The conventional book list: canonical display name plus common
/// abbreviations. The canonical name itself is registered too (case-folded,
/// non-alphanumerics dropped), so "1corinthians" resolves without being
/// listed twice.
const STANDARD_BOOKS: &[(&str, &[&str])] = &[
    ("Genesis", &["gen", "ge", "gn"]),
    ("Exodus", &["exod", "exo", "ex"]),
    ("Leviticus", &["lev", "le", "lv"]),
    ("Numbers", &["num", "nu", "nm", "nb"]),
    ("Deuteronomy", &["deut", "dt", "de"]),
    ("Joshua", &["josh", "jos", "jsh"]),
    ("Judges", &["judg", "jdgs", "jdg", "jg"]),
    ("Ruth", &["ru", "rth"]),
    ("1 Samuel", &["1sam", "1sa", "1sm"]),
    ("2 Samuel", &["2sam", "2sa", "2sm"]),
    ("1 Kings", &["1kgs", "1kin", "1ki"]),
    ("2 Kings", &["2kgs", "2kin", "2ki"]),
    ("1 Chronicles", &["1chr", "1ch"]),
    ("2 Chronicles", &["2chr", "2ch"]),
    ("Ezra", &["ezr"]),
    ("Nehemiah", &["neh", "ne"]),
    ("Esther", &["esth", "est", "es"]),
    ("Job", &["jb"]),
    ("Psalms", &["psalm", "pss", "psa", "psm", "ps"]),
    ("Proverbs", &["prov", "prv", "pr"]),
    ("Ecclesiastes", &["eccl", "ecc", "ec"]),
    ("Song of Solomon", &["song", "sos", "so"]),
    ("Isaiah", &["isa", "is"]),
    ("Jeremiah", &["jer", "je", "jr"]),
    ("Lamentations", &["lam", "la"]),
    ("Ezekiel", &["ezek", "eze", "ezk"]),
    ("Daniel", &["dan", "da", "dn"]),
    ("Hosea", &["hos", "ho"]),
    ("Joel", &["jl"]),
    ("Amos", &["am"]),
    ("Obadiah", &["obad", "ob"]),
    ("Jonah", &["jnh", "jon"]),
    ("Micah", &["mic", "mc"]),
    ("Nahum", &["nah", "na"]),
    ("Habakkuk", &["hab", "hb"]),
    ("Zephaniah", &["zeph", "zep", "zp"]),
    ("Haggai", &["hag", "hg"]),
    ("Zechariah", &["zech", "zec", "zc"]),
    ("Malachi", &["mal", "ml"]),
    ("Matthew", &["matt", "mt"]),
    ("Mark", &["mrk", "mk"]),
    ("Luke", &["lk", "lu"]),
    ("John", &["jhn", "jn"]),
    ("Acts", &["ac"]),
    ("Romans", &["rom", "ro", "rm"]),
    ("1 Corinthians", &["1cor", "1co"]),
    ("2 Corinthians", &["2cor", "2co"]),
    ("Galatians", &["gal", "ga"]),
    ("Ephesians", &["eph"]),
    ("Philippians", &["phil", "php", "pp"]),
    ("Colossians", &["col"]),
    ("1 Thessalonians", &["1thess", "1th"]),
    ("2 Thessalonians", &["2thess", "2th"]),
    ("1 Timothy", &["1tim", "1ti"]),
    ("2 Timothy", &["2tim", "2ti"]),
    ("Titus", &["tit"]),
    ("Philemon", &["phlm", "phm"]),
    ("Hebrews", &["heb"]),
    ("James", &["jas", "jm"]),
    ("1 Peter", &["1pet", "1pe", "1pt"]),
    ("2 Peter", &["2pet", "2pe", "2pt"]),
    ("1 John", &["1jn", "1jhn"]),
    ("2 John", &["2jn", "2jhn"]),
    ("3 John", &["3jn", "3jhn"]),
    ("Jude", &["jud", "jd"]),
    ("Revelation", &["rev", "rv", "re"]),
];

/// Case-fold and drop everything outside the trie alphabet, so canonical
/// names like "1 Corinthians" register as "1corinthians".
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Registry of books: canonical display names plus the abbreviation trie.
///
/// Built once at startup and read-only afterwards. All lookups during
/// scanning go through [`Canon::trie`].
#[derive(Debug, Clone)]
pub struct Canon {
    names: Vec<String>,
    trie: BookTrie,
}

impl Canon {
    /// An empty canon with no books registered.
    pub fn new() -> Self {
        Canon {
            names: Vec::new(),
            trie: BookTrie::new(),
        }
    }

    /// The bundled conventional book list.
    pub fn standard() -> Self {
        let mut canon = Canon::new();
        for (name, abbreviations) in STANDARD_BOOKS {
            canon
                .add_book(name, abbreviations)
                .expect("standard book table is conflict-free");
        }
        canon
    }

    /// Register a book under its canonical name and the given abbreviations.
    ///
    /// The canonical name is normalized and registered as an abbreviation
    /// itself. Returns the assigned [`BookId`].
    pub fn add_book(
        &mut self,
        name: &str,
        abbreviations: &[&str],
    ) -> Result<BookId, RegisterError> {
        let book = BookId(self.names.len() as u16);
        self.trie.insert(&normalize(name), book)?;
        for abbreviation in abbreviations {
            self.trie.insert(&normalize(abbreviation), book)?;
        }
        self.names.push(name.to_string());
        Ok(book)
    }

    /// Canonical display name for a book.
    ///
    /// Panics if `book` did not come from this canon.
    pub fn name(&self, book: BookId) -> &str {
        &self.names[book.index()]
    }

    /// The abbreviation trie, shared read-only by all validation calls.
    pub fn trie(&self) -> &BookTrie {
        &self.trie
    }

    /// Number of registered books.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render a reference with its canonical book name, e.g.
    /// "Matthew 16:24-17:2". Same-chapter ranges print only the end verse.
    pub fn format_reference(&self, reference: &Reference) -> String {
        let mut out = format!(
            "{} {}:{}",
            self.name(reference.book),
            reference.start.chapter,
            reference.start.verse
        );
        if let Some(end) = reference.end {
            if end.chapter == reference.start.chapter {
                out.push_str(&format!("-{}", end.verse));
            } else {
                out.push_str(&format!("-{}:{}", end.chapter, end.verse));
            }
        }
        out
    }
}

impl Default for Canon {
    fn default() -> Self {
        Canon::new()
    }
}
