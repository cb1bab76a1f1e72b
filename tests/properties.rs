//! Property-based tests for the recognition pipeline.

use citefind::lexing::{strip_candidate, tokenize};
use citefind::scanning::scan;
use citefind::{Canon, ReferenceFinder};
use proptest::prelude::*;

/// Strings shaped roughly like candidates: book-ish word, separators,
/// numbers. Everything here is inside the tokenizer's alphabet.
fn candidate_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Za-z1-3]{1,12}",
        "\\.{0,2} {0,2}",
        1u32..=150,
        1u32..=176,
        prop_oneof![
            Just(String::new()),
            (1u32..=150, 1u32..=176).prop_map(|(c, v)| format!("-{}:{}", c, v)),
            (1u32..=176).prop_map(|v| format!("-{}", v)),
            (1u32..=176).prop_map(|v| format!(",{}", v)),
        ],
    )
        .prop_map(|(book, sep, chapter, verse, tail)| {
            format!("{}{}{}:{}{}", book, sep, chapter, verse, tail)
        })
}

proptest! {
    /// Concatenating token texts reconstructs the stripped candidate.
    #[test]
    fn tokenizer_round_trip(candidate in candidate_strategy()) {
        let tokens = tokenize(&candidate).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, strip_candidate(&candidate));
    }

    /// Maximal runs are merged: adjacent tokens never share a kind.
    #[test]
    fn adjacent_tokens_differ_in_kind(candidate in candidate_strategy()) {
        let tokens = tokenize(&candidate).unwrap();
        for pair in tokens.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    /// Tokenization of arbitrary text is total: a token sequence or an
    /// error, never a panic.
    #[test]
    fn tokenize_never_panics(text in ".{0,64}") {
        let _ = tokenize(&text);
    }

    /// Candidate spans index the source text exactly.
    #[test]
    fn candidate_spans_match_text(text in ".{0,64}") {
        for candidate in scan(&text) {
            prop_assert_eq!(&text[candidate.span.clone()], candidate.text.as_str());
        }
    }

    /// Running find twice over the same text yields identical sequences.
    #[test]
    fn find_is_idempotent(text in ".{0,64}") {
        let finder = ReferenceFinder::new(Canon::standard());
        prop_assert_eq!(finder.find(&text), finder.find(&text));
    }

    /// Every reference the finder yields satisfies the range invariant.
    #[test]
    fn yielded_ranges_are_ordered(candidate in candidate_strategy()) {
        let finder = ReferenceFinder::new(Canon::standard());
        for reference in finder.references(&candidate) {
            prop_assert!(reference.start.chapter >= 1);
            prop_assert!(reference.start.verse >= 1);
            if let Some(end) = reference.end {
                prop_assert!(end >= reference.start);
            }
        }
    }
}
