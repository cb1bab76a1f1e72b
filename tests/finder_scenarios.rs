//! End-to-end scenarios for the find pipeline: scan, tokenize, validate.

use citefind::finding::{Finding, FinderConfig, ReferenceFinder};
use citefind::{Canon, ChapterVerse, RejectReason};
use rstest::rstest;

fn finder() -> ReferenceFinder {
    ReferenceFinder::new(Canon::standard())
}

fn finder_with_rejections() -> ReferenceFinder {
    ReferenceFinder::with_config(
        Canon::standard(),
        FinderConfig {
            include_rejections: true,
            max_candidates: None,
        },
    )
}

#[rstest]
// book.chapter:verse with a cross-chapter range, mid-sentence
#[case("see Mt.16:24-17:2 for details", "Matthew", (16, 24), Some((17, 2)))]
// bare chapter:verse directly at end of input (permissive lookahead)
#[case("Jn3:16", "John", (3, 16), None)]
// period and space between book and chapter
#[case("read Lk. 15:11 tonight", "Luke", (15, 11), None)]
// numeric book prefix
#[case("compare 1Co.13:4 sometime", "1 Corinthians", (13, 4), None)]
// same-chapter bare-verse range
#[case("Ps.23:1-6 always", "Psalms", (23, 1), Some((23, 6)))]
fn finds_single_reference(
    #[case] text: &str,
    #[case] book: &str,
    #[case] start: (u32, u32),
    #[case] end: Option<(u32, u32)>,
) {
    let finder = finder();
    let findings = finder.find(text);
    assert_eq!(findings.len(), 1, "text: {:?}", text);
    let reference = findings[0].as_reference().expect("expected a reference");
    assert_eq!(finder.canon().name(reference.book), book);
    assert_eq!(
        reference.start,
        ChapterVerse {
            chapter: start.0,
            verse: start.1,
        }
    );
    assert_eq!(
        reference.end,
        end.map(|(chapter, verse)| ChapterVerse { chapter, verse })
    );
}

#[test]
fn numeric_only_candidate_is_rejected_as_unknown_book() {
    let finder = finder_with_rejections();
    let findings = finder.find("call 911:30 now");
    assert_eq!(findings.len(), 1);
    match &findings[0] {
        Finding::Rejection(rejection) => {
            assert!(matches!(rejection.reason, RejectReason::UnknownBook { .. }));
            assert_eq!(rejection.candidate.text, "call 911:30 ");
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[test]
fn underscored_word_is_rejected_as_invalid_character() {
    let finder = finder_with_rejections();
    let findings = finder.find("foo_bar 5:3 x");
    assert_eq!(findings.len(), 1);
    match &findings[0] {
        Finding::Rejection(rejection) => {
            assert!(matches!(
                rejection.reason,
                RejectReason::InvalidCharacter { ch: '_', .. }
            ));
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[test]
fn backwards_range_is_rejected() {
    let finder = finder_with_rejections();
    let findings = finder.find("Mt.17:2-16:24 oops");
    assert_eq!(findings.len(), 1);
    match &findings[0] {
        Finding::Rejection(rejection) => {
            assert!(matches!(rejection.reason, RejectReason::InvalidRange { .. }));
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[test]
fn rejection_carries_the_original_span() {
    let finder = finder_with_rejections();
    let text = "call 911:30 now";
    let findings = finder.find(text);
    match &findings[0] {
        Finding::Rejection(rejection) => {
            assert_eq!(
                &text[rejection.candidate.span.clone()],
                rejection.candidate.text
            );
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[test]
fn mixed_text_keeps_source_order() {
    let finder = finder();
    let references = finder.references("first Mt.1:2 then Jn.3:16 and last Rev.22:21 amen");
    let names: Vec<&str> = references
        .iter()
        .map(|reference| finder.canon().name(reference.book))
        .collect();
    assert_eq!(names, vec!["Matthew", "John", "Revelation"]);
}

#[test]
fn invalid_candidates_do_not_abort_the_scan() {
    let finder = finder();
    let references = finder.references("call 911:30 then read Jn3:16 aloud");
    assert_eq!(references.len(), 1);
    assert_eq!(finder.canon().name(references[0].book), "John");
}

#[test]
fn find_twice_yields_identical_sequences() {
    let finder = finder_with_rejections();
    let text = "Mt.1:2 x call 911:30 x Jn.3:16-17 end";
    assert_eq!(finder.find(text), finder.find(text));
}

#[test]
fn max_candidates_bounds_processing() {
    let finder = ReferenceFinder::with_config(
        Canon::standard(),
        FinderConfig {
            include_rejections: true,
            max_candidates: Some(2),
        },
    );
    let findings = finder.find("Mt.1:2 x Jn.3:16 x Lk.5:6 x");
    assert_eq!(findings.len(), 2);
}
