//! Reference finding: the pipeline orchestrator
//!
//! Runs the scanner over a text block and feeds each candidate through the
//! tokenizer and validator. Candidates are independent of each other; the
//! only shared state is the read-only canon, so one finder can serve many
//! text blocks (or threads) at once.
//!
//! Per-candidate failures never abort the scan. Depending on
//! [`FinderConfig::include_rejections`] they are silently dropped or
//! surfaced as [`Rejection`] values carrying the original span and the
//! specific reason - enough to diagnose why a near-miss was not recognized.

use crate::books::Canon;
use crate::lexing::{tokenize, TokenKind, TokenizeError};
use crate::scanning::{scan, Candidate};
use crate::validating::{validate, ChapterVerse, Reference, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options for one finder instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderConfig {
    /// Emit [`Finding::Rejection`] entries instead of dropping invalid
    /// candidates silently.
    pub include_rejections: bool,
    /// Cap on candidates processed per input, bounding worst-case work on
    /// hostile inputs. `None` means unlimited.
    pub max_candidates: Option<usize>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            include_rejections: false,
            max_candidates: None,
        }
    }
}

/// Why a candidate was rejected. Flattens the tokenizer and validator
/// error taxonomies into the one surface callers see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    InvalidCharacter { ch: char, position: usize },
    UnknownBook { name: String },
    MalformedChapterVerse { position: usize },
    InvalidRange { start: ChapterVerse, end: ChapterVerse },
    UnexpectedToken { kind: TokenKind, position: usize },
}

impl From<TokenizeError> for RejectReason {
    fn from(error: TokenizeError) -> Self {
        match error {
            TokenizeError::InvalidCharacter { ch, position } => {
                RejectReason::InvalidCharacter { ch, position }
            }
        }
    }
}

impl From<ValidationError> for RejectReason {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::UnknownBook { name } => RejectReason::UnknownBook { name },
            ValidationError::MalformedChapterVerse { position } => {
                RejectReason::MalformedChapterVerse { position }
            }
            ValidationError::InvalidRange { start, end } => {
                RejectReason::InvalidRange { start, end }
            }
            ValidationError::UnexpectedToken { kind, position } => {
                RejectReason::UnexpectedToken { kind, position }
            }
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InvalidCharacter { ch, position } => {
                write!(f, "invalid character '{}' at position {}", ch, position)
            }
            RejectReason::UnknownBook { name } => write!(f, "unknown book '{}'", name),
            RejectReason::MalformedChapterVerse { position } => {
                write!(f, "malformed chapter:verse at position {}", position)
            }
            RejectReason::InvalidRange { start, end } => {
                write!(f, "range end {} precedes start {}", end, start)
            }
            RejectReason::UnexpectedToken { kind, position } => {
                write!(f, "unexpected {} token at position {}", kind, position)
            }
        }
    }
}

/// A candidate that did not validate, with the original span for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub candidate: Candidate,
    pub reason: RejectReason,
}

/// One entry in a finder's output sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Finding {
    Reference(Reference),
    Rejection(Rejection),
}

impl Finding {
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Finding::Reference(reference) => Some(reference),
            Finding::Rejection(_) => None,
        }
    }
}

/// The orchestrator: scan, tokenize, validate.
#[derive(Debug, Clone)]
pub struct ReferenceFinder {
    canon: Canon,
    config: FinderConfig,
}

impl ReferenceFinder {
    /// A finder with default configuration (rejections dropped, no
    /// candidate cap).
    pub fn new(canon: Canon) -> Self {
        ReferenceFinder::with_config(canon, FinderConfig::default())
    }

    pub fn with_config(canon: Canon, config: FinderConfig) -> Self {
        ReferenceFinder { canon, config }
    }

    pub fn canon(&self) -> &Canon {
        &self.canon
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Lazily find citations in one text block. Early termination is just
    /// dropping the iterator; nothing is held across candidates.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Finding> + 'a {
        let limit = self.config.max_candidates.unwrap_or(usize::MAX);
        scan(text).take(limit).filter_map(move |candidate| {
            match self.evaluate(&candidate) {
                Ok(reference) => Some(Finding::Reference(reference)),
                Err(reason) => self
                    .config
                    .include_rejections
                    .then(|| Finding::Rejection(Rejection { candidate, reason })),
            }
        })
    }

    /// Find citations in one text block, collected in source order.
    pub fn find(&self, text: &str) -> Vec<Finding> {
        self.find_iter(text).collect()
    }

    /// Just the validated references, regardless of configuration.
    pub fn references(&self, text: &str) -> Vec<Reference> {
        self.find_iter(text)
            .filter_map(|finding| finding.as_reference().copied())
            .collect()
    }

    fn evaluate(&self, candidate: &Candidate) -> Result<Reference, RejectReason> {
        let tokens = tokenize(&candidate.text)?;
        Ok(validate(self.canon.trie(), &tokens)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder_with_rejections() -> ReferenceFinder {
        ReferenceFinder::with_config(
            Canon::standard(),
            FinderConfig {
                include_rejections: true,
                max_candidates: None,
            },
        )
    }

    #[test]
    fn test_single_reference() {
        let finder = ReferenceFinder::new(Canon::standard());
        let findings = finder.find("see Mt.16:24-17:2 for details");
        assert_eq!(findings.len(), 1);
        let reference = findings[0].as_reference().unwrap();
        assert_eq!(finder.canon().name(reference.book), "Matthew");
        assert_eq!(
            reference.start,
            ChapterVerse {
                chapter: 16,
                verse: 24,
            }
        );
        assert_eq!(
            reference.end,
            Some(ChapterVerse {
                chapter: 17,
                verse: 2,
            })
        );
    }

    #[test]
    fn test_rejections_dropped_by_default() {
        let finder = ReferenceFinder::new(Canon::standard());
        assert_eq!(finder.find("call 911:30 now"), vec![]);
    }

    #[test]
    fn test_rejections_surfaced_when_configured() {
        let finder = finder_with_rejections();
        let findings = finder.find("call 911:30 now");
        assert_eq!(findings.len(), 1);
        match &findings[0] {
            Finding::Rejection(rejection) => {
                assert_eq!(rejection.candidate.span, 0..12);
                assert!(matches!(
                    rejection.reason,
                    RejectReason::UnknownBook { .. }
                ));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_max_candidates_caps_work() {
        let finder = ReferenceFinder::with_config(
            Canon::standard(),
            FinderConfig {
                include_rejections: false,
                max_candidates: Some(1),
            },
        );
        let findings = finder.find("Mt.1:2 x Jn.3:16 x");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_references_convenience() {
        let finder = finder_with_rejections();
        let references = finder.references("call 911:30 then read Jn3:16 aloud");
        assert_eq!(references.len(), 1);
        assert_eq!(finder.canon().name(references[0].book), "John");
    }

    #[test]
    fn test_find_is_idempotent() {
        let finder = finder_with_rejections();
        let text = "Mt.1:2 x call 911:30 x Jn.3:16 end";
        assert_eq!(finder.find(text), finder.find(text));
    }
}
