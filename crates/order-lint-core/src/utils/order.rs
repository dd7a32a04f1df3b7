//! Order validation: finds the first point where a candidate sequence
//! diverges from its sorted counterpart.

use crate::model::Span;

/// A comparison candidate: a node's canonical key plus its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Canonical comparison key.
    pub key: String,
    /// Span of the originating node.
    pub span: Span,
}

impl Candidate {
    /// Creates a candidate.
    #[must_use]
    pub fn new(key: impl Into<String>, span: Span) -> Self {
        Self {
            key: key.into(),
            span,
        }
    }
}

/// The first index where declaration order disagrees with sorted order.
#[derive(Debug)]
pub struct Divergence<'a> {
    /// Index of the disagreement.
    pub index: usize,
    /// Candidate that sorted order expects at `index`.
    pub expected: &'a Candidate,
    /// Candidate actually declared at `index`.
    pub actual: &'a Candidate,
}

/// Compares the candidates against a stably sorted copy and returns the
/// first index where the keys differ.
///
/// Keys are compared with plain `str` ordering (lexicographic by code
/// point). The sort is stable and ties keep original positions, so equal
/// keys never register as a mismatch. At most one divergence is reported;
/// later misorderings are not enumerated.
#[must_use]
pub fn first_divergence(candidates: &[Candidate]) -> Option<Divergence<'_>> {
    let mut sorted: Vec<&Candidate> = candidates.iter().collect();
    sorted.sort_by(|a, b| a.key.cmp(&b.key));

    sorted
        .into_iter()
        .zip(candidates)
        .enumerate()
        .find_map(|(index, (expected, actual))| {
            (expected.key != actual.key).then_some(Divergence {
                index,
                expected,
                actual,
            })
        })
}
