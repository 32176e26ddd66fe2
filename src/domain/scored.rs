// ============================================================
// Layer 3 — Scored Document
// ============================================================
// One row of a ranking: a borrowed Document and its cosine
// similarity to the question.
//
// The score always lies in [0.0, 1.0] because every vector
// component is a non-negative word count.

use crate::domain::document::Document;

/// A document paired with its similarity to a query.
/// Borrows from the Corpus, so it cannot outlive it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument<'a> {
    pub score:    f64,
    pub document: &'a Document,
}

impl<'a> ScoredDocument<'a> {
    pub fn new(score: f64, document: &'a Document) -> Self {
        Self { score, document }
    }

    /// Citation entry, e.g. "Gravity and Orbits (score=0.37)"
    pub fn citation(&self) -> String {
        format!("{} (score={:.2})", self.document.title, self.score)
    }

    /// True when the document shares no words with the query
    pub fn is_zero(&self) -> bool {
        self.score == 0.0
    }
}
