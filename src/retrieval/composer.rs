// ============================================================
// Layer 5 — Answer Composer
// ============================================================
// Builds the printed answer from a ranking. No text is generated;
// the answer is assembled from sentences already in the documents.
//
// For each ranked document, best first:
//   1. split its text on '.'
//   2. trim every fragment, drop empty ones
//   3. keep the first two fragments (fewer if there aren't two)
//   4. record a citation "<title> (score=0.37)"
//
// Layout:
//
//   Here’s a helpful explanation based on what I found:
//    - <sentence>
//    - <sentence>
//
//   Why these lines? Because ...
//
//   Sources:
//    • <citation>
//
// The output is a pure function of the ranking.

use crate::domain::scored::ScoredDocument;

pub const ANSWER_HEADER: &str = "Here’s a helpful explanation based on what I found:";

pub const RATIONALE: &str = "Why these lines? Because they are most similar to your \
question using word-matching math (cosine similarity).";

/// Sentences taken from each retrieved document
pub const SENTENCES_PER_DOCUMENT: usize = 2;

/// The first `limit` non-empty '.'-delimited fragments of `text`, trimmed.
pub fn leading_sentences(text: &str, limit: usize) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(limit)
        .collect()
}

/// Assemble the answer text for a ranking.
///
/// `question` is not used in the output; it is only logged.
pub fn compose_answer(question: &str, ranked: &[ScoredDocument<'_>]) -> String {
    tracing::debug!(question, sources = ranked.len(), "composing answer");

    let mut sentences = Vec::new();
    let mut sources   = Vec::with_capacity(ranked.len());

    for hit in ranked {
        sources.push(hit.citation());
        sentences.extend(leading_sentences(&hit.document.text, SENTENCES_PER_DOCUMENT));
    }

    let bullets = sentences.join("\n - ");
    let cited   = sources
        .iter()
        .map(|s| format!(" • {s}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{ANSWER_HEADER}\n - {bullets}\n\n{RATIONALE}\n\nSources:\n{cited}")
}
