// ============================================================
// Layer 5 — Top-k Retriever
// ============================================================
// Ranks every document in the corpus against a question.
//
//   question ──tokenize──vectorize──┐
//                                   ├─ cosine ─→ (score, doc)
//   each document ──tokenize──vectorize──┘
//
// Then:
//   1. stable sort, highest score first
//   2. keep the first k rows
//
// A stable sort means documents with equal scores stay in corpus
// order, so the ranking is fully deterministic.
//
// Boundaries:
//   k = 0            → empty ranking
//   k > corpus size  → every document, ranked

use crate::data::{tokenizer::tokenize, vectorizer::vectorize};
use crate::domain::{corpus::Corpus, scored::ScoredDocument};
use crate::retrieval::similarity::cosine_similarity;

/// Return the `k` documents most similar to `question`, best first.
pub fn retrieve_top_k<'a>(question: &str, corpus: &'a Corpus, k: usize) -> Vec<ScoredDocument<'a>> {
    let q_vec = vectorize(&tokenize(question));
    tracing::debug!(distinct_words = q_vec.len(), "vectorized question");

    let mut scored: Vec<ScoredDocument<'a>> = corpus
        .iter()
        .map(|doc| {
            let d_vec = vectorize(&tokenize(&doc.text));
            let score = cosine_similarity(&q_vec, &d_vec);
            tracing::debug!(title = %doc.title, score, "scored document");
            ScoredDocument::new(score, doc)
        })
        .collect();

    // sort_by is stable; total_cmp never panics
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(k);
    scored
}
