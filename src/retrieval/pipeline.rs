// ============================================================
// Layer 5 — Retrieval Pipeline
// ============================================================
// The single entry point of the core:
//
//   answer(question, corpus, k)
//     │
//     ├─ retrieve_top_k()      → ranked (score, document) rows
//     │
//     ├─ every score == 0.0?   → FALLBACK_ANSWER
//     │
//     └─ compose_answer()      → templated answer with sources
//
// Stateless: the same question and corpus always give the same
// bytes back.

use crate::domain::corpus::Corpus;
use crate::retrieval::{composer::compose_answer, retriever::retrieve_top_k};

/// Documents retrieved when the caller does not choose
pub const DEFAULT_TOP_K: usize = 2;

pub const FALLBACK_ANSWER: &str = "I couldn't find helpful information for that question \
in my small library. Try rephrasing or add more documents.";

/// Answer `question` from the `k` most similar documents in `corpus`.
pub fn answer(question: &str, corpus: &Corpus, k: usize) -> String {
    let ranked = retrieve_top_k(question, corpus, k);

    // Vacuously true for an empty ranking (k = 0 or empty corpus)
    if ranked.iter().all(|hit| hit.is_zero()) {
        tracing::debug!(retrieved = ranked.len(), "no lexical overlap, using fallback");
        return FALLBACK_ANSWER.to_string();
    }

    compose_answer(question, &ranked)
}
