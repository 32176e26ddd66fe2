// ============================================================
// Layer 5 — Retrieval Layer
// ============================================================
// The algorithmic core. Pure functions only: no I/O, no printing,
// no errors. Every function here is total over its inputs.
//
//   similarity.rs — cosine similarity of two word-count vectors
//   retriever.rs  — score every document, stable sort, top-k
//   composer.rs   — build the answer text with citations
//   pipeline.rs   — retrieve → fallback check → compose

/// Cosine similarity over sparse frequency vectors
pub mod similarity;

/// Top-k ranking with stable tie-breaking
pub mod retriever;

/// Templated answer assembly
pub mod composer;

/// The answer() entry point
pub mod pipeline;
