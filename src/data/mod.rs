// ============================================================
// Layer 4 — Data
// ============================================================
// Everything that produces text or turns text into vectors.
//
//   BuiltinLibrary / TextDirLoader   → Documents
//       │
//       ▼
//   tokenize()                       → ["lowercase", "words"]
//       │
//       ▼
//   vectorize()                      → { "word": count }
//
// Scoring and ranking live in Layer 5 (retrieval).

/// The four reference passages shipped with the binary
pub mod library;

/// Loads a directory of .txt files as documents
pub mod loader;

/// Lowercase ASCII-letter word splitting
pub mod tokenizer;

/// Bag-of-words frequency vectors
pub mod vectorizer;

/// Canned questions for the example runner
pub mod example_questions;
