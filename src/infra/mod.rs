// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File formats that sit outside the core:
//
//   corpus_store.rs — JSON corpus files
//                     Saves the active corpus with
//                     `simple-rag export` and loads it back with
//                     `--corpus <file>`, so a library can be
//                     edited without recompiling.

/// JSON corpus file reading and writing
pub mod corpus_store;
