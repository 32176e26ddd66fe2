// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits that name the concepts of the
// system. Nothing in here does I/O or scoring.
//
//   Document        → one titled passage
//   Corpus          → the ordered, read-only set of passages
//   ScoredDocument  → a passage plus its similarity to a question
//   traits          → DocumentSource and QuestionAnswerer seams

// A titled text passage
pub mod document;

// The ordered collection every question is scored against
pub mod corpus;

// A ranking row: document reference + cosine score
pub mod scored;

// Core abstractions that other layers implement
pub mod traits;
