// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the system:
//   - where documents come from   (DocumentSource)
//   - who answers questions       (QuestionAnswerer)
//
// The application layer is written against these traits, so the
// built-in library, a JSON file, or a directory of .txt files are
// interchangeable, and the CLI can drive any answerer.

use anyhow::Result;

use crate::domain::document::Document;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can supply documents.
///
/// Implementations:
///   - BuiltinLibrary → the four reference passages
///   - TextDirLoader  → a directory of .txt files
///   - JsonCorpusFile → a JSON array of { title, text }
pub trait DocumentSource {
    /// Load all documents, in the order they should be ranked on ties.
    fn load_all(&self) -> Result<Vec<Document>>;

    /// Short human-readable description used in log lines
    fn describe(&self) -> String;
}

// ─── QuestionAnswerer ─────────────────────────────────────────────────────────
/// Any component that turns a question into a printable answer.
///
/// Answering is total: a question with no lexical overlap gets the
/// fallback message, not an error.
pub trait QuestionAnswerer {
    fn answer(&self, question: &str) -> String;
}
