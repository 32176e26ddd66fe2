// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A single titled passage in the library.
// Plain data with no behaviour: a title used for citations
// and the raw multi-sentence text that gets scored.
//
// Identity is the document's position in the Corpus, not its
// title, so two documents may share a title.

use serde::{Deserialize, Serialize};

/// A titled text passage.
/// Immutable once it has been placed in a Corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Shown in the citation list of every answer
    pub title: String,

    /// Raw text, possibly multi-line, split into sentences on '.'
    pub text: String,
}

impl Document {
    /// Create a new Document from anything string-like.
    ///
    /// Example:
    ///   let doc = Document::new("Gravity and Orbits", "Gravity is a force...");
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text:  text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_str_and_string() {
        let a = Document::new("Title", "Some text.");
        let b = Document::new(String::from("Title"), String::from("Some text."));
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_shape_is_title_and_text() {
        let doc  = Document::new("Basic Electricity", "Voltage pushes electrons.");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["title"], "Basic Electricity");
        assert_eq!(json["text"], "Voltage pushes electrons.");
    }
}
