// ============================================================
// Layer 3 — Corpus Domain Type
// ============================================================
// The ordered, read-only collection of documents that every
// question is scored against.
//
// A Corpus is built once at start-up and then only borrowed.
// There is no insert or remove: the order documents were
// supplied in is the tie-break order used by the Retriever.

use anyhow::{bail, Result};

use crate::domain::document::Document;

/// An ordered, immutable sequence of Documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Build a Corpus from documents supplied by a DocumentSource.
    ///
    /// Records are validated here, at the boundary, so the
    /// retrieval core can assume well-formed input:
    ///   - a blank title is rejected (it would produce an unreadable citation)
    ///   - empty text is accepted, it simply never matches anything
    pub fn from_documents(documents: Vec<Document>) -> Result<Self> {
        for (position, doc) in documents.iter().enumerate() {
            if doc.title.trim().is_empty() {
                bail!("document at position {position} has an empty title");
            }
        }
        Ok(Self { documents })
    }

    /// Documents in corpus order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_supplied_order() {
        let corpus = Corpus::from_documents(vec![
            Document::new("B", "second"),
            Document::new("A", "first"),
        ])
        .unwrap();

        let titles: Vec<&str> = corpus.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_rejects_blank_title() {
        let err = Corpus::from_documents(vec![
            Document::new("Fine", "text"),
            Document::new("   ", "text"),
        ])
        .unwrap_err();

        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_accepts_empty_text() {
        let corpus = Corpus::from_documents(vec![Document::new("Empty", "")]).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_empty_corpus_is_valid() {
        let corpus = Corpus::from_documents(Vec::new()).unwrap();
        assert!(corpus.is_empty());
    }
}
