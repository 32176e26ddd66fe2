// ============================================================
// Layer 6 — JSON Corpus File
// ============================================================
// Reads and writes a corpus as a JSON array:
//
//   [
//     { "title": "Gravity and Orbits", "text": "Gravity is a force..." },
//     { "title": "Basic Electricity",  "text": "Electric current is..." }
//   ]
//
// Array order is corpus order. `simple-rag export` writes this
// format, `--corpus <file>` reads it back.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

pub struct JsonCorpusFile {
    path: PathBuf,
}

impl JsonCorpusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write documents as pretty-printed JSON, creating parent
    /// directories if needed.
    pub fn save(&self, documents: &[Document]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(documents)?;

        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write corpus to '{}'", self.path.display()))?;

        tracing::debug!("Saved {} documents to '{}'", documents.len(), self.path.display());
        Ok(())
    }
}

impl DocumentSource for JsonCorpusFile {
    fn load_all(&self) -> Result<Vec<Document>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read corpus file '{}'", self.path.display()))?;

        let docs: Vec<Document> = serde_json::from_str(&json).with_context(|| {
            format!(
                "'{}' is not a JSON array of {{ \"title\", \"text\" }} objects",
                self.path.display()
            )
        })?;

        tracing::info!("Loaded {} documents from '{}'", docs.len(), self.path.display());
        Ok(docs)
    }

    fn describe(&self) -> String {
        format!("corpus file '{}'", self.path.display())
    }
}
