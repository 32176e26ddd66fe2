// ============================================================
// Layer 4 — Text Directory Loader
// ============================================================
// Loads every .txt file in a directory as one Document.
//
//   notes/
//     01_gravity.txt   → Document { title: "01_gravity", text: <file> }
//     02_optics.txt    → Document { title: "02_optics",  text: <file> }
//     README.md        → ignored (wrong extension)
//
// Files are sorted by file name before loading, because
// read_dir order is platform dependent and corpus order is the
// ranking tie-break.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Loads all .txt files from a given directory.
/// Implements the DocumentSource trait from Layer 3.
pub struct TextDirLoader {
    dir: PathBuf,
}

impl TextDirLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSource for TextDirLoader {
    fn load_all(&self) -> Result<Vec<Document>> {
        // A missing directory is an empty corpus, not a failure.
        // Every question will then get the fallback answer.
        if !self.dir.exists() {
            tracing::warn!(
                "Docs directory '{}' does not exist, using an empty corpus",
                self.dir.display()
            );
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut docs = Vec::with_capacity(paths.len());
        for path in &paths {
            match load_single_txt(path) {
                Ok(doc) => {
                    tracing::debug!("Loaded: {} ({} chars)", doc.title, doc.text.len());
                    docs.push(doc);
                }
                // One unreadable file (bad UTF-8, permissions) should not
                // take the whole corpus down
                Err(e) => {
                    tracing::warn!("Skipping '{}': {:#}", path.display(), e);
                }
            }
        }

        tracing::info!(
            "Loaded {} documents from '{}'",
            docs.len(),
            self.dir.display()
        );
        Ok(docs)
    }

    fn describe(&self) -> String {
        format!("directory '{}'", self.dir.display())
    }
}

/// Read one text file; the file stem becomes the title.
fn load_single_txt(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let title = path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Document::new(title, text))
}
