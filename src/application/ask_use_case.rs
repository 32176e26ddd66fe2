// ============================================================
// Layer 2 — Ask Use Case
// ============================================================
// Owns a loaded Corpus and answers questions against it.
//
//   Step 1: Pick a DocumentSource from the config   (Layer 4 / 6)
//   Step 2: Load and validate the documents         (Layer 3)
//   Step 3: For each question, run the pipeline     (Layer 5)
//
// The corpus is loaded once; every answer after that only
// borrows it.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::{library::BuiltinLibrary, loader::TextDirLoader};
use crate::domain::{
    corpus::Corpus,
    traits::{DocumentSource, QuestionAnswerer},
};
use crate::infra::corpus_store::JsonCorpusFile;
use crate::retrieval::pipeline::{self, DEFAULT_TOP_K};

// ─── Ask Configuration ───────────────────────────────────────────────────────
// Where documents come from and how many to retrieve.
// Built from CLI flags; the application layer never sees clap types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskConfig {
    pub top_k:       usize,
    /// JSON corpus file, takes priority over `docs_dir`
    pub corpus_file: Option<PathBuf>,
    /// Directory of .txt files
    pub docs_dir:    Option<PathBuf>,
}

impl Default for AskConfig {
    fn default() -> Self {
        Self {
            top_k:       DEFAULT_TOP_K,
            corpus_file: None,
            docs_dir:    None,
        }
    }
}

impl AskConfig {
    /// The DocumentSource this config points at.
    pub fn source(&self) -> Box<dyn DocumentSource> {
        match (&self.corpus_file, &self.docs_dir) {
            (Some(file), _)   => Box::new(JsonCorpusFile::new(file.clone())),
            (None, Some(dir)) => Box::new(TextDirLoader::new(dir.clone())),
            (None, None)      => Box::new(BuiltinLibrary::new()),
        }
    }
}

/// Load and validate documents from any source.
pub fn load_corpus(source: &dyn DocumentSource) -> Result<Corpus> {
    let docs   = source.load_all()?;
    let corpus = Corpus::from_documents(docs)
        .with_context(|| format!("Invalid document in {}", source.describe()))?;

    if corpus.is_empty() {
        tracing::warn!("{} supplied no documents, every question will get the fallback answer", source.describe());
    } else {
        tracing::info!("Corpus ready: {} documents from {}", corpus.len(), source.describe());
    }
    Ok(corpus)
}

// ─── AskUseCase ───────────────────────────────────────────────────────────────
pub struct AskUseCase {
    corpus: Corpus,
    top_k:  usize,
}

impl AskUseCase {
    /// Load the corpus described by `config`.
    pub fn new(config: &AskConfig) -> Result<Self> {
        let corpus = load_corpus(config.source().as_ref())?;
        Ok(Self::with_corpus(corpus, config.top_k))
    }

    /// Wrap an already-built corpus.
    pub fn with_corpus(corpus: Corpus, top_k: usize) -> Self {
        Self { corpus, top_k }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }
}

impl QuestionAnswerer for AskUseCase {
    fn answer(&self, question: &str) -> String {
        tracing::debug!(question, top_k = self.top_k, "answering");
        pipeline::answer(question, &self.corpus, self.top_k)
    }
}
