// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Subcommands:
//   ask          — answer one question and exit
//   interactive  — prompt loop on stdin
//   examples     — run the canned example questions
//   info         — explain how the pipeline works
//   export       — write the active corpus to a JSON file
//
// Every command that touches documents shares CorpusArgs, which
// is converted into the application-layer AskConfig.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::ask_use_case::AskConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a single question
    Ask(AskArgs),

    /// Ask questions one after another until 'quit'
    Interactive(CorpusArgs),

    /// Run the built-in example questions
    Examples(ExamplesArgs),

    /// Show how retrieval and answering work
    Info,

    /// Write the active corpus to a JSON file
    Export(ExportArgs),
}

/// Where documents come from and how many to retrieve.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Number of documents to retrieve per question
    #[arg(long, default_value_t = 2)]
    pub top_k: usize,

    /// JSON file holding an array of { "title", "text" } documents
    #[arg(long, conflicts_with = "docs_dir")]
    pub corpus: Option<PathBuf>,

    /// Directory of .txt files, one document per file
    #[arg(long)]
    pub docs_dir: Option<PathBuf>,
}

/// Boundary between Layer 1 and Layer 2
impl From<CorpusArgs> for AskConfig {
    fn from(a: CorpusArgs) -> Self {
        AskConfig {
            top_k:       a.top_k,
            corpus_file: a.corpus,
            docs_dir:    a.docs_dir,
        }
    }
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to answer
    #[arg(long)]
    pub question: String,

    #[command(flatten)]
    pub corpus: CorpusArgs,
}

#[derive(Args, Debug)]
pub struct ExamplesArgs {
    /// Wait for Enter between examples
    #[arg(long)]
    pub pause: bool,

    #[command(flatten)]
    pub corpus: CorpusArgs,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination JSON file
    #[arg(long)]
    pub out: PathBuf,

    #[command(flatten)]
    pub corpus: CorpusArgs,
}
