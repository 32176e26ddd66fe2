// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to the
// application layer. This is the only layer that prints.
//
// Reference: Rust Book §12 (Building a CLI Program)

pub mod commands;
pub mod session;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use commands::{AskArgs, Commands, CorpusArgs, ExamplesArgs, ExportArgs};

use crate::application::ask_use_case::{load_corpus, AskConfig, AskUseCase};
use crate::data::example_questions::EXAMPLE_QUESTIONS;
use crate::infra::corpus_store::JsonCorpusFile;

#[derive(Parser, Debug)]
#[command(
    name = "simple-rag",
    version,
    about = "Answer questions from a tiny document library using word-count vectors and cosine similarity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Ask(args)         => run_ask(args),
            Commands::Interactive(args) => run_interactive(args),
            Commands::Examples(args)    => run_examples(args),
            Commands::Info              => session::write_system_info(&mut io::stdout().lock()),
            Commands::Export(args)      => run_export(args),
        }
    }
}

fn build_use_case(args: CorpusArgs) -> Result<AskUseCase> {
    let config: AskConfig = args.into();
    AskUseCase::new(&config)
}

fn run_ask(args: AskArgs) -> Result<()> {
    let use_case = build_use_case(args.corpus)?;
    session::write_single_answer(&use_case, &args.question, &mut io::stdout().lock())
}

fn run_interactive(args: CorpusArgs) -> Result<()> {
    let use_case = build_use_case(args)?;
    tracing::info!(
        documents = use_case.corpus().len(),
        top_k = use_case.top_k(),
        "starting interactive session"
    );
    let stdin    = io::stdin();
    let mut out  = io::stdout().lock();

    let count = session::run_interactive(&use_case, stdin.lock(), &mut out)?;
    tracing::info!("Interactive session ended after {} questions", count);
    Ok(())
}

fn run_examples(args: ExamplesArgs) -> Result<()> {
    let use_case = build_use_case(args.corpus)?;
    let stdin    = io::stdin();
    let mut out  = io::stdout().lock();

    session::run_examples(&use_case, &EXAMPLE_QUESTIONS, args.pause, stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    let config: AskConfig = args.corpus.into();
    let corpus = load_corpus(config.source().as_ref())?;

    JsonCorpusFile::new(args.out.clone()).save(corpus.documents())?;
    println!("Exported {} documents to '{}'", corpus.len(), args.out.display());
    Ok(())
}
