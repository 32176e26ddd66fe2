mod application;
mod cli;
mod data;
mod domain;
mod infra;
mod retrieval;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only answers
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive("simple_rag=info".parse()?)
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
