use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use ragconf::ModelSupplier;

use super::commands;

/// Entry point for the `ragconf` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "ragconf",
    about = "Inspect model metadata and validate RAG assistant settings",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in model registry.
    Models(ModelsArgs),
    /// Show the supplier and metadata a model name resolves to.
    Resolve(ResolveArgs),
    /// Load and validate an assistant settings file.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct ModelsArgs {
    /// Only list models of this supplier (e.g. openai, anthropic).
    #[arg(long)]
    pub supplier: Option<ModelSupplier>,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Model name, version suffix included (e.g. claude-3-opus-20240229).
    pub model: String,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Settings file (defaults to ~/.ragconf/assistant.json).
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Override the LLM model; its supplier is picked from the registry.
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Models(args) => commands::list_models(args),
            Command::Resolve(args) => commands::resolve_model(args),
            Command::Check(args) => commands::check_settings(args),
        }
    }
}
