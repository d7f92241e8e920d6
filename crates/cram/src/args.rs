//! Clap argument definitions for the `cram` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "cram")]
#[command(about = "Study assistant - keyword extraction for study material")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `cram` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract ranked keywords from a document
    Extract(ExtractCommand),

    /// Extract keywords with surrounding text context
    Context(ContextCommand),
}

/// Shared flags configuring the keyword ranker.
#[derive(Args, Debug, Clone, Default)]
pub struct RankerArgs {
    /// Language of the document [default: english]
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Path to a GloVe-style word-embedding table
    #[arg(long)]
    pub embeddings: Option<PathBuf>,

    /// Path to a domain vocabulary file (one term per line, # comments)
    #[arg(long)]
    pub domain_vocab: Option<PathBuf>,
}

/// Shared input flags.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Document to analyze (.txt or .json), or '-' for stdin
    pub file: String,

    /// JSON field to extract text from (can be specified multiple times)
    #[arg(long = "field")]
    pub fields: Vec<String>,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `cram extract`.
#[derive(Args, Debug, Clone)]
pub struct ExtractCommand {
    /// Input document.
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum keywords to return
    #[arg(short = 'n', long, default_value_t = cram_keywords::DEFAULT_NUM_KEYWORDS)]
    pub num_keywords: usize,

    /// Minimum keyword length in characters
    #[arg(short = 'm', long, default_value_t = cram_keywords::DEFAULT_MIN_LENGTH)]
    pub min_length: usize,

    /// Ranker configuration.
    #[command(flatten)]
    pub ranker: RankerArgs,

    /// Output formatting flags.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `cram context`.
#[derive(Args, Debug, Clone)]
pub struct ContextCommand {
    /// Input document.
    #[command(flatten)]
    pub input: InputArgs,

    /// Context window size in characters on each side of a match
    #[arg(short = 'w', long, default_value_t = cram_keywords::DEFAULT_CONTEXT_WINDOW)]
    pub window: usize,

    /// Ranker configuration.
    #[command(flatten)]
    pub ranker: RankerArgs,

    /// Output formatting flags.
    #[command(flatten)]
    pub output: OutputArgs,
}
