//! Command line surface. Argument structs only, no business logic.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    /// Aligned two-column table with Russian labels.
    Text,
    /// Markdown table.
    Md,
    /// Tab-separated values with machine-readable keys.
    Tsv,
    /// JSON receipt with schema version and tool info.
    Json,
    /// CSV with key, label, and value columns.
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "rustat",
    version,
    about = "Статистика текстов на русском языке",
    propagate_version = true
)]
pub struct Cli {
    /// Output format for every subcommand.
    #[arg(long, global = true, value_enum, default_value_t = TableFormat::Text)]
    pub format: TableFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Basic counts: sentences, words, letters, syllables.
    Basic(BasicArgs),
    /// Readability indices adapted for Russian.
    Readability(InputArgs),
    /// Lexical diversity metrics.
    Diversity(InputArgs),
    /// Morphological tag distributions.
    Morph(MorphArgs),
    /// Most frequent words.
    Words(WordsArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct InputArgs {
    /// Input file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BasicArgs {
    /// Input file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Report word counts as shares of the word total and character
    /// counts as shares of the character total.
    #[arg(long)]
    pub proportions: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MorphArgs {
    /// Input file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Tag dictionary: one `word<TAB>category=value,...` entry per line.
    #[arg(long)]
    pub dict: PathBuf,

    /// Restrict the report to these categories (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Drop the `none` bucket of words a category carries no value for.
    #[arg(long)]
    pub filter_none: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct WordsArgs {
    /// Input file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// How many of the most frequent words to report.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}
