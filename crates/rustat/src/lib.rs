//! # rustat
//!
//! **CLI Binary**
//!
//! This is the entry point for the `rustat` command-line application.
//! It orchestrates the engine crates to analyze Russian text.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Read the input text (file or stdin)
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

#![forbid(unsafe_code)]

use anyhow::{Error, Result};
use clap::Parser;

pub mod cli;
pub mod commands;

use cli::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Basic(args) => commands::basic::run(&args, cli.format),
        Commands::Readability(args) => commands::readability::run(&args, cli.format),
        Commands::Diversity(args) => commands::diversity::run(&args, cli.format),
        Commands::Morph(args) => commands::morph::run(&args, cli.format),
        Commands::Words(args) => commands::words::run(&args, cli.format),
    }
}

/// Render an error chain with followup hints where the cause is a known
/// usage mistake.
pub fn format_error(err: &Error) -> String {
    let mut out = format!("Ошибка: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nПодсказки:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("не удалось прочитать файл") {
        out.push("Проверьте, что путь существует и файл доступен для чтения.".to_string());
        out.push("Передайте `-`, чтобы читать текст из stdin.".to_string());
    }

    if haystack.contains("анализируемый текст пуст")
        || haystack.contains("отсутствуют слова")
    {
        out.push("Передайте непустой текст на русском языке.".to_string());
    }

    if haystack.contains("отсутствует в справочнике") {
        out.push("Список категорий выводит `rustat morph --help`.".to_string());
    }

    out
}
