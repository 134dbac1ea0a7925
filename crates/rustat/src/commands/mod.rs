//! Subcommand handlers. Each handler reads the input, runs the engine
//! crate, and prints through `rustat-format`.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

pub mod basic;
pub mod diversity;
pub mod morph;
pub mod readability;
pub mod words;

/// Read the analyzed text from a file, or from stdin when the path is `-`.
pub(crate) fn read_text(input: &Path) -> Result<String> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("не удалось прочитать stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("не удалось прочитать файл {}", input.display()))?
    };
    if text.trim().is_empty() {
        bail!("анализируемый текст пуст");
    }
    Ok(text)
}
