//! # rustat-format
//!
//! **Tier 3 (Formatting)**
//!
//! This crate handles the rendering and serialization of `rustat` reports.
//! It supports aligned text tables, Markdown, TSV, JSON receipts, and CSV.
//!
//! ## What belongs here
//! * Table rendering (text/Markdown/TSV)
//! * Serialization logic (JSON/CSV)
//!
//! ## What does NOT belong here
//! * Business logic (counting, metric computation)
//! * CLI arg parsing

#![forbid(unsafe_code)]

use std::fmt::Write as _;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use serde::Serialize;

use rustat_types::{
    BASIC_PROPORTIONS_LABELS, BASIC_STATS_LABELS, BasicReport, DIVERSITY_STATS_LABELS,
    DiversityReport, MorphReport, READABILITY_STATS_LABELS, Receipt, ReadabilityReport,
    SCHEMA_VERSION, ToolInfo,
};

/// Label column widths for the aligned text tables. Diversity labels are
/// the longest (the spelled-out metric names), basic labels the shortest.
const BASIC_LABEL_WIDTH: usize = 20;
const READABILITY_LABEL_WIDTH: usize = 40;
const DIVERSITY_LABEL_WIDTH: usize = 60;
const VALUE_WIDTH: usize = 10;

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Wrap a report in the JSON receipt envelope and serialize it.
pub fn render_json<R: Serialize>(report: &R, mode: &str) -> Result<String> {
    let receipt = Receipt {
        schema_version: SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        tool: ToolInfo::current(),
        mode: mode.to_string(),
        report,
    };
    Ok(serde_json::to_string(&receipt)?)
}

fn text_header(s: &mut String, title: &str, label_width: usize) {
    let _ = writeln!(s, "{title:^label_width$}|{:^VALUE_WIDTH$}", "Значение");
    s.push_str(&"-".repeat(label_width + VALUE_WIDTH + 1));
    s.push('\n');
}

fn label_for(table: &[(&'static str, &'static str)], key: &str) -> &'static str {
    // The label tables and the canonical key orders are zipped in lockstep
    // by construction, so the lookup cannot miss.
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

// ------------
// Basic counts
// ------------

pub fn render_basic_text(report: &BasicReport) -> String {
    let mut s = String::new();
    text_header(&mut s, "Статистика текста", BASIC_LABEL_WIDTH);
    for (key, value) in report.counts() {
        let label = label_for(&BASIC_STATS_LABELS, key);
        let _ = writeln!(s, "{label:<BASIC_LABEL_WIDTH$}|{value:>VALUE_WIDTH$}");
    }
    s
}

pub fn render_basic_md(report: &BasicReport) -> String {
    let mut s = String::new();
    s.push_str("|Статистика|Значение|\n");
    s.push_str("|---|---:|\n");
    for (key, value) in report.counts() {
        let _ = writeln!(s, "|{}|{value}|", label_for(&BASIC_STATS_LABELS, key));
    }
    s
}

pub fn render_basic_tsv(report: &BasicReport) -> String {
    let mut s = String::new();
    s.push_str("key\tvalue\n");
    for (key, value) in report.counts() {
        let _ = writeln!(s, "{key}\t{value}");
    }
    s
}

pub fn write_basic_csv<W: Write>(out: &mut W, report: &BasicReport) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record(["key", "label", "value"])?;
    for (key, value) in report.counts() {
        wtr.write_record([key, label_for(&BASIC_STATS_LABELS, key), &value.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn render_basic_proportions_text(shares: &[(&'static str, f64)]) -> String {
    let mut s = String::new();
    text_header(&mut s, "Доли текста", BASIC_LABEL_WIDTH + 4);
    for (key, value) in shares {
        let label = label_for(&BASIC_PROPORTIONS_LABELS, key);
        let width = BASIC_LABEL_WIDTH + 4;
        let _ = writeln!(s, "{label:<width$}|{value:>VALUE_WIDTH$.4}");
    }
    s
}

pub fn render_basic_proportions_md(shares: &[(&'static str, f64)]) -> String {
    let mut s = String::new();
    s.push_str("|Статистика|Значение|\n");
    s.push_str("|---|---:|\n");
    for (key, value) in shares {
        let _ = writeln!(
            s,
            "|{}|{value:.4}|",
            label_for(&BASIC_PROPORTIONS_LABELS, key)
        );
    }
    s
}

pub fn render_basic_proportions_tsv(shares: &[(&'static str, f64)]) -> String {
    let mut s = String::new();
    s.push_str("key\tvalue\n");
    for (key, value) in shares {
        let _ = writeln!(s, "{key}\t{value}");
    }
    s
}

pub fn write_basic_proportions_csv<W: Write>(
    out: &mut W,
    shares: &[(&'static str, f64)],
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record(["key", "label", "value"])?;
    for (key, value) in shares {
        wtr.write_record([
            *key,
            label_for(&BASIC_PROPORTIONS_LABELS, key),
            &value.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

// -------------------------------
// Readability / diversity metrics
// -------------------------------

fn render_metrics_text(
    title: &str,
    label_width: usize,
    table: &[(&'static str, &'static str)],
    metrics: &[(&str, f64)],
) -> String {
    let mut s = String::new();
    text_header(&mut s, title, label_width);
    for (key, value) in metrics {
        let label = label_for(table, key);
        let _ = writeln!(s, "{label:<label_width$}|{value:>VALUE_WIDTH$.2}");
    }
    s
}

fn render_metrics_md(table: &[(&'static str, &'static str)], metrics: &[(&str, f64)]) -> String {
    let mut s = String::new();
    s.push_str("|Метрика|Значение|\n");
    s.push_str("|---|---:|\n");
    for (key, value) in metrics {
        let _ = writeln!(s, "|{}|{value:.2}|", label_for(table, key));
    }
    s
}

fn render_metrics_tsv(metrics: &[(&str, f64)]) -> String {
    let mut s = String::new();
    s.push_str("key\tvalue\n");
    for (key, value) in metrics {
        let _ = writeln!(s, "{key}\t{value}");
    }
    s
}

fn write_metrics_csv<W: Write>(
    out: &mut W,
    table: &[(&'static str, &'static str)],
    metrics: &[(&str, f64)],
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record(["key", "label", "value"])?;
    for (key, value) in metrics {
        wtr.write_record([*key, label_for(table, key), &value.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn render_readability_text(report: &ReadabilityReport) -> String {
    render_metrics_text(
        "Индексы удобочитаемости",
        READABILITY_LABEL_WIDTH,
        &READABILITY_STATS_LABELS,
        &report.metrics(),
    )
}

pub fn render_readability_md(report: &ReadabilityReport) -> String {
    render_metrics_md(&READABILITY_STATS_LABELS, &report.metrics())
}

pub fn render_readability_tsv(report: &ReadabilityReport) -> String {
    render_metrics_tsv(&report.metrics())
}

pub fn write_readability_csv<W: Write>(out: &mut W, report: &ReadabilityReport) -> Result<()> {
    write_metrics_csv(out, &READABILITY_STATS_LABELS, &report.metrics())
}

pub fn render_diversity_text(report: &DiversityReport) -> String {
    render_metrics_text(
        "Метрики лексического разнообразия",
        DIVERSITY_LABEL_WIDTH,
        &DIVERSITY_STATS_LABELS,
        &report.metrics(),
    )
}

pub fn render_diversity_md(report: &DiversityReport) -> String {
    render_metrics_md(&DIVERSITY_STATS_LABELS, &report.metrics())
}

pub fn render_diversity_tsv(report: &DiversityReport) -> String {
    render_metrics_tsv(&report.metrics())
}

pub fn write_diversity_csv<W: Write>(out: &mut W, report: &DiversityReport) -> Result<()> {
    write_metrics_csv(out, &DIVERSITY_STATS_LABELS, &report.metrics())
}

// ----------
// Morphology
// ----------

pub fn render_morph_text(report: &MorphReport, labels: &[(&'static str, &'static str)]) -> String {
    let mut s = String::new();
    for (category, counts) in &report.categories {
        let title = label_for(labels, category);
        let title = if title.is_empty() { category.as_str() } else { title };
        text_header(&mut s, title, BASIC_LABEL_WIDTH);
        for (value, count) in counts {
            let _ = writeln!(s, "{value:<BASIC_LABEL_WIDTH$}|{count:>VALUE_WIDTH$}");
        }
        s.push('\n');
    }
    s
}

pub fn render_morph_md(report: &MorphReport) -> String {
    let mut s = String::new();
    s.push_str("|Категория|Значение|Количество|\n");
    s.push_str("|---|---|---:|\n");
    for (category, counts) in &report.categories {
        for (value, count) in counts {
            let _ = writeln!(s, "|{category}|{value}|{count}|");
        }
    }
    s
}

pub fn render_morph_tsv(report: &MorphReport) -> String {
    let mut s = String::new();
    s.push_str("category\tvalue\tcount\n");
    for (category, counts) in &report.categories {
        for (value, count) in counts {
            let _ = writeln!(s, "{category}\t{value}\t{count}");
        }
    }
    s
}

pub fn write_morph_csv<W: Write>(out: &mut W, report: &MorphReport) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record(["category", "value", "count"])?;
    for (category, counts) in &report.categories {
        for (value, count) in counts {
            wtr.write_record([category.as_str(), value.as_str(), &count.to_string()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

// ---------------
// Word frequencies
// ---------------

pub fn render_words_text(words: &[(String, usize)]) -> String {
    let mut s = String::new();
    text_header(&mut s, "Частотность слов", BASIC_LABEL_WIDTH);
    for (word, count) in words {
        let _ = writeln!(s, "{word:<BASIC_LABEL_WIDTH$}|{count:>VALUE_WIDTH$}");
    }
    s
}

pub fn render_words_md(words: &[(String, usize)]) -> String {
    let mut s = String::new();
    s.push_str("|Слово|Количество|\n");
    s.push_str("|---|---:|\n");
    for (word, count) in words {
        let _ = writeln!(s, "|{word}|{count}|");
    }
    s
}

pub fn render_words_tsv(words: &[(String, usize)]) -> String {
    let mut s = String::new();
    s.push_str("word\tcount\n");
    for (word, count) in words {
        let _ = writeln!(s, "{word}\t{count}");
    }
    s
}

pub fn write_words_csv<W: Write>(out: &mut W, words: &[(String, usize)]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record(["word", "count"])?;
    for (word, count) in words {
        wtr.write_record([word.as_str(), &count.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
