//! # rustat-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the report structs and contracts shared by the
//! `rustat` engines. It contains only data types, Serde definitions,
//! canonical key orders, the Russian label tables, and `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (reports, receipts)
//! * Serialization/Deserialization logic
//! * Canonical metric-name orders and display labels
//!
//! ## What does NOT belong here
//! * Tokenization or counting logic
//! * CLI argument parsing
//! * I/O

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The current schema version for all receipt types.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "rustat".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Envelope wrapping any report for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt<R> {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub mode: String,
    pub report: R,
}

// ------------
// Basic counts
// ------------

/// Raw counts produced by the basic counter.
///
/// `c_letters` and `c_syllables` are per-word histograms keyed by letter
/// and syllable count; `BTreeMap` keeps them ordered by key. The scalar
/// counts follow in the canonical order of [`BASIC_STATS_LABELS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicReport {
    pub c_letters: BTreeMap<usize, usize>,
    pub c_syllables: BTreeMap<usize, usize>,
    pub n_sents: usize,
    pub n_words: usize,
    pub n_unique_words: usize,
    pub n_long_words: usize,
    pub n_complex_words: usize,
    pub n_simple_words: usize,
    pub n_monosyllable_words: usize,
    pub n_polysyllable_words: usize,
    pub n_chars: usize,
    pub n_letters: usize,
    pub n_spaces: usize,
    pub n_syllables: usize,
    pub n_punctuations: usize,
}

impl BasicReport {
    /// The thirteen scalar counts in canonical key order.
    pub fn counts(&self) -> [(&'static str, usize); 13] {
        [
            ("n_sents", self.n_sents),
            ("n_words", self.n_words),
            ("n_unique_words", self.n_unique_words),
            ("n_long_words", self.n_long_words),
            ("n_complex_words", self.n_complex_words),
            ("n_simple_words", self.n_simple_words),
            ("n_monosyllable_words", self.n_monosyllable_words),
            ("n_polysyllable_words", self.n_polysyllable_words),
            ("n_chars", self.n_chars),
            ("n_letters", self.n_letters),
            ("n_spaces", self.n_spaces),
            ("n_syllables", self.n_syllables),
            ("n_punctuations", self.n_punctuations),
        ]
    }
}

/// Russian display labels for the basic counts, in canonical order.
pub const BASIC_STATS_LABELS: [(&str, &str); 13] = [
    ("n_sents", "Предложения"),
    ("n_words", "Слова"),
    ("n_unique_words", "Уникальные слова"),
    ("n_long_words", "Длинные слова"),
    ("n_complex_words", "Сложные слова"),
    ("n_simple_words", "Простые слова"),
    ("n_monosyllable_words", "Односложные слова"),
    ("n_polysyllable_words", "Многосложные слова"),
    ("n_chars", "Символы"),
    ("n_letters", "Буквы"),
    ("n_spaces", "Пробелы"),
    ("n_syllables", "Слоги"),
    ("n_punctuations", "Знаки препинания"),
];

/// Russian display labels for the derived proportions, in the order the
/// basic engine emits them.
pub const BASIC_PROPORTIONS_LABELS: [(&str, &str); 10] = [
    ("p_unique_words", "Доля уникальных слов"),
    ("p_long_words", "Доля длинных слов"),
    ("p_complex_words", "Доля сложных слов"),
    ("p_simple_words", "Доля простых слов"),
    ("p_monosyllable_words", "Доля односложных слов"),
    ("p_polysyllable_words", "Доля многосложных слов"),
    ("p_letters", "Доля букв"),
    ("p_spaces", "Доля пробелов"),
    ("p_syllables", "Слоги на слово"),
    ("p_punctuations", "Доля знаков препинания"),
];

// -----------
// Readability
// -----------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub flesch_kincaid_grade: f64,
    pub flesch_reading_easy: f64,
    pub coleman_liau_index: f64,
    pub smog_index: f64,
    pub automated_readability_index: f64,
    pub lix: f64,
}

impl ReadabilityReport {
    /// The six indices in canonical key order.
    pub fn metrics(&self) -> [(&'static str, f64); 6] {
        [
            ("flesch_kincaid_grade", self.flesch_kincaid_grade),
            ("flesch_reading_easy", self.flesch_reading_easy),
            ("coleman_liau_index", self.coleman_liau_index),
            ("smog_index", self.smog_index),
            (
                "automated_readability_index",
                self.automated_readability_index,
            ),
            ("lix", self.lix),
        ]
    }
}

/// Russian display labels for the readability indices, in canonical order.
pub const READABILITY_STATS_LABELS: [(&str, &str); 6] = [
    ("flesch_kincaid_grade", "Тест Флеша-Кинкайда"),
    ("flesch_reading_easy", "Индекс удобочитаемости Флеша"),
    ("coleman_liau_index", "Индекс Колман-Лиау"),
    ("smog_index", "Индекс SMOG"),
    (
        "automated_readability_index",
        "Автоматический индекс удобочитаемости",
    ),
    ("lix", "Индекс удобочитаемости LIX"),
];

// -----------------
// Lexical diversity
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversityReport {
    pub ttr: f64,
    pub rttr: f64,
    pub cttr: f64,
    pub httr: f64,
    pub sttr: f64,
    pub mttr: f64,
    pub dttr: f64,
    pub mattr: f64,
    pub msttr: f64,
    pub mtld: f64,
    pub mamtld: f64,
    pub hdd: f64,
    pub simpson_index: f64,
    pub hapax_index: f64,
}

impl DiversityReport {
    /// The fourteen metrics in canonical key order.
    pub fn metrics(&self) -> [(&'static str, f64); 14] {
        [
            ("ttr", self.ttr),
            ("rttr", self.rttr),
            ("cttr", self.cttr),
            ("httr", self.httr),
            ("sttr", self.sttr),
            ("mttr", self.mttr),
            ("dttr", self.dttr),
            ("mattr", self.mattr),
            ("msttr", self.msttr),
            ("mtld", self.mtld),
            ("mamtld", self.mamtld),
            ("hdd", self.hdd),
            ("simpson_index", self.simpson_index),
            ("hapax_index", self.hapax_index),
        ]
    }
}

/// Russian display labels for the diversity metrics, in canonical order.
pub const DIVERSITY_STATS_LABELS: [(&str, &str); 14] = [
    ("ttr", "Type-Token Ratio (TTR)"),
    ("rttr", "Root Type-Token Ratio (RTTR)"),
    ("cttr", "Corrected Type-Token Ratio (CTTR)"),
    ("httr", "Herdan Type-Token Ratio (HTTR)"),
    ("sttr", "Summer Type-Token Ratio (STTR)"),
    ("mttr", "Mass Type-Token Ratio (MTTR)"),
    ("dttr", "Dugast Type-Token Ratio (DTTR)"),
    ("mattr", "Moving Average Type-Token Ratio (MATTR)"),
    ("msttr", "Mean Segmental Type-Token Ratio (MSTTR)"),
    ("mtld", "Measure of Textual Lexical Diversity (MTLD)"),
    (
        "mamtld",
        "Moving Average Measure of Textual Lexical Diversity (MAMTLD)",
    ),
    ("hdd", "Hypergeometric Distribution D (HD-D)"),
    ("simpson_index", "Индекс Симпсона"),
    ("hapax_index", "Гапакс-индекс"),
];

// ----------
// Morphology
// ----------

/// Tag-value distributions per grammatical category.
///
/// Keys are category names (the fixed 12), values map a grammeme value to
/// its occurrence count. Unknown values are grouped under `"none"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MorphReport {
    pub categories: BTreeMap<String, BTreeMap<String, usize>>,
}

/// The bucket name used for words a category carries no value for.
pub const MORPH_NONE_KEY: &str = "none";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_orders_match_label_tables() {
        let basic = BasicReport {
            c_letters: BTreeMap::new(),
            c_syllables: BTreeMap::new(),
            n_sents: 0,
            n_words: 0,
            n_unique_words: 0,
            n_long_words: 0,
            n_complex_words: 0,
            n_simple_words: 0,
            n_monosyllable_words: 0,
            n_polysyllable_words: 0,
            n_chars: 0,
            n_letters: 0,
            n_spaces: 0,
            n_syllables: 0,
            n_punctuations: 0,
        };
        for ((key, _), (label_key, _)) in basic.counts().iter().zip(BASIC_STATS_LABELS.iter()) {
            assert_eq!(key, label_key);
        }

        let diversity = DiversityReport {
            ttr: 0.0,
            rttr: 0.0,
            cttr: 0.0,
            httr: 0.0,
            sttr: 0.0,
            mttr: 0.0,
            dttr: 0.0,
            mattr: 0.0,
            msttr: 0.0,
            mtld: 0.0,
            mamtld: 0.0,
            hdd: 0.0,
            simpson_index: 0.0,
            hapax_index: 0.0,
        };
        for ((key, _), (label_key, _)) in
            diversity.metrics().iter().zip(DIVERSITY_STATS_LABELS.iter())
        {
            assert_eq!(key, label_key);
        }

        let readability = ReadabilityReport {
            flesch_kincaid_grade: 0.0,
            flesch_reading_easy: 0.0,
            coleman_liau_index: 0.0,
            smog_index: 0.0,
            automated_readability_index: 0.0,
            lix: 0.0,
        };
        for ((key, _), (label_key, _)) in readability
            .metrics()
            .iter()
            .zip(READABILITY_STATS_LABELS.iter())
        {
            assert_eq!(key, label_key);
        }
    }

    #[test]
    fn diversity_report_serializes_with_canonical_field_order() {
        let report = DiversityReport {
            ttr: 1.0,
            rttr: 0.0,
            cttr: 0.0,
            httr: 0.0,
            sttr: 0.0,
            mttr: 0.0,
            dttr: 0.0,
            mattr: 0.0,
            msttr: 0.0,
            mtld: 0.0,
            mamtld: 0.0,
            hdd: -1.0,
            simpson_index: 0.0,
            hapax_index: 0.0,
        };
        let json = serde_json::to_string(&report).unwrap();
        let ttr_pos = json.find("\"ttr\"").unwrap();
        let hdd_pos = json.find("\"hdd\"").unwrap();
        let hapax_pos = json.find("\"hapax_index\"").unwrap();
        assert!(ttr_pos < hdd_pos && hdd_pos < hapax_pos);
    }
}
