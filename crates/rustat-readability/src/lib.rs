//! Readability indices over basic counts.
//!
//! Each index is a fixed linear/sqrt combination of counts the basic
//! counter already produced. Zero sentence/word counts cannot reach these
//! functions through `compute`: the basic counter rejects empty input
//! upstream. Calling the formula functions directly with zero
//! denominators yields IEEE infinities, as documented per function.

#![forbid(unsafe_code)]

use anyhow::Result;

use rustat_extract::{SentExtractor, WordExtractor};
use rustat_types::{BasicReport, ReadabilityReport};

mod coeff {
    //! Named coefficients, adapted for Russian text.

    pub const FLESCH_KINCAID_A: f64 = 0.49;
    pub const FLESCH_KINCAID_B: f64 = 7.3;
    pub const FLESCH_KINCAID_C: f64 = 16.59;

    pub const FLESCH_EASE_A: f64 = 1.3;
    pub const FLESCH_EASE_B: f64 = 60.1;
    pub const FLESCH_EASE_C: f64 = 206.835;

    pub const COLEMAN_LIAU_A: f64 = 6.26;
    pub const COLEMAN_LIAU_B: f64 = 0.2805;
    pub const COLEMAN_LIAU_C: f64 = 31.04;

    pub const SMOG_A: f64 = 1.1;
    pub const SMOG_B: f64 = 64.6;
    pub const SMOG_C: f64 = 0.05;

    pub const ARI_A: f64 = 6.26;
    pub const ARI_B: f64 = 0.2805;
    pub const ARI_C: f64 = 31.04;
}

/// Flesch-Kincaid grade level. Higher means harder to read.
pub fn flesch_kincaid_grade(n_syllables: usize, n_words: usize, n_sents: usize) -> f64 {
    coeff::FLESCH_KINCAID_A * n_words as f64 / n_sents as f64
        + coeff::FLESCH_KINCAID_B * n_syllables as f64 / n_words as f64
        - coeff::FLESCH_KINCAID_C
}

/// Flesch reading ease, nominally 0-100. Higher means easier to read.
pub fn flesch_reading_easy(n_syllables: usize, n_words: usize, n_sents: usize) -> f64 {
    coeff::FLESCH_EASE_C
        - coeff::FLESCH_EASE_A * n_words as f64 / n_sents as f64
        - coeff::FLESCH_EASE_B * n_syllables as f64 / n_words as f64
}

/// Coleman-Liau index. Higher means harder to read.
pub fn coleman_liau_index(n_letters: usize, n_words: usize, n_sents: usize) -> f64 {
    coeff::COLEMAN_LIAU_A * n_letters as f64 / n_words as f64
        + coeff::COLEMAN_LIAU_B * n_words as f64 / n_sents as f64
        - coeff::COLEMAN_LIAU_C
}

/// SMOG index over complex (4+ syllable) words per sentence.
pub fn smog_index(n_complex: usize, n_sents: usize) -> f64 {
    coeff::SMOG_A * (coeff::SMOG_B * n_complex as f64 / n_sents as f64).sqrt() + coeff::SMOG_C
}

/// Automated readability index.
pub fn automated_readability_index(n_letters: usize, n_words: usize, n_sents: usize) -> f64 {
    coeff::ARI_A * n_letters as f64 / n_words as f64
        + coeff::ARI_B * n_words as f64 / n_sents as f64
        - coeff::ARI_C
}

/// LIX: mean sentence length plus long-word percentage.
pub fn lix(n_long_words: usize, n_words: usize, n_sents: usize) -> f64 {
    n_words as f64 / n_sents as f64 + 100.0 * n_long_words as f64 / n_words as f64
}

/// All six indices from an already-computed basic report.
pub fn from_basic(report: &BasicReport) -> ReadabilityReport {
    ReadabilityReport {
        flesch_kincaid_grade: flesch_kincaid_grade(
            report.n_syllables,
            report.n_words,
            report.n_sents,
        ),
        flesch_reading_easy: flesch_reading_easy(
            report.n_syllables,
            report.n_words,
            report.n_sents,
        ),
        coleman_liau_index: coleman_liau_index(report.n_letters, report.n_words, report.n_sents),
        smog_index: smog_index(report.n_complex_words, report.n_sents),
        automated_readability_index: automated_readability_index(
            report.n_letters,
            report.n_words,
            report.n_sents,
        ),
        lix: lix(report.n_long_words, report.n_words, report.n_sents),
    }
}

/// Compute the six indices from raw text with default extractors.
pub fn compute(text: &str) -> Result<ReadabilityReport> {
    compute_with(text, &SentExtractor::new(), &WordExtractor::new())
}

/// Compute the six indices with caller-configured extractors.
pub fn compute_with(
    text: &str,
    sents: &SentExtractor,
    words: &WordExtractor,
) -> Result<ReadabilityReport> {
    let basic = rustat_basic::compute_with(text, sents, words)?;
    Ok(from_basic(&basic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smog_from_given_counts() {
        // 24 complex words over 2 sentences.
        let value = smog_index(24, 2);
        assert!((value - 30.676655057318946).abs() < 1e-9);
    }

    #[test]
    fn coleman_liau_and_ari_share_coefficients() {
        assert_eq!(
            coleman_liau_index(452, 61, 2),
            automated_readability_index(452, 61, 2)
        );
    }

    #[test]
    fn empty_text_is_rejected_upstream() {
        assert!(compute("").is_err());
    }
}
