//! Basic counts over Russian text: per-word letter and syllable
//! histograms, word-class counts, and character-class counts.
//!
//! Everything downstream of tokenization is pure arithmetic; the raw text
//! is only consulted for the character-class counts (`n_chars`,
//! `n_letters`, `n_spaces`, `n_punctuations`).

#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, bail};

use rustat_extract::alphabet::{
    COMPLEX_SYLLABLE_FACTOR, count_syllables, is_punctuation, is_ru_letter, is_space,
};
use rustat_extract::{SentExtractor, WordExtractor};
use rustat_math::safe_divide;
use rustat_types::BasicReport;

/// Words with at least this many letters count as long.
const LONG_WORD_LETTERS: usize = 6;

/// Compute basic counts with default extractors.
pub fn compute(text: &str) -> Result<BasicReport> {
    compute_with(text, &SentExtractor::new(), &WordExtractor::new())
}

/// Compute basic counts with caller-configured extractors.
///
/// Empty text, or a configuration that filters every word away, is a
/// caller error and is rejected before any counting happens.
pub fn compute_with(
    text: &str,
    sents: &SentExtractor,
    words: &WordExtractor,
) -> Result<BasicReport> {
    if text.trim().is_empty() {
        bail!("анализируемый текст пуст");
    }
    let sents = sents.extract(text);
    let words = words.extract(text);
    if words.is_empty() {
        bail!("в источнике данных отсутствуют слова");
    }
    Ok(from_parts(text, &words, sents.len()))
}

/// Compute basic counts from already-extracted parts.
///
/// The token sequence must be non-empty; `compute_with` enforces that for
/// the text entry point.
pub fn from_parts(text: &str, words: &[String], n_sents: usize) -> BasicReport {
    let letters_per_word: Vec<usize> = words.iter().map(|w| w.chars().count()).collect();
    let syllables_per_word: Vec<usize> = words.iter().map(|w| count_syllables(w)).collect();

    let mut c_letters: BTreeMap<usize, usize> = BTreeMap::new();
    for count in &letters_per_word {
        *c_letters.entry(*count).or_insert(0) += 1;
    }
    let mut c_syllables: BTreeMap<usize, usize> = BTreeMap::new();
    for count in &syllables_per_word {
        *c_syllables.entry(*count).or_insert(0) += 1;
    }

    let folded: BTreeSet<String> = words.iter().map(|w| w.to_lowercase()).collect();

    let n_words = words.len();
    let n_monosyllable_words = c_syllables.get(&1).copied().unwrap_or(0);
    let n_zero_syllable_words = c_syllables.get(&0).copied().unwrap_or(0);

    BasicReport {
        n_sents,
        n_words,
        n_unique_words: folded.len(),
        n_long_words: letters_per_word
            .iter()
            .filter(|c| **c >= LONG_WORD_LETTERS)
            .count(),
        n_complex_words: syllables_per_word
            .iter()
            .filter(|s| **s >= COMPLEX_SYLLABLE_FACTOR)
            .count(),
        n_simple_words: syllables_per_word
            .iter()
            .filter(|s| **s > 0 && **s < COMPLEX_SYLLABLE_FACTOR)
            .count(),
        n_monosyllable_words,
        n_polysyllable_words: n_words - n_monosyllable_words - n_zero_syllable_words,
        n_chars: text.chars().filter(|ch| *ch != '\n').count(),
        n_letters: text.chars().filter(|ch| is_ru_letter(*ch)).count(),
        n_spaces: text.chars().filter(|ch| is_space(*ch)).count(),
        n_syllables: syllables_per_word.iter().sum(),
        n_punctuations: text.chars().filter(|ch| is_punctuation(*ch)).count(),
        c_letters,
        c_syllables,
    }
}

/// Counts normalized to proportions.
///
/// Word-derived counts divide by the word count, character-derived counts
/// by the character count, with the safe-divide convention. `n_sents` and
/// `n_chars` have no natural denominator here and are omitted.
pub fn proportions(report: &BasicReport) -> Vec<(&'static str, f64)> {
    let words = report.n_words as f64;
    let chars = report.n_chars as f64;
    vec![
        (
            "p_unique_words",
            safe_divide(report.n_unique_words as f64, words, 0.0),
        ),
        (
            "p_long_words",
            safe_divide(report.n_long_words as f64, words, 0.0),
        ),
        (
            "p_complex_words",
            safe_divide(report.n_complex_words as f64, words, 0.0),
        ),
        (
            "p_simple_words",
            safe_divide(report.n_simple_words as f64, words, 0.0),
        ),
        (
            "p_monosyllable_words",
            safe_divide(report.n_monosyllable_words as f64, words, 0.0),
        ),
        (
            "p_polysyllable_words",
            safe_divide(report.n_polysyllable_words as f64, words, 0.0),
        ),
        (
            "p_letters",
            safe_divide(report.n_letters as f64, chars, 0.0),
        ),
        ("p_spaces", safe_divide(report.n_spaces as f64, chars, 0.0)),
        (
            "p_syllables",
            safe_divide(report.n_syllables as f64, words, 0.0),
        ),
        (
            "p_punctuations",
            safe_divide(report.n_punctuations as f64, chars, 0.0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        assert!(compute("").is_err());
        assert!(compute("   ").is_err());
        // Tokens that strip down to nothing leave no words.
        assert!(compute("+ _").is_err());
    }

    #[test]
    fn statistics_quote_counts() {
        let report = compute("Существуют три вида лжи: ложь, наглая ложь и статистика").unwrap();
        assert_eq!(report.n_sents, 1);
        assert_eq!(report.n_words, 9);
        assert_eq!(report.n_unique_words, 8);
        let syllables: Vec<(usize, usize)> = report.c_syllables.into_iter().collect();
        assert_eq!(syllables, vec![(1, 5), (2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn proportions_guard_degenerate_denominators() {
        let report = compute("и").unwrap();
        for (key, value) in proportions(&report) {
            assert!((0.0..=1.0).contains(&value), "{key} = {value}");
        }
    }
}
