//! Lexical diversity metrics over token sequences.
//!
//! Fourteen estimators of vocabulary richness: the TTR family (TTR, RTTR,
//! CTTR, HTTR, STTR, MTTR, DTTR), windowed/segmented averages (MATTR,
//! MSTTR), factor-segmentation measures (MTLD, MAMTLD), the
//! hypergeometric HD-D estimator, Simpson's index, and the hapax index.
//!
//! Every metric is a total function of the token sequence for non-empty
//! input: zero denominators resolve through [`rustat_math::safe_divide`]
//! and the per-metric sentinels documented below, never through panics or
//! NaN. [`compute`] rejects an empty sequence before any metric runs.

#![forbid(unsafe_code)]

use std::collections::{HashMap, HashSet};

use anyhow::{Result, bail};

use rustat_math::{binomial, safe_divide};
use rustat_types::DiversityReport;

/// Running-TTR threshold that closes an MTLD/MAMTLD factor.
pub const MTLD_THRESHOLD: f64 = 0.72;
/// Default MATTR window length.
pub const DEFAULT_WINDOW_LEN: usize = 50;
/// Default MSTTR segment length.
pub const DEFAULT_SEGMENT_LEN: usize = 50;
/// Default minimum MTLD/MAMTLD factor length.
pub const DEFAULT_MIN_FACTOR_LEN: usize = 10;
/// Default HD-D sample size.
pub const DEFAULT_SAMPLE_SIZE: usize = 42;
/// HD-D needs at least this many tokens to be meaningful.
pub const HDD_TOKEN_FLOOR: usize = 50;
/// Sentinel returned by HD-D below the token floor.
pub const HDD_SENTINEL: f64 = -1.0;

fn distinct<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<HashSet<&str>>()
        .len()
}

fn frequencies<S: AsRef<str>>(words: &[S]) -> HashMap<&str, usize> {
    let mut freqs = HashMap::new();
    for word in words {
        *freqs.entry(word.as_ref()).or_insert(0) += 1;
    }
    freqs
}

/// Type-Token Ratio: types / tokens.
pub fn ttr<S: AsRef<str>>(words: &[S]) -> f64 {
    safe_divide(distinct(words) as f64, words.len() as f64, 0.0)
}

/// Root TTR (Guiraud): types / sqrt(tokens).
pub fn rttr<S: AsRef<str>>(words: &[S]) -> f64 {
    safe_divide(distinct(words) as f64, (words.len() as f64).sqrt(), 0.0)
}

/// Corrected TTR (Carroll): types / sqrt(2 * tokens).
pub fn cttr<S: AsRef<str>>(words: &[S]) -> f64 {
    safe_divide(
        distinct(words) as f64,
        (2.0 * words.len() as f64).sqrt(),
        0.0,
    )
}

/// Herdan TTR: log10(types) / log10(tokens).
///
/// A single-token sequence has a zero denominator and resolves to 0.
pub fn httr<S: AsRef<str>>(words: &[S]) -> f64 {
    safe_divide(
        (distinct(words) as f64).log10(),
        (words.len() as f64).log10(),
        0.0,
    )
}

/// Summer TTR: log10(log10(types)) / log10(log10(tokens)).
///
/// Explicitly 0 when tokens == 1 or types == 1; the nested logarithm is
/// undefined there.
pub fn sttr<S: AsRef<str>>(words: &[S]) -> f64 {
    let n_words = words.len();
    let n_lexemes = distinct(words);
    if n_words == 1 || n_lexemes == 1 {
        return 0.0;
    }
    safe_divide(
        (n_lexemes as f64).log10().log10(),
        (n_words as f64).log10().log10(),
        0.0,
    )
}

/// Mass TTR: (log10(tokens) - log10(types)) / log10(tokens)^2.
pub fn mttr<S: AsRef<str>>(words: &[S]) -> f64 {
    let log_words = (words.len() as f64).log10();
    let log_lexemes = (distinct(words) as f64).log10();
    safe_divide(log_words - log_lexemes, log_words * log_words, 0.0)
}

/// Dugast TTR: log10(tokens)^2 / (log10(tokens) - log10(types)).
///
/// A sequence with no repeats has a zero denominator and resolves to 0.
pub fn dttr<S: AsRef<str>>(words: &[S]) -> f64 {
    let log_words = (words.len() as f64).log10();
    let log_lexemes = (distinct(words) as f64).log10();
    safe_divide(log_words * log_words, log_words - log_lexemes, 0.0)
}

/// Moving Average TTR: mean per-window TTR of a size-`window_len` window
/// sliding by one token.
///
/// Falls back to whole-sequence [`ttr`] when the sequence is shorter than
/// `window_len + 1`.
pub fn mattr<S: AsRef<str>>(words: &[S], window_len: usize) -> f64 {
    let n_words = words.len();
    if n_words < window_len + 1 {
        return ttr(words);
    }
    let mut window_ttr = 0.0;
    let mut window_count = 0usize;
    for start in 0..n_words {
        if start + window_len > n_words {
            break;
        }
        let window = &words[start..start + window_len];
        window_count += 1;
        window_ttr += distinct(window) as f64 / window_len as f64;
    }
    safe_divide(window_ttr, window_count as f64, 0.0)
}

/// Mean Segmental TTR: mean TTR of floor(tokens / segment_len) disjoint
/// consecutive segments; the trailing remainder is discarded.
///
/// Falls back to whole-sequence [`ttr`] when the sequence is shorter than
/// `segment_len + 1`.
pub fn msttr<S: AsRef<str>>(words: &[S], segment_len: usize) -> f64 {
    let n_words = words.len();
    if n_words < segment_len + 1 {
        return ttr(words);
    }
    let mut segment_ttr = 0.0;
    let mut segment_count = 0usize;
    let mut seed = 0usize;
    for _ in 0..n_words / segment_len {
        let segment = &words[seed..seed + segment_len];
        segment_count += 1;
        seed += segment_len;
        segment_ttr += safe_divide(distinct(segment) as f64, segment.len() as f64, 0.0);
    }
    safe_divide(segment_ttr, segment_count as f64, 0.0)
}

fn mtld_base<S: AsRef<str>>(words: &[S], min_factor_len: usize) -> f64 {
    let mut factor = 0.0f64;
    let mut factor_len = 0usize;
    let mut start = 0usize;
    for end in 0..words.len() {
        let factor_text = &words[start..=end];
        if end + 1 == words.len() {
            // The trailing remainder always contributes a fractional
            // factor, even if it also satisfies the close condition.
            factor += (1.0 - ttr(factor_text)) / (1.0 - MTLD_THRESHOLD);
            factor_len += factor_text.len();
        } else if ttr(factor_text) < MTLD_THRESHOLD && factor_text.len() >= min_factor_len {
            factor += 1.0;
            factor_len += factor_text.len();
            start = end + 1;
        }
    }
    safe_divide(factor_len as f64, factor, 0.0)
}

/// Measure of Textual Lexical Diversity: tokens per TTR-bounded factor,
/// averaged over a forward and a backward scan.
pub fn mtld<S: AsRef<str>>(words: &[S], min_factor_len: usize) -> f64 {
    let forward = mtld_base(words, min_factor_len);
    let reversed: Vec<&str> = words.iter().rev().map(|w| w.as_ref()).collect();
    let backward = mtld_base(&reversed, min_factor_len);
    (forward + backward) / 2.0
}

fn mamtld_base<S: AsRef<str>>(words: &[S], min_factor_len: usize) -> f64 {
    let mut factor = 0.0f64;
    let mut factor_len = 0usize;
    for start in 0..words.len() {
        let sub_text = &words[start..];
        for end in 0..sub_text.len() {
            let factor_text = &sub_text[..=end];
            if ttr(factor_text) < MTLD_THRESHOLD && factor_text.len() >= min_factor_len {
                factor += 1.0;
                factor_len += factor_text.len();
                break;
            }
        }
    }
    safe_divide(factor_len as f64, factor, 1.0)
}

/// Moving-average MTLD: grows a factor from every starting position
/// instead of only after a close.
///
/// The per-position growth makes this scan O(N²); bound the input length
/// if running it over very large texts.
pub fn mamtld<S: AsRef<str>>(words: &[S], min_factor_len: usize) -> f64 {
    let forward = mamtld_base(words, min_factor_len);
    let reversed: Vec<&str> = words.iter().rev().map(|w| w.as_ref()).collect();
    let backward = mamtld_base(&reversed, min_factor_len);
    (forward + backward) / 2.0
}

/// Hypergeometric Distribution D: summed per-type probability of drawing
/// each type at least once in a `sample_size` sample without replacement,
/// scaled by 1 / sample_size.
///
/// Returns [`HDD_SENTINEL`] for sequences shorter than
/// [`HDD_TOKEN_FLOOR`]; a zero sample size or a degenerate binomial
/// denominator contributes 0 per term, so `hdd(words, 0)` is 0.
pub fn hdd<S: AsRef<str>>(words: &[S], sample_size: usize) -> f64 {
    let n_words = words.len();
    if n_words < HDD_TOKEN_FLOOR {
        return HDD_SENTINEL;
    }
    let mut total = 0.0f64;
    for freq in frequencies(words).values().copied() {
        let denom = binomial(n_words as u64, sample_size as u64);
        if denom == 0.0 || sample_size == 0 {
            continue;
        }
        let missing = binomial((n_words - freq) as u64, sample_size as u64);
        let prob = 1.0 - missing / denom;
        total += prob / sample_size as f64;
    }
    total
}

/// Simpson's index as the ratio of the ordered-pair space to the number
/// of equal ordered pairs: N(N-1) / Σ f(f-1).
///
/// Higher values mean less repetition. The equal-pair count over the full
/// permutation space is taken from the frequency distribution; a
/// repeat-free sequence has no matches and resolves to 0.
pub fn simpson_index<S: AsRef<str>>(words: &[S]) -> f64 {
    let n_words = words.len();
    let den = (n_words * n_words.saturating_sub(1)) as f64;
    let matches: usize = frequencies(words)
        .values()
        .map(|freq| freq * (freq - 1))
        .sum();
    safe_divide(den, matches as f64, 0.0)
}

/// Hapax index: 100·log10(N) / (1 - hapaxes/types).
///
/// A sequence in which every type is a hapax has a zero denominator and
/// resolves to 0.
pub fn hapax_index<S: AsRef<str>>(words: &[S]) -> f64 {
    let n_words = words.len() as f64;
    let n_lexemes = distinct(words) as f64;
    let num = 100.0 * n_words.log10();
    let hapaxes = frequencies(words).values().filter(|f| **f == 1).count();
    let den = 1.0 - safe_divide(hapaxes as f64, n_lexemes, 0.0);
    safe_divide(num, den, 0.0)
}

/// All fourteen metrics with the default parameters, in canonical order.
///
/// An empty token sequence is a caller error and is rejected before any
/// metric runs.
pub fn compute<S: AsRef<str>>(words: &[S]) -> Result<DiversityReport> {
    if words.is_empty() {
        bail!("в источнике данных отсутствуют слова");
    }
    Ok(DiversityReport {
        ttr: ttr(words),
        rttr: rttr(words),
        cttr: cttr(words),
        httr: httr(words),
        sttr: sttr(words),
        mttr: mttr(words),
        dttr: dttr(words),
        mattr: mattr(words, DEFAULT_WINDOW_LEN),
        msttr: msttr(words, DEFAULT_SEGMENT_LEN),
        mtld: mtld(words, DEFAULT_MIN_FACTOR_LEN),
        mamtld: mamtld(words, DEFAULT_MIN_FACTOR_LEN),
        hdd: hdd(words, DEFAULT_SAMPLE_SIZE),
        simpson_index: simpson_index(words),
        hapax_index: hapax_index(words),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_sequence_is_total() {
        let words = ["слово"];
        assert_eq!(ttr(&words), 1.0);
        assert_eq!(httr(&words), 0.0);
        assert_eq!(sttr(&words), 0.0);
        assert_eq!(mttr(&words), 0.0);
        assert_eq!(dttr(&words), 0.0);
        assert_eq!(mtld(&words, 10), 0.0);
        assert_eq!(mamtld(&words, 10), 1.0);
        assert_eq!(hdd(&words, 42), HDD_SENTINEL);
        assert_eq!(simpson_index(&words), 0.0);
        assert_eq!(hapax_index(&words), 0.0);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let words: Vec<String> = Vec::new();
        assert!(compute(&words).is_err());
    }

    #[test]
    fn repeat_free_sequence_resolves_dugast_to_zero() {
        let words = ["один", "два", "три", "четыре"];
        assert_eq!(dttr(&words), 0.0);
        assert_eq!(simpson_index(&words), 0.0);
    }
}
