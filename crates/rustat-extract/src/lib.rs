//! Sentence and word extraction for Russian text.
//!
//! The engines downstream (basic counts, readability, diversity,
//! morphology) consume ordered token sequences and never look at raw text
//! themselves; these extractors are the adapter that produces those
//! sequences. `WordExtractor` applies its filters in a fixed order:
//! punctuation stripping, numeral removal, lemmatization, stopword
//! removal, case folding, length bounds, n-gram expansion.

#![forbid(unsafe_code)]

pub mod alphabet;

use std::collections::BTreeMap;

use anyhow::{Result, bail, ensure};

/// Injected lemmatization capability.
///
/// The extractor does not ship a morphological dictionary; callers that
/// want lemma-normalized tokens supply one. Returning `None` keeps the
/// surface form.
pub trait Lemmatizer {
    fn lemma(&self, word: &str) -> Option<String>;
}

// ---------
// Sentences
// ---------

/// Splits text into sentences on terminal punctuation runs (`.`, `!`,
/// `?`, `…`), with optional length bounds in characters.
#[derive(Debug, Clone, Default)]
pub struct SentExtractor {
    min_len: usize,
    max_len: usize,
}

impl SentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound extracted sentences by character count. A bound of 0 means
    /// unbounded on that side.
    pub fn with_bounds(min_len: usize, max_len: usize) -> Result<Self> {
        if min_len > 0 && max_len > 0 {
            ensure!(
                min_len <= max_len,
                "минимальная длина предложения больше максимальной"
            );
        }
        Ok(Self { min_len, max_len })
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        text.split(alphabet::is_sentence_terminator)
            .map(str::trim)
            .filter(|sent| !sent.is_empty())
            .filter(|sent| {
                let len = sent.chars().count();
                (self.min_len == 0 || len >= self.min_len)
                    && (self.max_len == 0 || len <= self.max_len)
            })
            .map(str::to_string)
            .collect()
    }
}

// -----
// Words
// -----

/// Splits text into word tokens and applies the configured filter chain.
///
/// Defaults: punctuation filtering on, everything else off. Tokens are
/// produced by whitespace splitting; punctuation filtering strips leading
/// and trailing punctuation from each token (internal hyphens survive,
/// so `какого-либо` stays one word) and drops tokens with nothing left.
pub struct WordExtractor {
    filter_punct: bool,
    filter_nums: bool,
    stopwords: Vec<String>,
    lowercase: bool,
    min_len: usize,
    max_len: usize,
    ngram_range: (usize, usize),
    lemmatizer: Option<Box<dyn Lemmatizer>>,
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self {
            filter_punct: true,
            filter_nums: false,
            stopwords: Vec::new(),
            lowercase: false,
            min_len: 0,
            max_len: 0,
            ngram_range: (1, 1),
            lemmatizer: None,
        }
    }
}

impl WordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_punct(mut self, on: bool) -> Self {
        self.filter_punct = on;
        self
    }

    pub fn filter_nums(mut self, on: bool) -> Self {
        self.filter_nums = on;
        self
    }

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn lowercase(mut self, on: bool) -> Self {
        self.lowercase = on;
        self
    }

    /// Bound extracted words by character count. A bound of 0 means
    /// unbounded on that side.
    pub fn length_bounds(mut self, min_len: usize, max_len: usize) -> Result<Self> {
        if min_len > 0 && max_len > 0 {
            ensure!(
                min_len <= max_len,
                "минимальная длина слова больше максимальной"
            );
        }
        self.min_len = min_len;
        self.max_len = max_len;
        Ok(self)
    }

    /// Expand the token sequence into `_`-joined n-grams for every size in
    /// `lower..=upper`. `(1, 1)` leaves the sequence unchanged.
    pub fn ngram_range(mut self, lower: usize, upper: usize) -> Result<Self> {
        ensure!(lower >= 1, "нижняя граница N-грамм должна быть больше 0");
        ensure!(lower <= upper, "нижняя граница N-грамм больше верхней");
        self.ngram_range = (lower, upper);
        Ok(self)
    }

    pub fn lemmatizer(mut self, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut words = Vec::new();
        for raw in text.split_whitespace() {
            let token = if self.filter_punct {
                raw.trim_matches(alphabet::is_punctuation)
            } else {
                raw
            };
            if token.is_empty() {
                continue;
            }
            if self.filter_nums && token.chars().all(char::is_numeric) {
                continue;
            }
            let mut word = token.to_string();
            if let Some(lemmatizer) = &self.lemmatizer {
                if let Some(lemma) = lemmatizer.lemma(&word) {
                    word = lemma;
                }
            }
            if self.stopwords.iter().any(|stop| *stop == word) {
                continue;
            }
            if self.lowercase {
                word = word.to_lowercase();
            }
            let len = word.chars().count();
            if self.min_len > 0 && len < self.min_len {
                continue;
            }
            if self.max_len > 0 && len > self.max_len {
                continue;
            }
            words.push(word);
        }
        if self.ngram_range != (1, 1) {
            words = make_ngrams(&words, self.ngram_range);
        }
        words
    }
}

fn make_ngrams(words: &[String], (lower, upper): (usize, usize)) -> Vec<String> {
    let mut ngrams = Vec::new();
    for n in lower..=upper {
        if n == 0 || n > words.len() {
            continue;
        }
        for window in words.windows(n) {
            ngrams.push(window.join("_"));
        }
    }
    ngrams
}

/// Top `n` words by frequency, ties broken alphabetically for
/// deterministic output.
pub fn most_common(words: &[String], n: usize) -> Result<Vec<(String, usize)>> {
    if n < 1 {
        bail!("количество слов должно быть больше 0");
    }
    let mut freqs: BTreeMap<&str, usize> = BTreeMap::new();
    for word in words {
        *freqs.entry(word).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = freqs
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    Ok(ranked)
}
