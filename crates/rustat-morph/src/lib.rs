//! Morphological tag distributions.
//!
//! A [`MorphAnalyzer`] maps each word to a [`Tag`] bundle covering twelve
//! grammatical categories (part of speech, animacy, aspect, case, gender,
//! involvement, mood, number, person, tense, transitivity, voice).
//! [`MorphStats`] tabulates the value distribution of each category over
//! a token sequence. The analyzer itself is an injected dependency with a
//! caller-managed lifecycle: construct it once, reuse it across texts.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use rustat_types::{MORPH_NONE_KEY, MorphReport};

/// The fixed twelve grammatical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pos,
    Animacy,
    Aspect,
    Case,
    Gender,
    Involvement,
    Mood,
    Number,
    Person,
    Tense,
    Transitivity,
    Voice,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Pos,
        Category::Animacy,
        Category::Aspect,
        Category::Case,
        Category::Gender,
        Category::Involvement,
        Category::Mood,
        Category::Number,
        Category::Person,
        Category::Tense,
        Category::Transitivity,
        Category::Voice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pos => "pos",
            Category::Animacy => "animacy",
            Category::Aspect => "aspect",
            Category::Case => "case",
            Category::Gender => "gender",
            Category::Involvement => "involvement",
            Category::Mood => "mood",
            Category::Number => "number",
            Category::Person => "person",
            Category::Tense => "tense",
            Category::Transitivity => "transitivity",
            Category::Voice => "voice",
        }
    }

    /// Russian display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pos => "Часть речи",
            Category::Animacy => "Одушевленность",
            Category::Aspect => "Вид",
            Category::Case => "Падеж",
            Category::Gender => "Род",
            Category::Involvement => "Совместность",
            Category::Mood => "Наклонение",
            Category::Number => "Число",
            Category::Person => "Лицо",
            Category::Tense => "Время",
            Category::Transitivity => "Переходность",
            Category::Voice => "Залог",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    /// Look up a category by name. Anything outside the fixed twelve is
    /// an error that lists the valid names.
    fn from_str(name: &str) -> Result<Self> {
        Category::ALL
            .iter()
            .find(|category| category.as_str() == name)
            .copied()
            .ok_or_else(|| {
                let valid: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
                anyhow!(
                    "категория {name:?} отсутствует в справочнике; доступные категории: {}",
                    valid.join(", ")
                )
            })
    }
}

/// Grammatical tag bundle for one word. Categories the analyzer cannot
/// determine stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Tag {
    pub pos: Option<String>,
    pub animacy: Option<String>,
    pub aspect: Option<String>,
    pub case: Option<String>,
    pub gender: Option<String>,
    pub involvement: Option<String>,
    pub mood: Option<String>,
    pub number: Option<String>,
    pub person: Option<String>,
    pub tense: Option<String>,
    pub transitivity: Option<String>,
    pub voice: Option<String>,
}

impl Tag {
    pub fn get(&self, category: Category) -> Option<&str> {
        let value = match category {
            Category::Pos => &self.pos,
            Category::Animacy => &self.animacy,
            Category::Aspect => &self.aspect,
            Category::Case => &self.case,
            Category::Gender => &self.gender,
            Category::Involvement => &self.involvement,
            Category::Mood => &self.mood,
            Category::Number => &self.number,
            Category::Person => &self.person,
            Category::Tense => &self.tense,
            Category::Transitivity => &self.transitivity,
            Category::Voice => &self.voice,
        };
        value.as_deref()
    }

    pub fn set(&mut self, category: Category, value: String) {
        let slot = match category {
            Category::Pos => &mut self.pos,
            Category::Animacy => &mut self.animacy,
            Category::Aspect => &mut self.aspect,
            Category::Case => &mut self.case,
            Category::Gender => &mut self.gender,
            Category::Involvement => &mut self.involvement,
            Category::Mood => &mut self.mood,
            Category::Number => &mut self.number,
            Category::Person => &mut self.person,
            Category::Tense => &mut self.tense,
            Category::Transitivity => &mut self.transitivity,
            Category::Voice => &mut self.voice,
        };
        *slot = Some(value);
    }
}

/// Injected morphological analysis capability.
pub trait MorphAnalyzer {
    fn tag(&self, word: &str) -> Tag;
}

/// Dictionary-backed analyzer: a word-to-tag lookup table. Words outside
/// the table get an empty tag.
#[derive(Debug, Clone, Default)]
pub struct DictAnalyzer {
    entries: BTreeMap<String, Tag>,
}

impl DictAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: impl Into<String>, tag: Tag) {
        self.entries.insert(word.into(), tag);
    }

    /// Parse one dictionary line of the form
    /// `word<TAB>category=value,category=value,...`.
    pub fn insert_line(&mut self, line: &str) -> Result<()> {
        let (word, spec) = line
            .split_once('\t')
            .ok_or_else(|| anyhow!("некорректная строка словаря: {line:?}"))?;
        let mut tag = Tag::default();
        for pair in spec.split(',').filter(|pair| !pair.trim().is_empty()) {
            let (category, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow!("некорректная пара тегов: {pair:?}"))?;
            tag.set(category.trim().parse()?, value.trim().to_string());
        }
        self.entries.insert(word.to_string(), tag);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MorphAnalyzer for DictAnalyzer {
    fn tag(&self, word: &str) -> Tag {
        self.entries.get(word).cloned().unwrap_or_default()
    }
}

/// Tag bundles for a token sequence, ready for tabulation.
#[derive(Debug, Clone)]
pub struct MorphStats {
    words: Vec<String>,
    tags: Vec<Tag>,
}

impl MorphStats {
    /// Tag every word through the analyzer. An empty sequence is a caller
    /// error.
    pub fn new(words: &[String], analyzer: &dyn MorphAnalyzer) -> Result<Self> {
        if words.is_empty() {
            bail!("в источнике данных отсутствуют слова");
        }
        let tags = words.iter().map(|word| analyzer.tag(word)).collect();
        Ok(Self {
            words: words.to_vec(),
            tags,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Value distribution for every category.
    pub fn stats(&self, filter_none: bool) -> MorphReport {
        self.stats_for(&Category::ALL, filter_none)
    }

    /// Value distribution for a chosen subset of categories.
    ///
    /// Unknown values are grouped under the `none` bucket unless
    /// `filter_none` drops them.
    pub fn stats_for(&self, categories: &[Category], filter_none: bool) -> MorphReport {
        let mut report = MorphReport::default();
        for category in categories {
            let mut counts: BTreeMap<String, usize> = BTreeMap::new();
            for tag in &self.tags {
                match tag.get(*category) {
                    Some(value) => *counts.entry(value.to_string()).or_insert(0) += 1,
                    None if !filter_none => {
                        *counts.entry(MORPH_NONE_KEY.to_string()).or_insert(0) += 1;
                    }
                    None => {}
                }
            }
            report.categories.insert(category.to_string(), counts);
        }
        report
    }

    /// Per-word category breakdown, in token order.
    pub fn explain(
        &self,
        categories: &[Category],
        filter_none: bool,
    ) -> Vec<(String, BTreeMap<String, String>)> {
        self.words
            .iter()
            .zip(&self.tags)
            .map(|(word, tag)| {
                let mut values = BTreeMap::new();
                for category in categories {
                    match tag.get(*category) {
                        Some(value) => {
                            values.insert(category.to_string(), value.to_string());
                        }
                        None if !filter_none => {
                            values.insert(category.to_string(), MORPH_NONE_KEY.to_string());
                        }
                        None => {}
                    }
                }
                (word.clone(), values)
            })
            .collect()
    }
}
