//! Russian character classes used by the extractors and counters.
//!
//! Membership sets mirror the classical breakdown: vowels, voiceless and
//! voiced consonants, sonorants, `й`, the soft/hard signs, and the
//! punctuation inventory (ASCII punctuation plus the em dash, guillemets,
//! and curly quotes common in Russian typography).

pub const RU_VOWELS: &str = "аеиуояёэюыАЕИУОЯЁЭЮЫ";
pub const RU_CONSONANTS_VOICELESS: &str = "кпстфхцчшщКПСТФХЦЧШЩ";
pub const RU_CONSONANTS_VOICED: &str = "бвгджзБВГДЖЗ";
pub const RU_CONSONANTS_SONOR: &str = "лмнрЛМНР";
pub const RU_CONSONANTS_YOT: &str = "йЙ";
pub const RU_MARKS: &str = "ьъЬЪ";

pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~—«»“”";

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: &str = ".!?…";

/// Words with at least this many syllables count as complex.
pub const COMPLEX_SYLLABLE_FACTOR: usize = 4;

pub fn is_vowel(ch: char) -> bool {
    RU_VOWELS.contains(ch)
}

pub fn is_ru_letter(ch: char) -> bool {
    is_vowel(ch)
        || RU_CONSONANTS_VOICELESS.contains(ch)
        || RU_CONSONANTS_VOICED.contains(ch)
        || RU_CONSONANTS_SONOR.contains(ch)
        || RU_CONSONANTS_YOT.contains(ch)
        || RU_MARKS.contains(ch)
}

pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(ch)
}

pub fn is_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

pub fn is_sentence_terminator(ch: char) -> bool {
    SENTENCE_TERMINATORS.contains(ch)
}

/// Number of syllables in a word, counted as the number of vowels.
pub fn count_syllables(word: &str) -> usize {
    word.chars().filter(|ch| is_vowel(*ch)).count()
}
