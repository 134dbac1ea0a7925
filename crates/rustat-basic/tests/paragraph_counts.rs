//! Counts over a two-sentence encyclopedia-style paragraph, pinned to the
//! values the reference tool produces for the same token sequence.

use rustat_basic::{compute, proportions};

const PARAGRAPH: &str = "Тезаурусы - особый класс лексикографических ресурсов, \
для которых характерны следующие черты: полнота значений словарного состава \
языка или какого-либо его сегмента; тематический, или идеографический способ \
упорядочения значений слов. Отличительной особенностью тезаурусов по сравнению \
с формальными онтологиями является выход в сферу лексических значений, \
установление связей не только между значениями и выражающими их словами, а \
также между самими значениями (регистрация различных семантических отношений \
внутри словаря).";

#[test]
fn letter_histogram() {
    let report = compute(PARAGRAPH).unwrap();
    let c_letters: Vec<(usize, usize)> = report.c_letters.into_iter().collect();
    assert_eq!(
        c_letters,
        vec![
            (1, 4),
            (2, 3),
            (3, 4),
            (4, 1),
            (5, 8),
            (6, 6),
            (7, 5),
            (8, 6),
            (9, 5),
            (10, 5),
            (11, 6),
            (12, 4),
            (13, 2),
            (15, 1),
            (18, 1),
        ]
    );
}

#[test]
fn syllable_histogram() {
    let report = compute(PARAGRAPH).unwrap();
    let c_syllables: Vec<(usize, usize)> = report.c_syllables.into_iter().collect();
    assert_eq!(
        c_syllables,
        vec![
            (0, 2),
            (1, 8),
            (2, 13),
            (3, 14),
            (4, 7),
            (5, 11),
            (6, 3),
            (7, 3),
        ]
    );
}

#[test]
fn scalar_counts() {
    let report = compute(PARAGRAPH).unwrap();
    assert_eq!(report.n_sents, 2);
    assert_eq!(report.n_words, 61);
    assert_eq!(report.n_unique_words, 56);
    assert_eq!(report.n_long_words, 41);
    assert_eq!(report.n_complex_words, 24);
    assert_eq!(report.n_simple_words, 35);
    assert_eq!(report.n_monosyllable_words, 8);
    assert_eq!(report.n_polysyllable_words, 51);
    assert_eq!(report.n_chars, 525);
    assert_eq!(report.n_letters, 452);
    assert_eq!(report.n_spaces, 61);
    assert_eq!(report.n_syllables, 198);
    assert_eq!(report.n_punctuations, 12);
}

#[test]
fn canonical_count_order_has_thirteen_keys() {
    let report = compute(PARAGRAPH).unwrap();
    let counts = report.counts();
    assert_eq!(counts.len(), 13);
    assert_eq!(counts[0].0, "n_sents");
    assert_eq!(counts[12].0, "n_punctuations");
}

#[test]
fn proportions_divide_by_natural_denominators() {
    let report = compute(PARAGRAPH).unwrap();
    let props: std::collections::BTreeMap<&str, f64> = proportions(&report).into_iter().collect();
    assert!((props["p_unique_words"] - 56.0 / 61.0).abs() < 1e-12);
    assert!((props["p_letters"] - 452.0 / 525.0).abs() < 1e-12);
    assert!((props["p_syllables"] - 198.0 / 61.0).abs() < 1e-12);
}
