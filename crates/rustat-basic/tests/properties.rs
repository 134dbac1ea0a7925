use proptest::prelude::*;

use rustat_basic as basic;

fn texts() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "Ног",
            "нет,",
            "а",
            "хожу.",
            "рта",
            "скажу:",
            "Когда",
            "спать?",
            "вставать",
            "работу",
            "начинать!",
            "«слово»",
            "дело…",
            "Тезаурусы",
            "какого-либо",
        ]),
        1..60,
    )
    .prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn syllable_classes_partition_the_words(text in texts()) {
        let report = basic::compute(&text).unwrap();
        // Simple (1-3 syllables) and complex (4+) leave only the
        // zero-syllable words; mono/poly split the same remainder.
        let zero = report.n_words - report.n_simple_words - report.n_complex_words;
        prop_assert_eq!(
            report.n_monosyllable_words + report.n_polysyllable_words + zero,
            report.n_words
        );
    }

    #[test]
    fn histograms_cover_every_word(text in texts()) {
        let report = basic::compute(&text).unwrap();
        let letters: usize = report.c_letters.values().sum();
        let syllables: usize = report.c_syllables.values().sum();
        prop_assert_eq!(letters, report.n_words);
        prop_assert_eq!(syllables, report.n_words);
    }

    #[test]
    fn counts_respect_their_bounds(text in texts()) {
        let report = basic::compute(&text).unwrap();
        prop_assert!(report.n_sents >= 1);
        prop_assert!(report.n_unique_words >= 1);
        prop_assert!(report.n_unique_words <= report.n_words);
        prop_assert!(report.n_long_words <= report.n_words);
        prop_assert!(report.n_letters <= report.n_chars);
        prop_assert!(report.n_punctuations <= report.n_chars);
    }

    #[test]
    fn word_shares_stay_in_the_unit_interval(text in texts()) {
        let report = basic::compute(&text).unwrap();
        for (key, value) in basic::proportions(&report) {
            prop_assert!(value >= 0.0, "{key} = {value}");
            prop_assert!(value.is_finite(), "{key} = {value}");
            // Syllables per word is a rate, not a share.
            if key != "p_syllables" {
                prop_assert!(value <= 1.0, "{key} = {value}");
            }
        }
    }

    #[test]
    fn recomputation_is_identical(text in texts()) {
        prop_assert_eq!(
            basic::compute(&text).unwrap(),
            basic::compute(&text).unwrap()
        );
    }
}
