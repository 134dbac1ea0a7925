use std::collections::BTreeMap;

use rustat_format as format;
use rustat_types::{BasicReport, DiversityReport, MorphReport, ReadabilityReport};

fn basic_report() -> BasicReport {
    BasicReport {
        c_letters: BTreeMap::from([(3, 2), (8, 1)]),
        c_syllables: BTreeMap::from([(1, 2), (3, 1)]),
        n_sents: 1,
        n_words: 3,
        n_unique_words: 3,
        n_long_words: 0,
        n_complex_words: 0,
        n_simple_words: 3,
        n_monosyllable_words: 2,
        n_polysyllable_words: 1,
        n_chars: 17,
        n_letters: 14,
        n_spaces: 2,
        n_syllables: 5,
        n_punctuations: 1,
    }
}

fn diversity_report() -> DiversityReport {
    DiversityReport {
        ttr: 0.75,
        rttr: 1.5,
        cttr: 1.06,
        httr: 0.9,
        sttr: 0.5,
        mttr: 0.1,
        dttr: 10.0,
        mattr: 0.75,
        msttr: 0.75,
        mtld: 12.0,
        mamtld: 4.0,
        hdd: -1.0,
        simpson_index: 6.0,
        hapax_index: 120.5,
    }
}

#[test]
fn basic_tsv_snapshot() {
    insta::assert_snapshot!(format::render_basic_tsv(&basic_report()), @r"
key	value
n_sents	1
n_words	3
n_unique_words	3
n_long_words	0
n_complex_words	0
n_simple_words	3
n_monosyllable_words	2
n_polysyllable_words	1
n_chars	17
n_letters	14
n_spaces	2
n_syllables	5
n_punctuations	1
");
}

#[test]
fn basic_md_snapshot() {
    insta::assert_snapshot!(format::render_basic_md(&basic_report()), @r"
|Статистика|Значение|
|---|---:|
|Предложения|1|
|Слова|3|
|Уникальные слова|3|
|Длинные слова|0|
|Сложные слова|0|
|Простые слова|3|
|Односложные слова|2|
|Многосложные слова|1|
|Символы|17|
|Буквы|14|
|Пробелы|2|
|Слоги|5|
|Знаки препинания|1|
");
}

#[test]
fn basic_text_table_is_aligned() {
    let rendered = format::render_basic_text(&basic_report());
    let lines: Vec<&str> = rendered.lines().collect();
    // header + separator + 13 count rows
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[1], "-".repeat(31));
    for line in lines.iter().skip(2) {
        assert_eq!(line.chars().count(), 31, "{line:?}");
        assert_eq!(line.chars().nth(20), Some('|'), "{line:?}");
    }
}

#[test]
fn metric_tables_render_two_decimals() {
    let report = ReadabilityReport {
        flesch_kincaid_grade: 22.050081967213114,
        flesch_reading_easy: -27.893688524590175,
        coleman_liau_index: 23.900823770491805,
        smog_index: 30.676655057318946,
        automated_readability_index: 23.900823770491805,
        lix: 97.71311475409836,
    };
    let text = format::render_readability_text(&report);
    assert!(text.contains("Тест Флеша-Кинкайда"));
    assert!(text.contains("22.05"));
    assert!(text.contains("-27.89"));

    let md = format::render_readability_md(&report);
    assert_eq!(md.lines().count(), 8);
    for line in md.lines() {
        assert_eq!(line.matches('|').count(), 3, "{line:?}");
    }
}

#[test]
fn diversity_tsv_keeps_full_precision() {
    let tsv = format::render_diversity_tsv(&diversity_report());
    assert!(tsv.contains("ttr\t0.75\n"));
    assert!(tsv.contains("hdd\t-1\n"));
    assert!(tsv.contains("hapax_index\t120.5\n"));
    assert_eq!(tsv.lines().count(), 15);
}

#[test]
fn json_receipt_carries_envelope_and_report() {
    let json = format::render_json(&diversity_report(), "diversity").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["mode"], "diversity");
    assert_eq!(value["tool"]["name"], "rustat");
    assert_eq!(value["report"]["ttr"], 0.75);
    assert_eq!(value["report"]["hdd"], -1.0);
    assert!(value["generated_at_ms"].as_u64().is_some());
}

#[test]
fn basic_csv_has_label_column() {
    let mut buf = Vec::new();
    format::write_basic_csv(&mut buf, &basic_report()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "key,label,value");
    assert_eq!(lines[1], "n_sents,Предложения,1");
    assert_eq!(lines.len(), 14);
}

#[test]
fn morph_renders_every_value_row() {
    let mut categories = BTreeMap::new();
    categories.insert(
        "pos".to_string(),
        BTreeMap::from([("NOUN".to_string(), 2), ("none".to_string(), 1)]),
    );
    categories.insert(
        "case".to_string(),
        BTreeMap::from([("nomn".to_string(), 3)]),
    );
    let report = MorphReport { categories };

    let tsv = format::render_morph_tsv(&report);
    insta::assert_snapshot!(tsv, @r"
category	value	count
case	nomn	3
pos	NOUN	2
pos	none	1
");

    let mut buf = Vec::new();
    format::write_morph_csv(&mut buf, &report).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("pos,NOUN,2"));
}

#[test]
fn words_table_preserves_input_order() {
    let words = vec![("когда".to_string(), 3), ("нет".to_string(), 2)];
    let tsv = format::render_words_tsv(&words);
    assert_eq!(tsv, "word\tcount\nкогда\t3\nнет\t2\n");
    let md = format::render_words_md(&words);
    assert!(md.starts_with("|Слово|Количество|\n|---|---:|\n|когда|3|\n"));
}
