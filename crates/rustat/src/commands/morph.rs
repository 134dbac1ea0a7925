use anyhow::{Context, Result};

use rustat_extract::WordExtractor;
use rustat_morph::{Category, DictAnalyzer, MorphStats};

use crate::cli::{MorphArgs, TableFormat};

fn load_dict(path: &std::path::Path) -> Result<DictAnalyzer> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("не удалось прочитать словарь {}", path.display()))?;
    let mut dict = DictAnalyzer::new();
    for line in content.lines() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        dict.insert_line(line)
            .with_context(|| format!("словарь {}", path.display()))?;
    }
    Ok(dict)
}

pub fn run(args: &MorphArgs, format: TableFormat) -> Result<()> {
    let text = super::read_text(&args.input)?;
    let words = WordExtractor::new().lowercase(true).extract(&text);

    let categories = if args.categories.is_empty() {
        Category::ALL.to_vec()
    } else {
        args.categories
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Category>>>()?
    };

    let dict = load_dict(&args.dict)?;
    let stats = MorphStats::new(&words, &dict)?;
    let report = stats.stats_for(&categories, args.filter_none);

    match format {
        TableFormat::Text => {
            let labels: Vec<(&'static str, &'static str)> = Category::ALL
                .iter()
                .map(|category| (category.as_str(), category.label()))
                .collect();
            print!("{}", rustat_format::render_morph_text(&report, &labels));
        }
        TableFormat::Md => print!("{}", rustat_format::render_morph_md(&report)),
        TableFormat::Tsv => print!("{}", rustat_format::render_morph_tsv(&report)),
        TableFormat::Json => println!("{}", rustat_format::render_json(&report, "morph")?),
        TableFormat::Csv => rustat_format::write_morph_csv(&mut std::io::stdout(), &report)?,
    }
    Ok(())
}
