use anyhow::Result;

use rustat_extract::{WordExtractor, most_common};

use crate::cli::{TableFormat, WordsArgs};

pub fn run(args: &WordsArgs, format: TableFormat) -> Result<()> {
    let text = super::read_text(&args.input)?;
    let words = WordExtractor::new().lowercase(true).extract(&text);
    let ranked = most_common(&words, args.top)?;

    match format {
        TableFormat::Text => print!("{}", rustat_format::render_words_text(&ranked)),
        TableFormat::Md => print!("{}", rustat_format::render_words_md(&ranked)),
        TableFormat::Tsv => print!("{}", rustat_format::render_words_tsv(&ranked)),
        TableFormat::Json => println!("{}", rustat_format::render_json(&ranked, "words")?),
        TableFormat::Csv => rustat_format::write_words_csv(&mut std::io::stdout(), &ranked)?,
    }
    Ok(())
}
