use anyhow::Result;

use rustat_extract::WordExtractor;

use crate::cli::{InputArgs, TableFormat};

pub fn run(args: &InputArgs, format: TableFormat) -> Result<()> {
    let text = super::read_text(&args.input)?;
    // Diversity metrics are case-insensitive over word forms.
    let words = WordExtractor::new().lowercase(true).extract(&text);
    let report = rustat_diversity::compute(&words)?;

    match format {
        TableFormat::Text => print!("{}", rustat_format::render_diversity_text(&report)),
        TableFormat::Md => print!("{}", rustat_format::render_diversity_md(&report)),
        TableFormat::Tsv => print!("{}", rustat_format::render_diversity_tsv(&report)),
        TableFormat::Json => println!("{}", rustat_format::render_json(&report, "diversity")?),
        TableFormat::Csv => rustat_format::write_diversity_csv(&mut std::io::stdout(), &report)?,
    }
    Ok(())
}
