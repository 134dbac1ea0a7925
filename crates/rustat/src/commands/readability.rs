use anyhow::Result;

use crate::cli::{InputArgs, TableFormat};

pub fn run(args: &InputArgs, format: TableFormat) -> Result<()> {
    let text = super::read_text(&args.input)?;
    let report = rustat_readability::compute(&text)?;

    match format {
        TableFormat::Text => print!("{}", rustat_format::render_readability_text(&report)),
        TableFormat::Md => print!("{}", rustat_format::render_readability_md(&report)),
        TableFormat::Tsv => print!("{}", rustat_format::render_readability_tsv(&report)),
        TableFormat::Json => println!("{}", rustat_format::render_json(&report, "readability")?),
        TableFormat::Csv => rustat_format::write_readability_csv(&mut std::io::stdout(), &report)?,
    }
    Ok(())
}
