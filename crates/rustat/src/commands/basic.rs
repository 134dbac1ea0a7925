use anyhow::Result;

use crate::cli::{BasicArgs, TableFormat};

pub fn run(args: &BasicArgs, format: TableFormat) -> Result<()> {
    let text = super::read_text(&args.input)?;
    let report = rustat_basic::compute(&text)?;

    if args.proportions {
        let shares = rustat_basic::proportions(&report);
        match format {
            TableFormat::Text => print!("{}", rustat_format::render_basic_proportions_text(&shares)),
            TableFormat::Md => print!("{}", rustat_format::render_basic_proportions_md(&shares)),
            TableFormat::Tsv => print!("{}", rustat_format::render_basic_proportions_tsv(&shares)),
            TableFormat::Json => {
                println!("{}", rustat_format::render_json(&shares, "basic.proportions")?);
            }
            TableFormat::Csv => {
                rustat_format::write_basic_proportions_csv(&mut std::io::stdout(), &shares)?;
            }
        }
        return Ok(());
    }

    match format {
        TableFormat::Text => print!("{}", rustat_format::render_basic_text(&report)),
        TableFormat::Md => print!("{}", rustat_format::render_basic_md(&report)),
        TableFormat::Tsv => print!("{}", rustat_format::render_basic_tsv(&report)),
        TableFormat::Json => println!("{}", rustat_format::render_json(&report, "basic")?),
        TableFormat::Csv => rustat_format::write_basic_csv(&mut std::io::stdout(), &report)?,
    }
    Ok(())
}
