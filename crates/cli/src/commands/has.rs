use anyhow::Result;
use clap::Args;
use polycmp_collections::has;
use serde_json::json;

use super::OutputFormat;
use crate::input::Source;

#[derive(Args, Debug)]
pub struct Command {
    /// Array or object to search
    #[arg(value_name = "COLLECTION")]
    collection: String,

    /// Value to look for
    #[arg(value_name = "SOUGHT")]
    sought: String,

    #[command(flatten)]
    source: Source,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn handler(args: &Command) -> Result<()> {
    let collection = args.source.load(&args.collection)?;
    let sought = args.source.load(&args.sought)?;

    let found = has(&collection, &sought);
    match args.format {
        OutputFormat::Text => println!("{found}"),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "found": found }))?)
        }
    }
    Ok(())
}
