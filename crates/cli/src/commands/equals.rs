use anyhow::Result;
use clap::Args;
use log::info;
use polycmp_engine::{try_equals, CyclePolicy, EngineConfig};
use serde::Serialize;

use super::OutputFormat;
use crate::input::Source;

#[derive(Args, Debug)]
pub struct Command {
    /// Left operand
    #[arg(value_name = "LEFT")]
    left: String,

    /// Right operand
    #[arg(value_name = "RIGHT")]
    right: String,

    /// What to do when a structure is reached again while being compared
    #[arg(long, default_value = "assume-equal")]
    cycles: CyclePolicy,

    #[command(flatten)]
    source: Source,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct EqualsOutput {
    equal: bool,
    cycle_policy: CyclePolicy,
}

pub fn handler(args: &Command) -> Result<()> {
    let left = args.source.load(&args.left)?;
    let right = args.source.load(&args.right)?;
    let config = EngineConfig {
        cycle_policy: args.cycles,
    };

    let equal = try_equals(&left, &right, &config)?;
    info!("{} equals {}: {equal}", args.left, args.right);
    println!("{}", render(equal, args.cycles, args.format)?);
    Ok(())
}

fn render(equal: bool, cycle_policy: CyclePolicy, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => equal.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&EqualsOutput {
            equal,
            cycle_policy,
        })?,
    })
}
