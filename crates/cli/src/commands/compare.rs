use anyhow::Result;
use clap::Args;
use log::info;
use polycmp_engine::compare;
use serde_json::json;

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

    #[command(flatten)]
    source: Source,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn handler(args: &Command) -> Result<()> {
    let left = args.source.load(&args.left)?;
    let right = args.source.load(&args.right)?;

    let order = compare(&left, &right)?;
    info!("{} compared to {}: {order}", args.left, args.right);
    println!("{}", render(order, args.format)?);
    Ok(())
}

fn render(order: f64, format: OutputFormat) -> Result<String> {
    let text = format_order(order);
    Ok(match format {
        OutputFormat::Text => text,
        OutputFormat::Json => {
            let order = serde_json::Number::from_f64(order)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::String(text));
            serde_json::to_string_pretty(&json!({ "order": order }))?
        }
    })
}

/// Infinite orders print the way a JavaScript engine would.
fn format_order(order: f64) -> String {
    if order == f64::INFINITY {
        "Infinity".to_string()
    } else if order == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        order.to_string()
    }
}
