//! Loading operands from the command line.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use polycmp_engine::Value;

/// Where an operand comes from.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Source {
    /// Treat operands as JSON text instead of file paths
    #[arg(long)]
    pub inline: bool,
}

impl Source {
    /// Parse one operand. A path of `-` reads standard input.
    pub fn load(&self, operand: &str) -> Result<Value> {
        let text = if self.inline {
            operand.to_string()
        } else if operand == "-" {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read standard input")?;
            buffer
        } else {
            read_file(Path::new(operand))?
        };
        let json: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Operand '{operand}' is not valid JSON"))?;
        Ok(Value::from_json(&json))
    }
}

fn read_file(path: &Path) -> Result<String> {
    debug!("Reading operand from {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
