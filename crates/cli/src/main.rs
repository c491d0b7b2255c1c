use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

mod commands;
mod input;

#[derive(Parser)]
#[command(name = "polycmp")]
#[command(
    about = "Deep equivalence and ordering of JSON documents",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether two documents are deeply equivalent
    Equals(commands::equals::Command),

    /// Order two documents relative to each other
    Compare(commands::compare::Command),

    /// Check whether a collection contains an equivalent of a value
    Has(commands::has::Command),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "error" };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_filter));
    debug!("polycmp {}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Equals(args) => commands::equals::handler(args)?,
        Commands::Compare(args) => commands::compare::handler(args)?,
        Commands::Has(args) => commands::has::handler(args)?,
    }

    Ok(())
}
