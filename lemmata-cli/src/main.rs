//! Command-line interface for the lemmata glossary scanner

use anyhow::Result;
use clap::{Parser, Subcommand};

use lemmata_cli::commands::{LookupArgs, ScanArgs};

/// Scan text for glossary phrases and look up definitions
#[derive(Debug, Parser)]
#[command(name = "lemmata", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan input files for glossary phrases
    Scan(ScanArgs),
    /// Look up a single term
    Lookup(LookupArgs),
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Scan(args) => args.execute(),
        Command::Lookup(args) => args.execute(),
    }
}
