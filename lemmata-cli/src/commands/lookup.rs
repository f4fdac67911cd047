//! Lookup command implementation

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use crate::dictionary::{build_glossary, load_dictionary};

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Dictionary file (JSON array of {term, definition, aliases})
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// The term to look up (matched exactly, case-insensitive)
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Suppress logging entirely
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose)?;

        let entries = load_dictionary(&self.dictionary)?;
        let glossary = build_glossary(entries);
        match glossary.get(&self.term) {
            Some(entry) => {
                println!("{}: {}", entry.term, entry.definition);
                Ok(())
            }
            None => bail!("no definition found for '{}'", self.term),
        }
    }
}
