//! Scan command implementation

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lemmata_engine::LineScanner;

use crate::dictionary::{build_glossary, load_dictionary};
use crate::input::resolve_patterns;
use crate::output::{json, text, FileReport, MatchRecord};

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Dictionary file (JSON array of {term, definition, aliases})
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Input files or patterns (supports glob)
    #[arg(value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress logging entirely
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One match per line with file, offsets, phrase and term
    Text,
    /// JSON array of per-file reports
    Json,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose)?;

        let entries = load_dictionary(&self.dictionary)?;
        let glossary = build_glossary(entries);
        let scanner = LineScanner::new(&glossary);
        let files = resolve_patterns(&self.input)?;
        log::info!("scanning {} file(s)", files.len());

        let mut reports = Vec::new();
        for path in &files {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let spans = scanner.scan_text(&contents, 0);
            log::debug!("{}: {} match(es)", path.display(), spans.len());

            let matches = spans
                .into_iter()
                .filter_map(|span| {
                    // Scanner spans always resolve; a miss would mean the
                    // glossary changed mid-scan.
                    let entry = glossary.get(&span.text)?;
                    Some(MatchRecord {
                        from: span.from,
                        to: span.to,
                        text: span.text,
                        term: entry.term.clone(),
                        definition: entry.definition.clone(),
                    })
                })
                .collect();
            reports.push(FileReport {
                path: path.display().to_string(),
                matches,
            });
        }

        self.write_reports(&reports)
    }

    fn write_reports(&self, reports: &[FileReport]) -> Result<()> {
        let writer: Box<dyn io::Write> = match &self.output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout().lock()),
        };
        match self.format {
            OutputFormat::Text => text::write_reports(writer, reports)?,
            OutputFormat::Json => json::write_reports(writer, reports)?,
        }
        Ok(())
    }
}
