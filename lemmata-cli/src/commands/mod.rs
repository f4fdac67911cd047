//! CLI subcommands

pub mod lookup;
pub mod scan;

pub use lookup::LookupArgs;
pub use scan::ScanArgs;

use anyhow::Result;

/// Initializes logging from a count-based verbosity flag.
pub(crate) fn init_logging(quiet: bool, verbose: u8) -> Result<()> {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()
            .ok();
    }

    Ok(())
}
