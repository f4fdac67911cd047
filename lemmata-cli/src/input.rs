//! Input file resolution

use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolves input arguments — literal paths or glob patterns — to a
/// sorted, deduplicated list of files.
///
/// A pattern that matches nothing is an error rather than a silent empty
/// scan.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for pattern in patterns {
        let literal = Path::new(pattern);
        if literal.is_file() {
            files.push(literal.to_path_buf());
            continue;
        }
        let mut matched_any = false;
        let entries = glob::glob(pattern).map_err(|source| CliError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        for entry in entries.flatten() {
            if entry.is_file() {
                files.push(entry);
                matched_any = true;
            }
        }
        if !matched_any {
            return Err(CliError::NoInput(pattern.clone()));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
