//! Plain-text report formatting

use std::io::{self, Write};

use super::FileReport;

/// Writes one line per match: `path:from-to  text  (term)`.
pub fn write_reports<W: Write>(mut writer: W, reports: &[FileReport]) -> io::Result<()> {
    for report in reports {
        for record in &report.matches {
            writeln!(
                writer,
                "{}:{}-{}\t{}\t({})",
                report.path, record.from, record.to, record.text, record.term
            )?;
        }
    }
    Ok(())
}
