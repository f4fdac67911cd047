//! JSON report formatting

use std::io::{self, Write};

use super::FileReport;

/// Writes the full report list as pretty-printed JSON.
pub fn write_reports<W: Write>(mut writer: W, reports: &[FileReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writeln!(writer)
}
