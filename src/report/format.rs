//! Formatted report output.
//!
//! Formatting stays here so the entry computation in `domain` has no I/O,
//! and the writer is generic so tests can capture output in a `Vec<u8>`.

use std::io::Write;

use crate::domain::{AgeEntry, OutputFormat, SpanEntries, YearSpan};
use crate::error::AppError;

/// Render one entry as `In <year> I was <age> years old.`
pub fn format_line(entry: &AgeEntry) -> String {
    format!("In {} I was {} years old.", entry.year, entry.age)
}

/// Stream every entry of the span to `out` as a pretty JSON array.
pub fn write_json<W: Write>(out: &mut W, span: &YearSpan) -> Result<(), AppError> {
    serde_json::to_writer_pretty(out, &SpanEntries(*span)).map_err(AppError::encode)
}

/// Write the report for `span` to `out`.
///
/// Text output ends every line with `\n`; JSON output is one array followed by `\n`.
/// Any write or flush error is returned, never dropped.
pub fn write_report<W: Write>(out: &mut W, span: &YearSpan, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            for entry in span.entries() {
                writeln!(out, "{}", format_line(&entry)).map_err(AppError::stdout)?;
            }
        }
        OutputFormat::Json => {
            write_json(out, span)?;
            writeln!(out).map_err(AppError::stdout)?;
        }
    }
    out.flush().map_err(AppError::stdout)
}
