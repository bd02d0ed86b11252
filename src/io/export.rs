//! Write the age entries to a JSON file.
//!
//! The schema is `ExportFile`: the span bounds plus every entry, so a file can be
//! read back without knowing which defaults or overrides produced it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::domain::{SpanEntries, YearSpan};
use crate::error::AppError;

/// Export schema. `entries` is written as an array while iterating the span.
#[derive(Debug, Clone, Serialize)]
pub struct ExportFile {
    pub tool: &'static str,
    pub birth_year: i32,
    pub current_year: i32,
    pub entries: SpanEntries,
}

impl ExportFile {
    pub fn from_span(span: &YearSpan) -> Self {
        Self {
            tool: "ages",
            birth_year: span.birth_year,
            current_year: span.current_year,
            entries: SpanEntries(*span),
        }
    }
}

/// Write the entries of `span` as pretty JSON to `path`.
pub fn write_entries_json(path: &Path, span: &YearSpan) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::export(format!("Failed to create export '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);

    write_export(&mut writer, span)?;
    writer
        .flush()
        .map_err(|e| AppError::export(format!("Failed to flush export '{}': {e}", path.display())))?;

    Ok(())
}

/// Stream the export document for `span` into `out`.
pub fn write_export<W: Write>(out: &mut W, span: &YearSpan) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, &ExportFile::from_span(span))
        .map_err(|e| AppError::export(format!("Failed to write export JSON: {e}")))?;
    writeln!(out).map_err(|e| AppError::export(format!("Failed to write export JSON: {e}")))
}
