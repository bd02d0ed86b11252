//! Reporting: turn a `YearSpan` into output lines.

pub mod format;

pub use format::{format_line, write_json, write_report};
