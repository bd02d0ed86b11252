//! Domain types used by the reporter.
//!
//! This module defines:
//!
//! - the default years (`BIRTH_YEAR`, `CURRENT_YEAR`)
//! - the reporting range (`YearSpan`) and its rows (`AgeEntry`)
//! - resolved run settings (`ReportConfig`, `OutputFormat`)

pub mod types;

pub use types::*;
