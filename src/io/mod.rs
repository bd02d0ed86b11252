//! File output.
//!
//! - `export`: write the computed entries to a JSON file

pub mod export;
