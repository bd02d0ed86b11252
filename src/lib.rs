//! `ages` library crate.
//!
//! The binary (`ages`) is a thin wrapper around this library so the report
//! can be tested against an in-memory writer instead of a spawned process.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
