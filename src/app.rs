//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the year span from flags, `.env`/environment, and defaults
//! - writes the report to standard output
//! - writes the optional JSON export

use std::io::{BufWriter, Write};

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{BIRTH_YEAR, CURRENT_YEAR, ReportConfig, YearSpan};
use crate::error::AppError;

pub const ENV_BIRTH_YEAR: &str = "AGES_BIRTH_YEAR";
pub const ENV_CURRENT_YEAR: &str = "AGES_CURRENT_YEAR";

/// Entry point for the `ages` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = report_config(&cli, |key| std::env::var(key).ok())?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_report(&config, &mut out)
}

/// Write the report for `config` to `out`, then the export if one was requested.
pub fn run_report<W: Write>(config: &ReportConfig, out: &mut W) -> Result<(), AppError> {
    crate::report::write_report(out, &config.span, config.format)?;

    if let Some(path) = &config.export {
        crate::io::export::write_entries_json(path, &config.span)?;
    }

    Ok(())
}

/// Resolve run settings. Each year comes from its flag, else `env`, else the default constant.
pub fn report_config<F>(cli: &Cli, env: F) -> Result<ReportConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let birth_year = resolve_year(cli.birth_year, ENV_BIRTH_YEAR, &env, BIRTH_YEAR)?;
    let current_year = resolve_year(cli.current_year, ENV_CURRENT_YEAR, &env, CURRENT_YEAR)?;

    Ok(ReportConfig {
        span: YearSpan::new(birth_year, current_year),
        format: cli.format,
        export: cli.export.clone(),
    })
}

fn resolve_year<F>(flag: Option<i32>, key: &str, env: &F, default: i32) -> Result<i32, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(year) = flag {
        return Ok(year);
    }
    match env(key) {
        Some(raw) => raw
            .trim()
            .parse::<i32>()
            .map_err(|e| AppError::config(format!("Invalid {key}='{raw}': {e}"))),
        None => Ok(default),
    }
}
