//! Command-line parsing.
//!
//! Every flag is optional: with no arguments the binary prints the default
//! 1999..2023 sequence.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "ages", version, about = "Print the age reached in each year of a range")]
pub struct Cli {
    /// First year of the range (inclusive). Overrides AGES_BIRTH_YEAR.
    #[arg(short = 'b', long, value_name = "YEAR", allow_negative_numbers = true)]
    pub birth_year: Option<i32>,

    /// End of the range (exclusive). Overrides AGES_CURRENT_YEAR.
    #[arg(short = 'c', long, value_name = "YEAR", allow_negative_numbers = true)]
    pub current_year: Option<i32>,

    /// Output format on standard output.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the entries to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_leaves_everything_unset() {
        let cli = Cli::try_parse_from(["ages"]).unwrap();
        assert_eq!(cli.birth_year, None);
        assert_eq!(cli.current_year, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.export.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "ages", "-b", "2000", "--current-year", "2003", "--format", "json", "--export", "out.json",
        ])
        .unwrap();
        assert_eq!(cli.birth_year, Some(2000));
        assert_eq!(cli.current_year, Some(2003));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.export, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn accepts_negative_years() {
        let cli = Cli::try_parse_from(["ages", "--birth-year", "-50", "-c", "-10"]).unwrap();
        assert_eq!(cli.birth_year, Some(-50));
        assert_eq!(cli.current_year, Some(-10));
    }

    #[test]
    fn rejects_non_numeric_year() {
        assert!(Cli::try_parse_from(["ages", "--birth-year", "abc"]).is_err());
    }
}
