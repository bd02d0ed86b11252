//! Shared domain types.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

/// Birth year used when neither a flag nor the environment overrides it.
pub const BIRTH_YEAR: i32 = 1999;

/// Exclusive upper bound used when neither a flag nor the environment overrides it.
pub const CURRENT_YEAR: i32 = 2023;

/// Half-open range of years `[birth_year, current_year)`.
///
/// The bounds and the iteration variable share one signed type, so an
/// inverted span simply yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSpan {
    pub birth_year: i32,
    pub current_year: i32,
}

impl YearSpan {
    pub fn new(birth_year: i32, current_year: i32) -> Self {
        Self {
            birth_year,
            current_year,
        }
    }

    /// Number of entries the span produces. Zero when `current_year <= birth_year`.
    pub(crate) fn len(&self) -> u64 {
        let diff = i64::from(self.current_year) - i64::from(self.birth_year);
        diff.max(0) as u64
    }

    /// One entry per year, in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = AgeEntry> + use<> {
        let birth_year = self.birth_year;
        (birth_year..self.current_year).map(move |year| AgeEntry {
            year,
            age: i64::from(year) - i64::from(birth_year),
        })
    }
}

impl Default for YearSpan {
    fn default() -> Self {
        Self::new(BIRTH_YEAR, CURRENT_YEAR)
    }
}

/// A single reported row.
///
/// `age` is widened so spans near the `i32` limits cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeEntry {
    pub year: i32,
    pub age: i64,
}

/// Serializes as a JSON array of the span's entries, produced one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanEntries(pub YearSpan);

impl Serialize for SpanEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(usize::try_from(self.0.len()).ok())?;
        for entry in self.0.entries() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

/// How the report is rendered on standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `In <year> I was <age> years old.` line per year.
    #[default]
    Text,
    /// A JSON array of `{ "year", "age" }` objects.
    Json,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub span: YearSpan,
    pub format: OutputFormat,
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_span_has_24_entries() {
        let span = YearSpan::default();
        assert_eq!(span.len(), 24);
        assert_eq!(span.entries().count(), 24);
    }

    #[test]
    fn entries_are_year_minus_birth_year() {
        let span = YearSpan::default();
        for (k, entry) in span.entries().enumerate() {
            assert_eq!(entry.year, 1999 + k as i32);
            assert_eq!(entry.age, k as i64);
        }
    }

    #[test]
    fn equal_years_yield_nothing() {
        let span = YearSpan::new(2010, 2010);
        assert_eq!(span.len(), 0);
        assert_eq!(span.entries().count(), 0);
    }

    #[test]
    fn inverted_span_yields_nothing() {
        let span = YearSpan::new(2023, 1999);
        assert_eq!(span.len(), 0);
        assert_eq!(span.entries().count(), 0);
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let span = YearSpan::new(i32::MIN, i32::MAX);
        assert_eq!(span.len(), u32::MAX as u64);

        let last = YearSpan::new(i32::MAX - 1, i32::MAX).entries().last().unwrap();
        assert_eq!(last.age, 0);

        let far = YearSpan::new(i32::MIN, i32::MIN + 2).entries().last().unwrap();
        assert_eq!(far.age, 1);
    }

    #[test]
    fn span_entries_serialize_as_array() {
        let json = serde_json::to_value(SpanEntries(YearSpan::new(2000, 2002))).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "year": 2000, "age": 0 }, { "year": 2001, "age": 1 }])
        );
    }

    #[test]
    fn ages_are_never_negative() {
        let span = YearSpan::new(-5, 5);
        assert!(span.entries().all(|e| e.age >= 0));
    }
}
