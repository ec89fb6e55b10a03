//! Per-type canonicalizers
//!
//! Types whose literals have more than one valid textual form register a
//! canonicalizer here. The table is fixed at compile time; a type with no
//! entry keeps its original text.

use chrono::{Datelike, NaiveDate};

use super::value::LiteralValue;

/// Renders an evaluated value as canonical text. Returns `None` when the
/// value does not have the shape the type requires.
pub type Canonicalizer = fn(&LiteralValue) -> Option<String>;

static CANONICALIZERS: &[(&str, Canonicalizer)] = &[("date", canonicalize_date)];

/// Canonicalizer registered for an exact type token
pub fn canonicalizer_for(type_name: &str) -> Option<Canonicalizer> {
    CANONICALIZERS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, canonicalizer)| *canonicalizer)
}

pub fn is_canonicalizable(type_name: &str) -> bool {
    canonicalizer_for(type_name).is_some()
}

/// `YYYY-MM-DD` for date-bearing values.
pub fn canonicalize_date(value: &LiteralValue) -> Option<String> {
    value.as_date().map(format_date)
}

/// Month and day are zero-padded to two digits. The year's digits are padded
/// to four and never truncated; only years before 1 BCE carry a sign.
pub fn format_date(date: NaiveDate) -> String {
    let year = date.year();
    let sign = if year < 0 { "-" } else { "" };
    format!(
        "{}{:04}-{:02}-{:02}",
        sign,
        year.unsigned_abs(),
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::evaluator::parse_date;
    use crate::partition::value::DateWritable;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(is_canonicalizable("date"));
        assert!(!is_canonicalizable("DATE"));
        assert!(!is_canonicalizable("Date"));
        assert!(!is_canonicalizable(" date"));
        assert!(!is_canonicalizable("string"));
        assert!(!is_canonicalizable("timestamp"));
        assert!(!is_canonicalizable(""));
    }

    #[test]
    fn test_format_pads() {
        assert_eq!(format_date(ymd(2010, 1, 1)), "2010-01-01");
        assert_eq!(format_date(ymd(2010, 12, 31)), "2010-12-31");
        assert_eq!(format_date(ymd(33, 3, 7)), "0033-03-07");
    }

    #[test]
    fn test_format_does_not_truncate_year() {
        assert_eq!(format_date(ymd(12345, 6, 7)), "12345-06-07");
    }

    #[test]
    fn test_format_negative_year_pads_digits() {
        assert_eq!(format_date(ymd(-1, 1, 1)), "-0001-01-01");
        assert_eq!(format_date(ymd(-12345, 12, 31)), "-12345-12-31");
        assert_eq!(format_date(ymd(0, 2, 29)), "0000-02-29");
    }

    #[test]
    fn test_formatted_dates_parse_back() {
        let dates = [
            ymd(-1, 1, 1),
            ymd(0, 2, 29),
            ymd(33, 3, 7),
            ymd(2010, 1, 1),
            ymd(12345, 6, 7),
        ];
        for date in dates {
            assert_eq!(parse_date(&format_date(date)), Some(date), "{}", date);
        }
    }

    #[test]
    fn test_date_canonicalizer_accepts_both_variants() {
        let date = ymd(2010, 1, 1);
        let canonicalize = canonicalizer_for("date").unwrap();
        assert_eq!(
            canonicalize(&LiteralValue::Date(date)),
            Some("2010-01-01".to_string())
        );
        assert_eq!(
            canonicalize(&LiteralValue::Writable(DateWritable::new(date))),
            Some("2010-01-01".to_string())
        );
    }

    #[test]
    fn test_date_canonicalizer_rejects_other() {
        assert_eq!(canonicalize_date(&LiteralValue::string("2010-01-01")), None);
    }
}
