//! Normalization Invariant Tests
//!
//! - Equivalent date texts converge on one canonical text
//! - Types without a canonicalizer are left untouched
//! - Normalization is idempotent
//! - Non-date values for date columns are rejected, spec untouched
//! - Native dates and their storage wrapper behave identically

use chrono::NaiveDate;
use partspec::partition::{
    normalize_col_spec, ColumnSpecNormalizer, DateWritable, DefaultLiteralEvaluator,
    LiteralEvaluator, LiteralValue, OpaqueValue, PartitionErrorCode, PartitionSpec,
};

// =============================================================================
// Helper Functions
// =============================================================================

const COL: &str = "col";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn spec_with(text: &str) -> PartitionSpec {
    let mut spec = PartitionSpec::new();
    spec.insert(COL, text);
    spec
}

/// Evaluates `text` with the default evaluator, normalizes, returns the entry.
fn normalize_text(col_type: &str, text: &str) -> Result<String, PartitionErrorCode> {
    let value = DefaultLiteralEvaluator::default().evaluate(col_type, text);
    let mut spec = spec_with(text);
    normalize_col_spec(&mut spec, COL, col_type, text, &value).map_err(|e| e.code())?;
    Ok(spec.get(COL).unwrap().to_string())
}

// =============================================================================
// Convergence
// =============================================================================

/// Every spelling of 2010-01-01 normalizes to the same text.
#[test]
fn test_equivalent_dates_converge() {
    for text in ["2010-01-01", "2010-1-01", "2010-01-1", "2010-1-1"] {
        assert_eq!(normalize_text("date", text).unwrap(), "2010-01-01", "{}", text);
    }
}

/// Convergence holds across the calendar, including leap days.
#[test]
fn test_convergence_across_calendar() {
    assert_eq!(normalize_text("date", "2012-2-29").unwrap(), "2012-02-29");
    assert_eq!(normalize_text("date", "999-9-9").unwrap(), "0999-09-09");
    assert_eq!(normalize_text("date", "2010-12-31").unwrap(), "2010-12-31");
}

// =============================================================================
// Identity
// =============================================================================

/// Non-canonicalizable types keep their text exactly, whatever it is.
#[test]
fn test_other_types_unchanged() {
    let cases = [
        ("string", "2010-1-1"),
        ("string", ""),
        ("int", "007"),
        ("int", "not a number"),
        ("timestamp", "2010-1-1 1:2:3"),
        ("varchar(8)", "  padded  "),
    ];
    for (col_type, text) in cases {
        assert_eq!(normalize_text(col_type, text).unwrap(), text);
    }
}

/// The value is not inspected for non-canonicalizable types.
#[test]
fn test_other_types_ignore_value() {
    let mut spec = spec_with("abc");
    let value = LiteralValue::Date(date(2010, 1, 1));
    normalize_col_spec(&mut spec, COL, "string", "abc", &value).unwrap();
    assert_eq!(spec.get(COL), Some("abc"));
}

// =============================================================================
// Idempotence
// =============================================================================

/// Canonical text stays canonical.
#[test]
fn test_canonical_text_is_fixed_point() {
    let first = normalize_text("date", "2010-1-1").unwrap();
    let second = normalize_text("date", &first).unwrap();
    assert_eq!(first, second);

    let evaluator = DefaultLiteralEvaluator::default();
    assert_eq!(
        evaluator.evaluate("date", &first),
        evaluator.evaluate("date", "2010-1-1")
    );
}

/// Normalizing the same entry repeatedly changes nothing after the first time.
#[test]
fn test_repeated_normalization() {
    let normalizer = ColumnSpecNormalizer::new();
    let value = LiteralValue::Date(date(2010, 1, 1));
    let mut spec = spec_with("2010-1-1");

    for _ in 0..10 {
        normalizer
            .normalize(&mut spec, COL, "date", "2010-1-1", &value)
            .unwrap();
        assert_eq!(spec.get(COL), Some("2010-01-01"));
    }
}

// =============================================================================
// Type Mismatch
// =============================================================================

/// Unparsable date text is rejected and the entry keeps its text.
#[test]
fn test_bad_date_text_rejected() {
    let mut spec = spec_with("foo");
    let value = LiteralValue::string("foo");

    let err = normalize_col_spec(&mut spec, COL, "date", "foo", &value).unwrap_err();
    assert_eq!(err.code(), PartitionErrorCode::TypeMismatch);
    assert_eq!(spec.get(COL), Some("foo"));
    assert_eq!(normalize_text("date", "foo"), Err(PartitionErrorCode::TypeMismatch));
}

/// Valid-looking text paired with a non-date value is still rejected.
#[test]
fn test_wrong_value_kind_rejected() {
    let values = [
        LiteralValue::string("2010-01-01"),
        LiteralValue::Other(OpaqueValue::Int(20100101)),
        LiteralValue::Other(OpaqueValue::Null),
    ];
    for value in values {
        let mut spec = spec_with("2010-1-1");
        let err = normalize_col_spec(&mut spec, COL, "date", "2010-01-01", &value).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(spec.get(COL), Some("2010-1-1"));
    }
}

/// Impossible calendar dates never reach a date value and are rejected.
#[test]
fn test_impossible_dates_rejected() {
    for text in ["2011-02-29", "2010-13-01", "2010-00-10", "2010-01-32"] {
        assert_eq!(normalize_text("date", text), Err(PartitionErrorCode::TypeMismatch), "{}", text);
    }
}

// =============================================================================
// Wrapper Equivalence
// =============================================================================

/// Native and wrapped values give the same text for the same date.
#[test]
fn test_wrapper_matches_native() {
    for d in [date(2010, 1, 1), date(1969, 12, 31), date(2400, 2, 29), date(1, 1, 1)] {
        let mut native_spec = spec_with("x");
        let mut wrapped_spec = spec_with("x");

        normalize_col_spec(&mut native_spec, COL, "date", "x", &LiteralValue::Date(d)).unwrap();
        normalize_col_spec(
            &mut wrapped_spec,
            COL,
            "date",
            "x",
            &LiteralValue::Writable(DateWritable::new(d)),
        )
        .unwrap();

        assert_eq!(native_spec, wrapped_spec);
    }
}

/// A wrapper whose day count is off the calendar fails like any non-date.
#[test]
fn test_unrepresentable_wrapper_rejected() {
    let mut spec = spec_with("2010-01-01");
    let value = LiteralValue::Writable(DateWritable::from_days(i32::MAX));
    let err = normalize_col_spec(&mut spec, COL, "date", "2010-01-01", &value).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(spec.get(COL), Some("2010-01-01"));
}

// =============================================================================
// Concurrency
// =============================================================================

/// One normalizer can serve many threads, each with its own spec.
#[test]
fn test_shared_normalizer_across_threads() {
    let normalizer = ColumnSpecNormalizer::new();

    std::thread::scope(|s| {
        for day in 1..=28u32 {
            let normalizer = &normalizer;
            s.spawn(move || {
                let text = format!("2010-2-{}", day);
                let mut spec = spec_with(&text);
                let value = LiteralValue::Date(date(2010, 2, day));
                normalizer
                    .normalize(&mut spec, COL, "date", &text, &value)
                    .unwrap();
                assert_eq!(spec.get(COL), Some(format!("2010-02-{:02}", day).as_str()));
            });
        }
    });
}
