//! Partition literal evaluation
//!
//! Turns literal text into a [`LiteralValue`] of the column's declared type.
//! Evaluation never fails: text that cannot be read as the declared type is
//! handed on as an opaque string, and it is up to the normalizer to decide
//! whether that is acceptable for the type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::value::{DateWritable, LiteralValue, OpaqueValue};

/// Date literal format. Month and day may be written with one or two digits.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Evaluates partition literal text against a declared column type.
pub trait LiteralEvaluator {
    fn evaluate(&self, declared_type: &str, text: &str) -> LiteralValue;
}

/// Which date-bearing variant the evaluator produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRepresentation {
    /// `LiteralValue::Date`
    #[default]
    Native,
    /// `LiteralValue::Writable`
    Writable,
}

/// Evaluator for the primitive partition column types.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLiteralEvaluator {
    dates: DateRepresentation,
}

impl DefaultLiteralEvaluator {
    pub fn new(dates: DateRepresentation) -> Self {
        Self { dates }
    }

    pub fn date_representation(&self) -> DateRepresentation {
        self.dates
    }

    fn evaluate_date(&self, text: &str) -> LiteralValue {
        match parse_date(text) {
            Some(date) => match self.dates {
                DateRepresentation::Native => LiteralValue::Date(date),
                DateRepresentation::Writable => LiteralValue::Writable(DateWritable::new(date)),
            },
            None => LiteralValue::string(text),
        }
    }
}

impl LiteralEvaluator for DefaultLiteralEvaluator {
    fn evaluate(&self, declared_type: &str, text: &str) -> LiteralValue {
        let opaque = match declared_type {
            "date" => return self.evaluate_date(text),
            "tinyint" => text.trim().parse::<i8>().map(i64::from).ok().map(OpaqueValue::Int),
            "smallint" => text.trim().parse::<i16>().map(i64::from).ok().map(OpaqueValue::Int),
            "int" => text.trim().parse::<i32>().map(i64::from).ok().map(OpaqueValue::Int),
            "bigint" => text.trim().parse::<i64>().ok().map(OpaqueValue::Int),
            "float" | "double" => text.trim().parse::<f64>().ok().map(OpaqueValue::Double),
            "boolean" => parse_boolean(text).map(OpaqueValue::Boolean),
            _ => None,
        };
        LiteralValue::Other(opaque.unwrap_or_else(|| OpaqueValue::String(text.to_string())))
    }
}

/// Parses `YYYY-M-D` style text, checking calendar bounds and leap years.
///
/// Years may be signed. An unsigned year longer than four digits is read in
/// full, so canonical text for years past 9999 parses back.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let year_len = text.find('-').unwrap_or(text.len());
    if year_len > 4 && text[..year_len].bytes().all(|b| b.is_ascii_digit()) {
        // chrono reads at most four digits of an unsigned year
        return NaiveDate::parse_from_str(&format!("+{}", text), DATE_FORMAT).ok();
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

fn parse_boolean(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
