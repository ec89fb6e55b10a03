//! Evaluated partition literal values
//!
//! A literal is evaluated against its column's declared type before it is
//! normalized. Two variants carry a calendar date: the native
//! [`NaiveDate`] and the [`DateWritable`] storage wrapper. Callers may pass
//! either one for the same logical date. Everything else is opaque to the
//! normalizer.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days from 0001-01-01 (day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Storage wrapper holding a date as a day count since 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWritable {
    days_since_epoch: i32,
}

impl DateWritable {
    /// Wrap a native date
    pub fn new(date: NaiveDate) -> Self {
        // NaiveDate spans far fewer than i32::MAX days, so this cannot overflow.
        Self {
            days_since_epoch: date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE,
        }
    }

    /// Wrap a raw day count as read from storage
    pub fn from_days(days_since_epoch: i32) -> Self {
        Self { days_since_epoch }
    }

    pub fn days_since_epoch(&self) -> i32 {
        self.days_since_epoch
    }

    /// The wrapped date, or `None` if the day count is outside the
    /// representable calendar range.
    pub fn get(&self) -> Option<NaiveDate> {
        self.days_since_epoch
            .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }
}

impl From<NaiveDate> for DateWritable {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

/// Non-date evaluation results. The normalizer never looks inside these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum OpaqueValue {
    String(String),
    Int(i64),
    Double(f64),
    Boolean(bool),
    Null,
}

impl OpaqueValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            OpaqueValue::String(_) => "string",
            OpaqueValue::Int(_) => "int",
            OpaqueValue::Double(_) => "double",
            OpaqueValue::Boolean(_) => "boolean",
            OpaqueValue::Null => "null",
        }
    }
}

/// Result of evaluating a partition literal against its declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LiteralValue {
    /// Native calendar date
    Date(NaiveDate),
    /// Calendar date in its storage wrapper
    Writable(DateWritable),
    /// Any value that is not date-bearing
    Other(OpaqueValue),
}

impl LiteralValue {
    /// Shorthand for an opaque string value
    pub fn string(text: impl Into<String>) -> Self {
        LiteralValue::Other(OpaqueValue::String(text.into()))
    }

    /// The logical date carried by this value, unwrapping the storage
    /// wrapper. `None` when the value is not date-bearing.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            LiteralValue::Date(date) => Some(*date),
            LiteralValue::Writable(writable) => writable.get(),
            LiteralValue::Other(_) => None,
        }
    }

    pub fn is_date_bearing(&self) -> bool {
        self.as_date().is_some()
    }

    /// Short name of the runtime variant, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            LiteralValue::Date(_) => "date",
            LiteralValue::Writable(w) if w.get().is_some() => "date_writable",
            LiteralValue::Writable(_) => "out-of-range date_writable",
            LiteralValue::Other(other) => other.kind_name(),
        }
    }
}

impl From<NaiveDate> for LiteralValue {
    fn from(date: NaiveDate) -> Self {
        LiteralValue::Date(date)
    }
}

impl From<DateWritable> for LiteralValue {
    fn from(writable: DateWritable) -> Self {
        LiteralValue::Writable(writable)
    }
}

impl From<OpaqueValue> for LiteralValue {
    fn from(other: OpaqueValue) -> Self {
        LiteralValue::Other(other)
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Date(date) => write!(f, "date {}", date),
            LiteralValue::Writable(w) => match w.get() {
                Some(date) => write!(f, "date_writable {}", date),
                None => write!(f, "date_writable <{} days>", w.days_since_epoch()),
            },
            LiteralValue::Other(OpaqueValue::String(s)) => write!(f, "string '{}'", s),
            LiteralValue::Other(OpaqueValue::Int(i)) => write!(f, "int {}", i),
            LiteralValue::Other(OpaqueValue::Double(d)) => write!(f, "double {}", d),
            LiteralValue::Other(OpaqueValue::Boolean(b)) => write!(f, "boolean {}", b),
            LiteralValue::Other(OpaqueValue::Null) => write!(f, "null"),
        }
    }
}
