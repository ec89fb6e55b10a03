//! partspec - strict, deterministic partition-spec normalization
//!
//! Partition values arrive as literal text typed by the table's declared
//! column types. This crate rewrites each value to its canonical text and
//! rejects values whose evaluated form does not match the declared type.
//!
//! ```
//! use chrono::NaiveDate;
//! use partspec::partition::{normalize_col_spec, LiteralValue, PartitionSpec};
//!
//! let mut spec = PartitionSpec::new();
//! spec.insert("ds", "2010-1-1");
//!
//! let value = LiteralValue::Date(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
//! normalize_col_spec(&mut spec, "ds", "date", "2010-1-1", &value).unwrap();
//! assert_eq!(spec.get("ds"), Some("2010-01-01"));
//! ```

pub mod cli;
pub mod config;
pub mod observability;
pub mod partition;
