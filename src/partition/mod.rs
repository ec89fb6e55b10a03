//! Partition-spec normalization subsystem
//!
//! A partition spec assigns literal text to partition columns. Before the
//! spec is used for metadata lookups each literal is evaluated against the
//! column's declared type and rewritten to its canonical text.
//!
//! # Design Principles
//!
//! - Types with several textual forms have exactly one canonical form
//!   (dates: `2010-1-1` becomes `2010-01-01`)
//! - Text, canonical text and evaluated value must agree, or the entry is
//!   rejected
//! - Types without a canonicalizer pass through untouched
//! - Rejected entries are never partially rewritten
//! - No shared mutable state

mod canonical;
mod errors;
mod evaluator;
mod normalizer;
mod spec;
mod validator;
mod value;

pub use canonical::{canonicalizer_for, format_date, is_canonicalizable, Canonicalizer};
pub use errors::{PartitionError, PartitionErrorCode, PartitionResult, Severity};
pub use evaluator::{
    parse_date, DateRepresentation, DefaultLiteralEvaluator, LiteralEvaluator, DATE_FORMAT,
};
pub use normalizer::{normalize_col_spec, ColumnSpecNormalizer};
pub use spec::PartitionSpec;
pub use validator::{PartitionColumn, PartitionSpecValidator};
pub use value::{DateWritable, LiteralValue, OpaqueValue};
