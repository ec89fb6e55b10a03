//! Column-spec normalization
//!
//! Rewrites one partition-spec entry to the canonical text of its evaluated
//! value, or rejects the entry when the value does not have the shape its
//! declared type requires.
//!
//! # Guarantees
//!
//! - On success the entry equals the canonical text of the value
//! - Normalizing canonical text again yields the same text
//! - Types without a canonicalizer keep their original text
//! - On failure the spec is not touched

use crate::observability::{Event, Logger};

use super::canonical::canonicalizer_for;
use super::errors::{PartitionError, PartitionResult};
use super::spec::PartitionSpec;
use super::value::LiteralValue;

/// Normalizes single partition-spec entries in place.
///
/// Holds no state besides its logger; one instance can serve any number of
/// specs from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ColumnSpecNormalizer {
    logger: Logger,
}

impl ColumnSpecNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(logger: Logger) -> Self {
        Self { logger }
    }

    /// Normalizes `spec[column]` given the value `original_text` evaluated to.
    ///
    /// For a canonicalizable `declared_type` the value must be of the shape
    /// that type requires, regardless of what `original_text` looks like.
    /// The canonical text is rendered from `value` alone; `original_text` is
    /// only reported in errors and logs. Other types pass through unchanged
    /// and unchecked.
    ///
    /// # Errors
    ///
    /// `PART_TYPE_MISMATCH` when the declared type is canonicalizable and
    /// `value` is not of its shape. `spec` is left untouched.
    pub fn normalize(
        &self,
        spec: &mut PartitionSpec,
        column: &str,
        declared_type: &str,
        original_text: &str,
        value: &LiteralValue,
    ) -> PartitionResult<()> {
        let Some(canonicalize) = canonicalizer_for(declared_type) else {
            self.logger.trace(
                Event::PartitionSpecUnchanged,
                &[("column", column), ("type", declared_type)],
            );
            return Ok(());
        };

        let canonical = match canonicalize(value) {
            Some(text) => text,
            None => {
                self.logger.warn(
                    Event::PartitionTypeMismatch,
                    &[
                        ("column", column),
                        ("type", declared_type),
                        ("text", original_text),
                        ("value_kind", value.kind_name()),
                    ],
                );
                return Err(PartitionError::type_mismatch(
                    column,
                    declared_type,
                    original_text,
                    value.kind_name(),
                ));
            }
        };

        self.logger.trace(
            Event::PartitionSpecNormalized,
            &[
                ("canonical", canonical.as_str()),
                ("column", column),
                ("text", original_text),
                ("type", declared_type),
            ],
        );
        spec.insert(column, canonical);
        Ok(())
    }
}

/// [`ColumnSpecNormalizer::normalize`] with a default (quiet) normalizer.
pub fn normalize_col_spec(
    spec: &mut PartitionSpec,
    column: &str,
    declared_type: &str,
    original_text: &str,
    value: &LiteralValue,
) -> PartitionResult<()> {
    ColumnSpecNormalizer::default().normalize(spec, column, declared_type, original_text, value)
}
