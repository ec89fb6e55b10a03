//! Whole-spec validation against a table's partition columns
//!
//! Validation semantics:
//! - Every spec column is a declared partition column
//! - Every literal is evaluated against its column's declared type
//! - Every entry is normalized
//! - Specs naming only some partition columns are allowed
//!
//! The spec is normalized on a working copy and replaced only once every
//! entry has passed, so a rejected spec is never partially rewritten.

use serde::{Deserialize, Serialize};

use crate::observability::{Event, Logger};

use super::errors::{PartitionError, PartitionResult};
use super::evaluator::{DefaultLiteralEvaluator, LiteralEvaluator};
use super::normalizer::ColumnSpecNormalizer;
use super::spec::PartitionSpec;

/// Partition column as declared in table metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionColumn {
    pub name: String,
    /// Declared type token, e.g. `date`
    #[serde(rename = "type")]
    pub column_type: String,
}

impl PartitionColumn {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }
}

/// Validates and normalizes partition specs for one table.
pub struct PartitionSpecValidator<'a, E = DefaultLiteralEvaluator> {
    columns: &'a [PartitionColumn],
    evaluator: E,
    normalizer: ColumnSpecNormalizer,
    logger: Logger,
}

impl<'a> PartitionSpecValidator<'a> {
    /// Creates a validator for the given partition columns, using the
    /// default evaluator.
    pub fn new(columns: &'a [PartitionColumn]) -> Self {
        Self {
            columns,
            evaluator: DefaultLiteralEvaluator::default(),
            normalizer: ColumnSpecNormalizer::default(),
            logger: Logger::default(),
        }
    }
}

impl<'a, E: LiteralEvaluator> PartitionSpecValidator<'a, E> {
    /// Replaces the literal evaluator
    pub fn with_evaluator<F: LiteralEvaluator>(
        self,
        evaluator: F,
    ) -> PartitionSpecValidator<'a, F> {
        PartitionSpecValidator {
            columns: self.columns,
            evaluator,
            normalizer: self.normalizer,
            logger: self.logger,
        }
    }

    /// Logs through `logger`, including events from the normalizer
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.normalizer = ColumnSpecNormalizer::with_logger(logger.clone());
        self.logger = logger;
        self
    }

    /// Declared type of a partition column
    pub fn column_type(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.name == column)
            .map(|c| c.column_type.as_str())
    }

    /// Validates every entry of `spec` and rewrites it to canonical form.
    ///
    /// # Errors
    ///
    /// - `PART_UNKNOWN_COLUMN` if an entry is not a partition column
    /// - `PART_TYPE_MISMATCH` if an entry's value does not fit its type
    ///
    /// Entries are checked in column-name order and the first failure is
    /// returned. `spec` is unchanged on error.
    pub fn validate(&self, spec: &mut PartitionSpec) -> PartitionResult<()> {
        let mut working = spec.clone();

        for (column, text) in spec.iter() {
            let declared_type = match self.column_type(column) {
                Some(t) => t,
                None => {
                    self.logger.warn(Event::PartitionColumnUnknown, &[("column", column)]);
                    return Err(PartitionError::unknown_column(column));
                }
            };

            let value = self.evaluator.evaluate(declared_type, text);
            self.normalizer
                .normalize(&mut working, column, declared_type, text, &value)?;
        }

        let count = spec.len().to_string();
        self.logger.info(Event::PartitionSpecValidated, &[("columns", count.as_str())]);
        *spec = working;
        Ok(())
    }
}
