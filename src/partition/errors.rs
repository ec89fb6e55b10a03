//! Partition error types
//!
//! Error codes:
//! - PART_TYPE_MISMATCH (REJECT)
//! - PART_UNKNOWN_COLUMN (REJECT)

use std::fmt;

/// Severity levels for partition errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Partition-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionErrorCode {
    /// Evaluated value does not have the shape the declared type requires
    TypeMismatch,
    /// Spec names a column that is not a partition column of the table
    UnknownPartitionColumn,
}

impl PartitionErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            PartitionErrorCode::TypeMismatch => "PART_TYPE_MISMATCH",
            PartitionErrorCode::UnknownPartitionColumn => "PART_UNKNOWN_COLUMN",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for PartitionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Partition error type with full context
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionError {
    code: PartitionErrorCode,
    message: String,
    column: String,
}

impl PartitionError {
    /// Create a type mismatch error.
    ///
    /// `actual` names the kind of value the evaluator produced.
    pub fn type_mismatch(
        column: impl Into<String>,
        declared_type: &str,
        original_text: &str,
        actual: &str,
    ) -> Self {
        let column = column.into();
        Self {
            code: PartitionErrorCode::TypeMismatch,
            message: format!(
                "Partition column '{}' declared as {} but value '{}' evaluated to {}",
                column, declared_type, original_text, actual
            ),
            column,
        }
    }

    /// Create an unknown partition column error
    pub fn unknown_column(column: impl Into<String>) -> Self {
        let column = column.into();
        Self {
            code: PartitionErrorCode::UnknownPartitionColumn,
            message: format!("'{}' is not a partition column", column),
            column,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> PartitionErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending column
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns true for type mismatch errors
    pub fn is_type_mismatch(&self) -> bool {
        self.code == PartitionErrorCode::TypeMismatch
    }
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for PartitionError {}

/// Result type for partition operations
pub type PartitionResult<T> = Result<T, PartitionError>;
