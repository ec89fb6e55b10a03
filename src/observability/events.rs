//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,

    /// Spec entry rewritten to canonical text
    PartitionSpecNormalized,
    /// Spec entry left as is (no canonicalizer for its type)
    PartitionSpecUnchanged,
    /// Evaluated value does not match the declared type
    PartitionTypeMismatch,
    /// Spec names a column the table does not partition by
    PartitionColumnUnknown,
    /// Whole spec validated and committed
    PartitionSpecValidated,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::PartitionSpecNormalized => "PARTITION_SPEC_NORMALIZED",
            Event::PartitionSpecUnchanged => "PARTITION_SPEC_UNCHANGED",
            Event::PartitionTypeMismatch => "PARTITION_TYPE_MISMATCH",
            Event::PartitionColumnUnknown => "PARTITION_COLUMN_UNKNOWN",
            Event::PartitionSpecValidated => "PARTITION_SPEC_VALIDATED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::PartitionSpecNormalized,
            Event::PartitionSpecUnchanged,
            Event::PartitionTypeMismatch,
            Event::PartitionColumnUnknown,
            Event::PartitionSpecValidated,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_display() {
        assert_eq!(
            format!("{}", Event::PartitionSpecNormalized),
            "PARTITION_SPEC_NORMALIZED"
        );
    }
}
