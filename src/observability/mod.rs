//! Observability subsystem
//!
//! Structured, synchronous JSON logging of typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on normalization outcomes
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```
//! use partspec::observability::{Event, Logger, Severity};
//!
//! let (logger, lines) = Logger::memory(Severity::Trace);
//! logger.trace(Event::PartitionSpecNormalized, &[("column", "ds")]);
//! assert_eq!(lines.lock().unwrap().len(), 1);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{LogSink, Logger, Severity};
