//! CLI module for partspec
//!
//! Provides command-line interface for:
//! - normalize: Evaluate and normalize one partition value
//! - validate: Validate a whole partition spec read from stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    normalize, normalize_entry, run, run_command, validate, validate_request, ValidateRequest,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_response};
