//! CLI argument definitions using clap
//!
//! Commands:
//! - partspec normalize --column <c> --type <t> --value <v> [--config <path>]
//! - partspec validate [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// partspec - partition-spec normalization for partitioned tables
#[derive(Parser, Debug)]
#[command(name = "partspec")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate and normalize a single partition value
    Normalize {
        /// Partition column name
        #[arg(long)]
        column: String,

        /// Declared column type, e.g. date
        #[arg(long = "type")]
        column_type: String,

        /// Literal text as written in the query
        #[arg(long, allow_hyphen_values = true)]
        value: String,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a partition spec read as JSON from stdin
    Validate {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_args() {
        let cli = Cli::try_parse_from([
            "partspec", "normalize", "--column", "ds", "--type", "date", "--value", "2010-1-1",
        ])
        .unwrap();
        match cli.command {
            Command::Normalize {
                column,
                column_type,
                value,
                config,
            } => {
                assert_eq!(column, "ds");
                assert_eq!(column_type, "date");
                assert_eq!(value, "2010-1-1");
                assert!(config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_validate_args() {
        let cli = Cli::try_parse_from(["partspec", "validate", "--config", "p.json"]).unwrap();
        assert!(matches!(cli.command, Command::Validate { config: Some(_) }));
    }

    #[test]
    fn test_normalize_requires_type() {
        let args = ["partspec", "normalize", "--column", "ds", "--value", "x"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
