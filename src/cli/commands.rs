//! CLI command implementations
//!
//! Every command prints exactly one JSON response line. Rejected input is
//! reported as an error response and the command still returns the error,
//! so the process exits non-zero.

use std::path::Path;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::NormalizerConfig;
use crate::partition::{
    ColumnSpecNormalizer, LiteralEvaluator, PartitionColumn, PartitionSpec,
    PartitionSpecValidator,
};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Request accepted by `partspec validate`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidateRequest {
    /// Partition columns of the table
    pub columns: Vec<PartitionColumn>,
    /// Spec to validate
    pub spec: PartitionSpec,
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Normalize {
            column,
            column_type,
            value,
            config,
        } => normalize(&column, &column_type, &value, config.as_deref()),
        Command::Validate { config } => validate(config.as_deref()),
    }
}

/// `partspec normalize`
pub fn normalize(
    column: &str,
    column_type: &str,
    text: &str,
    config_path: Option<&Path>,
) -> CliResult<()> {
    respond(
        load_config(config_path)
            .and_then(|config| normalize_entry(&config, column, column_type, text)),
    )
}

/// `partspec validate`
pub fn validate(config_path: Option<&Path>) -> CliResult<()> {
    let outcome = load_config(config_path).and_then(|config| {
        let request = ValidateRequest::try_from(read_request()?)?;
        let spec = validate_request(&config, request)?;
        Ok(json!({ "spec": spec }))
    });
    respond(outcome)
}

/// Evaluate and normalize one entry; returns the response data.
pub fn normalize_entry(
    config: &NormalizerConfig,
    column: &str,
    column_type: &str,
    text: &str,
) -> CliResult<Value> {
    let value = config.evaluator().evaluate(column_type, text);
    let normalizer = ColumnSpecNormalizer::with_logger(config.logger());

    let mut spec = PartitionSpec::new();
    spec.insert(column, text);
    normalizer.normalize(&mut spec, column, column_type, text, &value)?;

    Ok(json!({
        "column": column,
        "type": column_type,
        "value": spec.get(column),
        "evaluated": value,
    }))
}

/// Validate and normalize a whole spec.
pub fn validate_request(
    config: &NormalizerConfig,
    request: ValidateRequest,
) -> CliResult<PartitionSpec> {
    let ValidateRequest { columns, mut spec } = request;
    PartitionSpecValidator::new(&columns)
        .with_evaluator(config.evaluator())
        .with_logger(config.logger())
        .validate(&mut spec)?;
    Ok(spec)
}

fn load_config(path: Option<&Path>) -> CliResult<NormalizerConfig> {
    match path {
        Some(path) => Ok(NormalizerConfig::load(path)?),
        None => Ok(NormalizerConfig::default()),
    }
}

fn respond(outcome: CliResult<Value>) -> CliResult<()> {
    match outcome {
        Ok(data) => write_response(data),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

impl TryFrom<Value> for ValidateRequest {
    type Error = CliError;

    fn try_from(value: Value) -> CliResult<Self> {
        serde_json::from_value(value).map_err(CliError::from)
    }
}
