mod focus;
mod overview;
mod replay;

pub use replay::ReplayStep;

use std::path::Path;

use focusline_core::{
    ChartConfig, ChartContext, CoreError, Envelope, EnvelopeError, EnvelopeMeta, SCHEMA_VERSION,
};
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub point_count: usize,
    /// Focus updates emitted as separate `chunk` events in stream mode.
    pub updates: Vec<ReplayStep>,
}

impl CommandResult {
    pub fn ok(data: Value, point_count: usize) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            point_count,
            updates: Vec::new(),
        }
    }

    pub fn failed(error: EnvelopeError) -> Self {
        Self {
            data: Value::Null,
            warnings: Vec::new(),
            errors: vec![error],
            point_count: 0,
            updates: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_updates(mut self, updates: Vec<ReplayStep>) -> Self {
        self.updates.extend(updates);
        self
    }
}

/// Envelope plus the focus updates used by `--stream`.
pub struct CommandOutput {
    pub envelope: Envelope<Value>,
    pub updates: Vec<ReplayStep>,
}

pub fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let config = chart_config(cli);

    let (csv, command_result) = match &cli.command {
        Command::Overview(args) => (&args.csv, with_chart(&args.csv, config, overview::run)?),
        Command::Focus(args) => (
            &args.csv,
            with_chart(&args.csv, config, |chart| focus::run(args, chart))?,
        ),
        Command::Replay(args) => (
            &args.csv,
            with_chart(&args.csv, config, |chart| replay::run(args, chart))?,
        ),
    };

    let CommandResult {
        data,
        warnings,
        errors,
        point_count,
        updates,
    } = command_result;

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        SCHEMA_VERSION,
        csv.display().to_string(),
        point_count,
    )?;

    for warning in warnings {
        meta.push_warning(warning);
    }

    let envelope = Envelope::with_errors(meta, data, errors)?;
    Ok(CommandOutput { envelope, updates })
}

/// Defaults, then `FOCUSLINE_*` variables, then flags.
fn chart_config(cli: &Cli) -> ChartConfig {
    let mut config = ChartConfig::from_env();
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.focus_height {
        config.focus_height = height;
    }
    if let Some(height) = cli.context_height {
        config.context_height = height;
    }
    config
}

/// Loads the chart and runs `command` on it.
///
/// Load failures become an envelope error instead of a `CliError`, so the
/// caller still prints a well-formed envelope and exits with code 3.
fn with_chart<F>(csv: &Path, config: ChartConfig, command: F) -> Result<CommandResult, CliError>
where
    F: FnOnce(&mut ChartContext) -> Result<CommandResult, CliError>,
{
    config.validate()?;

    match ChartContext::load(csv, config) {
        Ok(mut chart) => command(&mut chart),
        Err(CoreError::Load(error)) => {
            tracing::warn!(path = %csv.display(), %error, "dataset failed to load");
            Ok(CommandResult::failed(EnvelopeError::from_load_error(&error)))
        }
        Err(CoreError::Validation(error)) => Err(error.into()),
    }
}
