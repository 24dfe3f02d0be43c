use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{HammerArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Fills in every argument that was not given on the command line from `config`.
///
/// # Errors
///
/// Returns a config error when a count is zero or a duration is invalid.
pub fn apply_config(
    args: &mut HammerArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "targets")
        && let Some(url) = config.url.clone()
    {
        args.targets = vec![url];
    }

    if !is_cli(matches, "hammers")
        && let Some(hammers) = config.hammers
    {
        args.hammers = ensure_positive_usize(hammers, "hammers")?;
    }

    if !is_cli(matches, "throws")
        && let Some(throws) = config.throws
    {
        args.throws = ensure_positive_usize(throws, "throws")?;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = Some(timeout.to_duration("timeout")?);
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = Some(timeout.to_duration("connect_timeout")?);
    }

    if !is_cli(matches, "no_color")
        && matches.value_source("no_color") != Some(ValueSource::EnvVariable)
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "export_json")
        && let Some(path) = config.export_json.clone()
    {
        args.export_json = Some(path);
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|source| AppError::config(ConfigError::FieldMustBePositive { field, source }))
}
