use std::path::Path;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};

use crate::args::{HammerArgs, PositiveUsize, parse_duration_arg};
use crate::config::apply_config;
use crate::config::types::ConfigFile;
use crate::error::{AppError, AppResult};

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    parse_duration_arg(input).map_err(AppError::from)
}

/// Parses a hammer or throw count.
///
/// # Errors
///
/// Returns an error when the value is not a positive integer.
pub fn parse_positive_usize_input(input: &str) -> AppResult<PositiveUsize> {
    input.parse::<PositiveUsize>().map_err(AppError::from)
}

/// Parses CLI tokens the way the binary does, without touching the process args.
///
/// # Errors
///
/// Returns an error when clap rejects the arguments.
pub fn parse_cli_input(tokens: &[&str]) -> AppResult<HammerArgs> {
    let argv = std::iter::once("thor").chain(tokens.iter().copied());
    let matches = HammerArgs::command().try_get_matches_from(argv)?;
    Ok(HammerArgs::from_arg_matches(&matches)?)
}

/// Parses a TOML config and applies it on top of an argument-less command line.
///
/// # Errors
///
/// Returns an error when the config cannot be parsed or holds invalid values.
pub fn apply_config_from_toml(input: &str) -> AppResult<HammerArgs> {
    apply_config_from(Path::new("fuzz.toml"), input)
}

/// Parses a JSON config and applies it on top of an argument-less command line.
///
/// # Errors
///
/// Returns an error when the config cannot be parsed or holds invalid values.
pub fn apply_config_from_json(input: &str) -> AppResult<HammerArgs> {
    apply_config_from(Path::new("fuzz.json"), input)
}

fn apply_config_from(path: &Path, input: &str) -> AppResult<HammerArgs> {
    let config: ConfigFile = crate::config::parse_config(path, input)?;
    let matches = HammerArgs::command().try_get_matches_from(["thor"])?;
    let mut args = HammerArgs::from_arg_matches(&matches)?;
    apply_config(&mut args, &matches, &config)?;
    Ok(args)
}
