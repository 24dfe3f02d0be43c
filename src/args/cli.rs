use clap::{ArgAction, Parser};
use std::time::Duration;

use super::defaults::USAGE;
use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "thor",
    version,
    about = "Concurrent HTTP load tester - parallel hammers issue sequential timed throws against a URL.",
    override_usage = USAGE,
    disable_help_flag = true
)]
pub struct HammerArgs {
    /// Target URL; when given more than once the last one wins
    #[arg(value_name = "URL")]
    pub targets: Vec<String>,

    /// Number of hammers to utilize
    #[arg(
        short = 'h',
        value_name = "HAMMERS",
        default_value = "1",
        value_parser = parse_positive_usize
    )]
    pub hammers: PositiveUsize,

    /// Number of throws per hammer
    #[arg(
        short = 't',
        value_name = "THROWS",
        default_value = "1",
        value_parser = parse_positive_usize
    )]
    pub throws: PositiveUsize,

    /// Display verbose output (response bodies)
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Per-request timeout (supports ms/s/m/h); unset keeps the HTTP client default
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Connect timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", value_parser = parse_duration_arg)]
    pub connect_timeout: Option<Duration>,

    /// Path to a TOML or JSON config file
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Write the run result as JSON to this path
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long = "log-verbose")]
    pub log_verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl HammerArgs {
    #[must_use]
    pub fn target_url(&self) -> Option<&str> {
        self.targets.last().map(String::as_str)
    }
}
