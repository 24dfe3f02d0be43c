use std::ffi::OsString;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgMatches, Command, CommandFactory, FromArgMatches};

use crate::app::{RunSettings, run_local};
use crate::args::HammerArgs;
use crate::config::{apply_config, load_config};
use crate::error::{AppResult, error_chain};

/// Parses the process arguments, runs the load test, and maps the outcome to an exit code.
#[must_use]
pub fn run() -> ExitCode {
    run_from(std::env::args_os().collect())
}

fn run_from(raw_args: Vec<OsString>) -> ExitCode {
    let mut cmd = HammerArgs::command();

    if should_show_usage(&raw_args) {
        print_usage(&mut cmd);
        return ExitCode::FAILURE;
    }

    let matches = match cmd.try_get_matches_from_mut(raw_args) {
        Ok(matches) => matches,
        Err(err) => return clap_exit(&mut cmd, &err),
    };

    match execute(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", error_chain(&err));
            if err.is_usage() {
                print_usage(&mut cmd);
            }
            ExitCode::FAILURE
        }
    }
}

fn should_show_usage(raw_args: &[OsString]) -> bool {
    matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--")
}

fn clap_exit(cmd: &mut Command, err: &clap::Error) -> ExitCode {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        drop(err.print());
        return ExitCode::SUCCESS;
    }
    eprintln!("{}", clap_message(err));
    print_usage(cmd);
    ExitCode::FAILURE
}

/// Clap's rendered error without its usage block; usage is printed once on stdout.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let mut message = String::with_capacity(rendered.len());
    let mut previous_blank = true;
    for line in rendered.lines() {
        if line.starts_with("Usage:") {
            continue;
        }
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        message.push_str(line);
        message.push('\n');
        previous_blank = blank;
    }
    message.trim_end().to_owned()
}

fn print_usage(cmd: &mut Command) {
    println!("{}", cmd.render_usage());
    println!("Run with --help for all options.");
}

fn execute(matches: &ArgMatches) -> AppResult<()> {
    let mut args = HammerArgs::from_arg_matches(matches)?;
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }
    let settings = RunSettings::from_args(&args)?;

    crate::logger::init_logging(args.log_verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_local(&settings))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn no_arguments_show_usage() -> Result<(), String> {
        for raw in [argv(&[]), argv(&["thor"]), argv(&["thor", "--"])] {
            if !should_show_usage(&raw) {
                return Err(format!("Expected usage for {:?}", raw));
            }
        }
        if should_show_usage(&argv(&["thor", "http://localhost"])) {
            return Err("URL argument must not show usage".to_owned());
        }
        Ok(())
    }

    #[test]
    fn usage_failures_exit_with_failure() -> Result<(), String> {
        for raw in [
            argv(&["thor"]),
            argv(&["thor", "--bogus", "http://localhost"]),
            argv(&["thor", "-h", "0", "http://localhost"]),
            argv(&["thor", "-t"]),
            argv(&["thor", "-v"]),
            argv(&["thor", "ftp://localhost"]),
        ] {
            if run_from(raw.clone()) != ExitCode::FAILURE {
                return Err(format!("Expected failure for {:?}", raw));
            }
        }
        Ok(())
    }

    #[test]
    fn clap_errors_leave_usage_out_of_the_message() -> Result<(), String> {
        let mut cmd = HammerArgs::command();
        let err = match cmd.try_get_matches_from_mut(["thor", "-x", "http://a.test"]) {
            Err(err) => err,
            Ok(_) => return Err("Expected unknown flag to be rejected".to_owned()),
        };
        let message = clap_message(&err);
        if message.contains("Usage:") {
            return Err(format!("Usage repeated in error: {:?}", message));
        }
        if !message.contains("-x") {
            return Err(format!("Offending flag missing from {:?}", message));
        }
        if message.contains("\n\n\n") {
            return Err(format!("Blank lines not collapsed in {:?}", message));
        }
        Ok(())
    }

    #[test]
    fn help_and_version_exit_successfully() -> Result<(), String> {
        for raw in [argv(&["thor", "--help"]), argv(&["thor", "--version"])] {
            if run_from(raw.clone()) != ExitCode::SUCCESS {
                return Err(format!("Expected success for {:?}", raw));
            }
        }
        Ok(())
    }

    #[test]
    fn missing_config_file_fails_before_running() -> Result<(), String> {
        let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
        let path = dir.path().join("absent.toml");
        let path = path.to_str().ok_or_else(|| "non-utf8 path".to_owned())?;
        if run_from(argv(&["thor", "--config", path])) != ExitCode::FAILURE {
            return Err("Expected failure for a missing config file".to_owned());
        }
        Ok(())
    }
}
