use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global subscriber; logs go to stderr so report lines own stdout.
pub fn init_logging(verbose: bool, no_color: bool) {
    let filter = std::env::var("THOR_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(use_ansi(no_color, std::io::stderr().is_terminal()))
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// Colour only when allowed and stderr is an interactive terminal.
const fn use_ansi(no_color: bool, stderr_is_terminal: bool) -> bool {
    !no_color && stderr_is_terminal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false, true);
        init_logging(true, false);
    }

    #[test]
    fn ansi_requires_terminal_and_colour() -> Result<(), String> {
        for (no_color, terminal, expected) in [
            (false, true, true),
            (false, false, false),
            (true, true, false),
            (true, false, false),
        ] {
            if use_ansi(no_color, terminal) != expected {
                return Err(format!(
                    "use_ansi({}, {}) should be {}",
                    no_color, terminal, expected
                ));
            }
        }
        Ok(())
    }
}
