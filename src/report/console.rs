use std::io::Write;

/// Line-oriented report output shared by every hammer of a run.
///
/// Each call writes one whole line, so lines from concurrent hammers never interleave.
pub trait Console: Send + Sync {
    fn line(&self, line: &str);
}

/// Writes report lines to stdout; logs go to stderr so stdout stays scrapeable.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if writeln!(stdout, "{}", line).is_err() {
            return;
        }
        drop(stdout.flush());
    }
}
