use std::process::ExitCode;

fn main() -> ExitCode {
    thor::entry::run()
}
