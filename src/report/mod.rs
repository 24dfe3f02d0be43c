//! Console report: the three line shapes tools scrape, and where they are written.
mod console;
mod lines;

#[cfg(test)]
pub(crate) mod test_support;

pub use console::{Console, StdoutConsole};
pub use lines::{average_line, throw_line, total_line};
