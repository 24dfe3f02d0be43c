use std::error::Error;

/// Renders `err` followed by every cause in its `source()` chain.
///
/// Causes whose text already appears in the message are skipped, so wrappers
/// that embed their source in `Display` are not repeated.
#[must_use]
pub fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
