use std::io;

use super::{AppError, HttpError, RunError, error_chain};

fn refused_throw() -> AppError {
    let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "Connection refused");
    AppError::from(RunError::ThrowFailed {
        hammer: 1,
        throw: 4,
        source: HttpError::RequestFailed {
            url: "http://127.0.0.1:9/".to_owned(),
            source: Box::new(WrappedCause(io_err)),
        },
    })
}

/// Mirrors client errors whose `Display` hides their cause.
#[derive(Debug)]
struct WrappedCause(io::Error);

impl std::fmt::Display for WrappedCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("error sending request")
    }
}

impl std::error::Error for WrappedCause {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn chain_includes_hidden_cause() -> Result<(), String> {
    let rendered = error_chain(&refused_throw());
    if !rendered.contains("Connection refused") {
        return Err(format!("Cause missing from {:?}", rendered));
    }
    if !rendered.contains("Hammer 1 failed on throw 4") || !rendered.contains("127.0.0.1:9") {
        return Err(format!("Context missing from {:?}", rendered));
    }
    Ok(())
}

#[test]
fn chain_does_not_repeat_embedded_sources() -> Result<(), String> {
    let rendered = error_chain(&refused_throw());
    if rendered.matches("error sending request").count() != 1 {
        return Err(format!("Repeated cause in {:?}", rendered));
    }
    if rendered.matches("Hammer 1 failed").count() != 1 {
        return Err(format!("Repeated context in {:?}", rendered));
    }
    Ok(())
}

#[test]
fn chain_of_plain_error_is_its_message() -> Result<(), String> {
    let err = io::Error::new(io::ErrorKind::NotFound, "missing");
    let rendered = error_chain(&err);
    if rendered != "missing" {
        return Err(format!("Unexpected rendering {:?}", rendered));
    }
    Ok(())
}
