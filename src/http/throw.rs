use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

use crate::error::HttpError;

use super::transport::Transport;

/// One timed request.
#[derive(Debug, Clone)]
pub struct Throw {
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub status: u16,
    pub response_bytes: u64,
    pub body: Option<String>,
}

/// Issues one GET and measures the time until the body has been fully received.
///
/// The body is kept only when `verbose` is set.
///
/// # Errors
///
/// Propagates transport failures unchanged; nothing is retried.
pub async fn throw<T>(transport: &T, url: &str, verbose: bool) -> Result<Throw, HttpError>
where
    T: Transport + ?Sized,
{
    let started_at = Utc::now();
    let start = Instant::now();
    let response = transport.get(url, verbose).await?;
    let elapsed = start.elapsed();

    Ok(Throw {
        started_at,
        elapsed,
        status: response.status,
        response_bytes: response.response_bytes,
        body: response.body,
    })
}
