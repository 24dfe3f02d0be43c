use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::HttpError;

use super::transport::{Transport, TransportFactory, TransportResponse};

/// In-memory transport answering after scripted delays.
///
/// Call `n` sleeps for `delays[n]`, repeating the last delay once the script runs out.
#[derive(Debug)]
pub(crate) struct ScriptedTransport {
    delays: Vec<Duration>,
    fail_on: Option<usize>,
    status: u16,
    body: String,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub(crate) fn fixed(delay: Duration) -> Self {
        Self::scripted(vec![delay])
    }

    pub(crate) const fn scripted(delays: Vec<Duration>) -> Self {
        Self {
            delays,
            fail_on: None,
            status: 200,
            body: String::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Refuse the connection on the given 0-indexed call.
    pub(crate) const fn failing_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    pub(crate) fn with_response(mut self, status: u16, body: &str) -> Self {
        self.status = status;
        body.clone_into(&mut self.body);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn delay_for(&self, call: usize) -> Duration {
        self.delays
            .get(call)
            .or_else(|| self.delays.last())
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str, keep_body: bool) -> Result<TransportResponse, HttpError> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        tokio::time::sleep(self.delay_for(call)).await;
        if self.fail_on == Some(call) {
            return Err(HttpError::RequestFailed {
                url: url.to_owned(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )),
            });
        }
        Ok(TransportResponse {
            status: self.status,
            response_bytes: u64::try_from(self.body.len()).unwrap_or(u64::MAX),
            body: keep_body.then(|| self.body.clone()),
        })
    }
}

/// Builds a fresh scripted transport per hammer.
pub(crate) struct ScriptedFactory<F> {
    make: F,
}

impl<F> ScriptedFactory<F>
where
    F: Fn(usize) -> ScriptedTransport + Send + Sync + 'static,
{
    pub(crate) const fn new(make: F) -> Self {
        Self { make }
    }
}

impl<F> TransportFactory for ScriptedFactory<F>
where
    F: Fn(usize) -> ScriptedTransport + Send + Sync + 'static,
{
    type Transport = ScriptedTransport;

    fn build(&self, hammer: usize) -> Result<Self::Transport, HttpError> {
        Ok((self.make)(hammer))
    }
}

pub(crate) fn paused_runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .start_paused(true)
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))
}

/// Paused-clock sleeps may land up to a timer tick after the requested deadline.
pub(crate) fn assert_close(actual: Duration, expected: Duration) -> Result<(), String> {
    let tolerance = Duration::from_millis(5);
    if actual < expected || actual > expected.saturating_add(tolerance) {
        return Err(format!("Expected ~{:?}, got {:?}", expected, actual));
    }
    Ok(())
}
