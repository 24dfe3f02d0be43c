use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;

use super::transport::{Transport, TransportFactory, TransportResponse};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Whole-request timeout; `None` keeps reqwest's default (no timeout).
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// Builds a reqwest client with the configured timeouts.
///
/// # Errors
///
/// Returns an error when the TLS backend or client configuration fails.
pub fn build_client(options: &ClientOptions) -> Result<Client, HttpError> {
    let mut client_builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
    if let Some(timeout) = options.request_timeout {
        client_builder = client_builder.timeout(timeout);
    }
    if let Some(timeout) = options.connect_timeout {
        client_builder = client_builder.connect_timeout(timeout);
    }
    client_builder
        .build()
        .map_err(|source| HttpError::BuildClientFailed { source })
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, keep_body: bool) -> Result<TransportResponse, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| request_error(url, err))?;
        let status = response.status().as_u16();

        let mut body = keep_body.then(Vec::new);
        let mut response_bytes: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|err| {
                if err.is_timeout() {
                    request_error(url, err)
                } else {
                    HttpError::ReadBodyFailed {
                        url: url.to_owned(),
                        source: Box::new(err),
                    }
                }
            })?;
            response_bytes =
                response_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
            if let Some(buffer) = body.as_mut() {
                buffer.extend_from_slice(&bytes);
            }
        }

        Ok(TransportResponse {
            status,
            response_bytes,
            body: body.map(|buffer| String::from_utf8_lossy(&buffer).into_owned()),
        })
    }
}

fn request_error(url: &str, err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::TimedOut {
            url: url.to_owned(),
            source: Box::new(err),
        }
    } else {
        HttpError::RequestFailed {
            url: url.to_owned(),
            source: Box::new(err),
        }
    }
}

/// One reqwest client, and so one connection pool, per hammer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransportFactory {
    options: ClientOptions,
}

impl ReqwestTransportFactory {
    #[must_use]
    pub const fn new(options: ClientOptions) -> Self {
        Self { options }
    }
}

impl TransportFactory for ReqwestTransportFactory {
    type Transport = ReqwestTransport;

    fn build(&self, hammer: usize) -> Result<Self::Transport, HttpError> {
        debug!(
            hammer,
            request_timeout = ?self.options.request_timeout,
            connect_timeout = ?self.options.connect_timeout,
            "Building HTTP client"
        );
        build_client(&self.options).map(ReqwestTransport::new)
    }
}
