use async_trait::async_trait;

use crate::error::HttpError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub response_bytes: u64,
    /// Present only when the caller asked to keep the body.
    pub body: Option<String>,
}

/// HTTP GET whose future resolves once the body has been fully read.
///
/// Non-2xx statuses are responses, not errors; only transport failures are `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, keep_body: bool) -> Result<TransportResponse, HttpError>;
}

/// Builds one transport per hammer so no connection state is shared between hammers.
pub trait TransportFactory: Send + Sync + 'static {
    type Transport: Transport + 'static;

    /// # Errors
    ///
    /// Returns an error when the transport cannot be configured.
    fn build(&self, hammer: usize) -> Result<Self::Transport, HttpError>;
}
