use thiserror::Error;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: BoxedError,
    },
    #[error("Request to '{url}' timed out: {source}")]
    TimedOut {
        url: String,
        #[source]
        source: BoxedError,
    },
    #[error("Failed to read response body from '{url}': {source}")]
    ReadBodyFailed {
        url: String,
        #[source]
        source: BoxedError,
    },
}

impl HttpError {
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, HttpError::TimedOut { .. })
    }
}
