use thiserror::Error;

use super::HttpError;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Hammer {hammer} failed on throw {throw}: {source}")]
    ThrowFailed {
        hammer: usize,
        throw: usize,
        #[source]
        source: HttpError,
    },
    #[error("Hammer {hammer} could not set up its HTTP client: {source}")]
    ClientSetup {
        hammer: usize,
        #[source]
        source: HttpError,
    },
    #[error("Hammer {hammer} worker terminated abnormally: {source}")]
    WorkerJoin {
        hammer: usize,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("Hammer {hammer} stopped before completing its throws.")]
    Cancelled { hammer: usize },
    #[error("Hammer {hammer} recorded no throws.")]
    NoThrows { hammer: usize },
    #[error("Run produced no hammer results.")]
    NoHammerResults,
    #[error("Run interrupted before all hammers completed.")]
    Interrupted,
}

impl RunError {
    /// A hammer that stopped because shutdown was broadcast, not because it failed.
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, RunError::Cancelled { .. })
    }
}
