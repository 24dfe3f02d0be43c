use std::time::Duration;

use tracing::debug;

use crate::error::RunError;
use crate::http::{Transport, throw};
use crate::metrics::LatencyTally;
use crate::report::{Console, throw_line};
use crate::shutdown::ShutdownReceiver;

use super::task::HammerTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammerResult {
    pub hammer: usize,
    pub average: Duration,
}

/// Runs every throw of `task` in order and returns the mean elapsed time.
///
/// Each completed throw prints its timing line (preceded by the body when
/// verbose). A shutdown broadcast stops the hammer at its current throw; no
/// partial average is produced.
///
/// # Errors
///
/// Returns [`RunError::ThrowFailed`] for the first transport failure and
/// [`RunError::Cancelled`] when shutdown is received first.
pub async fn run_hammer<T>(
    task: &HammerTask,
    transport: &T,
    console: &dyn Console,
    shutdown_rx: &mut ShutdownReceiver,
) -> Result<HammerResult, RunError>
where
    T: Transport + ?Sized,
{
    let hammer = task.id();
    let mut tally = LatencyTally::default();

    for throw_index in 0..task.throws().get() {
        let outcome = tokio::select! {
            _ = shutdown_rx.recv() => return Err(RunError::Cancelled { hammer }),
            outcome = throw(transport, task.url(), task.verbose()) => outcome,
        };
        let completed = outcome.map_err(|source| RunError::ThrowFailed {
            hammer,
            throw: throw_index,
            source,
        })?;

        debug!(
            hammer,
            throw = throw_index,
            started_at = %completed.started_at.to_rfc3339(),
            status = completed.status,
            response_bytes = completed.response_bytes,
            elapsed_ms = completed.elapsed.as_millis(),
            "Throw completed"
        );
        if let Some(body) = completed.body.as_deref() {
            console.line(body);
        }
        console.line(&throw_line(hammer, throw_index, completed.elapsed));
        tally.record(completed.elapsed);
    }

    let average = tally.average().ok_or(RunError::NoThrows { hammer })?;
    Ok(HammerResult { hammer, average })
}
