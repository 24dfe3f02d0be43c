use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::error::{AppResult, RunError, error_chain};
use crate::hammer::{HammerResult, HammerTask, run_hammer};
use crate::http::{ReqwestTransportFactory, TransportFactory};
use crate::report::{Console, StdoutConsole};
use crate::shutdown::{ShutdownSender, shutdown_channel};
use crate::shutdown_handlers::setup_signal_shutdown_handler;

use super::export::export_json;
use super::settings::{PoolPlan, RunSettings};
use super::summary::{RunResult, print_summary};

/// Runs the configured load test against the real target.
///
/// Report lines go to stdout, Ctrl+C/SIGTERM stop every hammer, and the result is
/// exported when requested.
///
/// # Errors
///
/// Returns the first hammer failure, an interruption, or an export failure.
pub async fn run_local(settings: &RunSettings) -> AppResult<RunResult> {
    let (shutdown_tx, _) = shutdown_channel();
    let signal_shutdown_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let factory = Arc::new(ReqwestTransportFactory::new(settings.client));
    let outcome = run_pool(&settings.plan, factory, Arc::new(StdoutConsole), &shutdown_tx).await;
    signal_shutdown_handle.abort();
    let run = outcome?;

    if let Some(path) = settings.export_json.as_deref() {
        export_json(path, &run).await?;
        info!("Run result exported to {}", path.display());
    }
    Ok(run)
}

/// Launches one task per hammer, waits for all of them, then prints the report.
///
/// Results are collected in submission order, so the report lists hammers by
/// ascending id whatever order they finished in. Nothing is printed past the
/// throw lines unless every hammer succeeded.
///
/// # Errors
///
/// Returns the first failing hammer's error. Siblings are stopped through
/// `shutdown_tx`; if every hammer was stopped by an outside shutdown the run
/// reports [`RunError::Interrupted`].
pub async fn run_pool<F>(
    plan: &PoolPlan,
    factory: Arc<F>,
    console: Arc<dyn Console>,
    shutdown_tx: &ShutdownSender,
) -> Result<RunResult, RunError>
where
    F: TransportFactory,
{
    let started_at = Utc::now();
    let hammers = plan.hammers.get();
    info!(
        url = %plan.url,
        hammers,
        throws = plan.throws.get(),
        verbose = plan.verbose,
        "Starting run"
    );

    let url: Arc<str> = Arc::from(plan.url.as_str());
    let mut handles = Vec::with_capacity(hammers);
    for id in 0..hammers {
        let task = HammerTask::new(id, Arc::clone(&url), plan.throws, plan.verbose);
        let factory = Arc::clone(&factory);
        let console = Arc::clone(&console);
        let shutdown_tx = shutdown_tx.clone();
        // Subscribe before spawning so a failure in an earlier hammer is never missed.
        let mut shutdown_rx = shutdown_tx.subscribe();

        handles.push(tokio::spawn(async move {
            let outcome = match factory.build(task.id()) {
                Ok(transport) => {
                    run_hammer(&task, &transport, console.as_ref(), &mut shutdown_rx).await
                }
                Err(source) => Err(RunError::ClientSetup {
                    hammer: task.id(),
                    source,
                }),
            };
            if let Err(err) = outcome.as_ref()
                && !err.is_cancellation()
            {
                error!(hammer = task.id(), "{}", error_chain(err));
                drop(shutdown_tx.send(()));
            }
            outcome
        }));
    }

    let mut results: Vec<HammerResult> = Vec::with_capacity(hammers);
    let mut failure: Option<RunError> = None;
    for (id, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(result)) => results.push(result),
            Ok(Err(err)) => record_failure(&mut failure, err),
            Err(source) => {
                drop(shutdown_tx.send(()));
                record_failure(&mut failure, RunError::WorkerJoin { hammer: id, source });
            }
        }
    }

    if let Some(err) = failure {
        if err.is_cancellation() {
            return Err(RunError::Interrupted);
        }
        return Err(err);
    }

    let run = RunResult::new(plan.url.clone(), plan.throws, started_at, results)?;
    print_summary(console.as_ref(), &run);
    info!(
        total_average_ms = run.total_average().as_millis(),
        "Run completed"
    );
    Ok(run)
}

/// Keeps the first real failure; cancellations only count when nothing else failed.
fn record_failure(slot: &mut Option<RunError>, err: RunError) {
    let replace = match slot.as_ref() {
        None => true,
        Some(existing) => existing.is_cancellation() && !err.is_cancellation(),
    };
    if replace {
        *slot = Some(err);
    }
}
