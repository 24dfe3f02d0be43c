use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::error::AppResult;

use super::summary::RunResult;

/// Renders the run result as pretty JSON.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn run_result_json(run: &RunResult) -> AppResult<String> {
    let hammers: Vec<serde_json::Value> = run
        .hammer_results()
        .iter()
        .map(|result| {
            serde_json::json!({
                "hammer": result.hammer,
                "average_secs": result.average.as_secs_f64(),
            })
        })
        .collect();

    let document = serde_json::json!({
        "url": run.url(),
        "hammers": run.hammer_results().len(),
        "throws_per_hammer": run.throws_per_hammer().get(),
        "started_at": run.started_at().to_rfc3339(),
        "hammer_results": hammers,
        "total_average_secs": run.total_average().as_secs_f64(),
    });
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Writes [`run_result_json`] output to `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub async fn export_json(path: &Path, run: &RunResult) -> AppResult<()> {
    let json = run_result_json(run)?;
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(json.as_bytes()).await?;
    file.write_all(b"\n").await?;
    file.flush().await?;
    Ok(())
}
