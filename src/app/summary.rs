use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::args::PositiveUsize;
use crate::error::RunError;
use crate::hammer::HammerResult;
use crate::metrics::LatencyTally;
use crate::report::{Console, average_line, total_line};

/// Final report of a completed run; hammer results are in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    url: String,
    throws_per_hammer: PositiveUsize,
    started_at: DateTime<Utc>,
    hammer_results: Vec<HammerResult>,
    total_average: Duration,
}

impl RunResult {
    /// # Errors
    ///
    /// Returns [`RunError::NoHammerResults`] when `hammer_results` is empty.
    pub fn new(
        url: String,
        throws_per_hammer: PositiveUsize,
        started_at: DateTime<Utc>,
        hammer_results: Vec<HammerResult>,
    ) -> Result<Self, RunError> {
        let tally: LatencyTally = hammer_results.iter().map(|result| result.average).collect();
        let total_average = tally.average().ok_or(RunError::NoHammerResults)?;
        Ok(Self {
            url,
            throws_per_hammer,
            started_at,
            hammer_results,
            total_average,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn throws_per_hammer(&self) -> PositiveUsize {
        self.throws_per_hammer
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn hammer_results(&self) -> &[HammerResult] {
        &self.hammer_results
    }

    /// Mean of the per-hammer averages.
    #[must_use]
    pub const fn total_average(&self) -> Duration {
        self.total_average
    }
}

pub fn print_summary(console: &dyn Console, run: &RunResult) {
    for result in run.hammer_results() {
        console.line(&average_line(result.hammer, result.average));
    }
    console.line(&total_line(run.total_average()));
}
