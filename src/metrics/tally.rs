use std::time::Duration;

/// Running sum and count of elapsed times.
///
/// The mean is integer nanosecond arithmetic on the sum, taken once when asked
/// for, so recording order never changes the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatencyTally {
    total: Duration,
    count: u64,
}

impl LatencyTally {
    pub fn record(&mut self, elapsed: Duration) {
        self.total = self.total.saturating_add(elapsed);
        self.count = self.count.saturating_add(1);
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub const fn total(&self) -> Duration {
        self.total
    }

    /// Mean of the recorded samples, or `None` before the first sample.
    #[must_use]
    pub fn average(&self) -> Option<Duration> {
        let nanos = self.total.as_nanos().checked_div(u128::from(self.count))?;
        Some(u64::try_from(nanos).map_or(Duration::MAX, Duration::from_nanos))
    }
}

impl FromIterator<Duration> for LatencyTally {
    fn from_iter<I: IntoIterator<Item = Duration>>(iter: I) -> Self {
        let mut tally = Self::default();
        for elapsed in iter {
            tally.record(elapsed);
        }
        tally
    }
}
