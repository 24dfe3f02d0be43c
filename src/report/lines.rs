use std::time::Duration;

#[must_use]
pub fn throw_line(hammer: usize, throw: usize, elapsed: Duration) -> String {
    format!(
        "Hammer: {}, Throw: {:>3}, Elapsed Time: {:.2}",
        hammer,
        throw,
        elapsed.as_secs_f64()
    )
}

#[must_use]
pub fn average_line(hammer: usize, average: Duration) -> String {
    format!(
        "Hammer: {}, AVERAGE   , Elapsed Time: {:.2}",
        hammer,
        average.as_secs_f64()
    )
}

#[must_use]
pub fn total_line(average: Duration) -> String {
    format!("TOTAL AVERAGE ELAPSED TIME: {:.2}", average.as_secs_f64())
}
