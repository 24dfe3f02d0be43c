//! Latency accumulation shared by hammers and the run summary.
mod tally;


pub use tally::LatencyTally;
