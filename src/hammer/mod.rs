//! A hammer: sequential throws against one URL, averaged once at the end.
mod runner;
mod task;


pub use runner::{HammerResult, run_hammer};
pub use task::HammerTask;
