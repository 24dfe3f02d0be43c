//! Run orchestration: settings, the hammer pool, and the final report.
mod export;
mod runner;
mod settings;
mod summary;


pub use export::{export_json, run_result_json};
pub use runner::{run_local, run_pool};
pub use settings::{PoolPlan, RunSettings};
pub use summary::{RunResult, print_summary};
