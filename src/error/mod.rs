mod app;
mod chain;
mod config;
mod http;
mod run;
mod validation;

#[cfg(test)]
mod tests;

pub use app::{AppError, AppResult};
pub use chain::error_chain;
pub use config::ConfigError;
pub use http::{BoxedError, HttpError};
pub use run::RunError;
pub use validation::ValidationError;
