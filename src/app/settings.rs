use std::path::PathBuf;

use crate::args::{HammerArgs, PositiveUsize, validate_url};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::ClientOptions;

/// What the pool runs: every hammer shares the URL, throw count, and verbosity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolPlan {
    pub url: String,
    pub hammers: PositiveUsize,
    pub throws: PositiveUsize,
    pub verbose: bool,
}

/// Validated settings for one invocation, built after config values were merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub plan: PoolPlan,
    pub client: ClientOptions,
    pub export_json: Option<PathBuf>,
}

impl RunSettings {
    /// # Errors
    ///
    /// Returns a validation error when the URL is missing or unusable.
    pub fn from_args(args: &HammerArgs) -> AppResult<Self> {
        let url = args
            .target_url()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        validate_url(url)?;

        Ok(Self {
            plan: PoolPlan {
                url: url.trim().to_owned(),
                hammers: args.hammers,
                throws: args.throws,
                verbose: args.verbose,
            },
            client: ClientOptions {
                request_timeout: args.request_timeout,
                connect_timeout: args.connect_timeout,
            },
            export_json: args.export_json.as_ref().map(PathBuf::from),
        })
    }
}
