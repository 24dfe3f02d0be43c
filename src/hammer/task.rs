use std::sync::Arc;

use crate::args::PositiveUsize;

/// The unit of parallel work, owned by the worker that runs it.
#[derive(Debug, Clone)]
pub struct HammerTask {
    id: usize,
    url: Arc<str>,
    throws: PositiveUsize,
    verbose: bool,
}

impl HammerTask {
    #[must_use]
    pub const fn new(id: usize, url: Arc<str>, throws: PositiveUsize, verbose: bool) -> Self {
        Self {
            id,
            url,
            throws,
            verbose,
        }
    }

    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn throws(&self) -> PositiveUsize {
        self.throws
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}
