use thiserror::Error;

use crate::parse::ParseError;

/// Why the rule dataset could not be loaded.
///
/// Returned by [`RuleSource::fetch()`](crate::RuleSource::fetch) and
/// [`RuleProvider::try_load()`](crate::RuleProvider::try_load). A failed load
/// never populates the provider cache, so every variant is retryable.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("http error: {0}")]
    Http(String),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
