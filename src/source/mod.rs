//! Where the raw rule table text comes from.

pub mod file;
pub mod http;

use async_trait::async_trait;

use crate::error::LoadError;

pub use file::FileSource;
pub use http::{DEFAULT_RULES_URL, DEFAULT_TIMEOUT, HttpSource};

/// A place the rule table can be fetched from.
///
/// Implementations return the raw text; parsing and caching belong to
/// [`RuleProvider`](crate::RuleProvider).
#[async_trait]
pub trait RuleSource: Send + Sync {
    /// Fetch the current table text.
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Short human-readable location, used in log records.
    fn describe(&self) -> String;
}

/// In-memory table text. Never fails.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    content: String,
}

impl StaticSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait]
impl RuleSource for StaticSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} bytes)", self.content.len())
    }
}

#[async_trait]
impl<S: RuleSource + ?Sized> RuleSource for std::sync::Arc<S> {
    async fn fetch(&self) -> Result<String, LoadError> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[async_trait]
impl<S: RuleSource + ?Sized> RuleSource for Box<S> {
    async fn fetch(&self) -> Result<String, LoadError> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
