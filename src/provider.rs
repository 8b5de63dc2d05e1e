//! Process-lifetime cache over a [`RuleSource`].

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::LoadError;
use crate::source::{HttpSource, RuleSource};
use crate::{ResultGroup, RuleSet, Selection};

/// Owns a rule source and the rule set loaded from it.
///
/// The first successful load is kept for the provider's lifetime and every
/// later call returns the same `Arc` without touching the source. A failed
/// load leaves the cache empty, so the next call fetches again.
///
/// Concurrent first-time callers share a single in-flight load. If it fails,
/// one of the waiting callers starts a fresh attempt. The first success wins
/// and is never replaced.
///
/// # Example
///
/// ```
/// use campaign_rules::{RuleProvider, StaticSource};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let csv = "Vertical,Funnel Type,Language,Filter 4:,Decription\n\
///            All,Content,English,Google,Test\n";
/// let provider = RuleProvider::new(StaticSource::new(csv));
///
/// let groups = provider
///     .find_matching_rule_groups(Some("Auto"), Some("Content"), Some("English"), Some("Google"))
///     .await;
/// assert_eq!(groups[0].description, "Test");
/// # }
/// ```
#[derive(Debug)]
pub struct RuleProvider<S = HttpSource> {
    source: S,
    cache: OnceCell<Arc<RuleSet>>,
}

impl RuleProvider<HttpSource> {
    /// Provider for the fixed remote rule table.
    #[must_use]
    pub fn remote() -> Self {
        Self::new(HttpSource::default())
    }
}

impl<S: RuleSource> RuleProvider<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    /// Load the rule set, fetching only if nothing is cached yet.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the fetch fails or the table is unreadable.
    /// Nothing is cached in that case.
    pub async fn try_load(&self) -> Result<Arc<RuleSet>, LoadError> {
        self.cache
            .get_or_try_init(|| self.fetch_and_compile())
            .await
            .cloned()
    }

    /// Load the rule set, logging any failure and returning an empty set in
    /// its place.
    pub async fn load_rules(&self) -> Arc<RuleSet> {
        match self.try_load().await {
            Ok(ruleset) => ruleset,
            Err(e) => {
                tracing::error!(
                    source = %self.source.describe(),
                    error = %e,
                    "failed to load campaign rules"
                );
                Arc::new(RuleSet::empty())
            }
        }
    }

    /// Query with four optional values. An incomplete selection returns
    /// nothing without loading; load failures also return nothing.
    pub async fn find_matching_rule_groups(
        &self,
        vertical: Option<&str>,
        funnel_type: Option<&str>,
        language: Option<&str>,
        traffic_source: Option<&str>,
    ) -> Vec<ResultGroup> {
        let selection = Selection::from_parts(vertical, funnel_type, language, traffic_source);
        self.find(&selection).await
    }

    /// Fail-soft query over a [`Selection`].
    pub async fn find(&self, selection: &Selection) -> Vec<ResultGroup> {
        if !selection.is_complete() {
            return Vec::new();
        }
        self.load_rules().await.find_groups(selection)
    }

    /// Query that reports an unavailable dataset instead of hiding it behind
    /// an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the selection is complete but the rule set
    /// could not be loaded.
    pub async fn try_find_matching_rule_groups(
        &self,
        selection: &Selection,
    ) -> Result<Vec<ResultGroup>, LoadError> {
        if !selection.is_complete() {
            return Ok(Vec::new());
        }
        Ok(self.try_load().await?.find_groups(selection))
    }

    /// The cached rule set, if a load has succeeded.
    #[must_use]
    pub fn cached(&self) -> Option<Arc<RuleSet>> {
        self.cache.get().cloned()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cache.initialized()
    }

    /// Drop the cached rule set so the next call fetches again.
    pub fn reset(&mut self) {
        if self.cache.take().is_some() {
            tracing::debug!(source = %self.source.describe(), "rule cache reset");
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    async fn fetch_and_compile(&self) -> Result<Arc<RuleSet>, LoadError> {
        let content = self.source.fetch().await?;
        let ruleset = RuleSet::from_csv(&content)?;
        tracing::info!(
            source = %self.source.describe(),
            records = ruleset.len(),
            "loaded campaign rules"
        );
        Ok(Arc::new(ruleset))
    }
}
