use crate::config::SEARCH_TIMEOUT;
use crate::error::{Attempt, FallbackReason};
use crate::models::Source;
use crate::pipeline::traits::{Retrieve, SearchProvider};
use crate::store::EvidenceStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Live search first, canned evidence when search is absent or unusable.
pub struct SourceRetriever {
    search: Option<Arc<dyn SearchProvider>>,
    store: &'static EvidenceStore,
    timeout: Duration,
}

impl SourceRetriever {
    pub fn new(search: Option<Arc<dyn SearchProvider>>) -> Self {
        Self {
            search,
            store: EvidenceStore::builtin(),
            timeout: SEARCH_TIMEOUT,
        }
    }

    pub fn offline() -> Self {
        Self::new(None)
    }

    pub fn with_store(mut self, store: &'static EvidenceStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Never fails: any problem with live search routes to the store.
    pub async fn retrieve_sources(&self, claim: &str, max_results: usize) -> Vec<Source> {
        match self.search_live(claim, max_results).await {
            Ok(sources) => {
                info!(count = sources.len(), "retrieved live sources");
                sources
            }
            Err(FallbackReason::Unavailable) => self.store.lookup(claim),
            Err(reason) => {
                warn!(%reason, "live search unusable, using evidence store");
                self.store.lookup(claim)
            }
        }
    }

    async fn search_live(&self, claim: &str, max_results: usize) -> Attempt<Vec<Source>> {
        let provider = self.search.as_ref().ok_or(FallbackReason::Unavailable)?;
        let hits = tokio::time::timeout(self.timeout, provider.search(claim, max_results))
            .await
            .map_err(|_| FallbackReason::Timeout(self.timeout))??;

        let sources: Vec<Source> = hits
            .iter()
            .filter_map(|hit| Source::bounded(&hit.title, &hit.snippet, &hit.link))
            .take(max_results)
            .collect();
        if sources.is_empty() {
            return Err(FallbackReason::EmptyResponse);
        }
        Ok(sources)
    }
}

#[async_trait]
impl Retrieve for SourceRetriever {
    async fn retrieve(&self, claim: &str, max_results: usize) -> anyhow::Result<Vec<Source>> {
        Ok(self.retrieve_sources(claim, max_results).await)
    }
}
