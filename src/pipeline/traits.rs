use crate::models::{Assessment, LabeledSource, Source};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One raw result from a search collaborator, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl SearchHit {
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            link: link.into(),
        }
    }
}

/// External web search. Best effort, single attempt.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> anyhow::Result<Vec<SearchHit>>;
}

/// External generative text model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

#[async_trait]
pub trait Retrieve: Send + Sync {
    async fn retrieve(&self, claim: &str, max_results: usize) -> anyhow::Result<Vec<Source>>;
}

#[async_trait]
pub trait Classify: Send + Sync {
    /// Labels every source. Output keeps input length and order.
    async fn classify(
        &self,
        claim: &str,
        sources: Vec<Source>,
    ) -> anyhow::Result<Vec<LabeledSource>>;
}

#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(
        &self,
        claim: &str,
        assessment: &Assessment,
        sources: &[LabeledSource],
    ) -> anyhow::Result<String>;
}
