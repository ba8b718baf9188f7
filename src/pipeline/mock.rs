//! Deterministic collaborators for tests and offline demos.

use crate::pipeline::traits::{SearchHit, SearchProvider, TextGenerator};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

pub struct StaticSearch {
    hits: Vec<SearchHit>,
}

impl StaticSearch {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self { hits }
    }
}

#[async_trait]
impl SearchProvider for StaticSearch {
    async fn search(&self, _query: &str, max_results: usize) -> anyhow::Result<Vec<SearchHit>> {
        Ok(self.hits.iter().take(max_results).cloned().collect())
    }
}

pub struct FailingSearch {
    message: String,
}

impl FailingSearch {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl SearchProvider for FailingSearch {
    async fn search(&self, _query: &str, _max_results: usize) -> anyhow::Result<Vec<SearchHit>> {
        Err(anyhow!(self.message.clone()))
    }
}

/// Sleeps before answering with nothing; pairs with a paused tokio clock.
pub struct SlowSearch {
    delay: Duration,
}

impl SlowSearch {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SearchProvider for SlowSearch {
    async fn search(&self, _query: &str, _max_results: usize) -> anyhow::Result<Vec<SearchHit>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}

/// Replays canned replies in order and records every prompt it saw.
/// Errors once the script runs out.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        self.prompts
            .lock()
            .map_err(|_| anyhow!("prompt log poisoned"))?
            .push(prompt.to_string());
        self.replies
            .lock()
            .map_err(|_| anyhow!("script poisoned"))?
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted"))
    }
}

pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        Err(anyhow!(self.message.clone()))
    }
}
