use crate::config::{SearchBackend, Settings, MAX_SEARCH_RESULTS};
use crate::models::CheckResult;
use crate::pipeline::aggregator::aggregate;
use crate::pipeline::classifier::EvidenceClassifier;
use crate::pipeline::llm::OpenAiGenerator;
use crate::pipeline::retriever::SourceRetriever;
use crate::pipeline::search::DuckDuckGoSearch;
use crate::pipeline::summary::SummaryGenerator;
use crate::pipeline::traits::{Classify, Retrieve, SearchProvider, Summarize, TextGenerator};
use anyhow::bail;
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tracing::{debug, error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Retrieving,
    Classifying,
    Aggregating,
    Generating,
    Done,
    Error,
}

fn advance(stage: &mut Stage, next: Stage) {
    debug!(from = ?*stage, to = ?next, "pipeline stage");
    *stage = next;
}

/// Retrieve, classify, aggregate, summarise. One [`CheckResult`] per claim,
/// whatever happens inside.
pub struct FactCheckPipeline<
    R = SourceRetriever,
    C = EvidenceClassifier,
    S = SummaryGenerator,
> where
    R: Retrieve,
    C: Classify,
    S: Summarize,
{
    pub retriever: R,
    pub classifier: C,
    pub summarizer: S,
}

impl FactCheckPipeline {
    pub fn new(
        search: Option<Arc<dyn SearchProvider>>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            retriever: SourceRetriever::new(search),
            classifier: EvidenceClassifier::new(generator.clone()),
            summarizer: SummaryGenerator::new(generator),
        }
    }

    /// No collaborators: store-backed retrieval, lexicon rules, templates.
    pub fn offline() -> Self {
        Self::new(None, None)
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let search: Option<Arc<dyn SearchProvider>> = match settings.search {
            SearchBackend::DuckDuckGo => {
                let search = DuckDuckGoSearch::new(settings.search_timeout)?;
                Some(Arc::new(search) as Arc<dyn SearchProvider>)
            }
            SearchBackend::Off => None,
        };
        let generator: Option<Arc<dyn TextGenerator>> =
            settings.openai_api_key.as_deref().map(|key| {
                Arc::new(OpenAiGenerator::new(
                    key,
                    &settings.openai_model,
                    settings.openai_api_base.as_deref(),
                )) as Arc<dyn TextGenerator>
            });

        let mut pipeline = Self::new(search, generator);
        pipeline.retriever = pipeline.retriever.with_timeout(settings.search_timeout);
        Ok(pipeline)
    }

    /// Process-wide instance configured from the environment on first use.
    pub fn shared() -> &'static FactCheckPipeline {
        static PIPELINE: OnceLock<FactCheckPipeline> = OnceLock::new();
        PIPELINE.get_or_init(|| {
            let settings = Settings::from_env();
            FactCheckPipeline::from_settings(&settings).unwrap_or_else(|err| {
                warn!(error = %err, "collaborator setup failed, running offline");
                FactCheckPipeline::offline()
            })
        })
    }
}

impl<R, C, S> FactCheckPipeline<R, C, S>
where
    R: Retrieve,
    C: Classify,
    S: Summarize,
{
    pub async fn check(&self, claim: &str) -> CheckResult {
        let started = Instant::now();
        let mut stage = Stage::Idle;
        info!(claim, "processing claim");

        match self.run(claim, &mut stage, started).await {
            Ok(result) => {
                info!(
                    verdict = %result.verdict(),
                    confidence = result.confidence(),
                    elapsed_ms = result.processing_time().as_millis() as u64,
                    "claim checked"
                );
                result
            }
            Err(err) => {
                error!(failed_in = ?stage, error = %err, "pipeline failed");
                advance(&mut stage, Stage::Error);
                CheckResult::failed(claim, err.to_string(), started.elapsed())
            }
        }
    }

    async fn run(
        &self,
        claim: &str,
        stage: &mut Stage,
        started: Instant,
    ) -> anyhow::Result<CheckResult> {
        advance(stage, Stage::Retrieving);
        let sources = self.retriever.retrieve(claim, MAX_SEARCH_RESULTS).await?;
        if sources.is_empty() {
            advance(stage, Stage::Done);
            return Ok(CheckResult::no_sources(claim, started.elapsed()));
        }

        advance(stage, Stage::Classifying);
        let expected = sources.len();
        let labeled = self.classifier.classify(claim, sources).await?;
        if labeled.len() != expected {
            bail!(
                "classifier returned {} judgments for {} sources",
                labeled.len(),
                expected
            );
        }

        advance(stage, Stage::Aggregating);
        let assessment = aggregate(&labeled);

        advance(stage, Stage::Generating);
        let summary = self.summarizer.summarize(claim, &assessment, &labeled).await?;

        advance(stage, Stage::Done);
        Ok(CheckResult::completed(
            claim,
            labeled,
            assessment,
            summary,
            started.elapsed(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_stage() {
        let mut stage = Stage::Idle;
        advance(&mut stage, Stage::Retrieving);
        assert_eq!(stage, Stage::Retrieving);
    }

    #[test]
    fn search_off_builds_offline_pipeline() {
        let settings = Settings {
            search: SearchBackend::Off,
            ..Settings::default()
        };
        assert!(FactCheckPipeline::from_settings(&settings).is_ok());
    }

    #[tokio::test]
    async fn offline_pipeline_checks_known_claim() {
        let result = FactCheckPipeline::offline()
            .check("Humans have 48 chromosomes.")
            .await;
        assert_eq!(result.claim(), "Humans have 48 chromosomes.");
        assert_eq!(result.sources().len(), 2);
        assert!(!result.summary().is_empty());
    }
}
