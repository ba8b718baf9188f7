use crate::config::MAX_POST_LENGTH;
use crate::models::source::{truncate_chars, LabeledSource};
use crate::models::verdict::{Assessment, Verdict};
use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Terminal output of one pipeline invocation.
///
/// Built only by the pipeline and read through accessors afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    claim: String,
    sources: Vec<LabeledSource>,
    verdict: Verdict,
    confidence: f32,
    reasoning: String,
    summary: String,
    processing_time: Duration,
}

impl CheckResult {
    pub(crate) fn completed(
        claim: &str,
        sources: Vec<LabeledSource>,
        assessment: Assessment,
        summary: String,
        processing_time: Duration,
    ) -> Self {
        Self {
            claim: claim.to_string(),
            sources,
            verdict: assessment.verdict,
            confidence: assessment.confidence,
            reasoning: assessment.reasoning,
            summary: truncate_chars(&summary, MAX_POST_LENGTH),
            processing_time,
        }
    }

    pub(crate) fn no_sources(claim: &str, processing_time: Duration) -> Self {
        let summary =
            format!("❌ Unable to fact-check: \"{claim}\" - No sources available. #FactCheck");
        Self {
            claim: claim.to_string(),
            sources: Vec::new(),
            verdict: Verdict::Unverified,
            confidence: 0.0,
            reasoning: "no sources could be retrieved".to_string(),
            summary: truncate_chars(&summary, MAX_POST_LENGTH),
            processing_time,
        }
    }

    pub(crate) fn failed(claim: &str, message: String, processing_time: Duration) -> Self {
        let summary = format!("❌ Error processing: \"{claim}\" #FactCheck");
        Self {
            claim: claim.to_string(),
            sources: Vec::new(),
            verdict: Verdict::Error,
            confidence: 0.0,
            reasoning: message,
            summary: truncate_chars(&summary, MAX_POST_LENGTH),
            processing_time,
        }
    }

    pub fn claim(&self) -> &str {
        &self.claim
    }

    pub fn sources(&self) -> &[LabeledSource] {
        &self.sources
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    /// Marker for the verdict, for presentation layers.
    pub fn verdict_icon(&self) -> &'static str {
        self.verdict.icon()
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn processing_time(&self) -> Duration {
        self.processing_time
    }

    /// JSON schema of the result record, for presentation layers.
    pub fn json_schema() -> RootSchema {
        schemars::schema_for!(CheckResult)
    }
}
