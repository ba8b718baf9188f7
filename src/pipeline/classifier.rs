use crate::error::{Attempt, FallbackReason};
use crate::models::{Label, LabeledSource, Source};
use crate::pipeline::lexicon::{select_domain, Lexicon};
use crate::pipeline::traits::{Classify, TextGenerator};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

const TITLE_WEIGHT: u32 = 3;
const MIN_DECISIVE_SCORE: u32 = 2;
const RULE_BASE_CONFIDENCE: f32 = 0.65;
const RULE_CONFIDENCE_STEP: f32 = 0.05;
const RULE_MAX_CONFIDENCE: f32 = 0.90;
const MIXED_CONFIDENCE: f32 = 0.6;
const NEUTRAL_CONFIDENCE: f32 = 0.5;

/// Labels sources with the generative model when one is configured and
/// answers cleanly, otherwise with lexicon scoring.
pub struct EvidenceClassifier {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl EvidenceClassifier {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    pub fn rules_only() -> Self {
        Self::new(None)
    }

    pub async fn classify_sources(
        &self,
        claim: &str,
        sources: Vec<Source>,
    ) -> Vec<LabeledSource> {
        match self.classify_generative(claim, &sources).await {
            Ok(judgments) => sources
                .into_iter()
                .zip(judgments)
                .map(|(source, j)| source.label(j.label, j.confidence, j.reasoning))
                .collect(),
            Err(FallbackReason::Unavailable) => classify_with_rules(claim, sources),
            Err(reason) => {
                warn!(%reason, "generative classification discarded, using lexicon rules");
                classify_with_rules(claim, sources)
            }
        }
    }

    async fn classify_generative(&self, claim: &str, sources: &[Source]) -> Attempt<Vec<Judgment>> {
        let generator = self.generator.as_ref().ok_or(FallbackReason::Unavailable)?;
        let raw = generator.generate(&classification_prompt(claim, sources)).await?;
        parse_judgments(&raw, sources.len())
    }
}

#[async_trait]
impl Classify for EvidenceClassifier {
    async fn classify(
        &self,
        claim: &str,
        sources: Vec<Source>,
    ) -> anyhow::Result<Vec<LabeledSource>> {
        Ok(self.classify_sources(claim, sources).await)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Judgment {
    pub label: Label,
    pub confidence: f32,
    pub reasoning: String,
}

fn classification_prompt(claim: &str, sources: &[Source]) -> String {
    let mut sources_text = String::new();
    for (i, source) in sources.iter().enumerate() {
        sources_text.push_str(&format!(
            "Source {}:\nTitle: {}\nContent: {}\n\n",
            i + 1,
            source.title,
            source.snippet
        ));
    }

    let mut shape = Vec::with_capacity(sources.len());
    for i in 1..=sources.len() {
        shape.push(format!(
            "    \"source_{i}\": {{\"label\": \"SUPPORTS|REFUTES|UNCLEAR\", \
             \"confidence\": 0.0-1.0, \"reasoning\": \"brief explanation\"}}"
        ));
    }

    format!(
        "Analyze this claim against the sources:\n\nCLAIM: \"{}\"\n\nSOURCES:\n{}\n\
         For each source, respond with JSON only:\n{{\n{}\n}}\n",
        claim,
        sources_text,
        shape.join(",\n")
    )
}

#[derive(Deserialize)]
struct RawJudgment {
    label: String,
    confidence: f32,
    reasoning: String,
}

/// Strips a surrounding markdown code fence, if any.
fn unfence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}

/// Parses a `{"source_1": {...}, ...}` payload. All or nothing: a missing
/// source, unknown label or out-of-range confidence rejects the whole reply.
pub fn parse_judgments(raw: &str, expected: usize) -> Attempt<Vec<Judgment>> {
    let body = unfence(raw);
    if body.is_empty() {
        return Err(FallbackReason::EmptyResponse);
    }
    let mut parsed: HashMap<String, RawJudgment> =
        serde_json::from_str(body).map_err(|e| FallbackReason::Malformed(e.to_string()))?;

    let got = (1..=expected)
        .filter(|i| parsed.contains_key(&format!("source_{i}")))
        .count();
    if got != expected {
        return Err(FallbackReason::Incomplete { expected, got });
    }

    let mut judgments = Vec::with_capacity(expected);
    for i in 1..=expected {
        let key = format!("source_{i}");
        let entry = parsed
            .remove(&key)
            .ok_or(FallbackReason::Incomplete { expected, got })?;
        let label = Label::parse(&entry.label).ok_or_else(|| {
            FallbackReason::Malformed(format!("{key}: unknown label {:?}", entry.label))
        })?;
        if !entry.confidence.is_finite() || !(0.0..=1.0).contains(&entry.confidence) {
            return Err(FallbackReason::Malformed(format!(
                "{key}: confidence {} outside [0, 1]",
                entry.confidence
            )));
        }
        judgments.push(Judgment {
            label,
            confidence: entry.confidence,
            reasoning: entry.reasoning.trim().to_string(),
        });
    }
    Ok(judgments)
}

/// Weighted phrase hits for one source against one lexicon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexiconScore {
    pub title_support: u32,
    pub title_refute: u32,
    pub snippet_support: u32,
    pub snippet_refute: u32,
}

impl LexiconScore {
    pub fn measure(lexicon: &Lexicon, source: &Source) -> Self {
        let title = source.title.to_lowercase();
        let snippet = source.snippet.to_lowercase();
        let hits = |text: &str, phrases: &[&str]| {
            phrases.iter().filter(|p| text.contains(**p)).count() as u32
        };
        Self {
            title_support: hits(&title, lexicon.support),
            title_refute: hits(&title, lexicon.refute),
            snippet_support: hits(&snippet, lexicon.support),
            snippet_refute: hits(&snippet, lexicon.refute),
        }
    }

    pub fn total_support(&self) -> u32 {
        TITLE_WEIGHT * self.title_support + self.snippet_support
    }

    pub fn total_refute(&self) -> u32 {
        TITLE_WEIGHT * self.title_refute + self.snippet_refute
    }

    pub fn judge(&self) -> Judgment {
        let support = self.total_support();
        let refute = self.total_refute();
        let decisive = |points: u32| {
            RULE_MAX_CONFIDENCE.min(RULE_BASE_CONFIDENCE + RULE_CONFIDENCE_STEP * points as f32)
        };

        if support > refute && support >= MIN_DECISIVE_SCORE {
            Judgment {
                label: Label::Supports,
                confidence: decisive(support),
                reasoning: format!("Strong support indicators: {support} points"),
            }
        } else if refute > support && refute >= MIN_DECISIVE_SCORE {
            Judgment {
                label: Label::Refutes,
                confidence: decisive(refute),
                reasoning: format!("Strong refute indicators: {refute} points"),
            }
        } else if support == refute && support > 0 {
            Judgment {
                label: Label::Unclear,
                confidence: MIXED_CONFIDENCE,
                reasoning: format!("Mixed signals: {support} support, {refute} refute"),
            }
        } else {
            Judgment {
                label: Label::Unclear,
                confidence: NEUTRAL_CONFIDENCE,
                reasoning: "Insufficient clear indicators found".to_string(),
            }
        }
    }
}

pub fn classify_with_rules(claim: &str, sources: Vec<Source>) -> Vec<LabeledSource> {
    let domain = select_domain(claim);
    let lexicon = domain.lexicon();
    debug!(?domain, "lexicon selected");
    sources
        .into_iter()
        .map(|source| {
            let score = LexiconScore::measure(lexicon, &source);
            let judgment = score.judge();
            source.label(judgment.label, judgment.confidence, judgment.reasoning)
        })
        .collect()
}
