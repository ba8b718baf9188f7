use crate::config::{GENERATED_POST_TARGET, MAX_POST_LENGTH};
use crate::error::{Attempt, FallbackReason};
use crate::models::{truncate_chars, Assessment, LabeledSource, Verdict};
use crate::pipeline::traits::{Summarize, TextGenerator};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

pub const HASHTAGS: &str = "\n\n#FactCheck #AI";
pub const CLAIM_EXCERPT_CHARS: usize = 80;
const NO_CITATION: &str = "Multiple sources";

pub struct SummaryGenerator {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl SummaryGenerator {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    pub fn template_only() -> Self {
        Self::new(None)
    }

    /// Always at most [`MAX_POST_LENGTH`] characters.
    pub async fn generate_summary(
        &self,
        claim: &str,
        assessment: &Assessment,
        sources: &[LabeledSource],
    ) -> String {
        match self.generate_post(claim, assessment).await {
            Ok(post) => post,
            Err(FallbackReason::Unavailable) => render_template(claim, assessment, sources),
            Err(reason) => {
                warn!(%reason, "generated summary unusable, using template");
                render_template(claim, assessment, sources)
            }
        }
    }

    async fn generate_post(&self, claim: &str, assessment: &Assessment) -> Attempt<String> {
        let generator = self.generator.as_ref().ok_or(FallbackReason::Unavailable)?;
        let raw = generator.generate(&summary_prompt(claim, assessment)).await?;
        finish_generated_post(&raw)
    }
}

#[async_trait]
impl Summarize for SummaryGenerator {
    async fn summarize(
        &self,
        claim: &str,
        assessment: &Assessment,
        sources: &[LabeledSource],
    ) -> anyhow::Result<String> {
        Ok(self.generate_summary(claim, assessment, sources).await)
    }
}

fn percent(confidence: f32) -> String {
    format!("{:.0}%", confidence * 100.0)
}

fn summary_prompt(claim: &str, assessment: &Assessment) -> String {
    format!(
        "Create a social media fact-check post:\n\n\
         CLAIM: \"{}\"\n\
         VERDICT: {}\n\
         CONFIDENCE: {}\n\n\
         Requirements:\n\
         - Maximum {} characters\n\
         - Include verdict and confidence\n\
         - Professional tone\n\
         - Include hashtags\n\n\
         Generate only the post content.\n",
        claim,
        assessment.verdict,
        percent(assessment.confidence),
        GENERATED_POST_TARGET
    )
}

/// Appends the hashtag suffix when it still fits, then hard-truncates.
pub fn finish_generated_post(raw: &str) -> Attempt<String> {
    let mut post = raw.trim().to_string();
    if post.is_empty() {
        return Err(FallbackReason::EmptyResponse);
    }
    if post.chars().count() + HASHTAGS.chars().count() <= MAX_POST_LENGTH {
        post.push_str(HASHTAGS);
    }
    Ok(truncate_chars(&post, MAX_POST_LENGTH))
}

fn claim_excerpt(claim: &str) -> String {
    if claim.chars().count() > CLAIM_EXCERPT_CHARS {
        format!("{}...", truncate_chars(claim, CLAIM_EXCERPT_CHARS))
    } else {
        claim.to_string()
    }
}

pub fn render_template(claim: &str, assessment: &Assessment, sources: &[LabeledSource]) -> String {
    let verdict = assessment.verdict;
    let (heading, body) = match verdict {
        Verdict::True => ("VERIFIED", "Evidence confirms this is accurate."),
        Verdict::False => ("DEBUNKED", "Evidence shows this is false."),
        Verdict::Misleading => ("MIXED", "Partially true but needs context."),
        Verdict::Unverified | Verdict::Error => ("UNVERIFIED", "Insufficient evidence found."),
    };
    let citation = sources.first().map_or(NO_CITATION, |s| s.link());

    let post = format!(
        "{} {}: {} ({} confidence)\n\nClaim: \"{}\"\n\n{}\nSource: {}{}",
        verdict.icon(),
        heading,
        verdict,
        percent(assessment.confidence),
        claim_excerpt(claim),
        body,
        citation,
        HASHTAGS
    );
    truncate_chars(&post, MAX_POST_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Label, Source};
    use crate::pipeline::mock::{FailingGenerator, ScriptedGenerator};

    fn assessment(verdict: Verdict, confidence: f32) -> Assessment {
        Assessment {
            verdict,
            confidence,
            reasoning: "r".to_string(),
        }
    }

    fn cited() -> Vec<LabeledSource> {
        vec![Source::new("t", "s", "https://cite.example").label(Label::Supports, 0.8, "r")]
    }

    #[test]
    fn template_wording_per_verdict() {
        for (verdict, heading) in [
            (Verdict::True, "✅ VERIFIED: True"),
            (Verdict::False, "❌ DEBUNKED: False"),
            (Verdict::Misleading, "⚠️ MIXED: Misleading"),
            (Verdict::Unverified, "❓ UNVERIFIED: Unverified"),
        ] {
            let post = render_template("claim", &assessment(verdict, 0.9), &cited());
            assert!(post.starts_with(heading), "{post}");
            assert!(post.contains("(90% confidence)"));
            assert!(post.contains("Source: https://cite.example"));
            assert!(post.ends_with(HASHTAGS));
        }
    }

    #[test]
    fn template_without_sources_cites_multiple() {
        let post = render_template("claim", &assessment(Verdict::Unverified, 0.3), &[]);
        assert!(post.contains("Source: Multiple sources"));
    }

    #[test]
    fn long_claim_is_excerpted() {
        let claim = "c".repeat(120);
        let post = render_template(&claim, &assessment(Verdict::False, 0.8), &cited());
        assert!(post.contains(&format!("\"{}...\"", "c".repeat(80))));
        assert!(!post.contains(&"c".repeat(81)));
    }

    #[test]
    fn template_is_bounded() {
        let link = format!("https://{}.example", "l".repeat(1_000));
        let sources =
            vec![Source::new("t", "s", link).label(Label::Supports, 0.8, "r")];
        let post = render_template("claim", &assessment(Verdict::True, 0.9), &sources);
        assert_eq!(post.chars().count(), MAX_POST_LENGTH);
    }

    #[test]
    fn generated_post_gets_hashtags_when_room() {
        let post = finish_generated_post("  Verdict: False (90%)  ").unwrap();
        assert_eq!(post, format!("Verdict: False (90%){HASHTAGS}"));
    }

    #[test]
    fn generated_post_without_room_is_truncated() {
        let raw = "p".repeat(590);
        let post = finish_generated_post(&raw).unwrap();
        assert_eq!(post, raw);

        let raw = "p".repeat(700);
        assert_eq!(finish_generated_post(&raw).unwrap().chars().count(), MAX_POST_LENGTH);
        assert_eq!(finish_generated_post(" \n"), Err(FallbackReason::EmptyResponse));
    }

    #[tokio::test]
    async fn uses_generated_post() {
        let generator = Arc::new(ScriptedGenerator::new(["Checked: True"]));
        let shared: Arc<dyn TextGenerator> = generator.clone();
        let summarizer = SummaryGenerator::new(Some(shared));
        let post = summarizer
            .generate_summary("claim", &assessment(Verdict::True, 0.9), &cited())
            .await;
        assert_eq!(post, format!("Checked: True{HASHTAGS}"));
        let prompts = generator.prompts();
        assert!(prompts[0].contains("VERDICT: True"));
        assert!(prompts[0].contains("CONFIDENCE: 90%"));
    }

    #[tokio::test]
    async fn generator_failure_uses_template() {
        let summarizer = SummaryGenerator::new(Some(Arc::new(FailingGenerator::new("offline"))));
        let a = assessment(Verdict::False, 0.9);
        let post = summarizer.generate_summary("claim", &a, &cited()).await;
        assert_eq!(post, render_template("claim", &a, &cited()));
    }
}
