//! Verdict aggregation over labelled sources.
//!
//! Fixed policy, evaluated in order, first match wins:
//! enough supports and no refutes is `True`, the mirror image is `False`,
//! any support alongside any refute is `Misleading`, anything else is
//! `Unverified`.

use crate::config::{MIN_REFUTES_FOR_FALSE, MIN_SUPPORTS_FOR_TRUE};
use crate::models::{Assessment, Label, LabeledSource, Verdict};

const DECISIVE_BASE: f32 = 0.7;
const DECISIVE_SPAN: f32 = 0.2;
const DECISIVE_CAP: f32 = 0.95;
const MIXED_BASE: f32 = 0.6;
const MIXED_SPAN: f32 = 0.2;
const UNVERIFIED_FLOOR: f32 = 0.3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub supports: usize,
    pub refutes: usize,
    pub unclear: usize,
}

impl LabelCounts {
    pub fn tally(sources: &[LabeledSource]) -> Self {
        let mut counts = Self::default();
        for source in sources {
            match source.label() {
                Label::Supports => counts.supports += 1,
                Label::Refutes => counts.refutes += 1,
                Label::Unclear => counts.unclear += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.supports + self.refutes + self.unclear
    }
}

pub fn aggregate(sources: &[LabeledSource]) -> Assessment {
    if sources.is_empty() {
        return Assessment {
            verdict: Verdict::Unverified,
            confidence: 0.0,
            reasoning: "no sources found".to_string(),
        };
    }

    let counts = LabelCounts::tally(sources);
    let total = counts.total();
    let share = |n: usize| n as f32 / total as f32;

    if counts.supports >= MIN_SUPPORTS_FOR_TRUE && counts.refutes == 0 {
        Assessment {
            verdict: Verdict::True,
            confidence: DECISIVE_CAP.min(DECISIVE_BASE + DECISIVE_SPAN * share(counts.supports)),
            reasoning: format!(
                "Strong support: {}/{} sources support",
                counts.supports, total
            ),
        }
    } else if counts.refutes >= MIN_REFUTES_FOR_FALSE && counts.supports == 0 {
        Assessment {
            verdict: Verdict::False,
            confidence: DECISIVE_CAP.min(DECISIVE_BASE + DECISIVE_SPAN * share(counts.refutes)),
            reasoning: format!(
                "Strong refutation: {}/{} sources refute",
                counts.refutes, total
            ),
        }
    } else if counts.supports >= 1 && counts.refutes >= 1 {
        Assessment {
            verdict: Verdict::Misleading,
            confidence: MIXED_BASE
                + MIXED_SPAN * share(counts.supports.abs_diff(counts.refutes)),
            reasoning: format!(
                "Mixed evidence: {} support, {} refute",
                counts.supports, counts.refutes
            ),
        }
    } else {
        let mean = sources.iter().map(|s| s.confidence()).sum::<f32>() / total as f32;
        Assessment {
            verdict: Verdict::Unverified,
            confidence: UNVERIFIED_FLOOR.max(mean),
            reasoning: format!(
                "Insufficient clear evidence: {}/{} unclear",
                counts.unclear, total
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    fn labeled(label: Label, confidence: f32) -> LabeledSource {
        Source::new("t", "s", "https://example.org").label(label, confidence, "r")
    }

    fn of(labels: &[Label]) -> Vec<LabeledSource> {
        labels.iter().map(|l| labeled(*l, 0.8)).collect()
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn empty_is_unverified_with_zero_confidence() {
        let a = aggregate(&[]);
        assert_eq!(a.verdict, Verdict::Unverified);
        assert_eq!(a.confidence, 0.0);
        assert_eq!(a.reasoning, "no sources found");
    }

    #[test]
    fn unanimous_support_is_true() {
        let a = aggregate(&of(&[Label::Supports; 3]));
        assert_eq!(a.verdict, Verdict::True);
        assert!(close(a.confidence, 0.90));
    }

    #[test]
    fn one_each_is_misleading() {
        let a = aggregate(&of(&[Label::Supports, Label::Refutes]));
        assert_eq!(a.verdict, Verdict::Misleading);
        assert!(close(a.confidence, 0.60));
    }

    #[test]
    fn two_refutes_and_unclear_is_false() {
        let a = aggregate(&of(&[Label::Refutes, Label::Refutes, Label::Unclear]));
        assert_eq!(a.verdict, Verdict::False);
        assert!(close(a.confidence, 0.7 + 0.2 * 2.0 / 3.0));
        assert_eq!(a.reasoning, "Strong refutation: 2/3 sources refute");
    }

    #[test]
    fn single_support_is_unverified_with_mean_confidence() {
        let sources = vec![labeled(Label::Supports, 0.9), labeled(Label::Unclear, 0.5)];
        let a = aggregate(&sources);
        assert_eq!(a.verdict, Verdict::Unverified);
        assert!(close(a.confidence, 0.7));
    }

    #[test]
    fn unverified_confidence_has_floor() {
        let sources = vec![labeled(Label::Unclear, 0.1), labeled(Label::Unclear, 0.2)];
        assert!(close(aggregate(&sources).confidence, 0.3));
    }

    #[test]
    fn lopsided_mix_is_still_misleading() {
        let a = aggregate(&of(&[
            Label::Supports,
            Label::Supports,
            Label::Supports,
            Label::Refutes,
        ]));
        assert_eq!(a.verdict, Verdict::Misleading);
        assert!(close(a.confidence, 0.7));
    }

    #[test]
    fn every_count_combination_yields_a_real_verdict() {
        for supports in 0..4 {
            for refutes in 0..4 {
                for unclear in 0..4 {
                    let mut labels = vec![Label::Supports; supports];
                    labels.extend(vec![Label::Refutes; refutes]);
                    labels.extend(vec![Label::Unclear; unclear]);
                    let a = aggregate(&of(&labels));
                    assert_ne!(a.verdict, Verdict::Error);
                    assert!((0.0..=1.0).contains(&a.confidence));
                }
            }
        }
    }
}
