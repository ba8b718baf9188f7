//! Immutable canned evidence used when live search is absent or fails.
//!
//! Entries are matched against a claim by keyword overlap: every key keyword
//! found in the lower-cased claim scores 1, every claim word that is a
//! substring of some key keyword scores 0.5. The best entry wins when it
//! scores at least 1; earlier entries win ties.
//!
//! Very short claim words score against every key keyword containing them:
//! "is" hits "visible", "a" hits "great" and "china". A claim such as
//! "This is a fact about cats" therefore lands on the Great Wall entry. This
//! is a known weakness of the heuristic and is kept as-is.

pub mod entries;

use crate::models::{truncate_chars, Source};
use std::sync::OnceLock;
use tracing::debug;

pub use entries::{CannedSource, StoreEntry, BUILTIN_ENTRIES};

pub const MIN_MATCH_SCORE: f32 = 1.0;
pub const PLACEHOLDER_LINK: &str = "https://example.com/demo-result";

#[derive(Debug)]
struct IndexedEntry {
    entry: &'static StoreEntry,
    keywords: Vec<&'static str>,
}

#[derive(Debug)]
pub struct EvidenceStore {
    entries: Vec<IndexedEntry>,
}

impl EvidenceStore {
    pub fn from_entries(entries: &'static [StoreEntry]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|entry| IndexedEntry {
                    entry,
                    keywords: entry.key.split_whitespace().collect(),
                })
                .collect(),
        }
    }

    /// The process-wide store, built on first use.
    pub fn builtin() -> &'static EvidenceStore {
        static STORE: OnceLock<EvidenceStore> = OnceLock::new();
        STORE.get_or_init(|| EvidenceStore::from_entries(BUILTIN_ENTRIES))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best scoring entry for the claim, if it clears [`MIN_MATCH_SCORE`].
    pub fn best_match(&self, claim: &str) -> Option<(&'static StoreEntry, f32)> {
        let claim_lower = claim.to_lowercase();
        let mut best: Option<(&'static StoreEntry, f32)> = None;
        for indexed in &self.entries {
            let score = match_score(&indexed.keywords, &claim_lower);
            debug!(key = indexed.entry.key, score, "evidence store score");
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((indexed.entry, score));
            }
        }
        best.filter(|(_, score)| *score >= MIN_MATCH_SCORE)
    }

    /// Fresh unlabelled sources for the claim: the matched entry's canned
    /// sources, or a single generic placeholder.
    pub fn lookup(&self, claim: &str) -> Vec<Source> {
        match self.best_match(claim) {
            Some((entry, score)) => {
                debug!(
                    key = entry.key,
                    score,
                    hint = %entry.verdict_hint,
                    "evidence store match"
                );
                entry
                    .sources
                    .iter()
                    .map(|s| Source::new(s.title, s.snippet, s.link))
                    .collect()
            }
            None => vec![placeholder_source(claim)],
        }
    }
}

pub fn match_score(keywords: &[&str], claim_lower: &str) -> f32 {
    let present = keywords
        .iter()
        .filter(|keyword| claim_lower.contains(**keyword))
        .count();
    let partial = claim_lower
        .split_whitespace()
        .filter(|word| keywords.iter().any(|keyword| keyword.contains(word)))
        .count();
    present as f32 + 0.5 * partial as f32
}

pub fn placeholder_source(claim: &str) -> Source {
    Source::new(
        format!("Research Result: {}...", truncate_chars(claim, 50)),
        format!(
            "Demo analysis for claim: '{}'. This placeholder demonstrates the system's fallback capability when specific data isn't available.",
            claim
        ),
        PLACEHOLDER_LINK,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_holds_every_entry() {
        assert_eq!(EvidenceStore::builtin().len(), BUILTIN_ENTRIES.len());
        assert!(!EvidenceStore::builtin().is_empty());
    }

    #[test]
    fn score_counts_keywords_and_partial_words() {
        let keywords = ["water", "boils", "100", "degrees", "celsius"];
        // water, boils, 100 present; "water", "boils" and both "at"s are partials.
        let score = match_score(&keywords, "water boils at 100°c at sea level.");
        assert_eq!(score, 5.0);
    }

    #[test]
    fn water_claim_matches_boiling_entry() {
        let (entry, _) = EvidenceStore::builtin()
            .best_match("Water boils at 100°C at sea level.")
            .unwrap();
        assert_eq!(entry.key, "water boils 100 degrees celsius");
    }

    #[test]
    fn short_words_can_pull_in_unrelated_entries() {
        let claim = "this is a fact about cats";
        let great_wall = ["great", "wall", "china", "visible", "space"];
        // "is" sits in "visible", "a" in several keywords: two half points.
        assert_eq!(match_score(&great_wall, claim), 1.0);

        let (entry, score) = EvidenceStore::builtin()
            .best_match("This is a fact about cats")
            .unwrap();
        assert_eq!(entry.key, "great wall china visible space");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn weak_overlap_yields_placeholder() {
        let sources = EvidenceStore::builtin().lookup("The moon is made of green cheese");
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].link, PLACEHOLDER_LINK);
        assert!(sources[0].title.starts_with("Research Result: The moon"));
    }

    #[test]
    fn placeholder_title_uses_claim_prefix() {
        let claim = "a".repeat(80);
        let source = placeholder_source(&claim);
        assert_eq!(source.title, format!("Research Result: {}...", "a".repeat(50)));
        assert!(source.snippet.contains(&claim));
    }

    #[test]
    fn lookup_is_deterministic() {
        let store = EvidenceStore::builtin();
        let claim = "Humans have 48 chromosomes.";
        assert_eq!(store.lookup(claim), store.lookup(claim));
        assert_eq!(store.lookup(claim).len(), 2);
    }
}
