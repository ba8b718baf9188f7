use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_SNIPPET_CHARS: usize = 500;

/// Truncates to at most `max` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// A retrieved piece of evidence that has not been judged yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Source {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl Source {
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

    /// Builds a source from raw search output. Returns `None` when any field
    /// is blank; title and snippet are cut to their retrieval bounds.
    pub fn bounded(title: &str, snippet: &str, link: &str) -> Option<Self> {
        let title = truncate_chars(title.trim(), MAX_TITLE_CHARS);
        let snippet = truncate_chars(snippet.trim(), MAX_SNIPPET_CHARS);
        let link = link.trim();
        if title.is_empty() || snippet.is_empty() || link.is_empty() {
            return None;
        }
        Some(Self {
            title,
            snippet,
            link: link.to_string(),
        })
    }

    /// Attaches the classifier's judgment. Consumes the source so a judgment
    /// can only ever be written once.
    pub fn label(
        self,
        label: Label,
        confidence: f32,
        reasoning: impl Into<String>,
    ) -> LabeledSource {
        LabeledSource {
            source: self,
            label,
            confidence: confidence.clamp(0.0, 1.0),
            reasoning: reasoning.into(),
        }
    }
}

/// Stance of one source relative to the claim.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Supports,
    Refutes,
    Unclear,
}

impl Label {
    /// Parses the upper-case wire form used in generated judgments.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "SUPPORTS" => Some(Label::Supports),
            "REFUTES" => Some(Label::Refutes),
            "UNCLEAR" => Some(Label::Unclear),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Supports => "supports",
            Label::Refutes => "refutes",
            Label::Unclear => "unclear",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabeledSource {
    #[serde(flatten)]
    source: Source,
    label: Label,
    confidence: f32,
    reasoning: String,
}

impl LabeledSource {
    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn title(&self) -> &str {
        &self.source.title
    }

    pub fn snippet(&self) -> &str {
        &self.source.snippet
    }

    pub fn link(&self) -> &str {
        &self.source.link
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }
}
