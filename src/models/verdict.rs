use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Verdict {
    True,
    False,
    Misleading,
    Unverified,
    Error,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::True => "True",
            Verdict::False => "False",
            Verdict::Misleading => "Misleading",
            Verdict::Unverified => "Unverified",
            Verdict::Error => "Error",
        }
    }

    /// Marker shown in front of a rendered verdict.
    pub fn icon(&self) -> &'static str {
        match self {
            Verdict::True => "✅",
            Verdict::False => "❌",
            Verdict::Misleading => "⚠️",
            Verdict::Unverified => "❓",
            Verdict::Error => "🔍",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated outcome over a set of labelled sources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub confidence: f32,
    pub reasoning: String,
}
