//! Runtime settings and fixed policy constants.
//!
//! Settings come from the process environment (optionally seeded from a
//! `.env` file). Policy constants are not configurable.

use std::env;
use std::time::Duration;
use tracing::{info, warn};

pub const MAX_SEARCH_RESULTS: usize = 6;
pub const MIN_SUPPORTS_FOR_TRUE: usize = 2;
pub const MIN_REFUTES_FOR_FALSE: usize = 2;
pub const MAX_POST_LENGTH: usize = 600;

/// Length requested from the generative summary, leaving room for hashtags.
pub const GENERATED_POST_TARGET: usize = 580;
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const GENERATION_TEMPERATURE: f32 = 0.3;

const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchBackend {
    DuckDuckGo,
    Off,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_api_base: Option<String>,
    pub search: SearchBackend,
    pub search_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_api_base: None,
            search: SearchBackend::DuckDuckGo,
            search_timeout: SEARCH_TIMEOUT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Settings::default();

        let openai_api_key = match lookup("OPENAI_API_KEY") {
            Some(key) if valid_api_key(&key) => Some(key.trim().to_string()),
            Some(_) => {
                warn!("OPENAI_API_KEY looks like a placeholder; generative features disabled");
                None
            }
            None => None,
        };

        let search = match lookup("FACTCHECK_SEARCH").as_deref().map(str::trim) {
            None | Some("") => defaults.search,
            Some(v) if v.eq_ignore_ascii_case("duckduckgo") => SearchBackend::DuckDuckGo,
            Some(v) if v.eq_ignore_ascii_case("off") => SearchBackend::Off,
            Some(other) => {
                warn!("unknown FACTCHECK_SEARCH value {other:?}; using duckduckgo");
                defaults.search
            }
        };

        let search_timeout = match lookup("FACTCHECK_SEARCH_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!("invalid FACTCHECK_SEARCH_TIMEOUT_SECS {raw:?}; using default");
                    defaults.search_timeout
                }
            },
            None => defaults.search_timeout,
        };

        let settings = Self {
            openai_api_key,
            openai_model: lookup("OPENAI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(defaults.openai_model),
            openai_api_base: lookup("OPENAI_API_BASE").filter(|b| !b.trim().is_empty()),
            search,
            search_timeout,
        };
        info!(
            generative = settings.openai_api_key.is_some(),
            search = ?settings.search,
            "settings resolved"
        );
        settings
    }
}

pub fn valid_api_key(key: &str) -> bool {
    let trimmed = key.trim();
    !trimmed.is_empty() && !trimmed.contains("...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let s = settings(&[]);
        assert!(s.openai_api_key.is_none());
        assert_eq!(s.openai_model, DEFAULT_MODEL);
        assert_eq!(s.search, SearchBackend::DuckDuckGo);
        assert_eq!(s.search_timeout, SEARCH_TIMEOUT);
    }

    #[test]
    fn placeholder_key_disables_generation() {
        assert!(settings(&[("OPENAI_API_KEY", "sk-...")]).openai_api_key.is_none());
        assert!(settings(&[("OPENAI_API_KEY", "  ")]).openai_api_key.is_none());
        assert_eq!(
            settings(&[("OPENAI_API_KEY", " sk-real ")]).openai_api_key.as_deref(),
            Some("sk-real")
        );
    }

    #[test]
    fn search_can_be_switched_off() {
        assert_eq!(settings(&[("FACTCHECK_SEARCH", "OFF")]).search, SearchBackend::Off);
        assert_eq!(
            settings(&[("FACTCHECK_SEARCH", "bing")]).search,
            SearchBackend::DuckDuckGo
        );
    }

    #[test]
    fn bad_timeout_falls_back_to_default() {
        assert_eq!(
            settings(&[("FACTCHECK_SEARCH_TIMEOUT_SECS", "3")]).search_timeout,
            Duration::from_secs(3)
        );
        assert_eq!(
            settings(&[("FACTCHECK_SEARCH_TIMEOUT_SECS", "soon")]).search_timeout,
            SEARCH_TIMEOUT
        );
    }
}
