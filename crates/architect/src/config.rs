//! Generation settings.
//!
//! [`ArchitectConfig`] is read once at startup and injected into the
//! [`ScenarioService`](crate::service::ScenarioService), so nothing else in
//! the crate touches the process environment.

use std::fmt;

use crate::{ANTHROPIC_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

/// Environment variable holding the Anthropic API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Settings for scenario generation.
#[derive(Clone)]
pub struct ArchitectConfig {
    /// Anthropic API key. May be empty; the external call then fails at
    /// request time.
    pub api_key: String,
    /// Model identifier. Default: [`DEFAULT_MODEL`].
    pub model: String,
    /// Output token ceiling. Default: [`DEFAULT_MAX_TOKENS`].
    pub max_tokens: u32,
    /// API base URL. Default: [`ANTHROPIC_URL`].
    pub base_url: String,
}

impl Default for ArchitectConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: ANTHROPIC_URL.to_string(),
        }
    }
}

impl ArchitectConfig {
    /// Defaults with the API key taken from `ANTHROPIC_API_KEY`.
    ///
    /// A missing key is not an error here.
    pub fn from_env() -> Self {
        Self::default().with_api_key(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for ArchitectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchitectConfig")
            .field("api_key", &if self.api_key.is_empty() { "(unset)" } else { "(redacted)" })
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ArchitectConfig::default();
        assert_eq!(config.model, "claude-3-5-sonnet-20241022");
        assert_eq!(config.max_tokens, 4000);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn builders_override_fields() {
        let config = ArchitectConfig::default()
            .with_api_key("sk-test")
            .with_model("m")
            .with_max_tokens(10)
            .with_base_url("http://localhost:1");
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "m");
        assert_eq!(config.max_tokens, 10);
        assert_eq!(config.base_url, "http://localhost:1");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ArchitectConfig::default().with_api_key("sk-secret");
        let out = format!("{config:?}");
        assert!(!out.contains("sk-secret"));
        assert!(out.contains("(redacted)"));
    }
}
