//! Endpoint, credentials and model selection.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const VISION_MODEL: &str = "gemini-3-pro-preview";
pub const SEARCH_MODEL: &str = "gemini-3-flash-preview";
pub const NARRATIVE_MODEL: &str = "gemini-2.5-flash";

/// Environment variables consulted for the key, first match wins.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelConfig {
    /// Without a key every call fails and falls back to placeholder text.
    pub api_key: Option<String>,
    pub base_url: String,
    pub vision_model: String,
    pub search_model: String,
    pub narrative_model: String,
}

impl Default for IntelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            vision_model: VISION_MODEL.to_string(),
            search_model: SEARCH_MODEL.to_string(),
            narrative_model: NARRATIVE_MODEL.to_string(),
        }
    }
}

impl IntelConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source (environment, compile-time env, tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty());
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            api_key,
            base_url,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn generate_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_prefers_gemini_key_and_trims_base_url() {
        let env: HashMap<&str, &str> = [
            ("API_KEY", "fallback"),
            ("GEMINI_API_KEY", "primary"),
            ("GEMINI_BASE_URL", "http://localhost:8080/"),
        ]
        .into_iter()
        .collect();
        let config = IntelConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.api_key.as_deref(), Some("primary"));
        assert_eq!(
            config.generate_url("gemini-2.5-flash"),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn blank_values_fall_through() {
        let config = IntelConfig::from_lookup(|k| match k {
            "GEMINI_API_KEY" => Some("  ".to_string()),
            "API_KEY" => Some("legacy".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("legacy"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
