//! Persisted plugin settings and the store they live in.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::types::CompletionRequest;

/// Default completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "text-davinci-003";

/// Flat key-value settings.
///
/// Deserialization merges with defaults: any key missing from the stored
/// blob takes the value from [`Settings::default`]. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// API credential, sent as `Authorization: Bearer <api_key>`.
    pub api_key: String,
    /// Completions endpoint URL.
    pub endpoint: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate per completion.
    pub max_tokens: u32,
    /// Presence penalty.
    pub presence_penalty: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.into(),
            model: DEFAULT_MODEL.into(),
            temperature: 0.7,
            max_tokens: 1000,
            presence_penalty: 0.0,
        }
    }
}

impl Settings {
    /// Merge a stored blob over the defaults.
    ///
    /// `null` (nothing stored yet) yields the defaults. A present key with the
    /// wrong type is an error.
    pub fn from_json(value: serde_json::Value) -> Result<Self, SettingsError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| SettingsError::Serialization(e.to_string()))
    }

    /// Serialize to the stored blob form.
    pub fn to_json(&self) -> Result<serde_json::Value, SettingsError> {
        serde_json::to_value(self).map_err(|e| SettingsError::Serialization(e.to_string()))
    }

    /// Whether a credential has been configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Build a request for `prompt` from these settings.
    pub fn completion_request(&self, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            prompt: prompt.into(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            presence_penalty: self.presence_penalty,
        }
    }
}

/// Where settings are persisted.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load settings, merged over the defaults. Nothing stored yet is not an error.
    async fn load(&self) -> Result<Settings, SettingsError>;

    /// Persist settings, replacing whatever was stored.
    async fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_hardcoded_constants() {
        let s = Settings::default();
        assert_eq!(s.api_key, "");
        assert_eq!(s.endpoint, "https://api.openai.com/v1/completions");
        assert_eq!(s.model, "text-davinci-003");
        assert_eq!(s.temperature, 0.7);
        assert_eq!(s.max_tokens, 1000);
        assert_eq!(s.presence_penalty, 0.0);
    }

    #[test]
    fn null_blob_yields_defaults() {
        assert_eq!(Settings::from_json(json!(null)).unwrap(), Settings::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let s = Settings::from_json(json!({"apiKey": "sk-123"})).unwrap();
        assert_eq!(s.api_key, "sk-123");
        assert_eq!(s.model, DEFAULT_MODEL);
        assert_eq!(s.max_tokens, 1000);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let s = Settings::from_json(json!({"apiKey": "k", "theme": "dark"})).unwrap();
        assert_eq!(s.api_key, "k");
    }

    #[test]
    fn wrong_type_is_serialization_error() {
        let err = Settings::from_json(json!({"maxTokens": "lots"})).unwrap_err();
        assert!(matches!(err, SettingsError::Serialization(_)));
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let v = Settings::default().to_json().unwrap();
        assert!(v.get("apiKey").is_some());
        assert!(v.get("maxTokens").is_some());
        assert!(v.get("presencePenalty").is_some());
    }

    #[test]
    fn has_api_key_ignores_whitespace() {
        let mut s = Settings::default();
        assert!(!s.has_api_key());
        s.api_key = "   ".into();
        assert!(!s.has_api_key());
        s.api_key = "sk-1".into();
        assert!(s.has_api_key());
    }

    #[test]
    fn completion_request_copies_generation_params() {
        let s = Settings {
            api_key: "sk-1".into(),
            temperature: 0.2,
            max_tokens: 64,
            ..Default::default()
        };
        let req = s.completion_request("Once upon");
        assert_eq!(req.prompt, "Once upon");
        assert_eq!(req.api_key, "sk-1");
        assert_eq!(req.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(req.temperature, 0.2);
        assert_eq!(req.max_tokens, 64);
        assert_eq!(req.presence_penalty, 0.0);
    }
}
