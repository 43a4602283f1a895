//! Environment-based configuration for Postforge.
//!
//! Read once at startup into an immutable [`AppConfig`]. Credentials come
//! from `GROQ_API_KEY`; everything else has a hardcoded default:
//!
//! - `GROQ_MODEL_NAME` (default `openai/gpt-oss-20b`)
//! - `POSTFORGE_BASE_URL` (default Groq's OpenAI-compatible endpoint)
//! - `POSTFORGE_PROMPT_PATH` (default `prompts/content_prompt.txt`)

use std::path::PathBuf;

use secrecy::SecretString;

use postforge_types::error::ConfigError;

/// Default model identifier when `GROQ_MODEL_NAME` is unset.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

/// Groq's OpenAI-compatible chat completions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default location of the content prompt template.
pub const DEFAULT_PROMPT_PATH: &str = "prompts/content_prompt.txt";

/// Immutable application configuration.
///
/// Debug is safe to derive: [`SecretString`] redacts the API key in its
/// Debug output, so the key cannot leak through debug formatting.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
    pub prompt_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(val) => Some(val),
            Err(std::env::VarError::NotPresent) => None,
            // Env var exists but has invalid Unicode -- treat as unset,
            // since credentials and paths must be valid strings.
            Err(std::env::VarError::NotUnicode(_)) => None,
        })
    }

    /// Load configuration through an arbitrary lookup (testable core of
    /// [`AppConfig::from_env`]).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingVar("GROQ_API_KEY".to_string()))?;

        let model = lookup("GROQ_MODEL_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup("POSTFORGE_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let prompt_path = lookup("POSTFORGE_PROMPT_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROMPT_PATH));

        Ok(Self {
            api_key: SecretString::from(api_key),
            model,
            base_url,
            prompt_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn from_lookup_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk-test")])).unwrap();
        assert_eq!(config.api_key.expose_secret(), "gsk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.prompt_path, PathBuf::from(DEFAULT_PROMPT_PATH));
    }

    #[test]
    fn from_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("GROQ_MODEL_NAME", "llama-3.3-70b-versatile"),
            ("POSTFORGE_BASE_URL", "http://localhost:8080/v1"),
            ("POSTFORGE_PROMPT_PATH", "/etc/postforge/prompt.txt"),
        ]))
        .unwrap();
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.prompt_path, PathBuf::from("/etc/postforge/prompt.txt"));
    }

    #[test]
    fn from_lookup_missing_api_key() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn from_lookup_blank_api_key_is_missing() {
        let err = AppConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "   ")])).unwrap_err();
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn from_lookup_blank_model_uses_default() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("GROQ_MODEL_NAME", ""),
        ]))
        .unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
