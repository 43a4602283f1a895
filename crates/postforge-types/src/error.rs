//! Error types shared across the Postforge workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::llm::LlmError;

/// Errors related to prompt template parsing and rendering.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template: {0}")]
    Io(String),

    #[error("unknown placeholder '{{{0}}}' in template")]
    UnknownPlaceholder(String),

    #[error("unclosed placeholder starting at byte {0}")]
    UnclosedPlaceholder(usize),

    #[error("no value provided for template variable '{0}'")]
    MissingVariable(String),
}

/// Errors related to configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable '{0}'")]
    MissingVar(String),

    #[error("invalid value for '{var}': {message}")]
    InvalidValue { var: String, message: String },
}

/// Coarse error classification surfaced to callers of the generator.
///
/// The caller decides presentation; the generator only classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Credential problems (missing or rejected API key).
    Auth,
    /// Transport-level failures (DNS, connect, timeout).
    Network,
    /// Everything else.
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Auth => write!(f, "auth"),
            ErrorKind::Network => write!(f, "network"),
            ErrorKind::Other => write!(f, "other"),
        }
    }
}

/// Errors from a generate action.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A required free-text field was empty; no request was issued.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl GenerateError {
    /// Classify this error for presentation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::Llm(LlmError::AuthenticationFailed) => ErrorKind::Auth,
            GenerateError::Llm(LlmError::Network(_)) => ErrorKind::Network,
            _ => ErrorKind::Other,
        }
    }
}
