//! The generator service: one stateless request/response cycle per call.
//!
//! Validates the brief, normalizes its fields, renders the cached prompt
//! template, and issues exactly one completion call through the provider.
//! No retry, no partial results; failures carry a coarse
//! [`ErrorKind`](postforge_types::error::ErrorKind) so the caller decides
//! presentation.

use postforge_types::brief::ContentBrief;
use postforge_types::error::GenerateError;
use postforge_types::llm::{CompletionRequest, Message, Usage};

use crate::llm::LlmProvider;
use crate::template::TemplateSource;

/// The placeholder names every content prompt template must draw from.
pub const INPUT_VARIABLES: [&str; 6] = [
    "business_type",
    "target_audience",
    "tone",
    "platform",
    "content_type",
    "extra_instructions",
];

/// Value substituted when no extra instructions were given.
const NO_EXTRA_INSTRUCTIONS: &str = "N/A";

/// Model call parameters for the generator.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Model identifier; empty string defers to the provider's default.
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            model: String::new(),
            max_tokens: 2048,
            temperature: 0.8,
        }
    }
}

/// Result of a successful generate action.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedContent {
    /// Raw model output (Markdown). May be empty; that is still success.
    pub content: String,
    /// Model that actually served the request.
    pub model: String,
    pub usage: Usage,
}

/// Orchestrates a single generation request against an LLM provider.
pub struct GeneratorService<P, T> {
    provider: P,
    templates: T,
    options: GenerateOptions,
}

impl<P: LlmProvider, T: TemplateSource> GeneratorService<P, T> {
    pub fn new(provider: P, templates: T, options: GenerateOptions) -> Self {
        Self {
            provider,
            templates,
            options,
        }
    }

    /// Generate content for a brief.
    ///
    /// Required free-text fields are checked before any request is
    /// issued; an empty `business_type` or `target_audience` fails fast.
    pub async fn generate(&self, brief: &ContentBrief) -> Result<GeneratedContent, GenerateError> {
        if brief.business_type.trim().is_empty() {
            return Err(GenerateError::MissingField("business_type"));
        }
        if brief.target_audience.trim().is_empty() {
            return Err(GenerateError::MissingField("target_audience"));
        }

        let inputs = template_inputs(brief);
        let template = self.templates.template().await?;
        let prompt = template.render(&inputs)?;

        tracing::debug!(
            prompt_len = prompt.len(),
            platform = %brief.platform,
            content_type = %brief.content_type,
            "rendered content prompt"
        );

        let request = CompletionRequest {
            model: self.options.model.clone(),
            messages: vec![Message::user(prompt)],
            max_tokens: self.options.max_tokens,
            temperature: Some(self.options.temperature),
        };

        let response = self.provider.complete(&request).await?;

        tracing::info!(
            provider = self.provider.name(),
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "content generated"
        );

        Ok(GeneratedContent {
            content: response.content,
            model: response.model,
            usage: response.usage,
        })
    }
}

/// Normalize a brief into template inputs.
///
/// Free-text fields are trimmed; `tone` and `content_type` substitute in
/// their lowercase prompt forms; `platform` uses its display label;
/// blank `extra_instructions` becomes `"N/A"`.
pub fn template_inputs(brief: &ContentBrief) -> Vec<(&'static str, String)> {
    let extra = brief
        .extra_instructions
        .as_deref()
        .unwrap_or_default()
        .trim();
    let extra = if extra.is_empty() {
        NO_EXTRA_INSTRUCTIONS.to_string()
    } else {
        extra.to_string()
    };

    vec![
        ("business_type", brief.business_type.trim().to_string()),
        ("target_audience", brief.target_audience.trim().to_string()),
        ("tone", brief.tone.to_string()),
        ("platform", brief.platform.label().to_string()),
        ("content_type", brief.content_type.to_string()),
        ("extra_instructions", extra),
    ]
}
