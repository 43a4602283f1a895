//! Groq LLM provider (OpenAI-compatible chat completions).
//!
//! Uses [`async_openai`] pointed at Groq's OpenAI-compatible endpoint for
//! type-safe request/response handling. Any other OpenAI-compatible
//! service works by overriding the base URL in [`AppConfig`].

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use async_openai::Client;
use secrecy::ExposeSecret;

use postforge_core::llm::LlmProvider;
use postforge_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, MessageRole, Usage,
};

use crate::config::AppConfig;

/// Provider for Groq's OpenAI-compatible API.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct GroqProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GroqProvider {
    /// Create a provider from the application configuration.
    pub fn new(config: &AppConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
        }
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic [`CompletionRequest`].
    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::System => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage {
                        content: ChatCompletionRequestSystemMessageContent::Text(
                            msg.content.clone(),
                        ),
                        name: None,
                    },
                ),
                MessageRole::User => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(
                            msg.content.clone(),
                        ),
                        name: None,
                    },
                ),
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(
                        ChatCompletionRequestAssistantMessage {
                            content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                                msg.content.clone(),
                            )),
                            refusal: None,
                            name: None,
                            audio: None,
                            tool_calls: None,
                            function_call: None,
                        },
                    )
                }
            })
            .collect();

        // Use the model from the request if set, otherwise the config default
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        CreateChatCompletionRequest {
            model,
            messages,
            max_completion_tokens: Some(request.max_tokens),
            temperature: request.temperature.map(|t| t as f32),
            ..Default::default()
        }
    }
}

impl LlmProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let oai_request = self.build_request(request);

        let response = self
            .client
            .chat()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        // An empty or absent first choice is a valid (if unhelpful) success.
        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            usage,
        })
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "authentication_error"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited {
                    retry_after_ms: None,
                }
            } else if code == "server_error" || error_type == "overloaded_error" {
                LlmError::Overloaded(api_err.message.clone())
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => map_transport_error(reqwest_err),
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

/// Classify a transport-level failure from the HTTP client.
///
/// A response status means the server answered and we map by code; no
/// status means the request never completed (DNS, connect, timeout) and
/// we report a network failure.
fn map_transport_error(err: &reqwest::Error) -> LlmError {
    match err.status() {
        Some(status) => match status.as_u16() {
            401 => LlmError::AuthenticationFailed,
            429 => LlmError::RateLimited {
                retry_after_ms: None,
            },
            529 => LlmError::Overloaded(err.to_string()),
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        None => LlmError::Network(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postforge_types::llm::Message;
    use secrecy::SecretString;

    fn test_config() -> AppConfig {
        AppConfig {
            api_key: SecretString::from("gsk-test".to_string()),
            model: "openai/gpt-oss-20b".to_string(),
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            prompt_path: crate::config::DEFAULT_PROMPT_PATH.into(),
        }
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = GroqProvider::new(&test_config());
        assert_eq!(provider.name(), "groq");
        assert_eq!(provider.model, "openai/gpt-oss-20b");
    }

    #[test]
    fn test_build_request_basic() {
        let provider = GroqProvider::new(&test_config());
        let request = CompletionRequest {
            model: "openai/gpt-oss-20b".to_string(),
            messages: vec![Message::user("Write a caption")],
            max_tokens: 2048,
            temperature: Some(0.8),
        };

        let oai_req = provider.build_request(&request);
        assert_eq!(oai_req.model, "openai/gpt-oss-20b");
        assert_eq!(oai_req.messages.len(), 1);
        assert_eq!(oai_req.max_completion_tokens, Some(2048));
        assert_eq!(oai_req.temperature, Some(0.8));
        assert!(oai_req.stream.is_none());
    }

    #[test]
    fn test_build_request_empty_model_uses_default() {
        let provider = GroqProvider::new(&test_config());
        let request = CompletionRequest {
            model: String::new(),
            messages: vec![Message::user("hi")],
            max_tokens: 512,
            temperature: None,
        };

        let oai_req = provider.build_request(&request);
        assert_eq!(oai_req.model, "openai/gpt-oss-20b");
        assert!(oai_req.temperature.is_none());
    }

    #[test]
    fn test_map_openai_error_api_auth() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Incorrect API key provided".to_string(),
            r#type: Some("authentication_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[test]
    fn test_map_openai_error_rate_limit() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Rate limit exceeded".to_string(),
            r#type: Some("rate_limit_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::RateLimited { .. }));
    }

    #[test]
    fn test_map_openai_error_overloaded() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "The server is overloaded".to_string(),
            r#type: Some("overloaded_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::Overloaded(_)));
    }

    #[test]
    fn test_map_openai_error_invalid_argument() {
        use async_openai::error::OpenAIError;
        let err = map_openai_error(OpenAIError::InvalidArgument("bad arg".to_string()));
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }

    #[test]
    fn test_map_openai_error_unknown_api_error_is_provider() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "something odd".to_string(),
            r#type: None,
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::Provider { .. }));
    }
}
