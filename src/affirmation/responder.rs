//! AffirmationResponder — single-turn passthrough to the completion provider.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AffirmationConfig;
use crate::error::LlmError;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};

/// Prompt sent for every request until request-specific prompting exists.
pub const PLACEHOLDER_PROMPT: &str =
    "Write a short, warm affirmation that encourages the reader to keep going.";

/// Body of an affirmation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffirmationRequest {
    pub user_message: String,
    #[serde(default)]
    pub information: Option<serde_json::Value>,
}

/// Affirmation reply envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AffirmationResponse {
    pub response: String,
    pub status: String,
    pub message: String,
}

/// Build the prompt for a request.
///
/// The request is not consulted yet; every call gets the placeholder.
pub fn build_prompt(_request: &AffirmationRequest) -> String {
    PLACEHOLDER_PROMPT.to_string()
}

/// Forwards a fixed prompt to the LLM and wraps the answer.
pub struct AffirmationResponder {
    llm: Arc<dyn LlmProvider>,
    config: AffirmationConfig,
}

impl AffirmationResponder {
    pub fn new(llm: Arc<dyn LlmProvider>, config: AffirmationConfig) -> Self {
        Self { llm, config }
    }

    /// Generate a completion for `request`.
    pub async fn respond(
        &self,
        request: &AffirmationRequest,
    ) -> Result<AffirmationResponse, LlmError> {
        let prompt = build_prompt(request);
        debug!(model = %self.llm.model_name(), "Requesting affirmation");

        let completion = CompletionRequest::new(vec![ChatMessage::user(prompt)])
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);
        let response = self.llm.complete(completion).await?;

        info!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Affirmation generated"
        );

        Ok(AffirmationResponse {
            response: response.content.trim().to_string(),
            status: "success".to_string(),
            message: "Affirmation generated successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm::CompletionResponse;

    /// Mock LLM that records requests and returns a fixed answer.
    struct MockLlm {
        reply: Result<String, String>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl MockLlm {
        fn answering(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                reply: Err(reason.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlm {
        fn model_name(&self) -> &str {
            "mock"
        }

        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.seen.lock().unwrap().push(request);
            match &self.reply {
                Ok(content) => Ok(CompletionResponse {
                    content: content.clone(),
                    input_tokens: 12,
                    output_tokens: 8,
                }),
                Err(reason) => Err(LlmError::RequestFailed {
                    provider: "mock".to_string(),
                    reason: reason.clone(),
                }),
            }
        }
    }

    fn request(message: &str) -> AffirmationRequest {
        AffirmationRequest {
            user_message: message.to_string(),
            information: None,
        }
    }

    #[tokio::test]
    async fn respond_trims_and_wraps_completion() {
        let llm = Arc::new(MockLlm::answering("\n  You are doing great.  \n"));
        let responder = AffirmationResponder::new(llm.clone(), AffirmationConfig::default());

        let response = responder.respond(&request("hi")).await.unwrap();
        assert_eq!(response.response, "You are doing great.");
        assert_eq!(response.status, "success");
        assert_eq!(response.message, "Affirmation generated successfully");
    }

    #[tokio::test]
    async fn respond_uses_fixed_sampling_parameters() {
        let llm = Arc::new(MockLlm::answering("ok"));
        let responder = AffirmationResponder::new(llm.clone(), AffirmationConfig::default());
        responder.respond(&request("hi")).await.unwrap();

        let seen = llm.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].temperature, Some(0.7));
        assert_eq!(seen[0].max_tokens, Some(1000));
        assert_eq!(seen[0].messages, vec![ChatMessage::user(PLACEHOLDER_PROMPT)]);
    }

    #[test]
    fn prompt_ignores_request_contents() {
        let a = build_prompt(&request("one"));
        let b = build_prompt(&AffirmationRequest {
            user_message: "two".to_string(),
            information: Some(serde_json::json!({"mood": "tired"})),
        });
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn respond_propagates_provider_failure() {
        let llm = Arc::new(MockLlm::failing("connection reset"));
        let responder = AffirmationResponder::new(llm, AffirmationConfig::default());
        let err = responder.respond(&request("hi")).await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
