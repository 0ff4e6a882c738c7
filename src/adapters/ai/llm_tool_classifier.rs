//! LLM Tool Classifier - ToolClassifier backed by any AIProvider.
//!
//! The provider is asked for a JSON object `{"tools": [string]}` under a
//! strict JSON schema. The reply is parsed strictly; anything else is a
//! parse error, never an empty result.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::ports::{
    AIError, AIProvider, Classification, ClassificationRequest, CompletionRequest,
    ResponseFormat, ToolClassifier,
};

/// Name of the structured-output schema sent to the provider.
pub const TOOL_SELECTION_SCHEMA_NAME: &str = "tool_selection";

/// Classifies conversations with a single structured completion.
pub struct LlmToolClassifier {
    provider: Arc<dyn AIProvider>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl LlmToolClassifier {
    /// Creates a classifier over the given provider.
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Caps the completion length.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// JSON schema constraining the reply to an array of identifiers.
    pub fn output_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "tools": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": ["tools"],
            "additionalProperties": false
        })
    }

    fn build_request(&self, request: ClassificationRequest) -> CompletionRequest {
        let mut completion = CompletionRequest::new(request.metadata)
            .with_system_prompt(request.instruction)
            .with_messages(request.conversation.messages().iter().cloned())
            .with_response_format(ResponseFormat::json_schema(
                TOOL_SELECTION_SCHEMA_NAME,
                Self::output_schema(),
            ));

        if let Some(max_tokens) = self.max_tokens {
            completion = completion.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = self.temperature {
            completion = completion.with_temperature(temperature);
        }

        completion
    }

    /// Parses the provider reply into candidate identifiers.
    fn parse_candidates(content: &str) -> Result<Vec<String>, AIError> {
        let output: ToolSelectionOutput = serde_json::from_str(content.trim())
            .map_err(|e| AIError::parse(format!("tool selection does not match schema: {}", e)))?;
        Ok(output.tools)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ToolSelectionOutput {
    tools: Vec<String>,
}

#[async_trait]
impl ToolClassifier for LlmToolClassifier {
    async fn classify(&self, request: ClassificationRequest) -> Result<Classification, AIError> {
        let trace_id = request.metadata.trace_id.clone();
        let message_count = request.conversation.len();

        let response = self.provider.complete(self.build_request(request)).await?;
        let candidates = Self::parse_candidates(&response.content)?;

        tracing::debug!(
            trace_id = %trace_id,
            model = %response.model,
            message_count,
            candidate_count = candidates.len(),
            total_tokens = response.usage.total_tokens,
            "classified conversation"
        );

        Ok(Classification::new(candidates, response.usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::conversation::{Conversation, Message};
    use crate::ports::{FinishReason, RequestMetadata, TokenUsage};

    fn request(messages: Vec<Message>) -> ClassificationRequest {
        ClassificationRequest::new(
            "Pick tools.",
            Conversation::new(messages),
            RequestMetadata::new("trace-1"),
        )
    }

    #[tokio::test]
    async fn returns_candidates_and_usage() {
        let provider = Arc::new(MockAIProvider::new().with_response_full(
            r#"{"tools":["analyzeBundles","analyzeBundles"]}"#,
            TokenUsage::new(120, 8, 0),
            FinishReason::Stop,
        ));
        let classifier = LlmToolClassifier::new(provider.clone());

        let result = classifier
            .classify(request(vec![Message::user("check bundles on this token")]))
            .await
            .unwrap();

        assert_eq!(result.candidates, vec!["analyzeBundles", "analyzeBundles"]);
        assert_eq!(result.usage.total_tokens, 128);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn sends_instruction_history_and_schema() {
        let provider = Arc::new(MockAIProvider::new().with_response(r#"{"tools":[]}"#));
        let classifier = LlmToolClassifier::new(provider.clone())
            .with_max_tokens(64)
            .with_temperature(0.0);

        classifier
            .classify(request(vec![
                Message::user("hi"),
                Message::assistant("hello"),
                Message::user("send me a notification"),
            ]))
            .await
            .unwrap();

        let calls = provider.get_calls();
        let sent = &calls[0];
        assert_eq!(sent.system_prompt.as_deref(), Some("Pick tools."));
        assert_eq!(sent.messages.len(), 3);
        assert_eq!(sent.messages[2].content, "send me a notification");
        assert_eq!(sent.max_tokens, Some(64));
        assert_eq!(sent.temperature, Some(0.0));
        assert_eq!(
            sent.response_format,
            Some(ResponseFormat::json_schema(
                TOOL_SELECTION_SCHEMA_NAME,
                LlmToolClassifier::output_schema()
            ))
        );
    }

    #[tokio::test]
    async fn empty_array_is_not_an_error() {
        let provider = Arc::new(MockAIProvider::new().with_response(r#"{"tools":[]}"#));
        let result = LlmToolClassifier::new(provider)
            .classify(request(vec![]))
            .await
            .unwrap();
        assert!(result.candidates.is_empty());
    }

    #[tokio::test]
    async fn malformed_output_is_parse_error() {
        for content in [
            "not json",
            r#"{"tools":"searchToken"}"#,
            r#"{"tools":[1,2]}"#,
            r#"{"tool":["searchToken"]}"#,
            r#"{"tools":[],"extra":true}"#,
            r#"["searchToken"]"#,
        ] {
            let provider = Arc::new(MockAIProvider::new().with_response(content));
            let err = LlmToolClassifier::new(provider)
                .classify(request(vec![Message::user("x")]))
                .await
                .unwrap_err();
            assert!(matches!(err, AIError::Parse(_)), "content {content:?} gave {err:?}");
        }
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let provider = Arc::new(
            MockAIProvider::new().with_error(MockError::RateLimited { retry_after_secs: 7 }),
        );
        let err = LlmToolClassifier::new(provider.clone())
            .classify(request(vec![Message::user("x")]))
            .await
            .unwrap_err();

        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 7 }));
        assert_eq!(provider.call_count(), 1);
    }
}
