//! Tool Classifier Port - asks an external predictor which tools a chat needs.
//!
//! The classifier returns free-form labels; it is not trusted to use known
//! tool names or to include flow-control tools. Policy is applied by the
//! caller, never by implementations of this port.

use async_trait::async_trait;

use super::{AIError, RequestMetadata, TokenUsage};
use crate::domain::conversation::Conversation;

/// Port for classifying a conversation into candidate tool identifiers.
#[async_trait]
pub trait ToolClassifier: Send + Sync {
    /// Classify once. Failures are returned as-is; implementations must not
    /// retry or substitute a default.
    async fn classify(&self, request: ClassificationRequest) -> Result<Classification, AIError>;
}

/// Input to one classification call.
#[derive(Debug, Clone)]
pub struct ClassificationRequest {
    /// Orchestration prompt.
    pub instruction: String,
    /// Chat history to classify.
    pub conversation: Conversation,
    /// Tracing metadata.
    pub metadata: RequestMetadata,
}

impl ClassificationRequest {
    /// Creates a classification request.
    pub fn new(
        instruction: impl Into<String>,
        conversation: Conversation,
        metadata: RequestMetadata,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            conversation,
            metadata,
        }
    }
}

/// Raw classifier output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Candidate identifiers exactly as returned (may be empty or repeat).
    pub candidates: Vec<String>,
    /// Usage of the classification call.
    pub usage: TokenUsage,
}

impl Classification {
    /// Creates a classification result.
    pub fn new(candidates: Vec<String>, usage: TokenUsage) -> Self {
        Self { candidates, usage }
    }
}
