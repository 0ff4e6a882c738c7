//! SelectTools command handler.
//!
//! Runs one classification over the conversation and layers the selection
//! policy on top of the raw candidates.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::conversation::{ConfirmationSignal, Conversation};
use crate::domain::foundation::SessionId;
use crate::domain::tools::{SelectionPolicy, ToolRegistry, ToolSelection, UnknownToolPolicy};
use crate::ports::{AIError, ClassificationRequest, RequestMetadata, TokenUsage, ToolClassifier};

/// Builds the orchestration prompt from the tools in `registry`.
pub fn default_orchestration_prompt(registry: &ToolRegistry) -> String {
    format!(
        "You route a crypto assistant's chat to tools. Read the conversation and \
         return the names of the tools needed to answer the user's latest request.\n\
         \n\
         Available tools:\n{}\n\
         \n\
         Respond with a JSON object {{\"tools\": [...]}}. Use only tool names from \
         the list. Return an empty array when the user is only chatting and no tool \
         is needed.",
        registry.render_catalog()
    )
}

/// Command to select tools for a conversation.
#[derive(Debug, Clone, Default)]
pub struct SelectToolsCommand {
    /// Chat history; may be empty.
    pub conversation: Conversation,
    /// Answer to a pending confirmation prompt, if any.
    pub confirmation: ConfirmationSignal,
    /// Chat session, forwarded to the classifier for tracing.
    pub session_id: Option<SessionId>,
}

impl SelectToolsCommand {
    /// Creates a command with no confirmation answer.
    pub fn new(conversation: Conversation) -> Self {
        Self {
            conversation,
            confirmation: ConfirmationSignal::absent(),
            session_id: None,
        }
    }

    /// Sets the confirmation signal.
    pub fn with_confirmation(mut self, confirmation: ConfirmationSignal) -> Self {
        self.confirmation = confirmation;
        self
    }

    /// Sets the chat session.
    pub fn with_session(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }
}

/// Outcome of a selection: classifier usage plus the final tool set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub usage: TokenUsage,
    pub selection: ToolSelection,
}

/// Handler for tool selection.
pub struct SelectToolsHandler {
    classifier: Arc<dyn ToolClassifier>,
    policy: SelectionPolicy,
    instruction: String,
}

impl SelectToolsHandler {
    /// Creates a handler with an explicit orchestration prompt.
    pub fn new(
        classifier: Arc<dyn ToolClassifier>,
        policy: SelectionPolicy,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            classifier,
            policy,
            instruction: instruction.into(),
        }
    }

    /// Creates a handler whose prompt lists every tool in `registry`.
    pub fn with_registry(
        classifier: Arc<dyn ToolClassifier>,
        registry: Arc<ToolRegistry>,
        unknown_tools: UnknownToolPolicy,
    ) -> Self {
        let instruction = default_orchestration_prompt(&registry);
        Self::new(classifier, SelectionPolicy::new(registry, unknown_tools), instruction)
    }

    /// Returns the orchestration prompt in use.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Selects tools for the conversation.
    ///
    /// The classifier is called exactly once. Its errors are returned
    /// unchanged.
    pub async fn handle(&self, cmd: SelectToolsCommand) -> Result<SelectionResult, AIError> {
        let mut metadata = RequestMetadata::new(Uuid::new_v4().to_string());
        if let Some(session_id) = cmd.session_id {
            metadata = metadata.with_session(session_id);
        }
        let trace_id = metadata.trace_id.clone();

        let request = ClassificationRequest::new(self.instruction.clone(), cmd.conversation, metadata);
        let classification = self.classifier.classify(request).await.map_err(|err| {
            tracing::warn!(trace_id = %trace_id, error = %err, "tool classification failed");
            err
        })?;

        let unknown = self.policy.unknown_candidates(&classification.candidates);
        if !unknown.is_empty() {
            tracing::warn!(
                trace_id = %trace_id,
                unknown = ?unknown,
                policy = ?self.policy.unknown_tools(),
                "classifier returned unknown tool identifiers"
            );
        }

        let selection = self
            .policy
            .select(&classification.candidates, &cmd.confirmation);

        tracing::info!(
            trace_id = %trace_id,
            candidate_count = classification.candidates.len(),
            confirmation = cmd.confirmation.is_present(),
            selected = selection.len(),
            "tools selected"
        );

        Ok(SelectionResult {
            usage: classification.usage,
            selection,
        })
    }
}
