//! Data transfer objects for tools HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::application::SelectionResult;
use crate::domain::conversation::Message;
use crate::ports::TokenUsage;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to select tools for a conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectToolsRequest {
    /// Chat history; absent is treated as empty
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    /// Answer to a pending confirmation prompt
    #[serde(default)]
    pub confirmation: Option<String>,
    /// Chat session (UUID string)
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Request to invoke a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeToolRequest {
    /// Name of the tool to invoke
    pub tool_name: String,
    /// Tool parameters as JSON
    #[serde(default = "empty_object")]
    pub parameters: serde_json::Value,
    /// User on whose behalf the tool runs
    pub user_id: String,
    /// Chat session (UUID string)
    pub session_id: Option<String>,
    /// Notification identity linked to the user
    pub stored_identity: Option<String>,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Query parameters for listing tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsQuery {
    /// Output format: "openai" or "native"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "native".to_string()
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Response listing tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResponse {
    pub format: String,
    pub count: usize,
    pub tools: serde_json::Value,
}

/// A tool in the native listing format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSummary {
    pub name: String,
    pub description: String,
    /// "server" or "client"
    pub execution: String,
    pub parameters: serde_json::Value,
}

/// Response to a tool selection.
///
/// `tools` is `null` when no tools are required, never an empty array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectToolsResponse {
    pub usage: TokenUsage,
    pub tools: Option<Vec<String>>,
}

impl From<SelectionResult> for SelectToolsResponse {
    fn from(result: SelectionResult) -> Self {
        Self {
            tools: result.selection.to_names(),
            usage: result.usage,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
