//! Tool call and outcome types.
//!
//! These are the request/response value objects for tool execution. The
//! outcome is what a rendering layer consumes: a success flag plus either a
//! payload or a coded error.

use serde::{Deserialize, Serialize};

/// A request to invoke a tool.
///
/// Parameters are passed as JSON to support the varying schemas of
/// different tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to invoke
    name: String,

    /// Parameters for the tool (JSON object)
    parameters: serde_json::Value,
}

impl ToolCall {
    /// Creates a new tool call.
    pub fn new(name: impl Into<String>, parameters: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameters.
    pub fn parameters(&self) -> &serde_json::Value {
        &self.parameters
    }

    /// Returns a string parameter, treating blank values as missing.
    pub fn str_param(&self, key: &str) -> Option<&str> {
        self.parameters
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Returns an unsigned integer parameter.
    pub fn u64_param(&self, key: &str) -> Option<u64> {
        self.parameters.get(key).and_then(serde_json::Value::as_u64)
    }
}

/// Stable error codes surfaced to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolErrorCode {
    /// No recipient was given and none is linked to the caller.
    MissingRecipient,
    /// The recipient exists but has never opened a channel with the bot.
    DestinationNotInitialized,
    /// Parameters failed validation.
    InvalidParameters,
    /// The tool name is not in the registry.
    UnknownTool,
    /// The tool is resolved by the chat client, not by this service.
    ClientSideTool,
    /// No backend is configured for the tool.
    ToolUnavailable,
    /// The backend reported a failure.
    ExecutionFailed,
}

impl std::fmt::Display for ToolErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ToolErrorCode::MissingRecipient => "MISSING_RECIPIENT",
            ToolErrorCode::DestinationNotInitialized => "DESTINATION_NOT_INITIALIZED",
            ToolErrorCode::InvalidParameters => "INVALID_PARAMETERS",
            ToolErrorCode::UnknownTool => "UNKNOWN_TOOL",
            ToolErrorCode::ClientSideTool => "CLIENT_SIDE_TOOL",
            ToolErrorCode::ToolUnavailable => "TOOL_UNAVAILABLE",
            ToolErrorCode::ExecutionFailed => "EXECUTION_FAILED",
        };
        f.write_str(s)
    }
}

/// Coded error carried by a failed outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: ToolErrorCode,
    pub message: String,
}

/// Result of executing a tool, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutcome {
    /// Tool that produced this outcome
    tool: String,

    /// Whether the tool executed successfully
    success: bool,

    /// Data returned by the tool (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,

    /// Error details (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ToolError>,
}

impl ToolOutcome {
    /// Creates a successful outcome with data.
    pub fn success(tool: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            tool: tool.into(),
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failed outcome.
    pub fn failure(tool: impl Into<String>, code: ToolErrorCode, message: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            success: false,
            data: None,
            error: Some(ToolError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Returns the tool name.
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Returns whether the tool succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the payload (if any).
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    /// Returns the error (if any).
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Returns the error code (if any).
    pub fn error_code(&self) -> Option<ToolErrorCode> {
        self.error.as_ref().map(|e| e.code)
    }
}
