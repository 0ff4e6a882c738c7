//! Tool definition - schema and metadata for a tool.

use serde::{Deserialize, Serialize};

use super::ToolId;

/// Where a tool actually runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolExecution {
    /// Executed by this service through one of the collaborator ports.
    Server,
    /// Rendered and resolved by the chat client (search box, confirm dialog).
    Client,
}

/// Definition of a tool the assistant can be allowed to invoke.
///
/// Contains what the orchestration prompt needs to describe the tool and
/// what an AI provider needs for function calling.
///
/// # Examples
///
/// ```
/// use tool_dispatch::domain::tools::{ToolDefinition, ToolExecution};
///
/// let definition = ToolDefinition::new(
///     "analyzeBundles",
///     "Detect coordinated wallet bundles for a token",
///     ToolExecution::Server,
///     serde_json::json!({
///         "type": "object",
///         "required": ["address"],
///         "properties": { "address": { "type": "string" } }
///     }),
/// );
/// assert_eq!(definition.name(), "analyzeBundles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique identifier of the tool
    name: ToolId,

    /// Human-readable description for the model and the tool listing
    description: String,

    /// Where the tool executes
    execution: ToolExecution,

    /// JSON Schema for the parameters
    parameters_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a new tool definition.
    pub fn new(
        name: impl Into<ToolId>,
        description: impl Into<String>,
        execution: ToolExecution,
        parameters_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            execution,
            parameters_schema,
        }
    }

    /// Returns the tool identifier.
    pub fn id(&self) -> &ToolId {
        &self.name
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns where the tool executes.
    pub fn execution(&self) -> ToolExecution {
        self.execution
    }

    /// Returns true if this service executes the tool itself.
    pub fn is_server_side(&self) -> bool {
        self.execution == ToolExecution::Server
    }

    /// Returns the parameters schema.
    pub fn parameters_schema(&self) -> &serde_json::Value {
        &self.parameters_schema
    }

    /// Converts to OpenAI tool format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema
            }
        })
    }
}
