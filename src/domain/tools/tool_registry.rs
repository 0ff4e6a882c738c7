//! Tool Registry - catalog of every tool the assistant knows about.
//!
//! The registry feeds the default orchestration prompt, the tool listing
//! endpoint, the dispatcher, and the optional unknown-identifier filter.
//!
//! # Example
//!
//! ```
//! use tool_dispatch::domain::tools::{ToolDefinition, ToolExecution, ToolRegistry};
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(ToolDefinition::new(
//!     "searchToken",
//!     "Look up a token by name or ticker",
//!     ToolExecution::Client,
//!     serde_json::json!({"type": "object"}),
//! ));
//!
//! assert!(registry.has_tool("searchToken"));
//! assert!(!registry.has_tool("unknownTool"));
//! ```

use std::collections::BTreeMap;

use serde_json::json;

use super::{ToolDefinition, ToolExecution, ToolId};

/// Catalog of known tools, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<ToolId, ToolDefinition>,
}

impl ToolRegistry {
    /// Creates a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every tool this service ships with.
    pub fn with_default_tools() -> Self {
        let mut registry = Self::new();

        registry.register(ToolDefinition::new(
            ToolId::SEARCH_TOKEN,
            "Search for a token by name, ticker or contract address so the user can pick the exact asset.",
            ToolExecution::Client,
            json!({
                "type": "object",
                "required": ["query"],
                "properties": {
                    "query": { "type": "string", "description": "Name, ticker or address to search for" }
                }
            }),
        ));

        registry.register(ToolDefinition::new(
            ToolId::ASK_FOR_CONFIRMATION,
            "Ask the user to confirm before performing an action on their behalf.",
            ToolExecution::Client,
            json!({
                "type": "object",
                "required": ["message"],
                "properties": {
                    "message": { "type": "string", "description": "Question shown to the user" }
                }
            }),
        ));

        registry.register(ToolDefinition::new(
            ToolId::ANALYZE_BUNDLES,
            "Analyze a token's holders for bundled wallets that bought together, and report suspicious patterns.",
            ToolExecution::Server,
            json!({
                "type": "object",
                "required": ["address"],
                "properties": {
                    "address": { "type": "string", "description": "Token mint or contract address" },
                    "min_group_size": {
                        "type": "integer",
                        "minimum": 2,
                        "description": "Smallest number of wallets counted as a bundle (default 2)"
                    }
                }
            }),
        ));

        registry.register(ToolDefinition::new(
            ToolId::SEND_NOTIFICATION,
            "Send a notification message to the user or to an explicit recipient.",
            ToolExecution::Server,
            json!({
                "type": "object",
                "required": ["message"],
                "properties": {
                    "message": { "type": "string", "description": "Text to deliver" },
                    "recipient": { "type": "string", "description": "Explicit recipient; defaults to the user's linked account" }
                }
            }),
        ));

        registry.register(ToolDefinition::new(
            ToolId::CHECK_NOTIFICATION_USERNAME,
            "Check whether a notification username exists and can receive messages.",
            ToolExecution::Server,
            json!({
                "type": "object",
                "properties": {
                    "recipient": { "type": "string", "description": "Username to check; defaults to the user's linked account" }
                }
            }),
        ));

        registry.register(ToolDefinition::new(
            ToolId::VERIFY_NOTIFICATION_SETUP,
            "Verify that notifications can be delivered to the user's linked account.",
            ToolExecution::Server,
            json!({
                "type": "object",
                "properties": {
                    "recipient": { "type": "string", "description": "Recipient to verify; defaults to the user's linked account" }
                }
            }),
        ));

        registry
    }

    /// Registers a tool, replacing any previous definition with the same id.
    pub fn register(&mut self, definition: ToolDefinition) {
        self.tools.insert(definition.id().clone(), definition);
    }

    /// Gets a tool definition by name.
    pub fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(&ToolId::new(name))
    }

    /// Checks if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.get_tool(name).is_some()
    }

    /// All definitions in identifier order.
    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    /// Returns all registered tool names.
    pub fn all_tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(ToolId::as_str).collect()
    }

    /// Returns the number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Converts all tools to OpenAI function format.
    pub fn to_openai_tools(&self) -> Vec<serde_json::Value> {
        self.definitions().map(ToolDefinition::to_openai_format).collect()
    }

    /// One `- name: description` line per tool, for prompt rendering.
    pub fn render_catalog(&self) -> String {
        self.definitions()
            .map(|tool| format!("- {}: {}", tool.name(), tool.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
