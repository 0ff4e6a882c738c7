//! Tools module - identifiers, selection policy and invocation outcomes.
//!
//! The selector never interprets a tool identifier beyond set membership.
//! The registry only exists so that the orchestration prompt, the tool
//! listing and the dispatcher agree on which tools the assistant knows.
//!
//! ## Key Types
//!
//! - [`ToolId`] - Opaque tool identifier
//! - [`ToolSelection`] - "No tools required" or a non-empty, duplicate-free set
//! - [`SelectionPolicy`] - Confirmation-gated baseline layered over classifier output
//! - [`ToolRegistry`] / [`ToolDefinition`] - Catalog of known tools
//! - [`ToolCall`] / [`ToolOutcome`] - Invocation request and render-ready result
//! - [`CallerContext`] - Identity passed explicitly into each invocation

mod caller_context;
mod selection_policy;
mod tool_call;
mod tool_definition;
mod tool_id;
mod tool_registry;
mod tool_selection;

pub use caller_context::CallerContext;
pub use selection_policy::{SelectionPolicy, UnknownToolPolicy};
pub use tool_call::{ToolCall, ToolError, ToolErrorCode, ToolOutcome};
pub use tool_definition::{ToolDefinition, ToolExecution};
pub use tool_id::ToolId;
pub use tool_registry::ToolRegistry;
pub use tool_selection::ToolSelection;
