//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod tools;

pub use tools::{
    default_orchestration_prompt, DispatchToolHandler, SelectToolsCommand, SelectToolsHandler,
    SelectionResult,
};
