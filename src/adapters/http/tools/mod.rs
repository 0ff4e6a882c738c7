//! Tools HTTP adapter - REST API for tool selection and invocation.
//!
//! Provides endpoints for:
//! - Listing available tools
//! - Selecting tools for a conversation
//! - Invoking server-side tools

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::ToolsAppState;
pub use routes::tools_router;
