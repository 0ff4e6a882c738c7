//! Tool handlers - selection and dispatch.

mod dispatch_tool;
mod select_tools;

pub use dispatch_tool::DispatchToolHandler;
pub use select_tools::{
    default_orchestration_prompt, SelectToolsCommand, SelectToolsHandler, SelectionResult,
};
