//! HTTP adapters - REST API implementations.

pub mod tools;

pub use tools::{tools_router, ToolsAppState};

use axum::Router;

/// Mounts every API router under `/api`.
pub fn api_router(state: ToolsAppState) -> Router {
    Router::new()
        .nest("/api/tools", tools_router())
        .with_state(state)
}
