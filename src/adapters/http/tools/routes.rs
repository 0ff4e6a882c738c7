//! Axum router configuration for tools endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{invoke_tool, list_tools, select_tools, ToolsAppState};

/// Create the tools API router.
///
/// Suitable for mounting at `/api/tools`.
///
/// # Routes
///
/// - `GET /` - List available tools (query: format)
/// - `POST /select` - Select tools for a conversation
/// - `POST /invoke` - Invoke a server-side tool
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use crate::adapters::http::tools::{tools_router, ToolsAppState};
///
/// let app_state = ToolsAppState { /* ... */ };
/// let app = Router::new()
///     .nest("/api/tools", tools_router())
///     .with_state(app_state);
/// ```
pub fn tools_router() -> Router<ToolsAppState> {
    Router::new()
        .route("/", get(list_tools))
        .route("/select", post(select_tools))
        .route("/invoke", post(invoke_tool))
}
