//! HTTP handlers for tools endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{DispatchToolHandler, SelectToolsCommand, SelectToolsHandler};
use crate::domain::conversation::{ConfirmationSignal, Conversation};
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::tools::{
    CallerContext, ToolCall, ToolErrorCode, ToolExecution, ToolRegistry,
};
use crate::ports::AIError;

use super::dto::{
    ErrorResponse, InvokeToolRequest, ListToolsQuery, ListToolsResponse, SelectToolsRequest,
    SelectToolsResponse, ToolSummary,
};

/// Application state for tools endpoints.
#[derive(Clone)]
pub struct ToolsAppState {
    /// Tool registry with all available tools
    pub registry: Arc<ToolRegistry>,
    /// Tool selector
    pub selector: Arc<SelectToolsHandler>,
    /// Server-side tool dispatcher
    pub dispatcher: Arc<DispatchToolHandler>,
}

/// List available tools.
///
/// GET /tools?format=openai
pub async fn list_tools(
    State(state): State<ToolsAppState>,
    Query(query): Query<ListToolsQuery>,
) -> Response {
    let count = state.registry.tool_count();

    let tools = match query.format.as_str() {
        "openai" => serde_json::Value::Array(state.registry.to_openai_tools()),
        _ => {
            let summaries: Vec<ToolSummary> = state
                .registry
                .definitions()
                .map(|tool| ToolSummary {
                    name: tool.name().to_string(),
                    description: tool.description().to_string(),
                    execution: match tool.execution() {
                        ToolExecution::Server => "server".to_string(),
                        ToolExecution::Client => "client".to_string(),
                    },
                    parameters: tool.parameters_schema().clone(),
                })
                .collect();
            match tools_json(&summaries) {
                Ok(value) => value,
                Err(response) => return response,
            }
        }
    };

    Json(ListToolsResponse {
        format: query.format,
        count,
        tools,
    })
    .into_response()
}

/// Serializes a tool listing, or yields a 500 response if it cannot be encoded.
fn tools_json<T: Serialize>(tools: &T) -> Result<serde_json::Value, Response> {
    serde_json::to_value(tools).map_err(|err| {
        tracing::error!(error = %err, "Failed to serialize tool listing");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("Failed to serialize tool listing")),
        )
            .into_response()
    })
}

/// Select tools for a conversation.
///
/// POST /tools/select
pub async fn select_tools(
    State(state): State<ToolsAppState>,
    Json(request): Json<SelectToolsRequest>,
) -> Response {
    let mut cmd = SelectToolsCommand::new(Conversation::from_optional(request.messages))
        .with_confirmation(ConfirmationSignal::from_optional(request.confirmation));

    if let Some(raw) = request.session_id {
        match raw.parse::<SessionId>() {
            Ok(session_id) => cmd = cmd.with_session(session_id),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request("Invalid session_id format")),
                )
                    .into_response()
            }
        }
    }

    match state.selector.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(SelectToolsResponse::from(result))).into_response(),
        Err(err) => handle_ai_error(err),
    }
}

/// Invoke a server-side tool.
///
/// POST /tools/invoke
pub async fn invoke_tool(
    State(state): State<ToolsAppState>,
    Json(request): Json<InvokeToolRequest>,
) -> Response {
    let user_id = match UserId::new(request.user_id) {
        Ok(user_id) => user_id,
        Err(err) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(err.to_string())))
                .into_response()
        }
    };

    let mut caller = CallerContext::new(user_id);
    if let Some(raw) = request.session_id {
        match raw.parse::<SessionId>() {
            Ok(session_id) => caller = caller.with_session(session_id),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request("Invalid session_id format")),
                )
                    .into_response()
            }
        }
    }
    if let Some(identity) = request.stored_identity {
        caller = caller.with_stored_identity(identity);
    }

    let outcome = state
        .dispatcher
        .handle(ToolCall::new(request.tool_name, request.parameters), caller)
        .await;

    let status = match outcome.error_code() {
        Some(ToolErrorCode::UnknownTool) => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };

    (status, Json(outcome)).into_response()
}

/// Maps classifier failures to upstream-error responses.
fn handle_ai_error(err: AIError) -> Response {
    let (status, code) = match &err {
        AIError::RateLimited { .. } => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
        AIError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT"),
        AIError::Parse(_) => (StatusCode::BAD_GATEWAY, "CLASSIFIER_OUTPUT_INVALID"),
        _ => (StatusCode::BAD_GATEWAY, "CLASSIFIER_UNAVAILABLE"),
    };

    let mut body = ErrorResponse::new(code, err.to_string());
    if let AIError::RateLimited { retry_after_secs } = err {
        body = body.with_details(serde_json::json!({ "retry_after_secs": retry_after_secs }));
    }

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn ai_errors_map_to_upstream_statuses() {
        assert_eq!(
            handle_ai_error(AIError::rate_limited(10)).status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            handle_ai_error(AIError::Timeout { timeout_secs: 30 }).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            handle_ai_error(AIError::parse("bad")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            handle_ai_error(AIError::AuthenticationFailed).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            handle_ai_error(AIError::unavailable("down")).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn tools_json_encodes_listing() {
        let value = tools_json(&vec!["searchToken"]).unwrap();
        assert_eq!(value, serde_json::json!(["searchToken"]));
    }

    #[test]
    fn unencodable_listing_is_a_server_error() {
        // JSON object keys must be strings, so tuple keys fail to serialize.
        let listing: BTreeMap<(u8, u8), u8> = BTreeMap::from([((1, 2), 3)]);

        let response = tools_json(&listing).unwrap_err();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
